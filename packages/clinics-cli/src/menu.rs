//! Menu catalogues. Building the offered actions is kept apart from the
//! event loop so the surface for a given session can be checked.

use clinics_client::Session;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Action {
    BrowseClinics,
    ClinicDetails,
    Physicians,
    PhysicianDetails,
    PublicSchedule,
    Login,
    Register,
    Profile,
    EditProfile,
    MyAppointments,
    BookAppointment,
    ReleaseAppointment,
    MyRecord,
    DeleteMyAccount,
    StaffMenu,
    AdminMenu,
    Logout,
    Exit,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum StaffAction {
    Schedules,
    GenerateSchedule,
    InactivateDay,
    InactivateTimeslot,
    AddPatient,
    FindPatient,
    PatientIdentity,
    AddNote,
    MyNotes,
    ViewNote,
    Back,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum AdminAction {
    ListAccounts,
    SwitchRole,
    BlockAccount,
    DeleteAccount,
    AddClinic,
    EditClinic,
    DeleteClinic,
    AddPhysician,
    UpdatePhysician,
    DismissPhysician,
    Back,
}

pub const STAFF_MENU: &[(&str, StaffAction)] = &[
    ("Physician schedules (with patients)", StaffAction::Schedules),
    ("Generate schedule", StaffAction::GenerateSchedule),
    ("Inactivate a day schedule", StaffAction::InactivateDay),
    ("Inactivate a timeslot", StaffAction::InactivateTimeslot),
    ("Add patient", StaffAction::AddPatient),
    ("Find patient", StaffAction::FindPatient),
    ("Set patient identity", StaffAction::PatientIdentity),
    ("Add medical note", StaffAction::AddNote),
    ("My notes", StaffAction::MyNotes),
    ("View a note", StaffAction::ViewNote),
    ("Back", StaffAction::Back),
];

pub const ADMIN_MENU: &[(&str, AdminAction)] = &[
    ("List user accounts", AdminAction::ListAccounts),
    ("Switch account role", AdminAction::SwitchRole),
    ("Block account", AdminAction::BlockAccount),
    ("Delete account", AdminAction::DeleteAccount),
    ("Add clinic", AdminAction::AddClinic),
    ("Edit clinic", AdminAction::EditClinic),
    ("Delete clinic", AdminAction::DeleteClinic),
    ("Add physician", AdminAction::AddPhysician),
    ("Update physician", AdminAction::UpdatePhysician),
    ("Dismiss physician", AdminAction::DismissPhysician),
    ("Back", AdminAction::Back),
];

pub fn main_menu(session: &Session) -> Vec<(&'static str, Action)> {
    let mut items = vec![
        ("Browse clinics", Action::BrowseClinics),
        ("Clinic details", Action::ClinicDetails),
        ("Physicians by clinic and speciality", Action::Physicians),
        ("Physician details", Action::PhysicianDetails),
        ("Physician open slots", Action::PublicSchedule),
    ];

    if session.is_logged() {
        items.push(("Profile", Action::Profile));
        items.push(("Edit profile", Action::EditProfile));
        items.push(("My appointments", Action::MyAppointments));
        items.push(("Book appointment", Action::BookAppointment));
        items.push(("Release appointment", Action::ReleaseAppointment));
        items.push(("My medical record", Action::MyRecord));
        if session.has_credentials() {
            items.push(("Staff menu", Action::StaffMenu));
        }
        if session.is_admin() {
            items.push(("Admin menu", Action::AdminMenu));
        }
        items.push(("Delete my account", Action::DeleteMyAccount));
        items.push(("Logout", Action::Logout));
    } else {
        items.push(("Login", Action::Login));
        items.push(("Register", Action::Register));
    }
    items.push(("Exit", Action::Exit));
    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use clinics_client::types::{Role, UserData};
    use uuid::Uuid;

    fn session_with_role(role: Role) -> Session {
        let session = Session::in_memory();
        session
            .establish(
                Some("Bearer token"),
                UserData {
                    account_id: Uuid::new_v4(),
                    role,
                    patient_info: None,
                },
            )
            .unwrap();
        session
    }

    fn actions(items: &[(&str, Action)]) -> Vec<Action> {
        items.iter().map(|(_, action)| *action).collect()
    }

    #[test]
    fn logged_out_menu_offers_auth_but_nothing_personal() {
        let menu = main_menu(&Session::in_memory());
        let actions = actions(&menu);

        assert!(actions.contains(&Action::Login));
        assert!(actions.contains(&Action::Register));
        assert!(actions.contains(&Action::PhysicianDetails));
        assert!(!actions.contains(&Action::Profile));
        assert!(!actions.contains(&Action::StaffMenu));
        assert!(!actions.contains(&Action::AdminMenu));
    }

    #[test]
    fn patient_menu_covers_the_account_surface_without_staff_areas() {
        let menu = main_menu(&session_with_role(Role::Patient));
        let actions = actions(&menu);

        for action in [
            Action::Profile,
            Action::EditProfile,
            Action::MyAppointments,
            Action::BookAppointment,
            Action::ReleaseAppointment,
            Action::MyRecord,
            Action::DeleteMyAccount,
            Action::Logout,
        ] {
            assert!(actions.contains(&action), "missing {action:?}");
        }
        assert!(!actions.contains(&Action::StaffMenu));
        assert!(!actions.contains(&Action::AdminMenu));
    }

    #[test]
    fn physician_gets_the_staff_menu_but_not_the_admin_menu() {
        let actions = actions(&main_menu(&session_with_role(Role::Physician)));
        assert!(actions.contains(&Action::StaffMenu));
        assert!(!actions.contains(&Action::AdminMenu));
    }

    #[test]
    fn admin_gets_both_restricted_menus() {
        let actions = actions(&main_menu(&session_with_role(Role::Admin)));
        assert!(actions.contains(&Action::StaffMenu));
        assert!(actions.contains(&Action::AdminMenu));
    }

    #[test]
    fn staff_menu_reaches_every_schedule_patient_and_record_action() {
        let offered: Vec<StaffAction> =
            STAFF_MENU.iter().map(|(_, action)| *action).collect();
        for action in [
            StaffAction::Schedules,
            StaffAction::GenerateSchedule,
            StaffAction::InactivateDay,
            StaffAction::InactivateTimeslot,
            StaffAction::AddPatient,
            StaffAction::FindPatient,
            StaffAction::PatientIdentity,
            StaffAction::AddNote,
            StaffAction::MyNotes,
            StaffAction::ViewNote,
        ] {
            assert!(offered.contains(&action), "missing {action:?}");
        }
    }

    #[test]
    fn admin_menu_reaches_every_clinic_physician_and_account_action() {
        let offered: Vec<AdminAction> =
            ADMIN_MENU.iter().map(|(_, action)| *action).collect();
        for action in [
            AdminAction::ListAccounts,
            AdminAction::SwitchRole,
            AdminAction::BlockAccount,
            AdminAction::DeleteAccount,
            AdminAction::AddClinic,
            AdminAction::EditClinic,
            AdminAction::DeleteClinic,
            AdminAction::AddPhysician,
            AdminAction::UpdatePhysician,
            AdminAction::DismissPhysician,
        ] {
            assert!(offered.contains(&action), "missing {action:?}");
        }
    }
}
