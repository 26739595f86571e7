//! Interactive terminal client for the medical clinics service.

mod menu;
mod navigator;
mod screens;

use std::sync::Arc;

use anyhow::Result;
use clinics_client::{admin_guard, credentials_guard, ClinicsClient, Config};
use colored::Colorize;
use console::Term;
use dialoguer::{theme::ColorfulTheme, Select};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use menu::{AdminAction, StaffAction, ADMIN_MENU, STAFF_MENU};
use navigator::TermNavigator;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let term = Term::stdout();
    let config = Config::from_env()?;
    let client = ClinicsClient::new(&config, Arc::new(TermNavigator::new()));

    term.write_line(&format!(
        "{}\n{}\n",
        "Medical Clinics".bright_green().bold(),
        format!("connected to {}", config.base_url).dimmed()
    ))?;

    loop {
        let items = menu::main_menu(client.session());
        let labels: Vec<&str> = items.iter().map(|(label, _)| *label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("What would you like to do?")
            .items(&labels)
            .default(0)
            .interact_on(&term)?;

        match items[selection].1 {
            menu::Action::BrowseClinics => screens::browse_clinics(&client).await?,
            menu::Action::ClinicDetails => screens::clinic_details(&client).await?,
            menu::Action::Physicians => screens::physicians_by_clinic(&client).await?,
            menu::Action::PhysicianDetails => screens::physician_details(&client).await?,
            menu::Action::PublicSchedule => screens::public_schedule(&client).await?,
            menu::Action::Login => screens::login(&client).await?,
            menu::Action::Register => screens::register(&client).await?,
            menu::Action::Profile => screens::profile(&client),
            menu::Action::EditProfile => screens::edit_profile(&client).await?,
            menu::Action::MyAppointments => screens::my_appointments(&client).await?,
            menu::Action::BookAppointment => screens::book_appointment(&client).await?,
            menu::Action::ReleaseAppointment => screens::release_appointment(&client).await?,
            menu::Action::MyRecord => screens::my_record(&client).await?,
            menu::Action::DeleteMyAccount => screens::delete_my_account(&client).await?,
            menu::Action::StaffMenu => staff_menu(&term, &client).await?,
            menu::Action::AdminMenu => admin_menu(&term, &client).await?,
            menu::Action::Logout => client.logout(),
            menu::Action::Exit => {
                println!("{}", "bye".bright_blue());
                return Ok(());
            }
        }
        println!();
    }
}

async fn staff_menu(term: &Term, client: &ClinicsClient) -> Result<()> {
    if !credentials_guard(client.session(), &TermNavigator::new()) {
        return Ok(());
    }

    loop {
        let labels: Vec<&str> = STAFF_MENU.iter().map(|(label, _)| *label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Staff")
            .items(&labels)
            .default(0)
            .interact_on(term)?;

        match STAFF_MENU[selection].1 {
            StaffAction::Schedules => screens::my_schedules(client).await?,
            StaffAction::GenerateSchedule => screens::generate_schedule(client).await?,
            StaffAction::InactivateDay => screens::inactivate_day_schedule(client).await?,
            StaffAction::InactivateTimeslot => screens::inactivate_timeslot(client).await?,
            StaffAction::AddPatient => screens::add_patient(client).await?,
            StaffAction::FindPatient => screens::find_patient(client).await?,
            StaffAction::PatientIdentity => screens::set_patient_identity(client).await?,
            StaffAction::AddNote => screens::add_note(client).await?,
            StaffAction::MyNotes => screens::my_notes(client).await?,
            StaffAction::ViewNote => screens::view_note(client).await?,
            StaffAction::Back => return Ok(()),
        }
    }
}

async fn admin_menu(term: &Term, client: &ClinicsClient) -> Result<()> {
    if !admin_guard(client.session(), &TermNavigator::new()) {
        return Ok(());
    }

    loop {
        let labels: Vec<&str> = ADMIN_MENU.iter().map(|(label, _)| *label).collect();
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt("Admin")
            .items(&labels)
            .default(0)
            .interact_on(term)?;

        match ADMIN_MENU[selection].1 {
            AdminAction::ListAccounts => screens::list_accounts(client).await?,
            AdminAction::SwitchRole => screens::switch_role(client).await?,
            AdminAction::BlockAccount => screens::block_account(client).await?,
            AdminAction::DeleteAccount => screens::delete_account(client).await?,
            AdminAction::AddClinic => screens::add_clinic(client).await?,
            AdminAction::EditClinic => screens::edit_clinic(client).await?,
            AdminAction::DeleteClinic => screens::delete_clinic(client).await?,
            AdminAction::AddPhysician => screens::add_physician(client).await?,
            AdminAction::UpdatePhysician => screens::update_physician(client).await?,
            AdminAction::DismissPhysician => screens::dismiss_physician(client).await?,
            AdminAction::Back => return Ok(()),
        }
    }
}
