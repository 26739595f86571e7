//! Menu actions. Each screen talks to the service through the shared
//! client and reports failures from the error feed.

use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use clinics_client::types::{
    CreateEditClinicRequest, CreateEditPatient, CreatePhysician, LoginRequest, NewDaySchedule,
    NewNoteRequest, NoteResponse, PatientFilter, PhysicianEditRequest, RegisterRequest,
    SlotStatus, UserAccountEditRequest, WorkDayDto,
};
use clinics_client::{validate, ClientError, ClinicsClient};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Password};
use uuid::Uuid;

pub fn report(client: &ClinicsClient, err: &ClientError) {
    println!("{} {err}", "error:".red().bold());
    for message in client.errors().messages() {
        println!("  {}", message.yellow());
    }
}

fn prompt(label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()?)
}

fn prompt_required(label: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .interact_text()?)
}

fn prompt_optional(label: &str) -> Result<Option<String>> {
    let value = prompt(label)?;
    Ok(if value.is_empty() { None } else { Some(value) })
}

fn prompt_uuid(label: &str) -> Result<Uuid> {
    loop {
        let value = prompt_required(label)?;
        match value.parse() {
            Ok(id) => return Ok(id),
            Err(_) => println!("{}", "not a valid id, try again".red()),
        }
    }
}

fn prompt_date(label: &str) -> Result<NaiveDate> {
    loop {
        let value = prompt_required(label)?;
        match value.parse() {
            Ok(date) => return Ok(date),
            Err(_) => println!("{}", "expected YYYY-MM-DD, try again".red()),
        }
    }
}

fn prompt_time(label: &str) -> Result<NaiveTime> {
    loop {
        let value = prompt_required(label)?;
        match NaiveTime::parse_from_str(&value, "%H:%M:%S")
            .or_else(|_| NaiveTime::parse_from_str(&value, "%H:%M"))
        {
            Ok(time) => return Ok(time),
            Err(_) => println!("{}", "expected HH:MM, try again".red()),
        }
    }
}

fn prompt_interval(label: &str) -> Result<u32> {
    loop {
        let value = prompt_required(label)?;
        match parse_slot_interval(&value) {
            Some(interval) => return Ok(interval),
            None => println!("{}", "expected minutes between 15 and 60, try again".red()),
        }
    }
}

/// The service only accepts slot intervals of 15 to 60 minutes.
fn parse_slot_interval(value: &str) -> Option<u32> {
    value
        .trim()
        .parse()
        .ok()
        .filter(|interval| (15..=60).contains(interval))
}

fn confirm(label: &str) -> Result<bool> {
    Ok(Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(label)
        .default(false)
        .interact()?)
}

pub async fn browse_clinics(client: &ClinicsClient) -> Result<()> {
    match client.all_clinics().await {
        Ok(clinics) => {
            println!("{}", format!("{} clinics", clinics.len()).bold());
            for clinic in clinics {
                println!("  {}  {}, {}", clinic.id, clinic.city, clinic.address);
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn clinic_details(client: &ClinicsClient) -> Result<()> {
    let clinic_id = prompt_uuid("clinic id")?;
    match client.clinic_details(clinic_id).await {
        Ok(clinic) => {
            println!("{}", format!("{}, {}", clinic.city, clinic.address).bold());
            if let Some(description) = clinic.description {
                println!("  {description}");
            }
            for day in clinic.working_days {
                println!(
                    "  {}: {} - {}",
                    day.day_name, day.start_of_working_day, day.end_of_working_day
                );
            }
            for speciality in clinic.specialties {
                println!("  {}  {}", speciality.id, speciality.name);
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn physicians_by_clinic(client: &ClinicsClient) -> Result<()> {
    let clinic_id = prompt_uuid("clinic id")?;
    let speciality_id = prompt_uuid("speciality id")?;
    match client
        .physicians_by_clinic_and_speciality(clinic_id, speciality_id)
        .await
    {
        Ok(physicians) => {
            for physician in physicians {
                println!(
                    "  {}  {} {} ({})",
                    physician.physician_id,
                    physician.first_name,
                    physician.last_name,
                    physician.specialty
                );
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn public_schedule(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    match client.public_physician_schedules(physician_id).await {
        Ok(days) => {
            for day in days {
                println!("{}", day.date.to_string().bold());
                for slot in day.schedule {
                    if slot.status == SlotStatus::Free {
                        println!("  {}  {}", slot.id, slot.start_time);
                    }
                }
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn physician_details(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    match client.physician_info(physician_id).await {
        Ok(physician) => {
            println!(
                "{}",
                format!(
                    "{} {} ({})",
                    physician.first_name, physician.last_name, physician.specialty
                )
                .bold()
            );
            if let Some(abbreviation) = physician.abbreviation {
                println!("  {abbreviation}");
            }
            if let Some(workplace) = physician.workplace {
                println!("  {workplace}");
            }
            if let Some(description) = physician.description {
                println!("  {description}");
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn login(client: &ClinicsClient) -> Result<()> {
    let email = prompt_required("email")?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("password")
        .interact()?;

    if let Err(err) = validate::email(&email).and_then(|()| validate::password(&password)) {
        report(client, &err);
        return Ok(());
    }

    match client.login(&LoginRequest { email, password }).await {
        Ok(user) => println!("{} {:?}", "logged in as".green(), user.role),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn register(client: &ClinicsClient) -> Result<()> {
    let email = prompt_required("email")?;
    let password = Password::with_theme(&ColorfulTheme::default())
        .with_prompt("password")
        .interact()?;
    let first_name = prompt_required("first name")?;
    let last_name = prompt_required("last name")?;
    let phone = prompt_optional("phone (optional)")?;

    if let Err(err) = validate::email(&email).and_then(|()| validate::password(&password)) {
        report(client, &err);
        return Ok(());
    }

    let request = RegisterRequest {
        email,
        password,
        first_name,
        last_name,
        phone,
    };
    match client.register(&request).await {
        Ok(()) => println!("{}", "registered, you can log in now".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub fn profile(client: &ClinicsClient) {
    match client.session().user() {
        Some(user) => {
            println!("account {}  role {:?}", user.account_id, user.role);
            if let Some(patient) = user.patient_info {
                println!("  {} {}", patient.first_name, patient.last_name);
                if let Some(email) = patient.email {
                    println!("  {email}");
                }
            }
        }
        None => println!("{}", "not logged in".yellow()),
    }
}

pub async fn edit_profile(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };

    let email = prompt_required("email")?;
    if let Err(err) = validate::email(&email) {
        report(client, &err);
        return Ok(());
    }

    let old_password = prompt_optional("current password (only to change it)")?;
    let new_password = prompt_optional("new password (optional)")?;
    if let Some(password) = new_password.as_deref() {
        if let Err(err) = validate::password(password) {
            report(client, &err);
            return Ok(());
        }
    }

    let request = UserAccountEditRequest {
        id: account_id,
        first_name: prompt_required("first name")?,
        last_name: prompt_required("last name")?,
        country: prompt_optional("country (optional)")?,
        city: prompt_optional("city (optional)")?,
        address: prompt_optional("address (optional)")?,
        phone: prompt_optional("phone (optional)")?,
        email,
        old_password,
        new_password,
    };
    match client.update_account(account_id, &request).await {
        Ok(()) => println!("{}", "profile updated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn delete_my_account(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };

    if !confirm("delete your account? this cannot be undone")? {
        return Ok(());
    }
    match client.delete_account(account_id).await {
        Ok(()) => {
            client.logout();
            println!("{}", "account deleted".green());
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn my_appointments(client: &ClinicsClient) -> Result<()> {
    let Some(patient_id) = client
        .session()
        .user()
        .and_then(|user| user.patient_info.map(|patient| patient.id))
    else {
        println!("{}", "no patient profile on this account".yellow());
        return Ok(());
    };

    match client.patient_appointments(patient_id).await {
        Ok(appointments) => {
            for appointment in appointments {
                println!(
                    "  {}  {} {}  {} ({})",
                    appointment.id,
                    appointment.appointment_date,
                    appointment.start_time,
                    appointment.physician,
                    appointment.address
                );
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn book_appointment(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };

    let appointment_id = prompt_uuid("timeslot id")?;
    match client.make_appointment(appointment_id, account_id).await {
        Ok(()) => println!("{}", "appointment booked".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn release_appointment(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };

    let appointment_id = prompt_uuid("timeslot id")?;
    match client.release_appointment(appointment_id, account_id).await {
        Ok(()) => println!("{}", "appointment released".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn my_record(client: &ClinicsClient) -> Result<()> {
    let Some(patient_id) = client
        .session()
        .user()
        .and_then(|user| user.patient_info.map(|patient| patient.id))
    else {
        println!("{}", "no patient profile on this account".yellow());
        return Ok(());
    };

    match client.patient_record(patient_id).await {
        Ok(notes) => {
            for note in notes {
                println!(
                    "  {}  {}  {}",
                    note.document_number, note.creation_date, note.diagnosis
                );
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

// Staff screens

pub async fn my_schedules(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    match client.physician_schedules(physician_id).await {
        Ok(days) => {
            for day in days {
                println!("{}", day.date.to_string().bold());
                for slot in day.schedule {
                    let patient = slot
                        .patient_info
                        .map(|p| format!("{} {}", p.first_name, p.last_name))
                        .unwrap_or_default();
                    println!("  {}  {:?}  {}", slot.start_time, slot.status, patient);
                }
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn generate_schedule(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    let date = prompt_date("date (YYYY-MM-DD)")?;
    let start_time = prompt_time("start time")?;
    let end_time = prompt_time("end time")?;
    let interval = prompt_interval("slot interval in minutes (15-60)")?;

    let day = NewDaySchedule {
        date,
        start_time,
        end_time,
        time_slot_interval: interval,
    };
    match client.generate_schedule(physician_id, &[day]).await {
        Ok(()) => println!("{}", "schedule generated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn inactivate_day_schedule(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    let date = prompt_date("date (YYYY-MM-DD)")?;
    if !confirm("take the whole day out of service?")? {
        return Ok(());
    }
    match client.inactivate_schedule(physician_id, date).await {
        Ok(()) => println!("{}", "day schedule inactivated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn inactivate_timeslot(client: &ClinicsClient) -> Result<()> {
    let timeslot_id = prompt_uuid("timeslot id")?;
    match client.inactivate_timeslot(timeslot_id).await {
        Ok(()) => println!("{}", "timeslot inactivated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn add_patient(client: &ClinicsClient) -> Result<()> {
    let request = CreateEditPatient {
        first_name: prompt_required("first name")?,
        last_name: prompt_required("last name")?,
        identification_code: prompt_required("identification code")?,
        country: prompt_required("country")?,
        city: prompt_optional("city (optional)")?,
        address: prompt_optional("address (optional)")?,
        phone: prompt_optional("phone (optional)")?,
        email: prompt_optional("email (optional)")?,
    };

    if let Some(email) = request.email.as_deref() {
        if let Err(err) = validate::email(email) {
            report(client, &err);
            return Ok(());
        }
    }

    match client.add_patient(&request).await {
        Ok(()) => println!("{}", "patient created".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn find_patient(client: &ClinicsClient) -> Result<()> {
    let filter = PatientFilter {
        phone_number: prompt_optional("phone (optional)")?,
        email: prompt_optional("email (optional)")?,
        country: prompt_optional("country (optional)")?,
        identification_code: prompt_optional("identification code (optional)")?,
    };

    match client.find_patient(&filter).await {
        Ok(patients) => {
            for patient in patients {
                println!(
                    "  {}  {} {}",
                    patient.id, patient.first_name, patient.last_name
                );
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn set_patient_identity(client: &ClinicsClient) -> Result<()> {
    let patient_id = prompt_uuid("patient id")?;
    let country = prompt_required("country")?;
    let identification_code = prompt_required("identification code")?;
    match client
        .set_patient_identity(patient_id, &country, &identification_code)
        .await
    {
        Ok(()) => println!("{}", "patient identity updated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn add_note(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };
    let patient_id = prompt_uuid("patient id")?;

    let request = NewNoteRequest {
        diagnosis: prompt_required("diagnosis")?,
        diagnosis_code: prompt_optional("diagnosis code (optional)")?,
        chief_complaint: prompt_optional("chief complaint (optional)")?,
        medical_history: prompt_required("medical history")?,
        examination: prompt_required("examination")?,
        medication_and_recommendations: prompt_optional("medication (optional)")?,
        test_results: prompt_optional("test results (optional)")?,
    };

    match client.add_note(account_id, patient_id, &request).await {
        Ok(()) => println!("{}", "note added".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

fn print_note(note: &NoteResponse) {
    println!(
        "{}",
        format!("{}  {}", note.document_number, note.creation_date).bold()
    );
    println!("  diagnosis: {}", note.diagnosis);
    if let Some(code) = note.diagnosis_code.as_deref() {
        println!("  code: {code}");
    }
    if let Some(patient) = note.patient_name.as_deref() {
        println!("  patient: {patient}");
    }
    if let Some(examination) = note.examination.as_deref() {
        println!("  examination: {examination}");
    }
    if let Some(medication) = note.medication_and_recommendations.as_deref() {
        println!("  medication: {medication}");
    }
}

pub async fn my_notes(client: &ClinicsClient) -> Result<()> {
    let Some(account_id) = client.session().user().map(|user| user.account_id) else {
        println!("{}", "log in first".yellow());
        return Ok(());
    };

    match client.physician_notes(account_id).await {
        Ok(notes) => {
            println!("{}", format!("{} notes", notes.len()).bold());
            for note in &notes {
                print_note(note);
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn view_note(client: &ClinicsClient) -> Result<()> {
    let note_id = prompt_uuid("note id")?;
    match client.note(note_id).await {
        Ok(note) => print_note(&note),
        Err(err) => report(client, &err),
    }
    Ok(())
}

// Admin screens

pub async fn list_accounts(client: &ClinicsClient) -> Result<()> {
    match client.all_accounts().await {
        Ok(accounts) => {
            for account in accounts {
                println!(
                    "  {}  {}  {}  {}",
                    account.id, account.email, account.role, account.status
                );
            }
        }
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn switch_role(client: &ClinicsClient) -> Result<()> {
    let account_id = prompt_uuid("account id")?;
    match client.switch_role(account_id).await {
        Ok(()) => println!("{}", "role switched".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn block_account(client: &ClinicsClient) -> Result<()> {
    let account_id = prompt_uuid("account id")?;
    match client.block_account(account_id).await {
        Ok(()) => println!("{}", "account blocked".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

fn clinic_form(client: &ClinicsClient) -> Result<Option<CreateEditClinicRequest>> {
    let city = prompt_required("city")?;
    let address = prompt_required("address")?;
    let description = prompt_required("description")?;
    let phone_number = prompt_required("phone number")?;
    let identification_number = prompt_required("identification number")?;
    let picture_url = prompt_required("picture url")?;

    if let Err(err) = validate::url(&picture_url) {
        report(client, &err);
        return Ok(None);
    }

    let start = prompt_time("working day start")?;
    let end = prompt_time("working day end")?;
    let working_days = ["monday", "tuesday", "wednesday", "thursday", "friday"]
        .iter()
        .map(|day| WorkDayDto {
            day_name: (*day).to_string(),
            start_of_working_day: start,
            end_of_working_day: end,
        })
        .collect();

    Ok(Some(CreateEditClinicRequest {
        city,
        address,
        description,
        phone_number,
        identification_number,
        picture_url,
        working_days,
    }))
}

pub async fn add_clinic(client: &ClinicsClient) -> Result<()> {
    let Some(request) = clinic_form(client)? else {
        return Ok(());
    };
    match client.add_clinic(&request).await {
        Ok(()) => println!("{}", "clinic created".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn edit_clinic(client: &ClinicsClient) -> Result<()> {
    let clinic_id = prompt_uuid("clinic id")?;
    let Some(request) = clinic_form(client)? else {
        return Ok(());
    };
    match client.edit_clinic(clinic_id, &request).await {
        Ok(()) => println!("{}", "clinic updated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn delete_clinic(client: &ClinicsClient) -> Result<()> {
    let clinic_id = prompt_uuid("clinic id")?;
    if !confirm("delete this clinic?")? {
        return Ok(());
    }
    match client.delete_clinic(clinic_id).await {
        Ok(()) => println!("{}", "clinic deleted".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn add_physician(client: &ClinicsClient) -> Result<()> {
    let email = prompt_required("email")?;
    if let Err(err) = validate::email(&email) {
        report(client, &err);
        return Ok(());
    }

    let request = CreatePhysician {
        first_name: prompt_required("first name")?,
        last_name: prompt_required("last name")?,
        identification_number: prompt_required("identification number")?,
        abbreviation: prompt_optional("title abbreviation (optional)")?,
        picture_url: prompt_optional("picture url (optional)")?,
        description: prompt_optional("description (optional)")?,
        email,
        workplace_city: prompt_required("workplace city")?,
        workplace_address: prompt_required("workplace address")?,
        specialty: prompt_required("specialty")?,
    };

    if let Some(url) = request.picture_url.as_deref() {
        if let Err(err) = validate::url(url) {
            report(client, &err);
            return Ok(());
        }
    }

    match client.add_physician(&request).await {
        Ok(()) => println!("{}", "physician created".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn update_physician(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    let email = prompt_required("email")?;
    if let Err(err) = validate::email(&email) {
        report(client, &err);
        return Ok(());
    }

    let request = PhysicianEditRequest {
        first_name: prompt_required("first name")?,
        last_name: prompt_required("last name")?,
        abbreviation: prompt_optional("title abbreviation (optional)")?,
        picture_url: prompt_optional("picture url (optional)")?,
        description: prompt_optional("description (optional)")?,
        email,
        workplace_city: prompt_optional("workplace city (optional)")?,
        workplace_address: prompt_optional("workplace address (optional)")?,
        specialty: prompt_required("specialty")?,
    };
    match client.update_physician(physician_id, &request).await {
        Ok(()) => println!("{}", "physician updated".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn dismiss_physician(client: &ClinicsClient) -> Result<()> {
    let physician_id = prompt_uuid("physician id")?;
    if !confirm("detach this physician from their workplace?")? {
        return Ok(());
    }
    match client.dismiss_physician(physician_id).await {
        Ok(()) => println!("{}", "physician dismissed".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

pub async fn delete_account(client: &ClinicsClient) -> Result<()> {
    let account_id = prompt_uuid("account id")?;
    if !confirm("delete this account?")? {
        return Ok(());
    }
    match client.delete_account(account_id).await {
        Ok(()) => println!("{}", "account deleted".green()),
        Err(err) => report(client, &err),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::parse_slot_interval;

    #[test]
    fn slot_interval_accepts_the_service_range() {
        assert_eq!(parse_slot_interval("15"), Some(15));
        assert_eq!(parse_slot_interval(" 30 "), Some(30));
        assert_eq!(parse_slot_interval("60"), Some(60));
    }

    #[test]
    fn slot_interval_rejects_garbage_instead_of_defaulting() {
        assert_eq!(parse_slot_interval(""), None);
        assert_eq!(parse_slot_interval("abc"), None);
        assert_eq!(parse_slot_interval("10"), None);
        assert_eq!(parse_slot_interval("90"), None);
        assert_eq!(parse_slot_interval("-30"), None);
    }
}
