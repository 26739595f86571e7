//! Wire types for the medical clinics service.
//!
//! Field names follow the remote service's JSON (camelCase); times use the
//! service's `HH:mm:ss` format, which is chrono's default for `NaiveTime`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account role, as issued by the identity endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Physician,
    Patient,
}

/// Identity returned by a successful login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    pub account_id: Uuid,
    pub role: Role,
    pub patient_info: Option<PatientInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientInfo {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub country: Option<String>,
    pub identification_code: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicShortInfo {
    pub id: Uuid,
    pub city: String,
    pub address: String,
    pub picture_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClinicDetails {
    pub id: Uuid,
    pub city: String,
    pub address: String,
    pub picture_url: Option<String>,
    pub description: Option<String>,
    pub phone_number: Option<String>,
    pub identification_number: Option<String>,
    pub working_days: Vec<WorkDayDto>,
    pub specialties: Vec<SpecialityDto>,
}

/// Clinic working hours for one day of the week. `day_name` is case
/// insensitive on the service side ("monday", "Tuesday", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkDayDto {
    pub day_name: String,
    pub start_of_working_day: NaiveTime,
    pub end_of_working_day: NaiveTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpecialityDto {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditClinicRequest {
    pub city: String,
    pub address: String,
    pub description: String,
    pub phone_number: String,
    pub identification_number: String,
    pub picture_url: String,
    pub working_days: Vec<WorkDayDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePhysician {
    pub first_name: String,
    pub last_name: String,
    pub identification_number: String,
    pub abbreviation: Option<String>,
    pub picture_url: Option<String>,
    pub description: Option<String>,
    pub email: String,
    pub workplace_city: String,
    pub workplace_address: String,
    pub specialty: String,
}

/// Update payload for an existing physician. Workplace fields are optional:
/// a dismissed physician has no workplace until reassigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicianEditRequest {
    pub first_name: String,
    pub last_name: String,
    pub abbreviation: Option<String>,
    pub picture_url: Option<String>,
    pub description: Option<String>,
    pub email: String,
    pub workplace_city: Option<String>,
    pub workplace_address: Option<String>,
    pub specialty: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicianInfo {
    pub physician_id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub abbreviation: Option<String>,
    pub picture_url: Option<String>,
    pub description: Option<String>,
    pub workplace: Option<String>,
    pub specialty: String,
}

/// One day of a physician's schedule to generate. The service slices the
/// window into timeslots of `time_slot_interval` minutes (15-60).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDaySchedule {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub time_slot_interval: u32,
}

/// Timeslot lifecycle on the service side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlotStatus {
    Free,
    Reserved,
    Passed,
}

/// One timeslot of a physician's day. `patient_info` is only present in the
/// staff (private) view of the schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayAppointment {
    pub id: Uuid,
    pub status: SlotStatus,
    pub start_time: NaiveTime,
    #[serde(default)]
    pub patient_info: Option<PatientInfo>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhysicianDaySchedule {
    // The public view names this field `scheduleId`
    #[serde(alias = "scheduleId")]
    pub id: Uuid,
    pub date: NaiveDate,
    pub schedule: Vec<DayAppointment>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientAppointment {
    pub id: Uuid,
    pub appointment_date: NaiveDate,
    pub start_time: NaiveTime,
    pub physician: String,
    pub address: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateEditPatient {
    pub first_name: String,
    pub last_name: String,
    pub identification_code: String,
    pub country: String,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
}

/// Optional search criteria for the patient lookup endpoint.
#[derive(Debug, Clone, Default)]
pub struct PatientFilter {
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub country: Option<String>,
    pub identification_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewNoteRequest {
    pub diagnosis: String,
    pub diagnosis_code: Option<String>,
    pub chief_complaint: Option<String>,
    pub medical_history: String,
    pub examination: String,
    pub medication_and_recommendations: Option<String>,
    pub test_results: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub document_number: String,
    pub creation_date: NaiveDate,
    pub clinic_identification_number: Option<String>,
    pub physician_identification_number: Option<String>,
    pub physician_info: Option<String>,
    pub patient_name: Option<String>,
    pub patient_full_address: Option<String>,
    pub patient_identification_code: Option<String>,
    pub diagnosis: String,
    pub diagnosis_code: Option<String>,
    pub chief_complaint: Option<String>,
    pub medical_history: Option<String>,
    pub examination: Option<String>,
    pub medication_and_recommendations: Option<String>,
    pub test_results: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccountEditRequest {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub country: Option<String>,
    pub city: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: String,
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountInformation {
    pub id: Uuid,
    pub email: String,
    pub role: String,
    pub status: String,
}

/// Error body the service attaches to 4xx/5xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionResponse {
    pub error_code: i32,
    pub messages: Vec<String>,
}
