//! Deserialization checks for the service's quirkier wire shapes.

use clinics_client::types::{
    ExceptionResponse, PhysicianDaySchedule, Role, SlotStatus, UserData,
};

#[test]
fn login_body_with_patient_info() {
    let body = r#"{
        "accountId": "7e2a6e61-3b6e-4aaf-9c3e-111111111111",
        "role": "PATIENT",
        "patientInfo": {
            "id": "7e2a6e61-3b6e-4aaf-9c3e-222222222222",
            "firstName": "John",
            "lastName": "Doe",
            "country": "Bulgaria",
            "identificationCode": "AB-1234",
            "city": null,
            "address": null,
            "phone": "+123456789",
            "email": "example@example.com"
        }
    }"#;

    let user: UserData = serde_json::from_str(body).unwrap();
    assert_eq!(user.role, Role::Patient);
    let patient = user.patient_info.unwrap();
    assert_eq!(patient.first_name, "John");
    assert!(patient.city.is_none());
}

#[test]
fn login_body_without_patient_info() {
    let body = r#"{
        "accountId": "7e2a6e61-3b6e-4aaf-9c3e-111111111111",
        "role": "ADMIN",
        "patientInfo": null
    }"#;

    let user: UserData = serde_json::from_str(body).unwrap();
    assert_eq!(user.role, Role::Admin);
    assert!(user.patient_info.is_none());
}

#[test]
fn public_schedule_uses_schedule_id_and_bare_slots() {
    // The public view renames `id` to `scheduleId` and omits patient info
    let body = r#"[{
        "scheduleId": "7e2a6e61-3b6e-4aaf-9c3e-333333333333",
        "date": "2025-06-02",
        "schedule": [
            { "id": "7e2a6e61-3b6e-4aaf-9c3e-444444444444",
              "status": "FREE",
              "startTime": "08:30:00" }
        ]
    }]"#;

    let days: Vec<PhysicianDaySchedule> = serde_json::from_str(body).unwrap();
    assert_eq!(days[0].schedule[0].status, SlotStatus::Free);
    assert!(days[0].schedule[0].patient_info.is_none());
}

#[test]
fn private_schedule_uses_id_and_carries_patients() {
    let body = r#"[{
        "id": "7e2a6e61-3b6e-4aaf-9c3e-333333333333",
        "date": "2025-06-02",
        "schedule": [
            { "id": "7e2a6e61-3b6e-4aaf-9c3e-444444444444",
              "status": "RESERVED",
              "startTime": "09:00:00",
              "patientInfo": {
                  "id": "7e2a6e61-3b6e-4aaf-9c3e-555555555555",
                  "firstName": "Jane",
                  "lastName": "Doe",
                  "country": null,
                  "identificationCode": null,
                  "city": null,
                  "address": null,
                  "phone": null,
                  "email": null
              } }
        ]
    }]"#;

    let days: Vec<PhysicianDaySchedule> = serde_json::from_str(body).unwrap();
    let slot = &days[0].schedule[0];
    assert_eq!(slot.status, SlotStatus::Reserved);
    assert_eq!(slot.patient_info.as_ref().unwrap().first_name, "Jane");
}

#[test]
fn exception_response_payload() {
    let body = r#"{ "errorCode": 404, "messages": ["Clinic not found"] }"#;

    let payload: ExceptionResponse = serde_json::from_str(body).unwrap();
    assert_eq!(payload.error_code, 404);
    assert_eq!(payload.messages, vec!["Clinic not found".to_string()]);
}
