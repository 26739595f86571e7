//! Schedule and appointment endpoints.
//!
//! Schedules and timeslots are opaque to the client: identifiers are handed
//! back to the service, never computed or reconciled locally.

use chrono::NaiveDate;
use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{NewDaySchedule, PatientAppointment, PhysicianDaySchedule};

impl ClinicsClient {
    pub async fn generate_schedule(
        &self,
        physician_id: Uuid,
        days: &[NewDaySchedule],
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::POST, &format!("/schedules/new/physician/{physician_id}"))
                .json(days),
        )
        .await?;
        info!(%physician_id, days = days.len(), "schedule generated");
        Ok(())
    }

    /// Staff view: includes the appointed patients.
    pub async fn physician_schedules(
        &self,
        physician_id: Uuid,
    ) -> Result<Vec<PhysicianDaySchedule>> {
        self.get_json(&format!("/schedules/physician/{physician_id}"))
            .await
    }

    /// Public view of a physician's open slots.
    pub async fn public_physician_schedules(
        &self,
        physician_id: Uuid,
    ) -> Result<Vec<PhysicianDaySchedule>> {
        let request = self
            .request(Method::GET, "/schedules/")
            .query(&[("physicianId", physician_id.to_string())]);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    pub async fn make_appointment(&self, appointment_id: Uuid, account_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::PATCH, &format!("/schedules/appointments/{appointment_id}"))
                .query(&[("accountId", account_id.to_string())]),
        )
        .await?;
        info!(%appointment_id, "appointment booked");
        Ok(())
    }

    pub async fn release_appointment(&self, appointment_id: Uuid, account_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/schedules/appointments/{appointment_id}"))
                .query(&[("accountId", account_id.to_string())]),
        )
        .await?;
        info!(%appointment_id, "appointment released");
        Ok(())
    }

    pub async fn patient_appointments(&self, patient_id: Uuid) -> Result<Vec<PatientAppointment>> {
        self.get_json(&format!("/schedules/patient/{patient_id}"))
            .await
    }

    /// Take a whole day's schedule out of service.
    pub async fn inactivate_schedule(&self, physician_id: Uuid, date: NaiveDate) -> Result<()> {
        self.send_no_content(
            self.request(Method::PATCH, &format!("/schedules/physician/{physician_id}"))
                .query(&[("localDate", date.to_string())]),
        )
        .await?;
        info!(%physician_id, %date, "day schedule inactivated");
        Ok(())
    }

    pub async fn inactivate_timeslot(&self, timeslot_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::PATCH, &format!("/schedules/timeslot/{timeslot_id}")),
        )
        .await?;
        info!(%timeslot_id, "timeslot inactivated");
        Ok(())
    }
}
