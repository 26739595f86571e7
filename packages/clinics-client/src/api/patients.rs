//! Patient endpoints, physician-only on the service side.

use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{CreateEditPatient, PatientFilter, PatientInfo};

impl ClinicsClient {
    pub async fn add_patient(&self, request: &CreateEditPatient) -> Result<()> {
        self.send_no_content(
            self.request(Method::POST, "/patients/patient/new")
                .json(request),
        )
        .await?;
        info!("patient created");
        Ok(())
    }

    pub async fn patient(&self, patient_id: Uuid) -> Result<PatientInfo> {
        self.get_json(&format!("/patients/{patient_id}")).await
    }

    /// Look a patient up by any combination of phone, email, or country +
    /// identification code.
    pub async fn find_patient(&self, filter: &PatientFilter) -> Result<Vec<PatientInfo>> {
        let mut query: Vec<(&str, &str)> = Vec::new();
        if let Some(phone_number) = filter.phone_number.as_deref() {
            query.push(("phoneNumber", phone_number));
        }
        if let Some(email) = filter.email.as_deref() {
            query.push(("email", email));
        }
        if let Some(country) = filter.country.as_deref() {
            query.push(("country", country));
        }
        if let Some(code) = filter.identification_code.as_deref() {
            query.push(("identificationCode", code));
        }

        let request = self.request(Method::GET, "/patients/filter/").query(&query);
        let response = self.send(request).await?;
        Ok(response.json().await?)
    }

    pub async fn set_patient_identity(
        &self,
        patient_id: Uuid,
        country: &str,
        identification_code: &str,
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::PUT, &format!("/patients/{patient_id}"))
                .query(&[("country", country), ("identificationCode", identification_code)]),
        )
        .await?;
        info!(%patient_id, "patient identity updated");
        Ok(())
    }
}
