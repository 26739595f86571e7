//! Physician endpoints.

use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{CreatePhysician, PhysicianEditRequest, PhysicianInfo};

impl ClinicsClient {
    pub async fn add_physician(&self, request: &CreatePhysician) -> Result<()> {
        self.send_no_content(
            self.request(Method::POST, "/physicians/physician/new")
                .json(request),
        )
        .await?;
        info!(specialty = %request.specialty, "physician created");
        Ok(())
    }

    pub async fn update_physician(
        &self,
        physician_id: Uuid,
        request: &PhysicianEditRequest,
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::PUT, &format!("/physicians/physician/{physician_id}"))
                .json(request),
        )
        .await?;
        info!(%physician_id, "physician updated");
        Ok(())
    }

    /// Detach a physician from their workplace.
    pub async fn dismiss_physician(&self, physician_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/physicians/physician/{physician_id}")),
        )
        .await?;
        info!(%physician_id, "physician dismissed");
        Ok(())
    }

    pub async fn physicians_by_clinic_and_speciality(
        &self,
        clinic_id: Uuid,
        speciality_id: Uuid,
    ) -> Result<Vec<PhysicianInfo>> {
        self.get_json(&format!("/physicians/{clinic_id}/{speciality_id}"))
            .await
    }

    pub async fn physician_info(&self, physician_id: Uuid) -> Result<PhysicianInfo> {
        self.get_json(&format!("/physicians/physician/{physician_id}"))
            .await
    }
}
