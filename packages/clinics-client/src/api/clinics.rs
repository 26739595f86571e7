//! Clinic endpoints. Reads are public; writes are admin-only on the
//! service side.

use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{ClinicDetails, ClinicShortInfo, CreateEditClinicRequest};

impl ClinicsClient {
    pub async fn all_clinics(&self) -> Result<Vec<ClinicShortInfo>> {
        self.get_json("/clinics/").await
    }

    pub async fn clinic_details(&self, clinic_id: Uuid) -> Result<ClinicDetails> {
        self.get_json(&format!("/clinics/{clinic_id}")).await
    }

    pub async fn add_clinic(&self, request: &CreateEditClinicRequest) -> Result<()> {
        self.send_no_content(self.request(Method::POST, "/clinics/").json(request))
            .await?;
        info!(city = %request.city, "clinic created");
        Ok(())
    }

    pub async fn edit_clinic(&self, clinic_id: Uuid, request: &CreateEditClinicRequest) -> Result<()> {
        self.send_no_content(
            self.request(Method::PUT, &format!("/clinics/{clinic_id}"))
                .json(request),
        )
        .await?;
        info!(%clinic_id, "clinic updated");
        Ok(())
    }

    pub async fn delete_clinic(&self, clinic_id: Uuid) -> Result<()> {
        self.send_no_content(self.request(Method::DELETE, &format!("/clinics/{clinic_id}")))
            .await?;
        info!(%clinic_id, "clinic deleted");
        Ok(())
    }
}
