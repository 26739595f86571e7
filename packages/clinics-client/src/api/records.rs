//! Medical record endpoints.

use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{NewNoteRequest, NoteResponse};

impl ClinicsClient {
    pub async fn note(&self, note_id: Uuid) -> Result<NoteResponse> {
        self.get_json(&format!("/medical-records/note/{note_id}"))
            .await
    }

    pub async fn patient_record(&self, patient_id: Uuid) -> Result<Vec<NoteResponse>> {
        self.get_json(&format!("/medical-records/patient/{patient_id}"))
            .await
    }

    /// All notes a physician has written, staff only.
    pub async fn physician_notes(&self, account_id: Uuid) -> Result<Vec<NoteResponse>> {
        self.get_json(&format!("/medical-records/physician/{account_id}"))
            .await
    }

    pub async fn add_note(
        &self,
        account_id: Uuid,
        patient_id: Uuid,
        request: &NewNoteRequest,
    ) -> Result<()> {
        self.send_no_content(
            self.request(
                Method::POST,
                &format!("/medical-records/note/new/physician/{account_id}"),
            )
            .query(&[("patientId", patient_id.to_string())])
            .json(request),
        )
        .await?;
        info!(%patient_id, "note added");
        Ok(())
    }
}
