//! User account endpoints.

use reqwest::Method;
use tracing::info;
use uuid::Uuid;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::types::{AccountInformation, UserAccountEditRequest};

impl ClinicsClient {
    pub async fn update_account(
        &self,
        account_id: Uuid,
        request: &UserAccountEditRequest,
    ) -> Result<()> {
        self.send_no_content(
            self.request(Method::PUT, &format!("/users/user/{account_id}"))
                .json(request),
        )
        .await?;
        info!(%account_id, "account updated");
        Ok(())
    }

    /// Toggle an account between patient and physician, admin only.
    pub async fn switch_role(&self, account_id: Uuid) -> Result<()> {
        self.send_no_content(self.request(Method::PATCH, &format!("/users/user/{account_id}")))
            .await?;
        info!(%account_id, "role switched");
        Ok(())
    }

    pub async fn block_account(&self, account_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::PATCH, &format!("/users/user/ban/{account_id}")),
        )
        .await?;
        info!(%account_id, "account blocked");
        Ok(())
    }

    pub async fn delete_account(&self, account_id: Uuid) -> Result<()> {
        self.send_no_content(
            self.request(Method::DELETE, &format!("/users/user/{account_id}")),
        )
        .await?;
        info!(%account_id, "account deleted");
        Ok(())
    }

    pub async fn all_accounts(&self) -> Result<Vec<AccountInformation>> {
        self.get_json("/users/").await
    }
}
