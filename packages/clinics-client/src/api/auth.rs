//! Identity endpoints.

use reqwest::header::AUTHORIZATION;
use reqwest::Method;
use tracing::info;

use crate::client::ClinicsClient;
use crate::error::Result;
use crate::routes::Route;
use crate::types::{LoginRequest, RegisterRequest, UserData};

impl ClinicsClient {
    /// Log in and establish the session.
    ///
    /// The bearer token arrives in the response's `Authorization` header,
    /// not the body. A missing or malformed header fails the attempt with
    /// [`crate::ClientError::Auth`] and leaves the session empty. On
    /// success the client lands on the profile screen.
    pub async fn login(&self, request: &LoginRequest) -> Result<UserData> {
        let response = self
            .send(self.request(Method::POST, "/auth/login").json(request))
            .await?;

        let authorization = response
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_owned);
        let user: UserData = response.json().await?;

        self.session().establish(authorization.as_deref(), user.clone())?;
        info!(role = ?user.role, "logged in");
        self.navigator().navigate(Route::Profile);

        Ok(user)
    }

    /// Create a new patient account. The service answers 201 with no body.
    pub async fn register(&self, request: &RegisterRequest) -> Result<()> {
        self.send_no_content(self.request(Method::POST, "/auth/register").json(request))
            .await?;
        info!("account registered");
        Ok(())
    }

    /// Drop the current session. Purely local; the token simply stops
    /// being attached to requests.
    pub fn logout(&self) {
        self.session().logout();
        info!("logged out");
    }
}
