//! HTTP request/response pipeline.
//!
//! Outbound: every request gets `Authorization: Bearer <token>` unless its
//! target is on the public allow-list (auth endpoints, read-only clinic and
//! physician GETs). Inbound: error status codes are dispatched to exactly
//! one side-effect branch, first match wins, and the error is always
//! returned to the caller as well. No retries, no backoff.

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use tracing::debug;

use crate::error::ClientError;
use crate::error_feed::ErrorFeed;
use crate::routes::{Navigate, Route};
use crate::session::Session;
use crate::types::ExceptionResponse;

pub struct HttpPipeline {
    session: Arc<Session>,
    navigator: Arc<dyn Navigate>,
    errors: ErrorFeed,
}

impl HttpPipeline {
    pub fn new(session: Arc<Session>, navigator: Arc<dyn Navigate>, errors: ErrorFeed) -> Self {
        Self {
            session,
            navigator,
            errors,
        }
    }

    /// Whether a target is reachable without an authorization header.
    pub fn is_public(method: &Method, path: &str) -> bool {
        if path.starts_with("/auth") {
            return true;
        }
        *method == Method::GET
            && (path.starts_with("/clinics") || path.starts_with("/physicians"))
    }

    /// Attach the bearer token unless the target is public. A missing token
    /// leaves the request untouched; the service answers with 401 and the
    /// inbound stage takes over.
    pub fn authorize(&self, method: &Method, path: &str, request: RequestBuilder) -> RequestBuilder {
        if Self::is_public(method, path) {
            return request;
        }
        match self.session.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Dispatch an error response by status code and hand the error back to
    /// the caller. Branches are mutually exclusive:
    ///
    /// - 401: the session is gone on the service side, so it is cleared
    ///   here too, then the client is sent to the login screen.
    /// - 403: forbidden screen.
    /// - 500: internal-error screen.
    /// - 400/404/409: payload messages go to the error feed, generic error
    ///   screen.
    /// - anything else: no side effect.
    pub fn dispatch(&self, status: StatusCode, payload: Option<ExceptionResponse>) -> ClientError {
        let messages = payload.map(|p| p.messages).unwrap_or_default();
        debug!(status = status.as_u16(), "dispatching error response");

        match status.as_u16() {
            401 => {
                self.session.logout();
                self.navigator.navigate(Route::Login);
            }
            403 => self.navigator.navigate(Route::Forbidden),
            500 => self.navigator.navigate(Route::InternalError),
            400 | 404 | 409 => {
                self.errors.push(messages.clone());
                self.navigator.navigate(Route::Error);
            }
            _ => {}
        }

        ClientError::Status {
            code: status.as_u16(),
            messages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::{user_with_role, RecordingNavigator};
    use crate::types::Role;
    use std::time::Duration;

    fn pipeline() -> (HttpPipeline, Arc<Session>, Arc<RecordingNavigator>, ErrorFeed) {
        let session = Arc::new(Session::in_memory());
        let navigator = Arc::new(RecordingNavigator::new());
        let errors = ErrorFeed::new();
        let pipeline = HttpPipeline::new(session.clone(), navigator.clone(), errors.clone());
        (pipeline, session, navigator, errors)
    }

    fn payload(messages: &[&str]) -> Option<ExceptionResponse> {
        Some(ExceptionResponse {
            error_code: 0,
            messages: messages.iter().map(|m| m.to_string()).collect(),
        })
    }

    #[test]
    fn auth_endpoints_are_public_for_any_method() {
        assert!(HttpPipeline::is_public(&Method::POST, "/auth/login"));
        assert!(HttpPipeline::is_public(&Method::POST, "/auth/register"));
    }

    #[test]
    fn clinic_and_physician_reads_are_public() {
        assert!(HttpPipeline::is_public(&Method::GET, "/clinics/"));
        assert!(HttpPipeline::is_public(&Method::GET, "/physicians/physician/abc"));

        // Writes to the same prefixes are not
        assert!(!HttpPipeline::is_public(&Method::POST, "/clinics/"));
        assert!(!HttpPipeline::is_public(&Method::DELETE, "/physicians/physician/abc"));
    }

    #[test]
    fn protected_endpoints_are_not_public() {
        assert!(!HttpPipeline::is_public(&Method::GET, "/users/"));
        assert!(!HttpPipeline::is_public(&Method::GET, "/schedules/physician/abc"));
        assert!(!HttpPipeline::is_public(&Method::PATCH, "/schedules/appointments/abc"));
    }

    #[tokio::test]
    async fn public_requests_never_carry_the_authorization_header() {
        let (pipeline, session, _navigator, _errors) = pipeline();
        session
            .establish(Some("Bearer tok"), user_with_role(Role::Admin))
            .unwrap();

        let http = reqwest::Client::new();

        let builder = http.get("http://localhost/clinics/");
        let request = pipeline
            .authorize(&Method::GET, "/clinics/", builder)
            .build()
            .unwrap();
        assert!(!request.headers().contains_key(reqwest::header::AUTHORIZATION));

        let builder = http.post("http://localhost/clinics/");
        let request = pipeline
            .authorize(&Method::POST, "/clinics/", builder)
            .build()
            .unwrap();
        assert_eq!(
            request
                .headers()
                .get(reqwest::header::AUTHORIZATION)
                .unwrap()
                .to_str()
                .unwrap(),
            "Bearer tok"
        );
    }

    #[tokio::test]
    async fn unauthorized_clears_session_and_navigates_to_login() {
        let (pipeline, session, navigator, errors) = pipeline();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Patient))
            .unwrap();

        let err = pipeline.dispatch(StatusCode::UNAUTHORIZED, None);

        assert_eq!(err.status(), Some(401));
        assert!(!session.is_logged());
        assert_eq!(navigator.visited(), vec![Route::Login]);
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn forbidden_navigates_once_and_leaves_feed_alone() {
        let (pipeline, _session, navigator, errors) = pipeline();

        let err = pipeline.dispatch(StatusCode::FORBIDDEN, payload(&["no access"]));

        assert_eq!(err.status(), Some(403));
        assert_eq!(navigator.visited(), vec![Route::Forbidden]);
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn server_error_navigates_to_internal_error() {
        let (pipeline, _session, navigator, _errors) = pipeline();

        pipeline.dispatch(StatusCode::INTERNAL_SERVER_ERROR, None);

        assert_eq!(navigator.visited(), vec![Route::InternalError]);
    }

    #[tokio::test(start_paused = true)]
    async fn not_found_feeds_errors_and_navigates_then_expires() {
        let (pipeline, _session, navigator, errors) = pipeline();

        let err = pipeline.dispatch(StatusCode::NOT_FOUND, payload(&["clinic not found"]));

        assert_eq!(err.status(), Some(404));
        assert_eq!(navigator.visited(), vec![Route::Error]);
        assert_eq!(errors.messages(), vec!["clinic not found".to_string()]);

        tokio::time::sleep(crate::error_feed::DISPLAY_TTL + Duration::from_secs(1)).await;
        assert!(errors.is_empty());
    }

    #[tokio::test]
    async fn conflict_and_bad_request_share_the_error_branch() {
        let (pipeline, _session, navigator, errors) = pipeline();

        pipeline.dispatch(StatusCode::CONFLICT, payload(&["duplicate clinic"]));
        pipeline.dispatch(StatusCode::BAD_REQUEST, payload(&["invalid input"]));

        assert_eq!(navigator.visited(), vec![Route::Error, Route::Error]);
        assert_eq!(errors.messages().len(), 2);
    }

    #[tokio::test]
    async fn unhandled_status_has_no_side_effects() {
        let (pipeline, session, navigator, errors) = pipeline();
        session
            .establish(Some("Bearer t"), user_with_role(Role::Patient))
            .unwrap();

        let err = pipeline.dispatch(StatusCode::IM_A_TEAPOT, None);

        assert_eq!(err.status(), Some(418));
        assert!(navigator.visited().is_empty());
        assert!(errors.is_empty());
        assert!(session.is_logged());
    }
}
