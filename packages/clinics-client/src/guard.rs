//! Route guards.
//!
//! Three independent predicates over the current session. Each one is
//! synchronous, reads only in-memory state, and on deny redirects to the
//! public clinics listing. A route declares the single guard that applies
//! to it; there is no ordering between guards.

use tracing::debug;

use crate::routes::{Navigate, Route};
use crate::session::Session;

/// Allow any logged-in account.
pub fn auth_guard(session: &Session, navigator: &dyn Navigate) -> bool {
    if session.is_logged() {
        return true;
    }

    debug!("auth guard denied, redirecting to clinics");
    navigator.navigate(Route::Clinics);
    false
}

/// Allow admins only.
pub fn admin_guard(session: &Session, navigator: &dyn Navigate) -> bool {
    if session.is_admin() {
        return true;
    }

    debug!("admin guard denied, redirecting to clinics");
    navigator.navigate(Route::Clinics);
    false
}

/// Allow clinical staff (physician or admin).
pub fn credentials_guard(session: &Session, navigator: &dyn Navigate) -> bool {
    if session.has_credentials() {
        return true;
    }

    debug!("credentials guard denied, redirecting to clinics");
    navigator.navigate(Route::Clinics);
    false
}
