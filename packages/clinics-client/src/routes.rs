//! Navigation targets and the navigation seam.

/// Screens the client can land on. Guards and the response pipeline only
/// ever redirect to a handful of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Clinics,
    Login,
    Profile,
    Forbidden,
    InternalError,
    Error,
    NotFound,
}

/// Navigation side effect, passed explicitly to guards and the pipeline.
pub trait Navigate: Send + Sync {
    fn navigate(&self, route: Route);
}
