use clinics_client::{Navigate, Route};
use colored::Colorize;

/// Terminal stand-in for route transitions: guards and the response
/// pipeline "navigate" by printing the screen they would land on.
pub struct TermNavigator;

impl TermNavigator {
    pub fn new() -> Self {
        Self
    }
}

impl Navigate for TermNavigator {
    fn navigate(&self, route: Route) {
        println!("{} {:?}", "navigating to".dimmed(), route);
    }
}
