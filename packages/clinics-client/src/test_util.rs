//! Shared test helpers.

use std::sync::Mutex;

use uuid::Uuid;

use crate::routes::{Navigate, Route};
use crate::types::{Role, UserData};

pub fn user_with_role(role: Role) -> UserData {
    UserData {
        account_id: Uuid::new_v4(),
        role,
        patient_info: None,
    }
}

/// Navigator that records every route it is asked to visit.
#[derive(Default)]
pub struct RecordingNavigator {
    routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn visited(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigate for RecordingNavigator {
    fn navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}
