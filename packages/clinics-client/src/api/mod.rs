//! Endpoint groups, one module per remote controller.

mod accounts;
mod auth;
mod clinics;
mod patients;
mod physicians;
mod records;
mod schedules;
