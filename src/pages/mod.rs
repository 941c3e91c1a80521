//! Page components, one module per resource plus auth and dashboards.

pub mod dashboards;
pub mod home;
pub mod login;
pub mod owners;
pub mod pets;
pub mod register;
pub mod vets;
pub mod visits;
