pub mod client;
pub mod controller;
pub mod eligibility;
pub mod errors;
pub mod models;
pub mod ui;

pub use client::ApiClient;
pub use controller::AttendanceController;
pub use eligibility::{evaluate, EligibilityContext, Verdict, WindowState};
pub use errors::ClientError;
