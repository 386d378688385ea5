//! Demo walkthrough of the customer domain: registration, profiles, contact
//! updates, tiered order pricing and VIP perks, narrated on the console.

pub mod config;
pub mod report;
pub mod scenario;

pub use config::DemoConfig;
pub use report::{ConsoleReporter, ReportError};
pub use scenario::{ScenarioSummary, run};
