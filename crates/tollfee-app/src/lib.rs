//! Application service layer - config, logging, toll service, reports

pub mod config;
pub mod logging;
pub mod report;
pub mod service;

pub use config::Config;
pub use report::FeeReport;
pub use service::TollService;
