//! `hrdesk`: a terminal client for the HR administration REST API.
//!
//! Every JSON call goes through [`services::response_interpreter::ResponseInterpreter`],
//! which reconciles HTTP status with the backend's business `statusCode` and raises
//! notices through the [`traits::notifier::Notifier`] seam.

pub mod config;
pub mod enums;
pub mod errors;
pub mod helpers;
pub mod logger;
pub mod services;
pub mod structs;
pub mod traits;
pub mod workers;
