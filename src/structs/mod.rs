pub mod cli;
pub mod config;
pub mod envelope;
pub mod hr;
pub mod raw_response;
pub mod session;
