//! Apiprobe Domain - Core types
//!
//! This crate defines the domain model for the apiprobe smoke-check
//! harness. All types here are pure Rust with no I/O dependencies.

pub mod check;
pub mod config;
pub mod error;
pub mod outcome;
pub mod report;
pub mod request;
pub mod response;
pub mod status_check;

pub use check::CheckSpec;
pub use config::{DEFAULT_BASE_URL, RunnerConfig};
pub use error::{DomainError, DomainResult};
pub use outcome::{CheckFailure, CheckOutcome, FaultKind};
pub use report::{RunStats, RunSummary};
pub use request::{Header, Headers, HttpMethod, ProbeRequest};
pub use response::{ProbeResponse, ResponsePayload};
