//! Port adapters
//!
//! Concrete implementations of the application ports: a reqwest-backed
//! HTTP client and the system wall clock.

mod reqwest_client;
mod system_clock;

pub use reqwest_client::ReqwestHttpClient;
pub use system_clock::SystemClock;
