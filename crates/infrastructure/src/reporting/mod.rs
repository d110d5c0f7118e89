//! Human-facing run reporting

mod console;

pub use console::ConsoleReporter;
