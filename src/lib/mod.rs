//! Shared library modules providing error types, exit codes, path helpers, and telemetry.

pub mod errors;
pub mod exit_codes;
pub mod paths;
pub mod status;
pub mod telemetry;
