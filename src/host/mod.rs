//! Everything the hosting process supplies: configuration, environment, and the launch runtime.
pub mod config;
pub mod environment;
pub mod runtime;
