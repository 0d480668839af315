//! Interpreter resolution: an explicit reference, or the first candidate found on `PATH`.
//!
//! The policy decides which of the two applies. `auto` prefers an explicit interpreter when
//! one is supplied and probes otherwise.
mod probe;

use std::path::PathBuf;

use clap::ValueEnum;
use serde::Serialize;
use tracing::{debug, info};

use crate::lib::errors::LaunchError;

pub use probe::{InterpreterProbe, SystemInterpreterProbe};

/// Which resolution variant applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpreterPolicy {
    /// Explicit interpreter if supplied, otherwise probe.
    Auto,
    /// Explicit interpreter only; never probe.
    Explicit,
    /// Probe only; ignore any explicit interpreter.
    Probe,
}

impl InterpreterPolicy {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InterpreterPolicy::Auto => "auto",
            InterpreterPolicy::Explicit => "explicit",
            InterpreterPolicy::Probe => "probe",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "auto" => Some(InterpreterPolicy::Auto),
            "explicit" => Some(InterpreterPolicy::Explicit),
            "probe" => Some(InterpreterPolicy::Probe),
            _ => None,
        }
    }
}

/// Where the chosen interpreter came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterpreterSource {
    Cli,
    Env,
    Probe,
}

impl InterpreterSource {
    pub const fn as_str(&self) -> &'static str {
        match self {
            InterpreterSource::Cli => "cli",
            InterpreterSource::Env => "env",
            InterpreterSource::Probe => "probe",
        }
    }
}

/// Interpreter supplied by the command line or the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExplicitInterpreter {
    pub program: PathBuf,
    pub source: InterpreterSource,
}

/// Interpreter the entry point will run under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInterpreter {
    pub program: PathBuf,
    pub source: InterpreterSource,
}

/// Inputs for [`resolve_interpreter`].
pub struct InterpreterRequest<'a> {
    pub policy: InterpreterPolicy,
    pub explicit: Option<ExplicitInterpreter>,
    /// Variable named in the diagnostic when the explicit policy finds nothing.
    pub variable: &'a str,
    pub candidates: &'a [String],
}

/// Resolve the interpreter according to the request's policy.
///
/// An explicit interpreter is returned verbatim; execution reports it if it is unusable.
pub fn resolve_interpreter<P: InterpreterProbe>(
    request: InterpreterRequest<'_>,
    probe: &P,
) -> Result<ResolvedInterpreter, LaunchError> {
    match (request.policy, request.explicit) {
        (InterpreterPolicy::Auto | InterpreterPolicy::Explicit, Some(explicit)) => {
            debug!(
                target: "app_launcher::probe",
                interpreter = %explicit.program.display(),
                source = explicit.source.as_str(),
                "Using explicit interpreter"
            );
            Ok(ResolvedInterpreter {
                program: explicit.program,
                source: explicit.source,
            })
        }
        (InterpreterPolicy::Explicit, None) => Err(LaunchError::InterpreterUnset {
            variable: request.variable.to_string(),
        }),
        (InterpreterPolicy::Auto | InterpreterPolicy::Probe, _) => {
            probe_candidates(request.candidates, probe)
        }
    }
}

/// First candidate present wins; list order beats `PATH` order.
pub fn probe_candidates<P: InterpreterProbe>(
    candidates: &[String],
    probe: &P,
) -> Result<ResolvedInterpreter, LaunchError> {
    for candidate in candidates {
        if let Some(program) = probe.locate(candidate) {
            info!(
                target: "app_launcher::probe",
                candidate = %candidate,
                interpreter = %program.display(),
                "Found interpreter"
            );
            return Ok(ResolvedInterpreter {
                program,
                source: InterpreterSource::Probe,
            });
        }
    }

    Err(LaunchError::InterpreterNotFound {
        candidates: candidates.to_vec(),
    })
}
