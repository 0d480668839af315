//! Exit codes the launcher reports on its own behalf.
//!
//! When the entry point runs, its exit status is mirrored instead.

/// Working directory, configuration, or wait failure.
pub const FAILURE: u8 = 1;
/// No interpreter could be resolved.
pub const INTERPRETER_NOT_FOUND: u8 = 3;
/// The interpreter exists but could not be started.
pub const NOT_EXECUTABLE: u8 = 126;
/// The interpreter program does not exist.
pub const COMMAND_NOT_FOUND: u8 = 127;
/// Added to the signal number when a child killed by a signal cannot be mirrored directly.
pub const SIGNAL_BASE: u8 = 128;
