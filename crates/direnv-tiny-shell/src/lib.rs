//! Directory-scoped environment activation for interactive shells.
//!
//! This crate holds everything the `direnv-tiny` binary needs apart from
//! argument parsing and logger setup:
//! - Parsing `.envrc` declarations into ordered key/value entries.
//! - Rendering `export`/`unset` statements for the calling shell.
//! - Deciding which directory to unload and which to load on a `cd`.
//! - The prompt-hook snippets that drive the whole thing.

#![allow(clippy::missing_errors_doc)]

mod emit;
mod envrc;
mod error;
mod gate;
mod hook;
mod transition;

pub use emit::{ShellCommand, emit};
pub use envrc::{EnvEntry, Entries, entries, strip_quotes};
pub use error::ExportError;
pub use gate::{ConfigProbe, config_path, has_config, probe};
pub use hook::ShellType;
pub use transition::{Transition, TransitionState, resolve_and_emit};

/// File looked up in every directory the shell enters.
pub const CONFIG_FILE_NAME: &str = ".envrc";

/// Variable carrying the directory that was active after the last export.
pub const PREVIOUS_DIR_VAR: &str = "DIRENV_TINY_PREVIOUS_DIR";

/// Any truthy value turns on debug logging.
pub const DEBUG_VAR: &str = "DIRENV_TINY_DEBUG";
