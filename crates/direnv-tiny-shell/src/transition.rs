use std::io::Write;
use std::path::Path;

use crate::PREVIOUS_DIR_VAR;
use crate::emit::{ShellCommand, emit};
use crate::envrc::entries;
use crate::error::ExportError;
use crate::gate::{ConfigProbe, config_path, probe};

/// The only state carried between invocations: where the shell was after the
/// last export, and where it is now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionState {
    pub previous: String,
    pub current: String,
}

impl TransitionState {
    #[must_use]
    pub fn new(previous: impl Into<String>, current: impl Into<String>) -> Self {
        Self {
            previous: previous.into(),
            current: current.into(),
        }
    }

    /// Pairs the inherited marker with the process working directory.
    pub fn capture(previous: Option<String>) -> Result<Self, ExportError> {
        let current = std::env::current_dir().map_err(ExportError::CurrentDir)?;
        Ok(Self::new(
            previous.unwrap_or_default(),
            current.to_string_lossy(),
        ))
    }

    #[must_use]
    pub fn is_unchanged(&self) -> bool {
        self.previous == self.current
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    Unchanged,
    Changed { unloaded: usize, loaded: usize },
}

#[derive(Debug, Clone, Copy)]
enum Action {
    Load,
    Unload,
}

/// Writes the unset statements for `previous`, the export statements for
/// `current`, then the new marker. Nothing is written when both directories
/// are the same.
pub fn resolve_and_emit<W: Write>(
    state: &TransitionState,
    out: &mut W,
) -> Result<Transition, ExportError> {
    log::debug!(
        "Exporting environment: current={} previous={}",
        state.current,
        state.previous
    );

    if state.is_unchanged() {
        log::debug!("Still in the same directory, nothing to do");
        return Ok(Transition::Unchanged);
    }

    let unloaded = if state.previous.is_empty() {
        0
    } else {
        apply(Path::new(&state.previous), Action::Unload, out)?
    };
    let loaded = apply(Path::new(&state.current), Action::Load, out)?;

    emit(
        &ShellCommand::Assign {
            key: PREVIOUS_DIR_VAR,
            value: &state.current,
        },
        out,
    )?;

    Ok(Transition::Changed { unloaded, loaded })
}

fn apply<W: Write>(dir: &Path, action: Action, out: &mut W) -> Result<usize, ExportError> {
    let presence = probe(dir);
    if let ConfigProbe::Indeterminate(e) = &presence {
        log::debug!("Could not stat config in {}: {e}", dir.display());
    }
    if !presence.should_open() {
        return Ok(0);
    }

    let path = config_path(dir);
    match action {
        Action::Load => log::debug!("Loading {}", path.display()),
        Action::Unload => log::debug!("Unloading {}", path.display()),
    }

    // Invalid UTF-8 is replaced, not fatal.
    let bytes = std::fs::read(&path).map_err(|e| ExportError::read_config(&path, e))?;
    let content = String::from_utf8_lossy(&bytes);

    let mut count = 0;
    for entry in entries(&content) {
        let command = match action {
            Action::Load => ShellCommand::Assign {
                key: entry.key,
                value: entry.value,
            },
            Action::Unload => ShellCommand::Unset { key: entry.key },
        };
        emit(&command, out)?;
        count += 1;
    }

    Ok(count)
}
