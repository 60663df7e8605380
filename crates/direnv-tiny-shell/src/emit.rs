use std::fmt;
use std::io::{self, Write};

/// One statement for the calling shell to evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellCommand<'a> {
    Assign { key: &'a str, value: &'a str },
    Unset { key: &'a str },
}

impl ShellCommand<'_> {
    #[must_use]
    pub fn key(&self) -> &str {
        match self {
            Self::Assign { key, .. } | Self::Unset { key } => *key,
        }
    }
}

// Values are emitted verbatim; an embedded `"` is not escaped.
impl fmt::Display for ShellCommand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Assign { key, value } => write!(f, "export {key}=\"{value}\""),
            Self::Unset { key } => write!(f, "unset {key}"),
        }
    }
}

/// Writes `command` as a single line.
pub fn emit<W: Write>(command: &ShellCommand<'_>, out: &mut W) -> io::Result<()> {
    match command {
        ShellCommand::Assign { key, value } => log::debug!("Exporting {key}={value}"),
        ShellCommand::Unset { key } => log::debug!("Unsetting {key}"),
    }
    writeln!(out, "{command}")
}
