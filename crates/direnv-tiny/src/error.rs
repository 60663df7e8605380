use direnv_tiny_shell::ExportError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("Failed to export environment: {0}")]
    Export(#[from] ExportError),

    #[error("Failed to write to stdout: {0}")]
    Output(#[from] std::io::Error),
}

impl AppError {
    pub fn usage(details: impl Into<String>) -> Self {
        Self::Usage(details.into())
    }

    /// Every failure maps to the same exit status.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Usage(_) | Self::Export(_) | Self::Output(_) => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::AppError;
    use direnv_tiny_shell::ExportError;

    #[test]
    fn usage_display_is_the_message() {
        let error = AppError::usage("unrecognized subcommand 'frob'");
        assert_eq!(error.to_string(), "unrecognized subcommand 'frob'");
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn export_error_is_wrapped_with_context() {
        let error = AppError::from(ExportError::CurrentDir(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "gone",
        )));

        assert_eq!(
            error.to_string(),
            "Failed to export environment: Failed to get current directory: gone"
        );
        assert_eq!(error.exit_code(), 1);
    }

    #[test]
    fn io_error_maps_to_output_variant() {
        let error = AppError::from(std::io::Error::other("broken pipe"));
        assert!(matches!(error, AppError::Output(_)));
    }
}
