use direnv_tiny_shell::{DEBUG_VAR, PREVIOUS_DIR_VAR};

/// Everything the process reads from its environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Settings {
    pub debug: bool,
    pub previous_dir: Option<String>,
}

impl Settings {
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    #[must_use]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            debug: lookup(DEBUG_VAR).is_some_and(|v| is_truthy(&v)),
            previous_dir: lookup(PREVIOUS_DIR_VAR),
        }
    }
}

fn is_truthy(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
