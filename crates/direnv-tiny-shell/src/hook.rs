#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ShellType {
    #[default]
    Bash,
    Zsh,
}

const BASH_HOOK: &str = r#"__direnv_tiny_hook() {
  local previous_exit_status=$?
  eval "$(direnv-tiny export)"
  return $previous_exit_status
}

if ! [[ "${PROMPT_COMMAND:-}" =~ __direnv_tiny_hook ]]; then
  PROMPT_COMMAND="__direnv_tiny_hook;${PROMPT_COMMAND:-}"
fi"#;

const ZSH_HOOK: &str = r#"_direnv_tiny_hook() {
  eval "$(direnv-tiny export)"
}

typeset -ag precmd_functions
if (( ! ${precmd_functions[(I)_direnv_tiny_hook]} )); then
  precmd_functions=(_direnv_tiny_hook $precmd_functions)
fi"#;

impl ShellType {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Bash => "bash",
            Self::Zsh => "zsh",
        }
    }

    /// Snippet the user evals from their rc file. It runs `direnv-tiny export`
    /// before every prompt.
    #[must_use]
    pub fn hook_script(self) -> &'static str {
        match self {
            Self::Bash => BASH_HOOK,
            Self::Zsh => ZSH_HOOK,
        }
    }
}
