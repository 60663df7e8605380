use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use direnv_tiny_shell::ShellType;

/// Command-line interface for `direnv-tiny`.
#[derive(Debug, Parser)]
#[command(
    name = "direnv-tiny",
    version,
    about = "Load and unload per-directory .envrc variables as you cd"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Prints the shell snippet that runs `export` before every prompt.
    Hook {
        #[arg(value_enum, default_value_t = HookShell::Bash)]
        shell: HookShell,
    },
    /// Prints export/unset statements for the directory change since the last prompt.
    Export,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum HookShell {
    Bash,
    Zsh,
}

impl From<HookShell> for ShellType {
    fn from(shell: HookShell) -> Self {
        match shell {
            HookShell::Bash => ShellType::Bash,
            HookShell::Zsh => ShellType::Zsh,
        }
    }
}

#[must_use]
pub fn usage() -> String {
    Cli::command().render_usage().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hook_defaults_to_bash() {
        let cli = Cli::try_parse_from(["direnv-tiny", "hook"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Hook {
                shell: HookShell::Bash
            })
        ));
    }

    #[test]
    fn hook_accepts_zsh() {
        let cli = Cli::try_parse_from(["direnv-tiny", "hook", "zsh"]).unwrap();
        assert!(matches!(
            cli.command,
            Some(Commands::Hook {
                shell: HookShell::Zsh
            })
        ));
    }

    #[test]
    fn export_takes_no_arguments() {
        let cli = Cli::try_parse_from(["direnv-tiny", "export"]).unwrap();
        assert!(matches!(cli.command, Some(Commands::Export)));
        assert!(Cli::try_parse_from(["direnv-tiny", "export", "extra"]).is_err());
    }

    #[test]
    fn missing_subcommand_parses_to_none() {
        let cli = Cli::try_parse_from(["direnv-tiny"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn unknown_subcommand_is_rejected() {
        assert!(Cli::try_parse_from(["direnv-tiny", "frobnicate"]).is_err());
    }

    #[test]
    fn hook_shell_maps_to_shell_type() {
        assert_eq!(ShellType::from(HookShell::Bash), ShellType::Bash);
        assert_eq!(ShellType::from(HookShell::Zsh), ShellType::Zsh);
    }

    #[test]
    fn usage_names_the_binary() {
        assert!(usage().contains("direnv-tiny"));
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
