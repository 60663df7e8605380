mod cli;
mod error;
mod logging;
mod settings;

use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use direnv_tiny_shell::{ShellType, Transition, TransitionState, resolve_and_emit};

use crate::cli::{Cli, Commands};
use crate::error::AppError;
use crate::settings::Settings;

fn main() -> ExitCode {
    let settings = Settings::from_env();
    logging::init_logging(settings.debug);

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            let rendered = e.to_string();
            let reason = rendered.lines().next().unwrap_or_default();
            return fail(&AppError::usage(
                reason.strip_prefix("error: ").unwrap_or(reason),
            ));
        }
    };

    match run(cli, &settings) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => fail(&e),
    }
}

fn run(cli: Cli, settings: &Settings) -> Result<(), AppError> {
    match cli.command {
        Some(Commands::Hook { shell }) => {
            let shell: ShellType = shell.into();
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", shell.hook_script())?;
            Ok(())
        }
        Some(Commands::Export) => export(settings),
        None => Err(AppError::usage("missing subcommand")),
    }
}

fn export(settings: &Settings) -> Result<(), AppError> {
    let state = TransitionState::capture(settings.previous_dir.clone())?;

    // Held back until the whole transition succeeded so the shell never
    // evaluates a half-applied environment.
    let mut buffer = Vec::new();
    let transition = resolve_and_emit(&state, &mut buffer)?;

    if let Transition::Changed { unloaded, loaded } = transition {
        log::debug!("Unloaded {unloaded} and loaded {loaded} variables");
    }

    let mut stdout = io::stdout().lock();
    stdout.write_all(&buffer)?;
    stdout.flush()?;
    Ok(())
}

fn fail(error: &AppError) -> ExitCode {
    if let AppError::Usage(_) = error {
        log::error!("Invalid usage: {error}");
        let _ = writeln!(io::stdout(), "{}", cli::usage());
    } else {
        log::error!("{error}");
    }
    ExitCode::from(error.exit_code())
}
