use anyhow::{Context, Result, bail};
use clap::Parser;
use clipbtn::app::AppState;
use clipbtn::cli::Cli;
use clipbtn::clipboard::{CommandFallback, CopyOutcome};
use clipbtn::config::Config;
use clipbtn::control::ClipboardCopyControl;
use clipbtn::ui;
use clipbtn::ui::theme::Theme;
use std::io::{self, Read};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never corrupt the alternate screen.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let config = Config::load()?;
    let content = read_content(cli.content, cli.copy_and_exit)?;
    let delay = Duration::from_millis(cli.delay_ms.unwrap_or(config.revert_delay_ms));

    let mut control = ClipboardCopyControl::new(content)
        .with_size(cli.size.into())
        .with_revert_delay(delay);
    if let Some(command) = &config.fallback_command {
        control = control.with_fallback(CommandFallback::new(command));
    }

    if cli.copy_and_exit {
        return handle_copy_once(&mut control);
    }

    let theme = Theme::from_config(&config);
    let state = AppState::new(control, theme);

    ui::run_tui(state)
}

fn handle_copy_once(control: &mut ClipboardCopyControl) -> Result<()> {
    match control.activate() {
        CopyOutcome::Success => {
            println!("✓ Copied to clipboard");
            Ok(())
        }
        CopyOutcome::Failure => bail!("failed to copy to clipboard"),
    }
}

fn read_content(arg: Option<String>, copy_and_exit: bool) -> Result<String> {
    match arg {
        Some(s) if s != "-" => Ok(s),
        // The TUI needs stdin for key events, so piped payloads are only
        // accepted in one-shot mode.
        _ if copy_and_exit => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("Failed to read payload from stdin")?;
            Ok(buffer)
        }
        _ => bail!("reading the payload from stdin requires --copy-and-exit"),
    }
}
