#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use clap::Parser;
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::{error, info};

use propval::client::{HttpValuationClient, SystemOpener};
use propval::config::{Cli, Config};
use propval::telemetry;
use propval::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), AppError> {
    let config = Config::from_cli(Cli::parse())?;
    telemetry::init(&config.log_level, &config.log_file)?;
    info!(api_base = %config.api_base, "starting");

    let client = HttpValuationClient::new(config.api_base.clone(), config.timeout)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(client, SystemOpener, config.api_base, config.toast_duration);
    let result = app.run(&mut terminal).await;

    let restore_result = restore_terminal();
    if let Err(e) = &result {
        error!(error = %e, "exiting with error");
    }
    result?;
    restore_result.map_err(Into::into)
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
