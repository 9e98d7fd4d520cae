use crossterm::{
    cursor::Show,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;
use std::process::ExitCode;

use clap::Parser;
use log::{debug, error};
use ratatui::{backend::CrosstermBackend, Terminal};

mod app;
mod cli;
mod config;
mod error;
mod forecast;
mod input;
mod prompt;
mod view;
mod weatherapi;

use crate::app::{run_app, App};
use crate::config::Config;
use crate::error::Result;
use crate::weatherapi::WeatherClient;

const FAILURE: &str = "failed to get the weather information:";

/// Runs `session` and then `restore`, whether or not the session failed. The
/// session's error wins over a restore error.
fn restoring<T>(
    session: impl FnOnce() -> Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> Result<T> {
    let res = session();
    let restored = restore();
    let value = res?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}

fn run_tui(client: &WeatherClient) -> Result<()> {
    enable_raw_mode()?;

    // the terminal is restored before anything is logged, even if setup fails
    restoring(
        || {
            let mut stdout = io::stdout();
            execute!(stdout, EnterAlternateScreen)?;
            let backend = CrosstermBackend::new(stdout);
            let mut terminal = Terminal::new(backend)?;

            run_app(&mut terminal, App::new(), |location| {
                client.fetch_forecast(location)
            })
        },
        restore_terminal,
    )
}

fn run(args: cli::Args) -> Result<()> {
    let config = Config::load()?;
    let client = WeatherClient::new(&config)?;

    if args.plain {
        prompt::run(io::stdin().lock(), io::stdout(), |location| {
            client.fetch_forecast(location)
        })
    } else {
        run_tui(&client)
    }
}

fn main() -> ExitCode {
    let env = env_logger::Env::default().default_filter_or("warn");
    env_logger::init_from_env(env);

    let args = cli::Args::parse();

    match run(args) {
        Ok(()) => {
            debug!("exiting");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{FAILURE} {err}");
            ExitCode::FAILURE
        }
    }
}
