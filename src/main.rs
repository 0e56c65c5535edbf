mod app;
mod audio;
mod config;
mod food;
mod geometry;
mod input;
mod render;
mod session;
mod snake;

use std::fs::File;
use std::io::{self, Stdout};

use anyhow::{Context as _, Result};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::Context;
use crate::config::GameConfig;
use crate::input::TerminalInput;

const LOG_FILE: &str = "snake.log";

fn main() -> Result<()> {
    // The terminal belongs to the game, so logs go to a file
    WriteLogger::init(
        LevelFilter::Info,
        Config::default(),
        File::create(LOG_FILE).context("Failed to create log file")?,
    )
    .context("Failed to initialize logger")?;

    info!("Starting snake");

    let config = GameConfig::default();
    let audio = open_audio()?;

    // Setup terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, SetTitle("Snake Game"))
        .context("Failed to enter alternate screen")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout)).context("Failed to create terminal")?;
    terminal.hide_cursor().context("Failed to hide cursor")?;

    let mut ctx = Context::new(terminal, TerminalInput, audio, config, StdRng::from_entropy());
    let result = app::run(&mut ctx);

    // Cleanup terminal even when the game failed
    restore_terminal(&mut ctx.terminal)?;

    result.context("Game loop failed")
}

#[cfg(feature = "audio")]
fn open_audio() -> Result<audio::RodioSink> {
    let sink = audio::RodioSink::new().context("Failed to open audio output")?;
    info!("Audio output opened");
    Ok(sink)
}

#[cfg(not(feature = "audio"))]
fn open_audio() -> Result<audio::SilentSink> {
    info!("Built without audio, sounds are muted");
    Ok(audio::SilentSink)
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}
