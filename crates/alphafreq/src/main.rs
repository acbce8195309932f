//! AlphaFrequency — letter frequency of a text file as extruded 3D glyphs.
//!
//! Counts the letters of the input file, then opens a Bevy window with the
//! `AlphaFrequencyPlugin` scene and interactive camera controls. The window
//! blocks until closed.

mod cli;
mod config;
mod input;

use std::path::Path;
use std::process::ExitCode;

use alphafreq_bevy::AlphaFrequencyPlugin;
use alphafreq_bevy::resources::{GlyphAppearance, LetterFrequencies};
use alphafreq_core::{AlphaFreqError, GlyphLayout, count_file};
use bevy::prelude::*;

use cli::{Command, USAGE};
use config::AppConfig;
use input::ViewerInputPlugin;

fn main() -> ExitCode {
    let command = match cli::parse_args(std::env::args_os().skip(1)) {
        Ok(command) => command,
        Err(e) => {
            eprintln!("alphafreq: {e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };
    let input = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Run(input) => input,
    };

    let config = AppConfig::new(input);

    // Counting happens before any window or GPU setup so bad input never
    // reaches the renderer.
    let layout = match load_layout(&config.input) {
        Ok(layout) => layout,
        Err(e) => {
            eprintln!("alphafreq: {e}");
            return ExitCode::FAILURE;
        }
    };

    run_viewer(config, layout)
}

/// Count the letters of `path` and lay out the glyph grid.
fn load_layout(path: &Path) -> Result<GlyphLayout, AlphaFreqError> {
    let table = count_file(path)?;
    GlyphLayout::from_table(&table)
}

/// Run the interactive viewer until the window closes.
fn run_viewer(config: AppConfig, layout: GlyphLayout) -> ExitCode {
    let exit = App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(config.window()),
            ..default()
        }))
        .add_plugins((AlphaFrequencyPlugin, ViewerInputPlugin))
        .insert_resource(config.view)
        .insert_resource(GlyphAppearance(config.glyph))
        .insert_resource(LetterFrequencies::new(layout))
        .add_systems(Startup, log_startup)
        .insert_resource(config)
        .run();

    match exit {
        AppExit::Success => ExitCode::SUCCESS,
        AppExit::Error(code) => ExitCode::from(code.get()),
    }
}

/// Startup system: summarise what is being shown.
fn log_startup(config: Res<AppConfig>, frequencies: Res<LetterFrequencies>) {
    let layout = &frequencies.layout;
    tracing::info!(
        "AlphaFrequency: {} ({} of 26 letters present, max count {})",
        config.input.display(),
        layout.visible_count(),
        layout.max_count()
    );
    tracing::info!(
        "Controls: left drag orbit, middle drag pan, right drag/scroll dolly, r reset, q quit"
    );
}
