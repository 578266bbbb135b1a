//! Centroid-Live Host
//!
//! Headless frame loop: ghosts stand in for tracked floor users, the game
//! draws onto a recording surface, and frames can be dumped as JSON lines.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use centroid_core::config::validate_viewport;
use centroid_core::{CentroidGame, FrameOutcome, RecordingSurface};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::HostConfig;
use crate::draw_log::FileDrawLog;
use crate::ghost::GhostCrowd;

mod config;
mod draw_log;
mod ghost;

#[derive(Debug, Parser)]
#[command(name = "centroid-host")]
#[command(version)]
#[command(about = "Headless centroid-live run with simulated floor users", long_about = None)]
struct Cli {
    /// Path to a JSON host configuration
    config: Option<PathBuf>,

    /// Frames to run, overriding the configuration
    #[arg(short, long)]
    frames: Option<u64>,

    /// JSON-lines file receiving every frame's draw calls
    #[arg(short, long)]
    draw_log: Option<PathBuf>,
}

impl Cli {
    fn host_config(&self) -> anyhow::Result<HostConfig> {
        let mut config = HostConfig::load_or_default(self.config.as_deref())?;
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(path) = &self.draw_log {
            config.draw_log = Some(path.clone());
        }
        Ok(config)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = cli.host_config()?;
    let viewport = validate_viewport(config.viewport())?;

    let mut game = CentroidGame::new(&config.game, viewport).context("Invalid game config")?;
    let mut crowd = GhostCrowd::new(
        config.ghosts,
        viewport,
        config.ghost_speed,
        config.ghost_pull,
        config.game.seed.wrapping_add(1),
    );
    let mut surface = RecordingSurface::new();
    let mut draw_log = config
        .draw_log
        .as_deref()
        .map(FileDrawLog::create)
        .transpose()?;

    tracing::info!(
        "Running {} frames with {} ghosts on {}x{}",
        config.frames,
        config.ghosts,
        config.width,
        config.height
    );

    for frame in 0..config.frames {
        let users = crowd.step(game.target());
        let outcome = game.frame(users, viewport, &mut surface);

        if let FrameOutcome::RoundComplete { target } = outcome {
            tracing::info!("Round {} done at frame {frame}, next target {target:?}", game.rounds_won());
        }
        if let Some(log) = draw_log.as_mut() {
            log.record(frame, outcome, surface.commands())?;
        }
        surface.clear();
    }

    if let Some(log) = draw_log {
        log.finish()?;
    }
    tracing::info!("Finished with {} rounds won", game.rounds_won());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_help_is_not_a_config_path() {
        let err = Cli::try_parse_from(["centroid-host", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_no_arguments_uses_defaults() {
        let cli = Cli::try_parse_from(["centroid-host"]).unwrap();
        assert!(cli.config.is_none());
        assert_eq!(cli.host_config().unwrap(), HostConfig::default());
    }

    #[test]
    fn test_flags_override_config() {
        let cli = Cli::try_parse_from([
            "centroid-host",
            "--frames",
            "25",
            "--draw-log",
            "frames.jsonl",
        ])
        .unwrap();
        let config = cli.host_config().unwrap();
        assert_eq!(config.frames, 25);
        assert_eq!(config.draw_log, Some(PathBuf::from("frames.jsonl")));
        assert_eq!(config.ghosts, HostConfig::default().ghosts);
    }

    #[test]
    fn test_positional_config_path() {
        let cli = Cli::try_parse_from(["centroid-host", "floor.json"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("floor.json")));
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let err = Cli::try_parse_from(["centroid-host", "--bogus"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }
}
