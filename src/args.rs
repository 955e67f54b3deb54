//! Command-line interface.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::demo::face::FaceVariant;

#[derive(Debug, Parser)]
#[command(name = "rerender-lab", version, about = "Memoization and re-render demos in the terminal")]
pub struct Cli {
    /// Config file (default: <config dir>/rerender-lab/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Counter/toggle demo: the child recomputes on every parent change
    Counter,
    /// Satisfaction face driven by a slider
    Face {
        #[arg(long, value_enum, default_value_t = FaceVariant::Skip)]
        variant: FaceVariant,
        /// Starting slider level (overrides slider.initial_level)
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,
    },
    /// Replay scripted input without a terminal and print the render log
    Simulate {
        #[command(subcommand)]
        demo: SimulateDemo,
        #[arg(long, value_enum, global = true, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

#[derive(Debug, Subcommand)]
pub enum SimulateDemo {
    /// Press buttons in order
    Counter {
        /// Comma-separated: inc|increment, toggle
        #[arg(long, value_delimiter = ',')]
        actions: Vec<String>,
    },
    /// Move the slider through the given levels
    Face {
        #[arg(long, value_enum, default_value_t = FaceVariant::Skip)]
        variant: FaceVariant,
        /// Starting slider level (overrides slider.initial_level)
        #[arg(long, allow_negative_numbers = true)]
        level: Option<i64>,
        /// Comma-separated slider values, clamped to 0..=500
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        levels: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn face_defaults_to_skip() {
        let cli = Cli::parse_from(["rerender-lab", "face"]);
        match cli.command {
            Command::Face { variant, level } => {
                assert_eq!(variant, FaceVariant::Skip);
                assert_eq!(level, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn simulate_face_splits_levels() {
        let cli = Cli::parse_from([
            "rerender-lab",
            "simulate",
            "--format",
            "json",
            "face",
            "--variant",
            "no-skip",
            "--levels",
            "250,260,-4",
        ]);
        let Command::Simulate { demo, format } = cli.command else {
            panic!("expected simulate");
        };
        assert_eq!(format, OutputFormat::Json);
        match demo {
            SimulateDemo::Face {
                variant, levels, ..
            } => {
                assert_eq!(variant, FaceVariant::NoSkip);
                assert_eq!(levels, vec!["250", "260", "-4"]);
            }
            other => panic!("unexpected demo: {other:?}"),
        }
    }

    #[test]
    fn global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["rerender-lab", "counter", "--config", "/tmp/x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/x.toml")));
    }
}
