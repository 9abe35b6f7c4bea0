use std::path::PathBuf;

use clap::{ArgAction, Parser};
use thiserror::Error;

use crate::constants::*;

#[derive(Debug, Parser)]
#[command(name = "slidetimer")]
#[command(version, about = "Full-screen PDF slideshow with a per-slide countdown")]
pub struct Cli {
    /// PDF file to present
    #[arg(value_name = "PDF")]
    pub pdf: PathBuf,

    /// Seconds allotted to each slide
    #[arg(value_name = "X", allow_negative_numbers = true)]
    pub duration: f32,

    /// Remaining seconds at which the countdown turns into a warning
    #[arg(value_name = "Y", allow_negative_numbers = true)]
    pub warning: f32,

    /// Remaining seconds at which the countdown becomes critical
    #[arg(value_name = "Z", allow_negative_numbers = true)]
    pub critical: f32,

    /// Rasterization resolution for PDF pages
    #[arg(long, default_value_t = DEFAULT_DPI, value_parser = parse_dpi)]
    pub dpi: f32,

    /// Initial window width in pixels
    #[arg(long, default_value_t = INITIAL_WIDTH, value_parser = clap::value_parser!(i32).range(1..))]
    pub width: i32,

    /// Initial window height in pixels
    #[arg(long, default_value_t = INITIAL_HEIGHT, value_parser = clap::value_parser!(i32).range(1..))]
    pub height: i32,

    /// Start in fullscreen mode
    #[arg(long)]
    pub fullscreen: bool,

    /// TrueType font used for the countdown overlay
    #[arg(long, value_name = "TTF")]
    pub font: Option<PathBuf>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    pub fn timer_config(&self) -> Result<TimerConfig, ConfigError> {
        TimerConfig::new(self.duration, self.warning, self.critical)
    }
}

fn parse_dpi(value: &str) -> Result<f32, String> {
    let dpi: f32 = value.parse().map_err(|e| format!("{e}"))?;
    if dpi.is_finite() && dpi > 0.0 {
        Ok(dpi)
    } else {
        Err(format!("{dpi} is not a positive resolution"))
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("ensure that 0 < Z < Y < X (got X={duration}, Y={warning}, Z={critical})")]
    ThresholdOrder {
        duration: f32,
        warning: f32,
        critical: f32,
    },

    #[error("slide duration must be a finite number of seconds (got X={0})")]
    InfiniteDuration(f32),
}

/// Per-slide duration and urgency thresholds, in seconds. Always `0 < critical < warning < duration`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimerConfig {
    duration: f32,
    warning: f32,
    critical: f32,
}

impl TimerConfig {
    pub fn new(duration: f32, warning: f32, critical: f32) -> Result<Self, ConfigError> {
        if !duration.is_finite() && duration > 0.0 {
            return Err(ConfigError::InfiniteDuration(duration));
        }
        // NaN fails every comparison and lands in the error branch
        if 0.0 < critical && critical < warning && warning < duration {
            Ok(Self { duration, warning, critical })
        } else {
            Err(ConfigError::ThresholdOrder { duration, warning, critical })
        }
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    pub fn warning(&self) -> f32 {
        self.warning
    }

    pub fn critical(&self) -> f32 {
        self.critical
    }
}
