use std::io::Read;

use crate::{
    animation::ease::Ease,
    foundation::core::{Margin, Millis, Size},
    foundation::error::{BarmorphError, BarmorphResult},
};

/// Timing of the entry animation, the arrangement transitions, and the idle auto-toggle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Start offset added per data position (left-to-right cascade).
    pub stagger_step_ms: u64,
    /// Duration of each of the two transition phases.
    pub phase_duration_ms: u64,
    /// Duration of the entry animation that raises bars from the baseline.
    pub enter_duration_ms: u64,
    /// Delay after mount before the one-shot auto-toggle to grouped.
    pub idle_toggle_ms: u64,
    /// Easing used by every step.
    pub ease: Ease,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            stagger_step_ms: 10,
            phase_duration_ms: 500,
            enter_duration_ms: 250,
            idle_toggle_ms: 2000,
            ease: Ease::Cubic,
        }
    }
}

impl TimingConfig {
    /// Stagger step.
    pub fn stagger_step(&self) -> Millis {
        Millis(self.stagger_step_ms)
    }

    /// Phase duration.
    pub fn phase_duration(&self) -> Millis {
        Millis(self.phase_duration_ms)
    }

    /// Entry duration.
    pub fn enter_duration(&self) -> Millis {
        Millis(self.enter_duration_ms)
    }

    /// Idle auto-toggle delay.
    pub fn idle_toggle(&self) -> Millis {
        Millis(self.idle_toggle_ms)
    }
}

/// Everything needed to mount the stacked/grouped demo.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Number of series (`n`).
    pub series: usize,
    /// Values per series (`m`).
    pub points: usize,
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
    /// Space between the outer bounds and the plot area.
    pub margin: Margin,
    /// Inner and outer band padding, as a fraction of the band step.
    pub band_padding: f64,
    /// Seed for the synthetic data.
    pub seed: u64,
    /// Animation timing.
    pub timing: TimingConfig,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            series: 4,
            points: 58,
            width: 600.0,
            height: 300.0,
            margin: Margin::default(),
            band_padding: 0.08,
            seed: 1,
            timing: TimingConfig::default(),
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(s: &str) -> BarmorphResult<Self> {
        let cfg: Self = serde_json::from_str(s)
            .map_err(|e| BarmorphError::serde(format!("parse chart config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Parse and validate a JSON config from a reader.
    pub fn from_reader(r: impl Read) -> BarmorphResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| BarmorphError::serde(format!("parse chart config: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Outer size.
    pub fn size(&self) -> BarmorphResult<Size> {
        Size::new(self.width, self.height)
    }

    /// Plot area left after margins.
    pub fn plot_size(&self) -> BarmorphResult<Size> {
        self.size()?.inset(self.margin)
    }

    /// Check counts, geometry, and padding.
    pub fn validate(&self) -> BarmorphResult<()> {
        if self.series == 0 {
            return Err(BarmorphError::configuration("series must be > 0"));
        }
        if self.points == 0 {
            return Err(BarmorphError::configuration("points must be > 0"));
        }
        if !(0.0..1.0).contains(&self.band_padding) {
            return Err(BarmorphError::configuration(format!(
                "band_padding must be in [0, 1), got {}",
                self.band_padding
            )));
        }
        self.plot_size()?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
