use std::{fmt, str::FromStr};

use crate::{
    animation::attrs::{AttrPatch, BarAttrs},
    data::stack::{Interval, Stacked},
    foundation::core::Size,
    foundation::error::{BarmorphError, BarmorphResult},
    layout::scale::{BandScale, LinearScale},
};

/// The two layouts of the same dataset.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Arrangement {
    /// One column per position; series stacked on top of each other.
    Stacked,
    /// Series side by side within each position's band, each from the baseline.
    Grouped,
}

impl fmt::Display for Arrangement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Stacked => "stacked",
            Self::Grouped => "grouped",
        })
    }
}

impl FromStr for Arrangement {
    type Err = BarmorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "stacked" => Ok(Self::Stacked),
            "grouped" => Ok(Self::Grouped),
            other => Err(BarmorphError::configuration(format!(
                "unknown arrangement '{other}' (expected 'stacked' or 'grouped')"
            ))),
        }
    }
}

/// Maps (series, position, interval) to bar attributes for either arrangement.
#[derive(Clone, Debug)]
pub struct BarLayout {
    x: BandScale,
    y: LinearScale,
    series_count: usize,
    single_max: f64,
    cumulative_max: f64,
    plot: Size,
}

impl BarLayout {
    /// Build the scales for `stacked` inside a plot area of size `plot`.
    pub fn new(stacked: &Stacked, plot: Size, band_padding: f64) -> BarmorphResult<Self> {
        let x = BandScale::new(stacked.points(), (0.0, plot.width), band_padding)?;
        let y = LinearScale::new((0.0, stacked.cumulative_max), (plot.height, 0.0));
        Ok(Self {
            x,
            y,
            series_count: stacked.series_count(),
            single_max: stacked.single_max,
            cumulative_max: stacked.cumulative_max,
            plot,
        })
    }

    /// Horizontal band scale shared by both arrangements.
    pub fn x_scale(&self) -> &BandScale {
        &self.x
    }

    /// Vertical scale for `arrangement`: stacked uses the cumulative maximum, grouped the
    /// single-value maximum.
    pub fn y_scale(&self, arrangement: Arrangement) -> LinearScale {
        let top = match arrangement {
            Arrangement::Stacked => self.cumulative_max,
            Arrangement::Grouped => self.single_max,
        };
        self.y.with_domain((0.0, top))
    }

    /// Attributes a bar is created with: stacked column, zero height on the baseline.
    pub fn entry(&self, position: usize) -> BarAttrs {
        BarAttrs {
            x: self.x.position(position),
            y: self.plot.height,
            width: self.x.bandwidth(),
            height: 0.0,
        }
    }

    /// Horizontal attributes of series `k` at `position`.
    pub fn columns(&self, arrangement: Arrangement, k: usize, position: usize) -> AttrPatch {
        let band = self.x.bandwidth();
        match arrangement {
            Arrangement::Stacked => AttrPatch::horizontal(self.x.position(position), band),
            Arrangement::Grouped => {
                let slot = band / self.series_count as f64;
                AttrPatch::horizontal(self.x.position(position) + slot * k as f64, slot)
            }
        }
    }

    /// Vertical attributes of an interval.
    pub fn extent(&self, arrangement: Arrangement, interval: Interval) -> AttrPatch {
        let y = self.y_scale(arrangement);
        match arrangement {
            Arrangement::Stacked => {
                let top = y.apply(interval.high);
                AttrPatch::vertical(top, y.apply(interval.low) - top)
            }
            Arrangement::Grouped => {
                let top = y.apply(interval.value());
                AttrPatch::vertical(top, y.apply(0.0) - top)
            }
        }
    }

    /// Complete attributes of series `k` at `position` once settled in `arrangement`.
    pub fn target(
        &self,
        arrangement: Arrangement,
        k: usize,
        position: usize,
        interval: Interval,
    ) -> BarAttrs {
        self.entry(position)
            .with(&self.columns(arrangement, k, position))
            .with(&self.extent(arrangement, interval))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/arrangement.rs"]
mod tests;
