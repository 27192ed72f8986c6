use crate::layout::scale::{BandScale, LinearScale};

/// One labelled tick along an axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisTick {
    /// Offset along the axis.
    pub offset: f64,
    /// Text drawn next to the tick.
    pub label: String,
}

/// A horizontal axis drawn below its origin: a domain line plus ticks and labels.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AxisGuide {
    /// Start and end of the domain line.
    pub extent: (f64, f64),
    /// Ticks in axis order.
    pub ticks: Vec<AxisTick>,
    /// Tick line length (also the outer tick length at both domain ends).
    pub tick_size: f64,
    /// Gap between the tick line and its label.
    pub tick_padding: f64,
}

impl AxisGuide {
    /// Bottom axis for a band scale: one tick per band at its centre, labelled by index.
    pub fn bottom_band(
        scale: &BandScale,
        range_end: f64,
        tick_size: f64,
        tick_padding: f64,
    ) -> Self {
        let ticks = (0..scale.count())
            .map(|i| AxisTick {
                offset: scale.center(i),
                label: i.to_string(),
            })
            .collect();
        Self {
            extent: (0.0, range_end),
            ticks,
            tick_size,
            tick_padding,
        }
    }

    /// Bottom axis for a linear scale with about `count` nice ticks and default tick styling.
    pub fn bottom_linear(scale: &LinearScale, count: usize) -> Self {
        let ticks = scale
            .ticks(count)
            .into_iter()
            .map(|v| AxisTick {
                offset: scale.apply(v),
                label: format!("{v}"),
            })
            .collect();
        Self {
            extent: scale.range(),
            ticks,
            tick_size: 6.0,
            tick_padding: 3.0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/axis.rs"]
mod tests;
