/// Interpolation contract for animated value types.
pub trait Lerp: Sized {
    /// Interpolate from `a` to `b` with normalized factor `t` in `[0, 1]`.
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

/// The four geometric attributes of a bar, in plot-area coordinates (y grows downward).
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BarAttrs {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl BarAttrs {
    /// Copy of `self` with every attribute present in `patch` replaced.
    pub fn with(self, patch: &AttrPatch) -> Self {
        Self {
            x: patch.x.unwrap_or(self.x),
            y: patch.y.unwrap_or(self.y),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
        }
    }
}

impl Lerp for BarAttrs {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Self {
            x: f64::lerp(&a.x, &b.x, t),
            y: f64::lerp(&a.y, &b.y, t),
            width: f64::lerp(&a.width, &b.width, t),
            height: f64::lerp(&a.height, &b.height, t),
        }
    }
}

/// Target values for a subset of [`BarAttrs`]; absent attributes are left untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct AttrPatch {
    /// Target left edge.
    pub x: Option<f64>,
    /// Target top edge.
    pub y: Option<f64>,
    /// Target horizontal extent.
    pub width: Option<f64>,
    /// Target vertical extent.
    pub height: Option<f64>,
}

impl AttrPatch {
    /// Patch touching only the horizontal attributes.
    pub fn horizontal(x: f64, width: f64) -> Self {
        Self {
            x: Some(x),
            width: Some(width),
            ..Self::default()
        }
    }

    /// Patch touching only the vertical attributes.
    pub fn vertical(y: f64, height: f64) -> Self {
        Self {
            y: Some(y),
            height: Some(height),
            ..Self::default()
        }
    }

    /// `true` when the patch sets no attribute.
    pub fn is_empty(&self) -> bool {
        self.x.is_none() && self.y.is_none() && self.width.is_none() && self.height.is_none()
    }

    /// Value at eased progress `t` between `from` and `from.with(self)`.
    pub fn interpolate(&self, from: BarAttrs, t: f64) -> BarAttrs {
        BarAttrs::lerp(&from, &from.with(self), t)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/attrs.rs"]
mod tests;
