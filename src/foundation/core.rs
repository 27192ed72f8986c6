use crate::foundation::error::{BarmorphError, BarmorphResult};

pub use kurbo::{Affine, Vec2};

/// Host clock reading in whole milliseconds.
///
/// The core never reads a wall clock; every entry point that needs time takes `now` explicitly.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    serde::Serialize,
    serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    /// Zero time.
    pub const ZERO: Self = Self(0);

    /// Add `delta` using saturating arithmetic.
    pub fn saturating_add(self, delta: Millis) -> Self {
        Self(self.0.saturating_add(delta.0))
    }

    /// Time elapsed since `earlier` (zero when `earlier` is in the future).
    pub fn since(self, earlier: Millis) -> Millis {
        Self(self.0.saturating_sub(earlier.0))
    }

    /// `self * factor` using saturating arithmetic.
    pub fn times(self, factor: u64) -> Self {
        Self(self.0.saturating_mul(factor))
    }

    /// Convert to floating-point milliseconds.
    pub fn as_f64(self) -> f64 {
        self.0 as f64
    }
}

/// Outer size of the visualization, in anchor coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Size {
    /// Width in anchor units.
    pub width: f64,
    /// Height in anchor units.
    pub height: f64,
}

impl Size {
    /// Create a validated size; both extents must be finite and `> 0`.
    pub fn new(width: f64, height: f64) -> BarmorphResult<Self> {
        if !(width.is_finite() && width > 0.0) || !(height.is_finite() && height > 0.0) {
            return Err(BarmorphError::configuration(format!(
                "size must be finite and positive, got {width}x{height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// Size left after removing `margin` from each edge.
    pub fn inset(self, margin: Margin) -> BarmorphResult<Self> {
        Self::new(
            self.width - margin.left - margin.right,
            self.height - margin.top - margin.bottom,
        )
        .map_err(|_| {
            BarmorphError::configuration(format!(
                "margins leave no plot area inside {}x{}",
                self.width, self.height
            ))
        })
    }
}

/// Margin between the anchor bounds and the plot area.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margin {
    /// Top edge.
    pub top: f64,
    /// Right edge.
    pub right: f64,
    /// Bottom edge.
    pub bottom: f64,
    /// Left edge.
    pub left: f64,
}

impl Default for Margin {
    fn default() -> Self {
        Self {
            top: 40.0,
            right: 10.0,
            bottom: 20.0,
            left: 10.0,
        }
    }
}

impl Margin {
    /// Translation that moves the origin to the top-left corner of the plot area.
    pub fn origin(self) -> Affine {
        Affine::translate(Vec2::new(self.left, self.top))
    }
}

/// Opaque straight-alpha RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Rgb8 {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb8 {
    /// Build a color from a packed `0xRRGGBB` value.
    pub const fn from_hex(rgb: u32) -> Self {
        Self {
            r: ((rgb >> 16) & 0xff) as u8,
            g: ((rgb >> 8) & 0xff) as u8,
            b: (rgb & 0xff) as u8,
        }
    }

    /// `#rrggbb` form used by SVG output.
    pub fn to_css(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Eight-color categorical "Accent" scheme.
pub const ACCENT: [Rgb8; 8] = [
    Rgb8::from_hex(0x7fc97f),
    Rgb8::from_hex(0xbeaed4),
    Rgb8::from_hex(0xfdc086),
    Rgb8::from_hex(0xffff99),
    Rgb8::from_hex(0x386cb0),
    Rgb8::from_hex(0xf0027f),
    Rgb8::from_hex(0xbf5b17),
    Rgb8::from_hex(0x666666),
];

/// Ordinal color for series `k`, cycling through [`ACCENT`].
pub fn accent(k: usize) -> Rgb8 {
    ACCENT[k % ACCENT.len()]
}

/// Nine-step sequential "Blues" scheme, lightest first.
pub const BLUES: [Rgb8; 9] = [
    Rgb8::from_hex(0xf7fbff),
    Rgb8::from_hex(0xdeebf7),
    Rgb8::from_hex(0xc6dbef),
    Rgb8::from_hex(0x9ecae1),
    Rgb8::from_hex(0x6baed6),
    Rgb8::from_hex(0x4292c6),
    Rgb8::from_hex(0x2171b5),
    Rgb8::from_hex(0x08519c),
    Rgb8::from_hex(0x08306b),
];

/// Sequential blue for `t` in `[0, 1]`, piecewise linear through [`BLUES`]. `t` is clamped.
pub fn blues(t: f64) -> Rgb8 {
    let pos = t.clamp(0.0, 1.0) * (BLUES.len() - 1) as f64;
    let i = (pos.floor() as usize).min(BLUES.len() - 2);
    let f = pos - i as f64;
    let (a, b) = (BLUES[i], BLUES[i + 1]);
    let mix = |a: u8, b: u8| (f64::from(a) + (f64::from(b) - f64::from(a)) * f).round() as u8;
    Rgb8 {
        r: mix(a.r, b.r),
        g: mix(a.g, b.g),
        b: mix(a.b, b.b),
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
