use crate::foundation::error::{BarmorphError, BarmorphResult};

/// Ordinal band scale over the positions `0..count`.
///
/// Bands are evenly spaced across a rounded range and the whole block is centred in it. Inner
/// padding is the gap between bands and outer padding the gap at both ends, each as a fraction
/// of the step.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BandScale {
    count: usize,
    padding_inner: f64,
    padding_outer: f64,
    start: f64,
    step: f64,
    bandwidth: f64,
}

impl BandScale {
    /// Band scale for `count` bands over `[range.0, range.1]` with equal inner and outer
    /// `padding` in `[0, 1)`.
    pub fn new(count: usize, range: (f64, f64), padding: f64) -> BarmorphResult<Self> {
        Self::with_padding(count, range, padding, padding)
    }

    /// Band scale with separate inner padding (in `[0, 1)`) and outer padding (`>= 0`).
    pub fn with_padding(
        count: usize,
        range: (f64, f64),
        padding_inner: f64,
        padding_outer: f64,
    ) -> BarmorphResult<Self> {
        if !(0.0..1.0).contains(&padding_inner) {
            return Err(BarmorphError::configuration(format!(
                "band padding must be in [0, 1), got {padding_inner}"
            )));
        }
        if !(padding_outer.is_finite() && padding_outer >= 0.0) {
            return Err(BarmorphError::configuration(format!(
                "outer band padding must be >= 0, got {padding_outer}"
            )));
        }
        let mut scale = Self {
            count: 0,
            padding_inner,
            padding_outer,
            start: 0.0,
            step: 0.0,
            bandwidth: 0.0,
        };
        scale.rescale(count, range)?;
        Ok(scale)
    }

    /// Recompute bands for a new `count` and `range`, keeping the padding.
    pub fn rescale(&mut self, count: usize, range: (f64, f64)) -> BarmorphResult<()> {
        if count == 0 {
            return Err(BarmorphError::configuration("band scale needs at least one band"));
        }
        let (r0, r1) = range;
        if !(r0.is_finite() && r1.is_finite()) || r1 < r0 {
            return Err(BarmorphError::configuration(format!(
                "band range must be finite and ascending, got [{r0}, {r1}]"
            )));
        }

        let n = count as f64;
        let (inner, outer, align) = (self.padding_inner, self.padding_outer, 0.5);
        let step = ((r1 - r0) / (n - inner + 2.0 * outer).max(1.0)).floor();
        self.count = count;
        self.start = (r0 + (r1 - r0 - step * (n - inner)) * align).round();
        self.bandwidth = (step * (1.0 - inner)).round();
        self.step = step;
        Ok(())
    }

    /// Number of bands.
    pub fn count(&self) -> usize {
        self.count
    }

    /// Left edge of band `i`.
    pub fn position(&self, i: usize) -> f64 {
        debug_assert!(i < self.count, "band {i} out of 0..{}", self.count);
        self.start + self.step * i as f64
    }

    /// Centre of band `i`.
    pub fn center(&self, i: usize) -> f64 {
        self.position(i) + self.bandwidth / 2.0
    }

    /// Width of every band.
    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

/// Continuous linear map from a domain onto a range.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Map `domain` onto `range`; either may be descending.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Current domain.
    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    /// Current range.
    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Same range, new domain.
    pub fn with_domain(self, domain: (f64, f64)) -> Self {
        Self { domain, ..self }
    }

    /// Same domain, new range.
    pub fn with_range(self, range: (f64, f64)) -> Self {
        Self { range, ..self }
    }

    /// Map `v` from domain to range. A zero-width domain maps everything to the range midpoint.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        let t = if span == 0.0 { 0.5 } else { (v - d0) / span };
        r0 + (r1 - r0) * t
    }

    /// Roughly `count` evenly spaced, human-friendly values covering the domain.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let (lo, hi) = if self.domain.0 <= self.domain.1 {
            self.domain
        } else {
            (self.domain.1, self.domain.0)
        };
        if !(lo.is_finite() && hi.is_finite()) || count == 0 {
            return Vec::new();
        }
        if lo == hi {
            return vec![lo];
        }

        let step = tick_step(lo, hi, count);
        let inv = if step < 1.0 { (1.0 / step).round() } else { 0.0 };
        let at = |i: f64| if inv > 0.0 { i / inv } else { i * step };
        let (first, last) = if inv > 0.0 {
            ((lo * inv).ceil(), (hi * inv).floor())
        } else {
            ((lo / step).ceil(), (hi / step).floor())
        };

        let mut out = Vec::new();
        let mut i = first;
        while i <= last {
            out.push(at(i));
            i += 1.0;
        }
        out
    }
}

fn tick_step(lo: f64, hi: f64, count: usize) -> f64 {
    let rough = (hi - lo) / count as f64;
    let power = 10f64.powf(rough.log10().floor());
    let error = rough / power;
    let factor = if error >= 50f64.sqrt() {
        10.0
    } else if error >= 10f64.sqrt() {
        5.0
    } else if error >= 2f64.sqrt() {
        2.0
    } else {
        1.0
    };
    factor * power
}

#[cfg(test)]
#[path = "../../tests/unit/layout/scale.rs"]
mod tests;
