use crate::{
    foundation::error::{BarmorphError, BarmorphResult},
    foundation::rng::Rng64,
};

/// `m` non-negative values sharing the position axis `0..m`.
pub type Series = Vec<f64>;

/// Number of bell-shaped bumps layered onto every generated series.
pub const BUMPS: usize = 5;

/// Synthetic demo data: smoothly varying, non-negative series.
///
/// Each series starts from a uniform baseline in `[0.1, 0.2)` and receives [`BUMPS`] bumps of
/// the form `height * exp(-((i/m - center) * sharpness)^2)`.
#[derive(Clone, Debug)]
pub struct SeriesGenerator {
    rng: Rng64,
}

impl SeriesGenerator {
    /// Create a generator; the same seed reproduces the same datasets.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: Rng64::new(seed),
        }
    }

    /// Generate one series of exactly `m` values, all `>= 0`.
    pub fn generate(&mut self, m: usize) -> BarmorphResult<Series> {
        if m == 0 {
            return Err(BarmorphError::configuration(
                "series length must be positive",
            ));
        }

        let mut values: Series = (0..m).map(|_| 0.1 + 0.1 * self.rng.next_f64_01()).collect();

        for _ in 0..BUMPS {
            let height = 1.0 / (0.1 + self.rng.next_f64_01());
            let center = 2.0 * self.rng.next_f64_01() - 0.5;
            let sharpness = 10.0 / (0.1 + self.rng.next_f64_01());
            for (i, v) in values.iter_mut().enumerate() {
                let w = (i as f64 / m as f64 - center) * sharpness;
                *v += height * (-w * w).exp();
            }
        }

        // Bump parameters are unbounded.
        for v in &mut values {
            *v = v.max(0.0);
        }

        Ok(values)
    }

    /// Generate `n` independent series of length `m`.
    pub fn generate_many(&mut self, n: usize, m: usize) -> BarmorphResult<Vec<Series>> {
        if n == 0 {
            return Err(BarmorphError::configuration(
                "series count must be positive",
            ));
        }
        (0..n).map(|_| self.generate(m)).collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/data/series.rs"]
mod tests;
