use crate::foundation::error::{BarmorphError, BarmorphResult};

/// Cumulative `[low, high]` interval of one series at one position.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Interval {
    /// Sum of all earlier series at this position.
    pub low: f64,
    /// `low` plus this series' own value.
    pub high: f64,
}

impl Interval {
    /// The raw series value this interval was built from.
    pub fn value(self) -> f64 {
        self.high - self.low
    }
}

/// Output of [`stack`]: per-series intervals plus the two scale domains.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Stacked {
    /// `series[k][i]` is the interval of series `k` at position `i`.
    pub series: Vec<Vec<Interval>>,
    /// Largest raw value over every series and position.
    pub single_max: f64,
    /// Largest top-of-stack total over every position.
    pub cumulative_max: f64,
}

impl Stacked {
    /// Number of series (`n`).
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Number of positions per series (`m`).
    pub fn points(&self) -> usize {
        self.series.first().map_or(0, Vec::len)
    }

    /// Interval of series `k` at position `i`.
    pub fn interval(&self, k: usize, i: usize) -> Interval {
        self.series[k][i]
    }
}

/// Stack `n` parallel series of `m` values into cumulative intervals.
///
/// `m` is the common series length. Fails with a configuration error when there are no
/// series, a series is empty, lengths differ, or any value is negative or non-finite.
#[tracing::instrument(skip(series), fields(n = series.len()))]
pub fn stack<S: AsRef<[f64]>>(series: &[S]) -> BarmorphResult<Stacked> {
    let Some(first) = series.first() else {
        return Err(BarmorphError::configuration("no series to stack"));
    };
    let m = first.as_ref().len();
    if m == 0 {
        return Err(BarmorphError::configuration("series must not be empty"));
    }

    for (k, s) in series.iter().enumerate() {
        let s = s.as_ref();
        if s.len() != m {
            return Err(BarmorphError::configuration(format!(
                "series {k} has {} values, expected {m}",
                s.len()
            )));
        }
        if let Some((i, v)) = s.iter().enumerate().find(|(_, v)| !v.is_finite() || **v < 0.0) {
            return Err(BarmorphError::configuration(format!(
                "series {k} position {i} has invalid value {v}; values must be finite and >= 0"
            )));
        }
    }

    let mut out = vec![Vec::with_capacity(m); series.len()];
    let mut single_max = 0.0_f64;
    let mut cumulative_max = 0.0_f64;
    for i in 0..m {
        let mut running = 0.0;
        for (k, s) in series.iter().enumerate() {
            let v = s.as_ref()[i];
            out[k].push(Interval {
                low: running,
                high: running + v,
            });
            running += v;
            single_max = single_max.max(v);
        }
        cumulative_max = cumulative_max.max(running);
    }

    tracing::trace!(m, single_max, cumulative_max, "stacked dataset");
    Ok(Stacked {
        series: out,
        single_max,
        cumulative_max,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/data/stack.rs"]
mod tests;
