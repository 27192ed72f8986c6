use crate::{
    animation::track::Step,
    config::TimingConfig,
    data::stack::Interval,
    foundation::core::Millis,
    layout::arrangement::{Arrangement, BarLayout},
};

/// Computes the timed steps each bar runs for the entry animation and for each arrangement.
///
/// Every transition moves the dimension that could make bars overlap last: toward grouped the
/// bars first spread sideways then drop to their own values; toward stacked they first rise
/// to their cumulative intervals then close back into one column.
#[derive(Clone, Debug)]
pub struct Choreography {
    layout: BarLayout,
    timing: TimingConfig,
}

impl Choreography {
    /// Plan against `layout` with `timing`.
    pub fn new(layout: BarLayout, timing: TimingConfig) -> Self {
        Self { layout, timing }
    }

    /// Geometry in use.
    pub fn layout(&self) -> &BarLayout {
        &self.layout
    }

    /// Start offset for a bar at `position`.
    pub fn stagger_delay(&self, position: usize) -> Millis {
        self.timing.stagger_step().times(position as u64)
    }

    /// Single step raising a freshly created bar into its stacked interval.
    pub fn enter(&self, interval: Interval) -> Vec<Step> {
        vec![Step {
            patch: self.layout.extent(Arrangement::Stacked, interval),
            duration: self.timing.enter_duration(),
            ease: self.timing.ease,
        }]
    }

    /// Two sequential steps moving series `k` at `position` into `target`.
    pub fn transition(
        &self,
        target: Arrangement,
        k: usize,
        position: usize,
        interval: Interval,
    ) -> Vec<Step> {
        let columns = self.layout.columns(target, k, position);
        let extent = self.layout.extent(target, interval);
        let (first, second) = match target {
            Arrangement::Grouped => (columns, extent),
            Arrangement::Stacked => (extent, columns),
        };
        [first, second]
            .into_iter()
            .map(|patch| Step {
                patch,
                duration: self.timing.phase_duration(),
                ease: self.timing.ease,
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/plan.rs"]
mod tests;
