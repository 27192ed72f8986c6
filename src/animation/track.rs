use crate::{
    animation::attrs::{AttrPatch, BarAttrs},
    animation::ease::Ease,
    foundation::core::Millis,
    foundation::error::{BarmorphError, BarmorphResult},
};

/// One timed attribute change: interpolate toward `patch` over `duration`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Step {
    /// Attributes to move and their target values.
    pub patch: AttrPatch,
    /// Time from step start to completion.
    pub duration: Millis,
    /// Easing applied to normalized step progress.
    pub ease: Ease,
}

/// Observable position of an [`ElementTrack`] in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum TrackPhase {
    /// Waiting out the start delay; no attribute has moved yet.
    Idle,
    /// Running the first step.
    Phase1,
    /// Running the second (or a later) step.
    Phase2,
    /// Every step has completed; attributes hold their terminal values.
    Settled,
}

/// Per-element animation: a start delay followed by steps that run back-to-back.
///
/// A step captures its starting values when it begins, so a later step interpolates from
/// wherever the previous one ended. Replacing a track discards every step it had not yet
/// applied; nothing from the old track can run afterwards.
#[derive(Clone, Debug)]
pub struct ElementTrack {
    steps: Vec<Step>,
    cursor: usize,
    cursor_start: Millis,
    from: Option<BarAttrs>,
}

impl ElementTrack {
    /// Schedule `steps` to begin at `scheduled_at + delay`.
    pub fn new(scheduled_at: Millis, delay: Millis, steps: Vec<Step>) -> BarmorphResult<Self> {
        if steps.is_empty() {
            return Err(BarmorphError::animation(
                "element track needs at least one step",
            ));
        }
        if let Some(i) = steps.iter().position(|s| s.patch.is_empty()) {
            return Err(BarmorphError::animation(format!(
                "step {i} does not change any attribute"
            )));
        }
        Ok(Self {
            steps,
            cursor: 0,
            cursor_start: scheduled_at.saturating_add(delay),
            from: None,
        })
    }

    /// Current lifecycle phase, as of the last [`ElementTrack::advance`].
    pub fn phase(&self) -> TrackPhase {
        match (self.cursor, self.from) {
            (c, _) if c >= self.steps.len() => TrackPhase::Settled,
            (0, None) => TrackPhase::Idle,
            (0, Some(_)) => TrackPhase::Phase1,
            _ => TrackPhase::Phase2,
        }
    }

    /// `true` once every step has been applied.
    pub fn is_settled(&self) -> bool {
        self.cursor >= self.steps.len()
    }

    /// Advance to `now` and return the attribute values to display.
    ///
    /// `current` is what the element shows right now. Completed steps snap exactly to their
    /// targets before the next step begins.
    pub fn advance(&mut self, current: BarAttrs, now: Millis) -> BarAttrs {
        let mut current = current;
        while let Some(step) = self.steps.get(self.cursor) {
            if now < self.cursor_start {
                break;
            }
            let from = *self.from.get_or_insert(current);
            let elapsed = now.since(self.cursor_start);
            if elapsed >= step.duration {
                current = from.with(&step.patch);
                self.cursor_start = self.cursor_start.saturating_add(step.duration);
                self.cursor += 1;
                self.from = None;
                continue;
            }
            let t = elapsed.as_f64() / step.duration.as_f64();
            current = step.patch.interpolate(from, step.ease.apply(t));
            break;
        }
        current
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/track.rs"]
mod tests;
