use std::sync::mpsc;

use crate::{
    animation::attrs::BarAttrs,
    animation::timer::{OneShotTimer, TimerState},
    animation::track::{ElementTrack, TrackPhase},
    config::ChartConfig,
    data::stack::Stacked,
    foundation::core::{Affine, Millis, Vec2, accent},
    foundation::error::{BarmorphError, BarmorphResult},
    layout::arrangement::{Arrangement, BarLayout},
    scene::anchor::{NodeId, SceneAnchor},
    scene::axis::AxisGuide,
    transition::plan::Choreography,
    transition::toggle::ToggleSource,
};

/// Arrangement of the bars as seen by the host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArrangementState {
    /// Settled in the stacked arrangement.
    Stacked,
    /// Settled in the grouped arrangement.
    Grouped,
    /// Animating toward stacked.
    EnteringStacked,
    /// Animating toward grouped.
    EnteringGrouped,
}

impl ArrangementState {
    fn entering(target: Arrangement) -> Self {
        match target {
            Arrangement::Stacked => Self::EnteringStacked,
            Arrangement::Grouped => Self::EnteringGrouped,
        }
    }

    fn settled(target: Arrangement) -> Self {
        match target {
            Arrangement::Stacked => Self::Stacked,
            Arrangement::Grouped => Self::Grouped,
        }
    }

    /// Arrangement this state is in or heading to.
    pub fn destination(self) -> Arrangement {
        match self {
            Self::Stacked | Self::EnteringStacked => Arrangement::Stacked,
            Self::Grouped | Self::EnteringGrouped => Arrangement::Grouped,
        }
    }

    /// `true` when no transition is in flight.
    pub fn is_settled(self) -> bool {
        matches!(self, Self::Stacked | Self::Grouped)
    }
}

/// One bar: a persistent scene rectangle bound to `(series, position)`.
#[derive(Clone, Debug)]
pub struct VisualElement {
    /// Series index `k`.
    pub series: usize,
    /// Data position `i`.
    pub position: usize,
    /// Rectangle node beneath the anchor.
    pub node: NodeId,
    attrs: BarAttrs,
    track: Option<ElementTrack>,
}

impl VisualElement {
    /// Attributes currently written to the scene.
    pub fn attrs(&self) -> BarAttrs {
        self.attrs
    }

    /// Where the element is in its current animation.
    pub fn phase(&self) -> TrackPhase {
        self.track.as_ref().map_or(TrackPhase::Settled, ElementTrack::phase)
    }

    /// `true` while a track is pending or running.
    pub fn is_animating(&self) -> bool {
        self.track.is_some()
    }
}

/// Owns the bars of one mounted visualization and drives every change to them.
///
/// The scheduler never blocks and never reads a clock: the host calls [`Self::tick`] with the
/// current time from its animation-frame facility, and the scheduler applies whatever each
/// bar's track says at that instant. A new transition replaces every element's track
/// outright, so no step from a superseded transition can be applied afterwards.
pub struct TransitionScheduler<A, S = mpsc::Receiver<Arrangement>>
where
    A: SceneAnchor,
    S: ToggleSource,
{
    anchor: A,
    toggles: Option<S>,
    stacked: Stacked,
    choreography: Choreography,
    elements: Vec<VisualElement>,
    state: ArrangementState,
    idle: OneShotTimer,
    transitions_started: u64,
    released: bool,
}

impl<A, S> TransitionScheduler<A, S>
where
    A: SceneAnchor,
    S: ToggleSource,
{
    /// Build the bars beneath `anchor`, start the entry animation, arm the idle auto-toggle,
    /// and subscribe to `toggles`.
    #[tracing::instrument(
        skip_all,
        fields(n = stacked.series_count(), m = stacked.points(), now = now.0)
    )]
    pub fn mount(
        mut anchor: A,
        toggles: S,
        stacked: Stacked,
        config: &ChartConfig,
        now: Millis,
    ) -> BarmorphResult<Self> {
        if !anchor.is_attached() {
            return Err(BarmorphError::configuration(
                "cannot mount onto a detached anchor",
            ));
        }
        let plot = config.plot_size()?;
        let layout = BarLayout::new(&stacked, plot, config.band_padding)?;
        let choreography = Choreography::new(layout, config.timing);

        let root = anchor.append_group(None, config.margin.origin(), None);
        let mut elements = Vec::with_capacity(stacked.series_count() * stacked.points());
        for (k, intervals) in stacked.series.iter().enumerate() {
            let group = anchor.append_group(Some(root), Affine::IDENTITY, Some(accent(k)));
            for (i, &interval) in intervals.iter().enumerate() {
                let attrs = choreography.layout().entry(i);
                let node = anchor.append_rect(group, attrs);
                let track = ElementTrack::new(
                    now,
                    choreography.stagger_delay(i),
                    choreography.enter(interval),
                )?;
                elements.push(VisualElement {
                    series: k,
                    position: i,
                    node,
                    attrs,
                    track: Some(track),
                });
            }
        }

        let axis = AxisGuide::bottom_band(choreography.layout().x_scale(), plot.width, 0.0, 6.0);
        anchor.append_axis(root, Affine::translate(Vec2::new(0.0, plot.height)), axis);

        tracing::debug!(elements = elements.len(), "mounted");
        Ok(Self {
            anchor,
            toggles: Some(toggles),
            stacked,
            choreography,
            elements,
            state: ArrangementState::EnteringStacked,
            idle: OneShotTimer::arm(now, config.timing.idle_toggle()),
            transitions_started: 0,
            released: false,
        })
    }

    /// Current arrangement state.
    pub fn state(&self) -> ArrangementState {
        self.state
    }

    /// All bars, series-major.
    pub fn elements(&self) -> &[VisualElement] {
        &self.elements
    }

    /// `true` while any bar has a pending or running track.
    pub fn is_animating(&self) -> bool {
        self.elements.iter().any(VisualElement::is_animating)
    }

    /// State of the idle auto-toggle.
    pub fn idle_timer(&self) -> TimerState {
        self.idle.state()
    }

    /// Arrangement transitions started since mount (the entry animation excluded).
    pub fn transitions_started(&self) -> u64 {
        self.transitions_started
    }

    /// Dataset the bars are bound to.
    pub fn stacked(&self) -> &Stacked {
        &self.stacked
    }

    /// Geometry used for targets.
    pub fn layout(&self) -> &BarLayout {
        self.choreography.layout()
    }

    /// The anchor the bars live under.
    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    /// `true` once pending work has been dropped because of a detach or unmount.
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Manual arrangement request.
    ///
    /// Always disarms the idle auto-toggle. Requesting the arrangement already settled or being
    /// entered does nothing; anything else starts a transition that supersedes the one in
    /// flight. Returns whether a transition started.
    pub fn toggle(&mut self, target: Arrangement, now: Millis) -> BarmorphResult<bool> {
        if self.released || !self.anchor.is_attached() {
            tracing::trace!(%target, "toggle ignored: anchor not mounted");
            return Ok(false);
        }
        if self.idle.cancel() {
            tracing::debug!("idle auto-toggle disarmed by manual toggle");
        }
        if self.state.destination() == target {
            tracing::trace!(%target, state = ?self.state, "toggle is a no-op");
            return Ok(false);
        }
        self.begin(target, now)?;
        Ok(true)
    }

    /// Host animation-frame callback: drain toggle requests, fire the idle auto-toggle when
    /// due, and write every bar's attributes for `now`.
    pub fn tick(&mut self, now: Millis) -> BarmorphResult<ArrangementState> {
        if self.released {
            return Ok(self.state);
        }
        if !self.anchor.is_attached() {
            self.release("anchor detached");
            return Ok(self.state);
        }

        while let Some(target) = self.toggles.as_mut().and_then(ToggleSource::poll_toggle) {
            self.toggle(target, now)?;
        }

        if self.idle.poll(now) {
            tracing::debug!(now = now.0, "idle auto-toggle fired");
            if self.state.destination() != Arrangement::Grouped {
                self.begin(Arrangement::Grouped, now)?;
            }
        }

        self.advance(now);
        Ok(self.state)
    }

    /// Drop all pending work and the toggle subscription, then hand the anchor back.
    pub fn unmount(mut self) -> A {
        self.release("unmounted");
        self.anchor
    }

    fn begin(&mut self, target: Arrangement, now: Millis) -> BarmorphResult<()> {
        assert_eq!(
            self.elements.len(),
            self.stacked.series_count() * self.stacked.points(),
            "visual elements out of sync with stacked data"
        );

        self.advance(now);
        let superseding = self.is_animating();
        for el in &mut self.elements {
            let interval = self.stacked.interval(el.series, el.position);
            let steps = self
                .choreography
                .transition(target, el.series, el.position, interval);
            el.track = Some(ElementTrack::new(
                now,
                self.choreography.stagger_delay(el.position),
                steps,
            )?);
        }
        self.state = ArrangementState::entering(target);
        self.transitions_started += 1;
        tracing::debug!(%target, superseding, now = now.0, "transition started");
        Ok(())
    }

    fn advance(&mut self, now: Millis) {
        let mut animating = false;
        for el in &mut self.elements {
            let Some(track) = el.track.as_mut() else {
                continue;
            };
            let next = track.advance(el.attrs, now);
            if next != el.attrs {
                el.attrs = next;
                self.anchor.set_rect(el.node, next);
            }
            if track.is_settled() {
                el.track = None;
            } else {
                animating = true;
            }
        }

        if !animating && !self.state.is_settled() {
            self.state = ArrangementState::settled(self.state.destination());
            tracing::debug!(state = ?self.state, now = now.0, "settled");
        }
    }

    fn release(&mut self, reason: &'static str) {
        if self.released {
            return;
        }
        for el in &mut self.elements {
            el.track = None;
        }
        self.idle.cancel();
        self.toggles = None;
        self.released = true;
        tracing::debug!(reason, "released pending animation work");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/transition/scheduler.rs"]
mod tests;
