use std::sync::mpsc;

use crate::{
    config::ChartConfig,
    data::series::SeriesGenerator,
    data::stack::stack,
    embed::blackbox::Blackbox,
    foundation::core::{Millis, Size},
    foundation::error::{BarmorphError, BarmorphResult},
    layout::arrangement::Arrangement,
    scene::anchor::SceneAnchor,
    scene::retained::SharedScene,
    transition::scheduler::TransitionScheduler,
    transition::toggle::{ToggleSender, toggle_channel},
};

/// Outer size given by the host at mount. Later changes are ignored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartProps {
    /// Outer width.
    pub width: f64,
    /// Outer height.
    pub height: f64,
}

impl ChartProps {
    /// Props matching the size in `config`.
    pub fn from_config(config: &ChartConfig) -> Self {
        Self {
            width: config.width,
            height: config.height,
        }
    }
}

/// The stacked-to-grouped bar chart as an embeddable blackbox.
///
/// Data, scales and the scheduler are created once at mount. Toggle requests arrive through the
/// sender returned by [`StackedToGrouped::toggle_sender`] and are applied on the next frame.
pub struct StackedToGrouped<A: SceneAnchor = SharedScene> {
    config: ChartConfig,
    sender: ToggleSender,
    pending: Option<mpsc::Receiver<Arrangement>>,
    scheduler: Option<TransitionScheduler<A>>,
}

impl<A: SceneAnchor> StackedToGrouped<A> {
    /// Validate `config` and prepare the toggle channel.
    pub fn new(config: ChartConfig) -> BarmorphResult<Self> {
        config.validate()?;
        let (sender, receiver) = toggle_channel();
        Ok(Self {
            config,
            sender,
            pending: Some(receiver),
            scheduler: None,
        })
    }

    /// Channel for manual toggles (the radio control).
    pub fn toggle_sender(&self) -> ToggleSender {
        self.sender.clone()
    }

    /// The running scheduler, between mount and unmount.
    pub fn scheduler(&self) -> Option<&TransitionScheduler<A>> {
        self.scheduler.as_ref()
    }

    /// Effective configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }
}

impl<A: SceneAnchor> Blackbox<A> for StackedToGrouped<A> {
    type Props = ChartProps;

    #[tracing::instrument(skip_all, fields(width = props.width, height = props.height))]
    fn on_mount(&mut self, anchor: A, props: &ChartProps, now: Millis) -> BarmorphResult<()> {
        Size::new(props.width, props.height)?;
        let config = ChartConfig {
            width: props.width,
            height: props.height,
            ..self.config
        };
        config.validate()?;
        let series =
            SeriesGenerator::new(config.seed).generate_many(config.series, config.points)?;
        let stacked = stack(&series)?;
        let Some(toggles) = self.pending.take() else {
            return Err(BarmorphError::configuration(
                "stacked-to-grouped chart mounted twice",
            ));
        };
        self.config = config;
        tracing::debug!(
            single_max = stacked.single_max,
            cumulative_max = stacked.cumulative_max,
            "generated data"
        );
        self.scheduler = Some(TransitionScheduler::mount(
            anchor,
            toggles,
            stacked,
            &self.config,
            now,
        )?);
        Ok(())
    }

    fn on_update(&mut self, props: &ChartProps, _now: Millis) -> BarmorphResult<()> {
        if props.width != self.config.width || props.height != self.config.height {
            tracing::trace!(
                width = props.width,
                height = props.height,
                "size change after mount ignored"
            );
        }
        Ok(())
    }

    fn on_frame(&mut self, now: Millis) -> BarmorphResult<()> {
        if let Some(scheduler) = self.scheduler.as_mut() {
            scheduler.tick(now)?;
        }
        Ok(())
    }

    fn on_unmount(&mut self) {
        if let Some(scheduler) = self.scheduler.take() {
            scheduler.unmount();
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/stacked_to_grouped.rs"]
mod tests;
