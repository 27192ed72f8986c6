//! Barmorph animates a multi-series bar chart between a stacked and a grouped arrangement.
//!
//! The pieces, bottom-up:
//!
//! - [`SeriesGenerator`] produces non-negative synthetic series
//! - [`stack`] turns them into cumulative [`Interval`]s plus the two domain maxima
//! - [`TransitionScheduler`] owns one rectangle per data point beneath a host [`SceneAnchor`]
//!   and morphs them with staggered two-phase transitions
//! - [`BlackboxHost`] shows how a re-rendering host mounts that content exactly once, with
//!   [`SimpleBarchart`] and [`FnBlackbox`] as lighter embeddings
#![forbid(unsafe_code)]
#![deny(missing_docs)]

/// Animation primitives.
pub mod animation;
/// Chart configuration.
pub mod config;
/// Data generation and stacking.
pub mod data;
/// Blackbox embedding.
pub mod embed;
/// Shared primitives.
pub mod foundation;
/// Scales and bar geometry.
pub mod layout;
/// Anchors and retained scenes.
pub mod scene;
/// Transition scheduling.
pub mod transition;

pub use crate::animation::attrs::{AttrPatch, BarAttrs, Lerp};
pub use crate::animation::ease::Ease;
pub use crate::config::{ChartConfig, TimingConfig};
pub use crate::data::series::{Series, SeriesGenerator};
pub use crate::data::stack::{Interval, Stacked, stack};
pub use crate::embed::axis_demo::AxisDemo;
pub use crate::embed::blackbox::{Blackbox, BlackboxHost};
pub use crate::embed::fn_blackbox::FnBlackbox;
pub use crate::embed::simple_barchart::{BarchartProps, SimpleBarchart};
pub use crate::embed::stacked_to_grouped::{ChartProps, StackedToGrouped};
pub use crate::foundation::core::{Affine, Margin, Millis, Rgb8, Size, Vec2};
pub use crate::foundation::error::{BarmorphError, BarmorphResult};
pub use crate::layout::arrangement::{Arrangement, BarLayout};
pub use crate::scene::anchor::{HostAnchor, NodeId, SceneAnchor};
pub use crate::scene::raster::{FrameRgba, rasterize};
pub use crate::scene::retained::{RetainedScene, SharedScene};
pub use crate::transition::scheduler::{ArrangementState, TransitionScheduler, VisualElement};
pub use crate::transition::toggle::{ToggleSender, ToggleSource, toggle_channel};
