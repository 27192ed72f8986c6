use crate::{
    embed::blackbox::Blackbox,
    foundation::core::{Affine, Millis, Vec2},
    foundation::error::BarmorphResult,
    layout::scale::LinearScale,
    scene::anchor::{NodeId, SceneAnchor},
    scene::axis::AxisGuide,
};

/// A static bottom axis for a linear scale, built once at mount.
#[derive(Clone, Debug)]
pub struct AxisDemo {
    scale: LinearScale,
    ticks: usize,
    node: Option<NodeId>,
}

impl Default for AxisDemo {
    fn default() -> Self {
        Self::new(LinearScale::new((0.0, 10.0), (0.0, 200.0)), 10)
    }
}

impl AxisDemo {
    /// Axis for `scale` with roughly `ticks` ticks.
    pub fn new(scale: LinearScale, ticks: usize) -> Self {
        Self {
            scale,
            ticks,
            node: None,
        }
    }

    /// Axis node, once mounted.
    pub fn node(&self) -> Option<NodeId> {
        self.node
    }
}

impl<A: SceneAnchor> Blackbox<A> for AxisDemo {
    /// Where the axis origin sits inside the anchor.
    type Props = Vec2;

    fn on_mount(&mut self, mut anchor: A, origin: &Vec2, _now: Millis) -> BarmorphResult<()> {
        let root = anchor.append_group(None, Affine::translate(*origin), None);
        let guide = AxisGuide::bottom_linear(&self.scale, self.ticks);
        self.node = Some(anchor.append_axis(root, Affine::IDENTITY, guide));
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/axis_demo.rs"]
mod tests;
