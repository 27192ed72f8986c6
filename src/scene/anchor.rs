use crate::{
    animation::attrs::BarAttrs,
    foundation::core::{Affine, Rgb8},
    scene::axis::AxisGuide,
};

/// Handle to a node created beneath an anchor.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct NodeId(pub u32);

/// A stable, mutation-permitted scene node handed over by the host, plus the primitives needed
/// to build and update content beneath it.
///
/// The host owns the anchor's lifetime. Once [`SceneAnchor::is_attached`] reports `false`,
/// callers must stop writing to it.
pub trait SceneAnchor {
    /// `false` once the host has unmounted the anchor.
    fn is_attached(&self) -> bool;

    /// Append a group under `parent` (or directly under the anchor when `None`).
    fn append_group(
        &mut self,
        parent: Option<NodeId>,
        transform: Affine,
        fill: Option<Rgb8>,
    ) -> NodeId;

    /// Append a rectangle under `parent`.
    fn append_rect(&mut self, parent: NodeId, attrs: BarAttrs) -> NodeId;

    /// Overwrite a rectangle's geometry.
    fn set_rect(&mut self, node: NodeId, attrs: BarAttrs);

    /// Overwrite the fill a group passes to its rectangles.
    fn set_fill(&mut self, group: NodeId, fill: Option<Rgb8>);

    /// Remove `node` and everything beneath it. Its id is never reused.
    fn remove(&mut self, node: NodeId);

    /// Append an axis guide under `parent`, positioned by `transform`.
    fn append_axis(&mut self, parent: NodeId, transform: Affine, axis: AxisGuide) -> NodeId;
}

impl<A: SceneAnchor + ?Sized> SceneAnchor for &mut A {
    fn is_attached(&self) -> bool {
        (**self).is_attached()
    }

    fn append_group(
        &mut self,
        parent: Option<NodeId>,
        transform: Affine,
        fill: Option<Rgb8>,
    ) -> NodeId {
        (**self).append_group(parent, transform, fill)
    }

    fn append_rect(&mut self, parent: NodeId, attrs: BarAttrs) -> NodeId {
        (**self).append_rect(parent, attrs)
    }

    fn set_rect(&mut self, node: NodeId, attrs: BarAttrs) {
        (**self).set_rect(node, attrs)
    }

    fn set_fill(&mut self, group: NodeId, fill: Option<Rgb8>) {
        (**self).set_fill(group, fill)
    }

    fn remove(&mut self, node: NodeId) {
        (**self).remove(node)
    }

    fn append_axis(&mut self, parent: NodeId, transform: Affine, axis: AxisGuide) -> NodeId {
        (**self).append_axis(parent, transform, axis)
    }
}

/// An anchor the host hands out and later takes back.
///
/// Clones refer to the same underlying node; [`HostAnchor::detach`] through any clone is seen by
/// all of them.
pub trait HostAnchor: SceneAnchor + Clone {
    /// Unmount the anchor. Every clone reports `is_attached() == false` afterwards.
    fn detach(&self);
}
