use std::{cell::RefCell, fmt::Write as _, rc::Rc};

use crate::{
    animation::attrs::BarAttrs,
    foundation::core::{Affine, Rgb8, Size},
    scene::anchor::{HostAnchor, NodeId, SceneAnchor},
    scene::axis::AxisGuide,
};

/// Payload of one retained node.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub enum SceneNodeKind {
    /// Container with a transform and an optional inherited fill.
    Group {
        /// Transform applied to children.
        transform: Affine,
        /// Fill inherited by child rectangles.
        fill: Option<Rgb8>,
    },
    /// Filled rectangle.
    Rect(BarAttrs),
    /// Axis guide.
    Axis {
        /// Placement of the axis origin.
        transform: Affine,
        /// Ticks and styling.
        guide: AxisGuide,
    },
}

/// One node of a [`RetainedScene`].
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SceneNode {
    /// Parent node; `None` for nodes attached directly to the anchor.
    pub parent: Option<NodeId>,
    /// Node payload.
    pub kind: SceneNodeKind,
    /// Children in insertion order.
    pub children: Vec<NodeId>,
}

/// In-memory retained scene used as the anchor in headless hosts and tests.
#[derive(Clone, Debug, serde::Serialize)]
pub struct RetainedScene {
    size: Size,
    nodes: Vec<Option<SceneNode>>,
    roots: Vec<NodeId>,
    attached: bool,
    rect_writes: u64,
}

impl RetainedScene {
    /// Empty, attached scene of the given outer size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            nodes: Vec::new(),
            roots: Vec::new(),
            attached: true,
            rect_writes: 0,
        }
    }

    /// Outer size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Mark the anchor as unmounted. Later writes are ignored.
    pub fn detach(&mut self) {
        self.attached = false;
    }

    /// Live node by id; `None` once removed.
    pub fn node(&self, id: NodeId) -> Option<&SceneNode> {
        self.nodes.get(id.0 as usize).and_then(Option::as_ref)
    }

    fn node_mut(&mut self, id: NodeId) -> Option<&mut SceneNode> {
        self.nodes.get_mut(id.0 as usize).and_then(Option::as_mut)
    }

    /// Number of live nodes.
    pub fn len(&self) -> usize {
        self.nodes.iter().flatten().count()
    }

    /// `true` when no node is live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every live rectangle with its node id, in creation order.
    pub fn rects(&self) -> impl Iterator<Item = (NodeId, BarAttrs)> + '_ {
        self.nodes
            .iter()
            .enumerate()
            .filter_map(|(i, n)| match n.as_ref()?.kind {
                SceneNodeKind::Rect(attrs) => Some((NodeId(i as u32), attrs)),
                _ => None,
            })
    }

    /// Number of rectangle attribute writes accepted so far (creation excluded).
    pub fn rect_writes(&self) -> u64 {
        self.rect_writes
    }

    /// Serialize the scene as a standalone SVG document.
    pub fn to_svg(&self) -> String {
        let mut out = String::new();
        let _ = write!(
            out,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = self.size.width,
            h = self.size.height
        );
        for &root in &self.roots {
            self.write_svg_node(&mut out, root);
        }
        out.push_str("</svg>");
        out
    }

    fn write_svg_node(&self, out: &mut String, id: NodeId) {
        let Some(node) = self.node(id) else {
            return;
        };
        match &node.kind {
            SceneNodeKind::Group { transform, fill } => {
                let _ = write!(out, r#"<g transform="{}""#, svg_matrix(*transform));
                if let Some(fill) = fill {
                    let _ = write!(out, r#" fill="{}""#, fill.to_css());
                }
                out.push('>');
                for &c in &node.children {
                    self.write_svg_node(out, c);
                }
                out.push_str("</g>");
            }
            SceneNodeKind::Rect(a) => {
                let _ = write!(
                    out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}"/>"#,
                    a.x,
                    a.y,
                    a.width.max(0.0),
                    a.height.max(0.0)
                );
            }
            SceneNodeKind::Axis { transform, guide } => write_svg_axis(out, *transform, guide),
        }
    }

    fn push(&mut self, parent: Option<NodeId>, kind: SceneNodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(Some(SceneNode {
            parent,
            kind,
            children: Vec::new(),
        }));
        match parent.and_then(|p| self.node_mut(p)) {
            Some(p) => p.children.push(id),
            None => self.roots.push(id),
        }
        id
    }
}

impl SceneAnchor for RetainedScene {
    fn is_attached(&self) -> bool {
        self.attached
    }

    fn append_group(
        &mut self,
        parent: Option<NodeId>,
        transform: Affine,
        fill: Option<Rgb8>,
    ) -> NodeId {
        self.push(parent, SceneNodeKind::Group { transform, fill })
    }

    fn append_rect(&mut self, parent: NodeId, attrs: BarAttrs) -> NodeId {
        self.push(Some(parent), SceneNodeKind::Rect(attrs))
    }

    fn set_rect(&mut self, node: NodeId, attrs: BarAttrs) {
        if !self.attached {
            tracing::trace!(?node, "ignoring write to detached scene");
            return;
        }
        if let Some(SceneNode {
            kind: SceneNodeKind::Rect(current),
            ..
        }) = self.node_mut(node)
        {
            *current = attrs;
            self.rect_writes += 1;
        }
    }

    fn set_fill(&mut self, group: NodeId, fill: Option<Rgb8>) {
        if !self.attached {
            return;
        }
        if let Some(SceneNode {
            kind: SceneNodeKind::Group { fill: current, .. },
            ..
        }) = self.node_mut(group)
        {
            *current = fill;
        }
    }

    fn remove(&mut self, node: NodeId) {
        if !self.attached {
            return;
        }
        let Some(removed) = self.nodes.get_mut(node.0 as usize).and_then(Option::take) else {
            return;
        };
        match removed.parent.and_then(|p| self.node_mut(p)) {
            Some(parent) => parent.children.retain(|&c| c != node),
            None => self.roots.retain(|&r| r != node),
        }
        let mut pending = removed.children;
        while let Some(id) = pending.pop() {
            if let Some(child) = self.nodes.get_mut(id.0 as usize).and_then(Option::take) {
                pending.extend(child.children);
            }
        }
    }

    fn append_axis(&mut self, parent: NodeId, transform: Affine, axis: AxisGuide) -> NodeId {
        self.push(
            Some(parent),
            SceneNodeKind::Axis {
                transform,
                guide: axis,
            },
        )
    }
}

/// Shared handle to a [`RetainedScene`]: the host keeps one clone to inspect or detach it while
/// the visualization mutates it through another.
#[derive(Clone, Debug)]
pub struct SharedScene(Rc<RefCell<RetainedScene>>);

impl SharedScene {
    /// Wrap a fresh scene.
    pub fn new(size: Size) -> Self {
        Self(Rc::new(RefCell::new(RetainedScene::new(size))))
    }

    /// Run `f` against the scene.
    pub fn with<R>(&self, f: impl FnOnce(&RetainedScene) -> R) -> R {
        f(&self.0.borrow())
    }

    /// Mark the scene as unmounted.
    pub fn detach(&self) {
        self.0.borrow_mut().detach();
    }

    /// `true` when both handles refer to the same scene.
    pub fn same_scene(&self, other: &SharedScene) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl SceneAnchor for SharedScene {
    fn is_attached(&self) -> bool {
        self.0.borrow().is_attached()
    }

    fn append_group(
        &mut self,
        parent: Option<NodeId>,
        transform: Affine,
        fill: Option<Rgb8>,
    ) -> NodeId {
        self.0.borrow_mut().append_group(parent, transform, fill)
    }

    fn append_rect(&mut self, parent: NodeId, attrs: BarAttrs) -> NodeId {
        self.0.borrow_mut().append_rect(parent, attrs)
    }

    fn set_rect(&mut self, node: NodeId, attrs: BarAttrs) {
        self.0.borrow_mut().set_rect(node, attrs)
    }

    fn set_fill(&mut self, group: NodeId, fill: Option<Rgb8>) {
        self.0.borrow_mut().set_fill(group, fill)
    }

    fn remove(&mut self, node: NodeId) {
        self.0.borrow_mut().remove(node)
    }

    fn append_axis(&mut self, parent: NodeId, transform: Affine, axis: AxisGuide) -> NodeId {
        self.0.borrow_mut().append_axis(parent, transform, axis)
    }
}

impl HostAnchor for SharedScene {
    fn detach(&self) {
        SharedScene::detach(self);
    }
}

fn svg_matrix(t: Affine) -> String {
    let [a, b, c, d, e, f] = t.as_coeffs();
    format!("matrix({a} {b} {c} {d} {e} {f})")
}

fn write_svg_axis(out: &mut String, transform: Affine, guide: &AxisGuide) {
    let (r0, r1) = guide.extent;
    let size = guide.tick_size;
    let _ = write!(
        out,
        r##"<g transform="{}" fill="none" font-size="10" font-family="sans-serif" text-anchor="middle">"##,
        svg_matrix(transform)
    );
    let _ = write!(
        out,
        r##"<path stroke="#000" d="M{r0},{size}V0H{r1}V{size}"/>"##
    );
    for tick in &guide.ticks {
        let _ = write!(
            out,
            r##"<g transform="translate({x},0)"><line stroke="#000" y2="{size}"/><text fill="#000" y="{y}" dy="0.71em">{label}</text></g>"##,
            x = tick.offset,
            y = size.max(0.0) + guide.tick_padding,
            label = tick.label
        );
    }
    out.push_str("</g>");
}

#[cfg(test)]
#[path = "../../tests/unit/scene/retained.rs"]
mod tests;
