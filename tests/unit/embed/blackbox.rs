use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::{
    animation::attrs::BarAttrs,
    embed::axis_demo::AxisDemo,
    foundation::core::{Affine, Rgb8, Size, Vec2},
    scene::anchor::NodeId,
    scene::axis::AxisGuide,
};

#[derive(Default)]
struct Recorder {
    mounts: Vec<SharedScene>,
    updates: Vec<u32>,
    frames: usize,
    unmounted: bool,
}

impl Blackbox for Recorder {
    type Props = u32;

    fn on_mount(&mut self, anchor: SharedScene, _props: &u32, _now: Millis) -> BarmorphResult<()> {
        self.mounts.push(anchor);
        Ok(())
    }

    fn on_update(&mut self, props: &u32, _now: Millis) -> BarmorphResult<()> {
        self.updates.push(*props);
        Ok(())
    }

    fn on_frame(&mut self, _now: Millis) -> BarmorphResult<()> {
        self.frames += 1;
        Ok(())
    }

    fn on_unmount(&mut self) {
        self.unmounted = true;
    }
}

fn host() -> BlackboxHost<Recorder> {
    BlackboxHost::new(
        SharedScene::new(Size::new(10.0, 10.0).unwrap()),
        Recorder::default(),
    )
}

#[test]
fn mounts_once_then_updates_with_the_same_anchor() {
    let mut h = host();
    assert!(!h.is_mounted());
    h.frame(Millis(0)).unwrap();
    assert_eq!(h.blackbox().frames, 0);

    h.render(&1, Millis(0)).unwrap();
    h.render(&2, Millis(5)).unwrap();
    h.render(&3, Millis(9)).unwrap();
    h.frame(Millis(10)).unwrap();

    let rec = h.blackbox();
    assert_eq!(rec.mounts.len(), 1);
    assert!(rec.mounts[0].same_scene(h.anchor()));
    assert_eq!(rec.updates, vec![2, 3]);
    assert_eq!(rec.frames, 1);
}

#[test]
fn unmount_detaches_and_silences_later_calls() {
    let mut h = host();
    h.render(&1, Millis(0)).unwrap();
    h.unmount();
    h.unmount();

    assert!(!h.is_mounted());
    assert!(h.blackbox().unmounted);
    assert!(!h.anchor().with(|s| crate::scene::anchor::SceneAnchor::is_attached(s)));

    h.render(&4, Millis(1)).unwrap();
    h.frame(Millis(2)).unwrap();
    assert!(h.blackbox().updates.is_empty());
    assert_eq!(h.blackbox().frames, 0);
}

/// Anchor that only logs the calls it receives.
#[derive(Clone, Default)]
struct LogAnchor(Rc<RefCell<(bool, Vec<&'static str>)>>);

impl LogAnchor {
    fn log(&mut self, op: &'static str) -> NodeId {
        let mut inner = self.0.borrow_mut();
        inner.1.push(op);
        NodeId(inner.1.len() as u32 - 1)
    }

    fn ops(&self) -> Vec<&'static str> {
        self.0.borrow().1.clone()
    }
}

impl SceneAnchor for LogAnchor {
    fn is_attached(&self) -> bool {
        !self.0.borrow().0
    }

    fn append_group(&mut self, _: Option<NodeId>, _: Affine, _: Option<Rgb8>) -> NodeId {
        self.log("group")
    }

    fn append_rect(&mut self, _: NodeId, _: BarAttrs) -> NodeId {
        self.log("rect")
    }

    fn set_rect(&mut self, _: NodeId, _: BarAttrs) {
        self.log("set_rect");
    }

    fn set_fill(&mut self, _: NodeId, _: Option<Rgb8>) {
        self.log("set_fill");
    }

    fn remove(&mut self, _: NodeId) {
        self.log("remove");
    }

    fn append_axis(&mut self, _: NodeId, _: Affine, _: AxisGuide) -> NodeId {
        self.log("axis")
    }
}

impl HostAnchor for LogAnchor {
    fn detach(&self) {
        self.0.borrow_mut().0 = true;
    }
}

#[test]
fn host_accepts_any_cloneable_anchor() {
    let anchor = LogAnchor::default();
    let mut h: BlackboxHost<AxisDemo, LogAnchor> =
        BlackboxHost::new(anchor.clone(), AxisDemo::default());

    h.render(&Vec2::new(5.0, 5.0), Millis(0)).unwrap();
    h.render(&Vec2::new(9.0, 9.0), Millis(1)).unwrap();
    assert_eq!(anchor.ops(), vec!["group", "axis"]);
    assert_eq!(h.blackbox().node(), Some(NodeId(1)));

    h.unmount();
    assert!(!anchor.is_attached());
}
