use super::*;
use crate::embed::blackbox::BlackboxHost;
use crate::foundation::core::Size;
use crate::scene::retained::{SceneNodeKind, SharedScene};

#[test]
fn mounts_a_single_axis_and_keeps_it_across_renders() {
    let mut host = BlackboxHost::new(
        SharedScene::new(Size::new(240.0, 60.0).unwrap()),
        AxisDemo::default(),
    );
    host.render(&Vec2::new(20.0, 10.0), Millis(0)).unwrap();
    host.render(&Vec2::new(50.0, 50.0), Millis(16)).unwrap();

    let node = host.blackbox().node().unwrap();
    host.anchor().with(|scene| {
        assert_eq!(scene.len(), 2);
        let SceneNodeKind::Axis { guide, .. } = &scene.node(node).unwrap().kind else {
            panic!("expected an axis node");
        };
        assert_eq!(guide.extent, (0.0, 200.0));
        assert_eq!(guide.ticks.len(), 11);
        assert_eq!(guide.ticks[0].label, "0");
        assert_eq!(guide.ticks[10].offset, 200.0);
    });
}
