use super::*;
use crate::foundation::core::accent;
use crate::layout::scale::BandScale;

fn bar(x: f64) -> BarAttrs {
    BarAttrs {
        x,
        y: 10.0,
        width: 4.0,
        height: 20.0,
    }
}

#[test]
fn nodes_nest_under_their_parent() {
    let mut scene = RetainedScene::new(Size::new(100.0, 50.0).unwrap());
    let g = scene.append_group(None, Affine::IDENTITY, None);
    let s = scene.append_group(Some(g), Affine::IDENTITY, Some(accent(0)));
    let r = scene.append_rect(s, bar(1.0));

    assert_eq!(scene.len(), 3);
    assert_eq!(scene.node(g).unwrap().children, vec![s]);
    assert_eq!(scene.node(r).unwrap().parent, Some(s));
    assert_eq!(scene.rects().collect::<Vec<_>>(), vec![(r, bar(1.0))]);
}

#[test]
fn detached_scene_ignores_writes() {
    let mut scene = RetainedScene::new(Size::new(100.0, 50.0).unwrap());
    let g = scene.append_group(None, Affine::IDENTITY, None);
    let r = scene.append_rect(g, bar(1.0));

    scene.set_rect(r, bar(2.0));
    assert_eq!(scene.rect_writes(), 1);

    scene.detach();
    assert!(!scene.is_attached());
    scene.set_rect(r, bar(3.0));
    assert_eq!(scene.rect_writes(), 1);
    assert_eq!(scene.rects().next().unwrap().1, bar(2.0));
}

#[test]
fn shared_handles_see_the_same_scene() {
    let host = SharedScene::new(Size::new(100.0, 50.0).unwrap());
    let mut anchor = host.clone();
    let g = anchor.append_group(None, Affine::IDENTITY, None);
    anchor.append_rect(g, bar(5.0));

    assert!(host.same_scene(&anchor));
    assert_eq!(host.with(|s| s.rects().count()), 1);

    host.detach();
    assert!(!anchor.is_attached());
}

#[test]
fn svg_contains_groups_rects_and_axis() {
    let mut scene = RetainedScene::new(Size::new(100.0, 50.0).unwrap());
    let g = scene.append_group(None, Affine::translate((10.0, 5.0)), None);
    let s = scene.append_group(Some(g), Affine::IDENTITY, Some(accent(1)));
    scene.append_rect(s, bar(1.5));
    let x = BandScale::new(2, (0.0, 80.0), 0.08).unwrap();
    scene.append_axis(
        g,
        Affine::translate((0.0, 30.0)),
        AxisGuide::bottom_band(&x, 80.0, 0.0, 6.0),
    );

    let svg = scene.to_svg();
    assert!(svg.starts_with("<svg"));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r##"fill="#beaed4""##));
    assert!(svg.contains(r#"<rect x="1.5" y="10" width="4" height="20"/>"#));
    assert!(svg.contains("matrix(1 0 0 1 10 5)"));
    assert!(svg.contains(">1</text>"));
}

#[test]
fn removing_a_group_drops_its_subtree() {
    let mut scene = RetainedScene::new(Size::new(100.0, 50.0).unwrap());
    let root = scene.append_group(None, Affine::IDENTITY, None);
    let keep = scene.append_group(Some(root), Affine::IDENTITY, Some(accent(0)));
    let kept = scene.append_rect(keep, bar(1.0));
    let drop = scene.append_group(Some(root), Affine::IDENTITY, Some(accent(1)));
    scene.append_rect(drop, bar(2.0));

    scene.remove(drop);
    assert_eq!(scene.len(), 3);
    assert!(scene.node(drop).is_none());
    assert_eq!(scene.node(root).unwrap().children, vec![keep]);
    assert_eq!(scene.rects().collect::<Vec<_>>(), vec![(kept, bar(1.0))]);
    assert!(!scene.to_svg().contains(r##"fill="#beaed4""##));

    scene.remove(root);
    assert!(scene.is_empty());
    assert_eq!(scene.to_svg().matches("<g").count(), 0);
}

#[test]
fn group_fill_can_be_rewritten_until_detached() {
    let mut scene = RetainedScene::new(Size::new(100.0, 50.0).unwrap());
    let g = scene.append_group(None, Affine::IDENTITY, Some(accent(0)));
    let fill_of = |scene: &RetainedScene| match scene.node(g).unwrap().kind {
        SceneNodeKind::Group { fill, .. } => fill,
        _ => unreachable!(),
    };

    scene.set_fill(g, Some(accent(2)));
    assert_eq!(fill_of(&scene), Some(accent(2)));

    scene.detach();
    scene.set_fill(g, None);
    scene.remove(g);
    assert_eq!(fill_of(&scene), Some(accent(2)));
    assert_eq!(scene.len(), 1);
}
