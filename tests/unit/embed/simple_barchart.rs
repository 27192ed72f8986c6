use super::*;
use crate::embed::blackbox::BlackboxHost;
use crate::foundation::core::BLUES;
use crate::scene::retained::SceneNodeKind;

fn props(data: &[f64], width: f64, height: f64) -> BarchartProps {
    BarchartProps {
        data: data.to_vec(),
        width,
        height,
    }
}

fn mounted(data: &[f64]) -> BlackboxHost<SimpleBarchart> {
    let mut host = BlackboxHost::new(
        SharedScene::new(Size::new(300.0, 200.0).unwrap()),
        SimpleBarchart::default(),
    );
    host.render(&props(data, 100.0, 50.0), Millis(0)).unwrap();
    host
}

fn rects(host: &BlackboxHost<SimpleBarchart>) -> Vec<(NodeId, BarAttrs)> {
    host.anchor().with(|s| s.rects().collect())
}

fn bar(x: f64, y: f64, width: f64, height: f64) -> BarAttrs {
    BarAttrs {
        x,
        y,
        width,
        height,
    }
}

#[test]
fn rerender_refits_scales_and_rewrites_the_same_rects() {
    let mut host = mounted(&[1.0, 2.0, 4.0]);
    let before = rects(&host);
    assert_eq!(
        before.iter().map(|r| r.1).collect::<Vec<_>>(),
        vec![
            bar(0.0, 37.5, 20.0, 12.5),
            bar(40.0, 25.0, 20.0, 25.0),
            bar(80.0, 0.0, 20.0, 50.0),
        ]
    );

    host.render(&props(&[4.0, 2.0, 1.0], 200.0, 80.0), Millis(16)).unwrap();
    let after = rects(&host);
    assert_eq!(
        after.iter().map(|r| r.1).collect::<Vec<_>>(),
        vec![
            bar(0.0, 0.0, 40.0, 80.0),
            bar(80.0, 40.0, 40.0, 40.0),
            bar(160.0, 60.0, 40.0, 20.0),
        ]
    );

    let ids = |v: &[(NodeId, BarAttrs)]| v.iter().map(|r| r.0).collect::<Vec<_>>();
    assert_eq!(ids(&before), ids(&after));
    assert_eq!(host.anchor().with(|s| s.rect_writes()), 3);
    let chart = host.blackbox();
    assert!(chart.anchor.as_ref().unwrap().same_scene(host.anchor()));
    assert_eq!(chart.y.domain(), (0.0, 4.0));
}

#[test]
fn bar_count_follows_the_data() {
    let mut host = mounted(&[1.0, 1.0]);
    let first = rects(&host)[0].0;

    host.render(&props(&[1.0; 4], 100.0, 50.0), Millis(1)).unwrap();
    assert_eq!(host.anchor().with(|s| s.len()), 9);
    let third = host.blackbox().bars[2].group;
    host.anchor().with(|s| {
        let SceneNodeKind::Group { fill, .. } = s.node(third).unwrap().kind else {
            panic!("expected a group");
        };
        assert_eq!(fill, Some(BLUES[4]));
    });

    host.render(&props(&[2.0], 100.0, 50.0), Millis(2)).unwrap();
    assert_eq!(host.anchor().with(|s| s.len()), 3);
    assert_eq!(rects(&host), vec![(first, bar(25.0, 0.0, 50.0, 50.0))]);

    host.render(&props(&[], 100.0, 50.0), Millis(3)).unwrap();
    assert!(rects(&host).is_empty());
    assert!(host.blackbox().bars.is_empty());
    assert_eq!(host.anchor().with(|s| s.len()), 1);
}

#[test]
fn all_zero_data_draws_flat_bars() {
    let host = mounted(&[0.0, 0.0]);
    assert!(rects(&host).iter().all(|r| r.1.height == 0.0 && r.1.y == 50.0));
}

#[test]
fn invalid_props_leave_the_scene_alone() {
    let mut host = mounted(&[1.0, 2.0]);
    let before = rects(&host);

    assert!(host.render(&props(&[1.0, f64::NAN], 100.0, 50.0), Millis(1)).is_err());
    assert!(host.render(&props(&[-1.0], 100.0, 50.0), Millis(2)).is_err());
    assert!(host.render(&props(&[1.0], 0.0, 50.0), Millis(3)).is_err());
    assert_eq!(rects(&host), before);
}
