use super::*;

const ALL: [Ease; 5] = [Ease::Linear, Ease::Quad, Ease::Cubic, Ease::Sin, Ease::Exp];

#[test]
fn endpoints_are_exact() {
    for ease in ALL {
        assert_eq!(ease.apply(0.0), 0.0, "{ease:?}");
        assert_eq!(ease.apply(1.0), 1.0, "{ease:?}");
    }
}

#[test]
fn curves_rise_and_mirror_around_the_midpoint() {
    for ease in ALL {
        let a = ease.apply(0.25);
        let b = ease.apply(0.5);
        let c = ease.apply(0.75);
        assert!(a < b && b < c, "{ease:?}");
        assert!((b - 0.5).abs() < 1e-9, "{ease:?}");
        assert!((a + c - 1.0).abs() < 1e-9, "{ease:?}");
    }
}

#[test]
fn cubic_matches_closed_form() {
    assert_eq!(Ease::Cubic.apply(0.25), 4.0 * 0.25 * 0.25 * 0.25);
    assert_eq!(Ease::Quad.apply(0.25), 2.0 * 0.25 * 0.25);
    assert!(Ease::Cubic.apply(0.1) < Ease::Quad.apply(0.1));
}

#[test]
fn out_of_range_progress_is_clamped() {
    assert_eq!(Ease::Cubic.apply(-3.0), 0.0);
    assert_eq!(Ease::Exp.apply(7.0), 1.0);
}

#[test]
fn config_names_are_snake_case() {
    let ease: Ease = serde_json::from_str("\"sin\"").unwrap();
    assert_eq!(ease, Ease::Sin);
    assert_eq!(Ease::default(), Ease::Cubic);
    assert_eq!(serde_json::to_string(&Ease::Cubic).unwrap(), "\"cubic\"");
}
