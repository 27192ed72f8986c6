use super::*;

fn start() -> BarAttrs {
    BarAttrs {
        x: 0.0,
        y: 100.0,
        width: 10.0,
        height: 0.0,
    }
}

fn two_phase() -> Vec<Step> {
    vec![
        Step {
            patch: AttrPatch::horizontal(20.0, 4.0),
            duration: Millis(100),
            ease: Ease::Linear,
        },
        Step {
            patch: AttrPatch::vertical(50.0, 50.0),
            duration: Millis(100),
            ease: Ease::Linear,
        },
    ]
}

#[test]
fn empty_tracks_are_rejected() {
    assert!(ElementTrack::new(Millis(0), Millis(0), vec![]).is_err());
    let noop = Step {
        patch: AttrPatch::default(),
        duration: Millis(10),
        ease: Ease::Linear,
    };
    assert!(ElementTrack::new(Millis(0), Millis(0), vec![noop]).is_err());
}

#[test]
fn holds_still_during_delay() {
    let mut track = ElementTrack::new(Millis(0), Millis(50), two_phase()).unwrap();
    let out = track.advance(start(), Millis(49));
    assert_eq!(out, start());
    assert_eq!(track.phase(), TrackPhase::Idle);
}

#[test]
fn phase_two_waits_for_phase_one() {
    let mut track = ElementTrack::new(Millis(0), Millis(0), two_phase()).unwrap();

    let mid1 = track.advance(start(), Millis(50));
    assert_eq!(track.phase(), TrackPhase::Phase1);
    assert_eq!(mid1.x, 10.0);
    assert_eq!(mid1.y, 100.0, "vertical must not move during phase 1");

    let mid2 = track.advance(mid1, Millis(150));
    assert_eq!(track.phase(), TrackPhase::Phase2);
    assert_eq!(mid2.x, 20.0);
    assert_eq!(mid2.width, 4.0);
    assert_eq!(mid2.y, 75.0);
    assert_eq!(mid2.height, 25.0);

    let end = track.advance(mid2, Millis(200));
    assert!(track.is_settled());
    assert_eq!(track.phase(), TrackPhase::Settled);
    assert_eq!(
        end,
        BarAttrs {
            x: 20.0,
            y: 50.0,
            width: 4.0,
            height: 50.0
        }
    );
}

#[test]
fn a_late_tick_runs_both_phases_to_completion() {
    let mut track = ElementTrack::new(Millis(0), Millis(30), two_phase()).unwrap();
    let end = track.advance(start(), Millis(10_000));
    assert!(track.is_settled());
    assert_eq!(end, start().with(&two_phase()[0].patch).with(&two_phase()[1].patch));
}

#[test]
fn zero_duration_snaps() {
    let step = Step {
        patch: AttrPatch::vertical(1.0, 2.0),
        duration: Millis(0),
        ease: Ease::Cubic,
    };
    let mut track = ElementTrack::new(Millis(5), Millis(0), vec![step]).unwrap();
    assert_eq!(track.advance(start(), Millis(5)).height, 2.0);
    assert!(track.is_settled());
}
