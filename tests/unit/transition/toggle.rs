use super::*;

#[test]
fn requests_arrive_in_order() {
    let (tx, mut rx) = toggle_channel();
    assert!(tx.send(Arrangement::Grouped));
    assert!(tx.send(Arrangement::Stacked));
    assert_eq!(rx.poll_toggle(), Some(Arrangement::Grouped));
    assert_eq!(rx.poll_toggle(), Some(Arrangement::Stacked));
    assert_eq!(rx.poll_toggle(), None);
}

#[test]
fn send_reports_unsubscribed_receiver() {
    let (tx, rx) = toggle_channel();
    drop(rx);
    assert!(!tx.send(Arrangement::Grouped));
}

#[test]
fn unit_source_is_silent() {
    assert_eq!(ToggleSource::poll_toggle(&mut ()), None);
}
