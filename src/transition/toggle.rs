use std::sync::mpsc;

use crate::layout::arrangement::Arrangement;

/// Discrete arrangement requests delivered to a mounted scheduler.
///
/// The scheduler owns its source from mount to unmount; dropping it is the unsubscribe.
pub trait ToggleSource {
    /// Next pending request, if any. Must not block.
    fn poll_toggle(&mut self) -> Option<Arrangement>;
}

impl ToggleSource for mpsc::Receiver<Arrangement> {
    fn poll_toggle(&mut self) -> Option<Arrangement> {
        self.try_recv().ok()
    }
}

/// Source that never produces a request.
impl ToggleSource for () {
    fn poll_toggle(&mut self) -> Option<Arrangement> {
        None
    }
}

/// Host-side end of a toggle channel.
#[derive(Clone, Debug)]
pub struct ToggleSender(mpsc::Sender<Arrangement>);

impl ToggleSender {
    /// Request `target`. Returns `false` once the subscriber has been unmounted.
    pub fn send(&self, target: Arrangement) -> bool {
        self.0.send(target).is_ok()
    }
}

/// Create a connected sender / source pair.
pub fn toggle_channel() -> (ToggleSender, mpsc::Receiver<Arrangement>) {
    let (tx, rx) = mpsc::channel();
    (ToggleSender(tx), rx)
}

#[cfg(test)]
#[path = "../../tests/unit/transition/toggle.rs"]
mod tests;
