use crate::{
    foundation::core::Millis,
    foundation::error::BarmorphResult,
    scene::anchor::{HostAnchor, SceneAnchor},
    scene::retained::SharedScene,
};

/// Imperative content embedded in a host that otherwise re-derives its tree on every render.
///
/// The host calls [`Blackbox::on_mount`] once with a stable anchor, then
/// [`Blackbox::on_update`] on every later render and [`Blackbox::on_frame`] on every animation
/// frame. State that must survive renders (scales, schedulers) lives in the implementing type,
/// created once at mount and reused afterwards.
///
/// `A` is the anchor type the blackbox draws into; headless hosts use [`SharedScene`].
pub trait Blackbox<A: SceneAnchor = SharedScene> {
    /// Props passed on every render.
    type Props;

    /// First render: build content beneath `anchor`.
    fn on_mount(&mut self, anchor: A, props: &Self::Props, now: Millis) -> BarmorphResult<()>;

    /// Later renders. The default leaves the content alone.
    fn on_update(&mut self, _props: &Self::Props, _now: Millis) -> BarmorphResult<()> {
        Ok(())
    }

    /// Animation frame.
    fn on_frame(&mut self, _now: Millis) -> BarmorphResult<()> {
        Ok(())
    }

    /// The anchor is going away; drop anything that would still write to it.
    fn on_unmount(&mut self) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Lifecycle {
    Fresh,
    Mounted,
    Unmounted,
}

/// Host-side wrapper that owns the anchor and guarantees it is created once and never replaced.
pub struct BlackboxHost<B, A = SharedScene>
where
    A: HostAnchor,
    B: Blackbox<A>,
{
    anchor: A,
    blackbox: B,
    lifecycle: Lifecycle,
}

impl<B, A> BlackboxHost<B, A>
where
    A: HostAnchor,
    B: Blackbox<A>,
{
    /// Wrap `blackbox` around `anchor`. The anchor must be attached and empty.
    pub fn new(anchor: A, blackbox: B) -> Self {
        Self {
            anchor,
            blackbox,
            lifecycle: Lifecycle::Fresh,
        }
    }

    /// Render with `props`: mounts on the first call, updates afterwards, no-op once unmounted.
    pub fn render(&mut self, props: &B::Props, now: Millis) -> BarmorphResult<()> {
        match self.lifecycle {
            Lifecycle::Fresh => {
                self.blackbox.on_mount(self.anchor.clone(), props, now)?;
                self.lifecycle = Lifecycle::Mounted;
                Ok(())
            }
            Lifecycle::Mounted => self.blackbox.on_update(props, now),
            Lifecycle::Unmounted => {
                tracing::trace!("render after unmount ignored");
                Ok(())
            }
        }
    }

    /// Forward an animation frame while mounted.
    pub fn frame(&mut self, now: Millis) -> BarmorphResult<()> {
        if self.lifecycle != Lifecycle::Mounted {
            return Ok(());
        }
        self.blackbox.on_frame(now)
    }

    /// Detach the anchor and tell the blackbox to let go of it.
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.anchor.detach();
        self.blackbox.on_unmount();
        self.lifecycle = Lifecycle::Unmounted;
    }

    /// `true` between the first render and unmount.
    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    /// The anchor handed to the blackbox.
    pub fn anchor(&self) -> &A {
        &self.anchor
    }

    /// The embedded blackbox.
    pub fn blackbox(&self) -> &B {
        &self.blackbox
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/blackbox.rs"]
mod tests;
