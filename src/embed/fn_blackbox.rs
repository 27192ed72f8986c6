use crate::{
    embed::blackbox::Blackbox,
    foundation::core::Millis,
    foundation::error::BarmorphResult,
    scene::anchor::SceneAnchor,
    scene::retained::SharedScene,
};

type DrawFn<A, P> = Box<dyn FnMut(&mut A, &P) -> BarmorphResult<()>>;

/// Blackbox built from closures instead of a dedicated type.
///
/// The mount closure draws into the anchor once. An optional update closure is called against the
/// same anchor on every later render; without one, later renders leave the content alone.
pub struct FnBlackbox<P, A: SceneAnchor = SharedScene> {
    mount: DrawFn<A, P>,
    update: Option<DrawFn<A, P>>,
    anchor: Option<A>,
}

impl<P, A: SceneAnchor> FnBlackbox<P, A> {
    /// Blackbox that draws once with `mount`.
    pub fn new(mount: impl FnMut(&mut A, &P) -> BarmorphResult<()> + 'static) -> Self {
        Self {
            mount: Box::new(mount),
            update: None,
            anchor: None,
        }
    }

    /// Redraw with `update` on every render after the first.
    pub fn with_update(
        mut self,
        update: impl FnMut(&mut A, &P) -> BarmorphResult<()> + 'static,
    ) -> Self {
        self.update = Some(Box::new(update));
        self
    }
}

impl<P, A: SceneAnchor> Blackbox<A> for FnBlackbox<P, A> {
    type Props = P;

    fn on_mount(&mut self, mut anchor: A, props: &P, _now: Millis) -> BarmorphResult<()> {
        (self.mount)(&mut anchor, props)?;
        self.anchor = Some(anchor);
        Ok(())
    }

    fn on_update(&mut self, props: &P, _now: Millis) -> BarmorphResult<()> {
        match (self.update.as_mut(), self.anchor.as_mut()) {
            (Some(update), Some(anchor)) => update(anchor, props),
            _ => Ok(()),
        }
    }

    fn on_unmount(&mut self) {
        self.anchor = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/fn_blackbox.rs"]
mod tests;
