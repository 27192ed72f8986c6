use crate::{
    animation::attrs::BarAttrs,
    embed::blackbox::Blackbox,
    foundation::core::{Affine, Millis, Size, blues},
    foundation::error::{BarmorphError, BarmorphResult},
    layout::scale::{BandScale, LinearScale},
    scene::anchor::{NodeId, SceneAnchor},
    scene::retained::SharedScene,
};

/// Values and plot size for one render of [`SimpleBarchart`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BarchartProps {
    /// Non-negative bar values, left to right.
    pub data: Vec<f64>,
    /// Plot width.
    pub width: f64,
    /// Plot height; bars grow up from the bottom edge.
    pub height: f64,
}

#[derive(Clone, Copy, Debug)]
struct Bar {
    group: NodeId,
    rect: NodeId,
}

/// Single-series bar chart that redraws from its props on every render.
///
/// The scales are created at mount and re-fitted to the new data and size on each update.
/// Existing bars are rewritten in place, extra bars appended, and surplus bars removed.
pub struct SimpleBarchart<A: SceneAnchor = SharedScene> {
    x: Option<BandScale>,
    y: LinearScale,
    anchor: Option<A>,
    root: Option<NodeId>,
    bars: Vec<Bar>,
}

impl<A: SceneAnchor> Default for SimpleBarchart<A> {
    fn default() -> Self {
        Self {
            x: None,
            y: LinearScale::new((0.0, 1.0), (0.0, 1.0)),
            anchor: None,
            root: None,
            bars: Vec::new(),
        }
    }
}

fn validate(props: &BarchartProps) -> BarmorphResult<()> {
    Size::new(props.width, props.height)?;
    match props.data.iter().find(|v| !(v.is_finite() && **v >= 0.0)) {
        Some(bad) => Err(BarmorphError::configuration(format!(
            "bar values must be finite and >= 0, got {bad}"
        ))),
        None => Ok(()),
    }
}

impl<A: SceneAnchor> SimpleBarchart<A> {
    fn redraw(&mut self, props: &BarchartProps) -> BarmorphResult<()> {
        validate(props)?;
        let (Some(anchor), Some(root), Some(x)) =
            (self.anchor.as_mut(), self.root, self.x.as_mut())
        else {
            return Ok(());
        };

        let n = props.data.len();
        if n > 0 {
            x.rescale(n, (0.0, props.width))?;
            let max = props.data.iter().copied().fold(0.0, f64::max);
            let top = if max > 0.0 { max } else { 1.0 };
            self.y = self.y.with_domain((0.0, top)).with_range((0.0, props.height));
        }

        for (i, &value) in props.data.iter().enumerate() {
            let height = self.y.apply(value);
            let attrs = BarAttrs {
                x: x.position(i),
                y: props.height - height,
                width: x.bandwidth(),
                height,
            };
            let fill = Some(blues(i as f64 / n as f64));
            match self.bars.get(i).copied() {
                Some(bar) => {
                    anchor.set_fill(bar.group, fill);
                    anchor.set_rect(bar.rect, attrs);
                }
                None => {
                    let group = anchor.append_group(Some(root), Affine::IDENTITY, fill);
                    let rect = anchor.append_rect(group, attrs);
                    self.bars.push(Bar { group, rect });
                }
            }
        }
        for bar in self.bars.drain(n..) {
            anchor.remove(bar.group);
        }
        tracing::trace!(bars = n, "bar chart redrawn");
        Ok(())
    }
}

impl<A: SceneAnchor> Blackbox<A> for SimpleBarchart<A> {
    type Props = BarchartProps;

    fn on_mount(
        &mut self,
        mut anchor: A,
        props: &BarchartProps,
        _now: Millis,
    ) -> BarmorphResult<()> {
        validate(props)?;
        let x = BandScale::with_padding(props.data.len().max(1), (0.0, props.width), 0.5, 0.0)?;
        self.root = Some(anchor.append_group(None, Affine::IDENTITY, None));
        self.x = Some(x);
        self.anchor = Some(anchor);
        self.redraw(props)
    }

    fn on_update(&mut self, props: &BarchartProps, _now: Millis) -> BarmorphResult<()> {
        self.redraw(props)
    }

    fn on_unmount(&mut self) {
        self.anchor = None;
        self.bars.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/embed/simple_barchart.rs"]
mod tests;
