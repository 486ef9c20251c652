use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::geometry::{css_number, Measure, Pointer, Rect};

/// Maximum swing in degrees across the full width/height of the container.
pub const TILT_STRENGTH: f64 = 5.0;
const PERSPECTIVE_PX: u32 = 700;
const SCALE: &str = ".95, .95, .95";

/// Rotation angles in degrees.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltAngles {
    pub x: f64,
    pub y: f64,
}

impl TiltAngles {
    /// Tilts toward the pointer: dead center is flat, the edges reach
    /// half of `TILT_STRENGTH` (more when the pointer overshoots the rect).
    pub fn toward(rect: &Rect, pointer: Pointer) -> Self {
        let (rel_x, rel_y) = rect.relative(pointer);
        Self {
            x: css_number((rel_y - 0.5) * TILT_STRENGTH),
            y: css_number((rel_x - 0.5) * -TILT_STRENGTH),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TiltState {
    angles: Option<TiltAngles>,
}

pub enum TiltAction {
    Move { rect: Option<Rect>, pointer: Pointer },
    Leave,
}

impl TiltAction {
    /// Measures `target` now; the rect is never cached between events.
    pub fn moved(target: &impl Measure, pointer: Pointer) -> Self {
        Self::Move { rect: target.measure(), pointer }
    }
}

impl TiltState {
    pub fn angles(&self) -> Option<TiltAngles> {
        self.angles
    }

    pub fn is_identity(&self) -> bool {
        self.angles.is_none()
    }

    /// CSS transform value, empty for the identity state.
    pub fn transform(&self) -> String {
        match self.angles() {
            Some(TiltAngles { x, y }) => format!(
                "perspective({}px) rotateX({}deg) rotateY({}deg) scale3d({})",
                PERSPECTIVE_PX, x, y, SCALE
            ),
            None => String::new(),
        }
    }

    pub fn style(&self) -> Option<String> {
        (!self.is_identity()).then(|| format!("transform: {};", self.transform()))
    }
}

impl Reducible for TiltState {
    type Action = TiltAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            TiltAction::Move { rect: Some(rect), pointer } => Rc::new(Self {
                angles: Some(TiltAngles::toward(&rect, pointer)),
            }),
            TiltAction::Move { rect: None, .. } => {
                debug!("tilt container not measurable yet, skipping move");
                self
            }
            TiltAction::Leave => Rc::new(Self::default()),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct TiltContainerProps {
    #[prop_or_default]
    pub children: Children,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(TiltContainer)]
pub fn tilt_container(props: &TiltContainerProps) -> Html {
    let node = use_node_ref();
    let tilt = use_reducer_eq(TiltState::default);

    let onmousemove = {
        let node = node.clone();
        let tilt = tilt.dispatcher();
        Callback::from(move |e: MouseEvent| {
            tilt.dispatch(TiltAction::moved(&node, Pointer::from(&e)));
        })
    };

    let onmouseleave = {
        let tilt = tilt.dispatcher();
        Callback::from(move |_: MouseEvent| tilt.dispatch(TiltAction::Leave))
    };

    html! {
        <div
            ref={node}
            class={props.class.clone()}
            style={tilt.style()}
            {onmousemove}
            {onmouseleave}
        >
            { for props.children.iter() }
        </div>
    }
}
