use std::rc::Rc;

use log::debug;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::title;
use crate::geometry::{css_number, Measure, Pointer, Rect};

const GLOW_RADIUS_PX: u32 = 100;
const GLOW_INNER: &str = "#656fe288";
const GLOW_OUTER: &str = "#00000026";

/// Cursor-following glow on the call-to-action link.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GlowState {
    pub x: f64,
    pub y: f64,
    pub opacity: f64,
}

pub enum GlowAction {
    Enter,
    Move { rect: Option<Rect>, pointer: Pointer },
    Leave,
}

impl GlowAction {
    /// Offsets need no division, so a zero-size link still tracks.
    pub fn moved(target: &impl Measure, pointer: Pointer) -> Self {
        Self::Move { rect: target.bounds(), pointer }
    }
}

impl GlowState {
    pub fn background(&self) -> String {
        format!(
            "radial-gradient({}px circle at {}px {}px, {}, {})",
            GLOW_RADIUS_PX,
            css_number(self.x),
            css_number(self.y),
            GLOW_INNER,
            GLOW_OUTER
        )
    }

    pub fn style(&self) -> String {
        format!("opacity: {}; background: {};", self.opacity, self.background())
    }
}

impl Reducible for GlowState {
    type Action = GlowAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GlowAction::Enter => Rc::new(Self { opacity: 1.0, ..*self }),
            // Position stays where it was; it is invisible anyway.
            GlowAction::Leave => Rc::new(Self { opacity: 0.0, ..*self }),
            GlowAction::Move { rect: Some(rect), pointer } => {
                let (x, y) = rect.offset(pointer);
                Rc::new(Self { x, y, ..*self })
            }
            GlowAction::Move { rect: None, .. } => {
                debug!("hover link not measurable yet, skipping move");
                self
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct HoverCardProps {
    pub src: AttrValue,
    /// Title markup, `*` toggles emphasis.
    pub title: AttrValue,
    #[prop_or_default]
    pub description: Option<AttrValue>,
    #[prop_or_default]
    pub is_coming_soon: bool,
    #[prop_or_default]
    pub link: AttrValue,
}

#[function_component(HoverCard)]
pub fn hover_card(props: &HoverCardProps) -> Html {
    html! {
        <div class="bento-card">
            <video
                src={props.src.clone()}
                loop=true
                muted=true
                autoplay=true
                class="bento-card__video"
            />
            <div class="bento-card__body">
                <div>
                    <h1 class="bento-title special-font">{ title::render(&props.title) }</h1>
                    {
                        if let Some(description) = &props.description {
                            html! { <p class="bento-card__description">{ description.clone() }</p> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if props.is_coming_soon {
                        html! { <DiscoverLink link={props.link.clone()} /> }
                    } else {
                        html! {}
                    }
                }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct DiscoverLinkProps {
    pub link: AttrValue,
}

/// External link with the cursor glow. Lives in its own component so the
/// glow state only exists when the link is rendered.
#[function_component(DiscoverLink)]
pub fn discover_link(props: &DiscoverLinkProps) -> Html {
    let node = use_node_ref();
    let glow = use_reducer_eq(GlowState::default);

    let onmousemove = {
        let node = node.clone();
        let glow = glow.dispatcher();
        Callback::from(move |e: MouseEvent| {
            glow.dispatch(GlowAction::moved(&node, Pointer::from(&e)));
        })
    };
    let onmouseenter = {
        let glow = glow.dispatcher();
        Callback::from(move |_: MouseEvent| glow.dispatch(GlowAction::Enter))
    };
    let onmouseleave = {
        let glow = glow.dispatcher();
        Callback::from(move |_: MouseEvent| glow.dispatch(GlowAction::Leave))
    };

    html! {
        <a
            ref={node}
            href={props.link.clone()}
            target="_blank"
            rel="noopener noreferrer"
            class="discover-link border-hsla"
            {onmousemove}
            {onmouseenter}
            {onmouseleave}
        >
            <div class="discover-link__glow" style={glow.style()} />
            <LocationArrow />
            <p class="discover-link__label">{"Discover"}</p>
        </a>
    }
}

#[function_component(LocationArrow)]
fn location_arrow() -> Html {
    html! {
        <svg class="discover-link__icon" viewBox="0 0 24 24" width="1em" height="1em" fill="currentColor">
            <path d="M21 3L3 10.53v.98l6.84 2.65L12.48 21h.98L21 3z" />
        </svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link_rect() -> Option<Rect> {
        Some(Rect::new(20.0, 30.0, 120.0, 40.0))
    }

    #[test]
    fn enter_and_leave_toggle_opacity() {
        let glow = Rc::new(GlowState::default());
        assert_eq!(glow.opacity, 0.0);

        let glow = glow.reduce(GlowAction::Enter);
        assert_eq!(glow.opacity, 1.0);

        let glow = glow
            .reduce(GlowAction::moved(&link_rect(), Pointer::new(30.0, 40.0)))
            .reduce(GlowAction::moved(&link_rect(), Pointer::new(130.0, 60.0)))
            .reduce(GlowAction::Leave);
        assert_eq!(glow.opacity, 0.0);
    }

    #[test]
    fn move_tracks_offset_from_link_corner() {
        let glow = Rc::new(GlowState::default())
            .reduce(GlowAction::moved(&link_rect(), Pointer::new(70.0, 90.0)));
        assert_eq!((glow.x, glow.y), (50.0, 60.0));
        assert_eq!(
            glow.background(),
            "radial-gradient(100px circle at 50px 60px, #656fe288, #00000026)"
        );
    }

    #[test]
    fn leave_freezes_position() {
        let glow = Rc::new(GlowState::default())
            .reduce(GlowAction::Enter)
            .reduce(GlowAction::moved(&link_rect(), Pointer::new(70.0, 90.0)))
            .reduce(GlowAction::Leave);
        assert_eq!(*glow, GlowState { x: 50.0, y: 60.0, opacity: 0.0 });
    }

    #[test]
    fn unmeasurable_link_keeps_state() {
        let before = Rc::new(GlowState::default()).reduce(GlowAction::Enter);
        let after = before.clone().reduce(GlowAction::moved(&None::<Rect>, Pointer::new(5.0, 5.0)));
        assert!(Rc::ptr_eq(&before, &after));
    }

    #[test]
    fn collapsed_link_still_tracks_cursor() {
        let collapsed = Some(Rect::new(20.0, 30.0, 0.0, 0.0));
        let glow = Rc::new(GlowState::default())
            .reduce(GlowAction::moved(&collapsed, Pointer::new(70.0, 90.0)));
        assert_eq!((glow.x, glow.y), (50.0, 60.0));
    }

    #[test]
    fn style_carries_opacity_and_gradient() {
        let glow = GlowState { x: 12.5, y: 0.0, opacity: 1.0 };
        assert_eq!(
            glow.style(),
            "opacity: 1; background: radial-gradient(100px circle at 12.5px 0px, #656fe288, #00000026);"
        );
    }
}
