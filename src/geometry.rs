use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, MouseEvent};
use yew::NodeRef;

/// On-screen position and size of a rendered element, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    /// Position of `pointer` as a fraction of this rect's size.
    ///
    /// Not clamped: a pointer outside the rect (fast movement past the edge)
    /// yields values below 0 or above 1.
    pub fn relative(&self, pointer: Pointer) -> (f64, f64) {
        (
            (pointer.x - self.left) / self.width,
            (pointer.y - self.top) / self.height,
        )
    }

    /// Offset of `pointer` from this rect's top-left corner.
    pub fn offset(&self, pointer: Pointer) -> (f64, f64) {
        (pointer.x - self.left, pointer.y - self.top)
    }
}

impl From<DomRect> for Rect {
    fn from(rect: DomRect) -> Self {
        Self::new(rect.left(), rect.top(), rect.width(), rect.height())
    }
}

/// Client coordinates of a pointer event.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Pointer {
    pub x: f64,
    pub y: f64,
}

impl Pointer {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&MouseEvent> for Pointer {
    fn from(e: &MouseEvent) -> Self {
        Self::new(e.client_x() as f64, e.client_y() as f64)
    }
}

/// Anything whose bounding rectangle can be queried on demand.
///
/// `bounds` is `None` only when the element is not mounted yet. `measure`
/// also rejects a rect collapsed to zero width or height, which callers that
/// divide by the size need.
pub trait Measure {
    fn bounds(&self) -> Option<Rect>;

    fn measure(&self) -> Option<Rect> {
        self.bounds().filter(|r| r.width > 0.0 && r.height > 0.0)
    }
}

impl Measure for Element {
    fn bounds(&self) -> Option<Rect> {
        Some(Rect::from(self.get_bounding_client_rect()))
    }
}

impl Measure for NodeRef {
    fn bounds(&self) -> Option<Rect> {
        self.get()
            .and_then(|node| node.dyn_into::<Element>().ok())
            .and_then(|el| el.bounds())
    }
}

impl Measure for Option<Rect> {
    fn bounds(&self) -> Option<Rect> {
        *self
    }
}

/// Formats a number for a CSS value, folding `-0` into `0`.
pub fn css_number(value: f64) -> f64 {
    value + 0.0
}


#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mounted(style: &str) -> Element {
        let document = web_sys::window().and_then(|w| w.document()).unwrap();
        let el = document.create_element("div").unwrap();
        el.set_attribute("style", style).unwrap();
        document.body().unwrap().append_child(&el).unwrap();
        el
    }

    #[wasm_bindgen_test]
    fn element_reports_its_bounding_rect() {
        let el = mounted("position: absolute; left: 20px; top: 30px; width: 120px; height: 40px;");
        assert_eq!(el.measure(), Some(Rect::new(20.0, 30.0, 120.0, 40.0)));
        el.remove();
    }

    #[wasm_bindgen_test]
    fn collapsed_element_is_not_measurable() {
        let el = mounted("position: absolute; left: 20px; top: 30px; width: 0; height: 0;");
        assert_eq!(el.measure(), None);
        assert_eq!(el.bounds(), Some(Rect::new(20.0, 30.0, 0.0, 0.0)));
        el.remove();
    }
}
