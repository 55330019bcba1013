use crate::css::CssNumber;

pub const TILT_SELECTOR: &str = "[data-tilt]";

const ROTATE_X_DEG: f64 = 6.0;
const ROTATE_Y_DEG: f64 = 8.0;
const LIFT_PX: f64 = 6.0;
const SHADOW_OFFSET_PX: f64 = 10.0;
const SHADOW_BLUR_PX: f64 = 40.0;
const SHADOW_COLOR: &str = "rgba(0,0,0,0.06)";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TiltStyle {
    pub transform: String,
    pub box_shadow: String,
}

/// Pointer offset from the element centre, each axis roughly in
/// `[-0.5, 0.5]`. `None` for collapsed elements.
pub fn pointer_offset(bounds: Bounds, client_x: f64, client_y: f64) -> Option<(f64, f64)> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }

    let x = (client_x - bounds.left) / bounds.width - 0.5;
    let y = (client_y - bounds.top) / bounds.height - 0.5;
    Some((x, y))
}

pub fn tilt_style(bounds: Bounds, client_x: f64, client_y: f64) -> Option<TiltStyle> {
    let (x, y) = pointer_offset(bounds, client_x, client_y)?;

    Some(TiltStyle {
        transform: format!(
            "rotateX({}deg) rotateY({}deg) translateY(-{LIFT_PX}px)",
            CssNumber(-y * ROTATE_X_DEG),
            CssNumber(x * ROTATE_Y_DEG),
        ),
        box_shadow: format!(
            "{}px {}px {SHADOW_BLUR_PX}px {SHADOW_COLOR}",
            CssNumber(x * SHADOW_OFFSET_PX),
            CssNumber(-y * SHADOW_OFFSET_PX),
        ),
    })
}
