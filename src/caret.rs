pub const CARET_SELECTOR: &str = ".cursor";

/// Next inline opacity for a blinking caret. A blank value counts as hidden.
pub fn next_opacity(current: &str) -> &'static str {
    let hidden = match current.trim() {
        "" => true,
        value => value.parse::<f64>().map(|opacity| opacity == 0.0).unwrap_or(false),
    };

    if hidden {
        "1"
    } else {
        "0"
    }
}
