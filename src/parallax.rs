use crate::config::ParallaxConfig;
use crate::css::CssNumber;

pub const HERO_SELECTOR: &str = ".hero";
pub const SPEED_SELECTOR: &str = "[data-parallax]";
pub const SPEED_ATTRIBUTE: &str = "data-parallax";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Parallax {
    hero_factor: f64,
    default_speed: f64,
}

impl From<&ParallaxConfig> for Parallax {
    fn from(config: &ParallaxConfig) -> Self {
        Self {
            hero_factor: config.hero_factor,
            default_speed: config.default_speed,
        }
    }
}

impl Parallax {
    pub fn hero_background_position(&self, scroll_y: f64) -> String {
        format!("center {}px", CssNumber(scroll_y * self.hero_factor))
    }

    pub fn element_transform(&self, scroll_y: f64, declared_speed: Option<&str>) -> String {
        let speed = self.speed(declared_speed);
        format!("translateY({}px)", CssNumber(scroll_y * speed))
    }

    /// Reads the leading number of the attribute. Missing, non-numeric and
    /// zero speeds all use the default.
    pub fn speed(&self, declared: Option<&str>) -> f64 {
        declared
            .and_then(leading_number)
            .filter(|speed| speed.is_finite() && *speed != 0.0)
            .unwrap_or(self.default_speed)
    }
}

fn leading_number(raw: &str) -> Option<f64> {
    let trimmed = raw.trim_start();
    let candidate_len = trimmed
        .char_indices()
        .find(|(_, ch)| !matches!(ch, '0'..='9' | '.' | '+' | '-' | 'e' | 'E'))
        .map(|(index, _)| index)
        .unwrap_or(trimmed.len());

    // All candidate characters are ASCII, so every index is a char boundary.
    (1..=candidate_len)
        .rev()
        .find_map(|end| trimmed[..end].parse::<f64>().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn parallax() -> Parallax {
        Parallax::from(&ParallaxConfig::default())
    }

    #[test]
    fn hero_offset_scales_with_scroll() {
        assert_eq!(parallax().hero_background_position(0.0), "center 0px");
        assert_eq!(
            parallax().hero_background_position(50.0),
            format!("center {}px", 50.0 * 0.06)
        );
    }

    #[test]
    fn declared_speed_drives_translation() {
        assert_eq!(parallax().element_transform(100.0, Some("0.5")), "translateY(50px)");
        assert_eq!(parallax().element_transform(100.0, Some("-0.25")), "translateY(-25px)");
    }

    #[test]
    fn invalid_or_zero_speed_uses_default() {
        let p = parallax();
        assert_eq!(p.speed(None), 0.2);
        assert_eq!(p.speed(Some("")), 0.2);
        assert_eq!(p.speed(Some("fast")), 0.2);
        assert_eq!(p.speed(Some("0")), 0.2);
        assert_eq!(p.speed(Some("-.")), 0.2);
    }

    #[test]
    fn speed_accepts_a_numeric_prefix() {
        let p = parallax();
        assert_eq!(p.speed(Some("  0.35")), 0.35);
        assert_eq!(p.speed(Some("0.3px")), 0.3);
        assert_eq!(p.speed(Some("1e-1")), 0.1);
        assert_eq!(p.speed(Some("2e")), 2.0);
    }

    #[test]
    fn negative_speed_at_top_of_page_has_no_signed_zero() {
        assert_eq!(parallax().element_transform(0.0, Some("-1")), "translateY(0px)");
    }

    proptest! {
        #[test]
        fn any_finite_declared_speed_round_trips(speed in -4.0f64..4.0) {
            prop_assume!(speed != 0.0);
            let declared = speed.to_string();
            prop_assert_eq!(parallax().speed(Some(&declared)), speed);
        }
    }
}
