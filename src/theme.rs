pub const THEME_KEY: &str = "portfolio-theme";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Neutral,
    Trust,
    Creative,
}

impl Theme {
    pub const ALL: [Self; 3] = [Self::Neutral, Self::Trust, Self::Creative];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::Trust => "trust",
            Self::Creative => "creative",
        }
    }

    pub fn from_name(value: &str) -> Option<Self> {
        match value {
            "neutral" => Some(Self::Neutral),
            "trust" => Some(Self::Trust),
            "creative" => Some(Self::Creative),
            _ => None,
        }
    }

    /// Unknown or missing names coerce to the default theme.
    pub fn resolve(value: Option<&str>) -> Self {
        value.and_then(Self::from_name).unwrap_or_default()
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Neutral => "theme-neutral",
            Self::Trust => "theme-trust",
            Self::Creative => "theme-creative",
        }
    }

    /// Id of the selector button that activates this theme.
    pub fn button_id(self) -> &'static str {
        self.class_name()
    }

    pub fn pressed_value(self, active: Self) -> &'static str {
        if self == active {
            "true"
        } else {
            "false"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip_for_every_theme() {
        for theme in Theme::ALL {
            assert_eq!(Theme::from_name(theme.as_str()), Some(theme));
        }
    }

    #[test]
    fn resolve_falls_back_to_neutral() {
        assert_eq!(Theme::resolve(None), Theme::Neutral);
        assert_eq!(Theme::resolve(Some("")), Theme::Neutral);
        assert_eq!(Theme::resolve(Some("Trust")), Theme::Neutral);
        assert_eq!(Theme::resolve(Some("dark")), Theme::Neutral);
        assert_eq!(Theme::resolve(Some("creative")), Theme::Creative);
    }

    #[test]
    fn exactly_one_button_is_pressed_per_theme() {
        for active in Theme::ALL {
            let pressed: Vec<Theme> = Theme::ALL
                .into_iter()
                .filter(|theme| theme.pressed_value(active) == "true")
                .collect();
            assert_eq!(pressed, vec![active]);
        }
    }

    #[test]
    fn classes_are_distinct() {
        assert_eq!(Theme::Neutral.class_name(), "theme-neutral");
        assert_eq!(Theme::Trust.class_name(), "theme-trust");
        assert_eq!(Theme::Creative.class_name(), "theme-creative");
        assert_eq!(Theme::Trust.button_id(), "theme-trust");
    }
}
