pub const TOAST_ID: &str = "toast";

const ERROR_BACKGROUND: &str = "rgba(220,60,60,0.95)";
const ERROR_COLOR: &str = "#fff";
const ACCENT_BACKGROUND: &str = "linear-gradient(90deg,var(--accent1),var(--accent2))";
const ACCENT_COLOR: &str = "#021204";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Error,
    Success,
    Neutral,
}

impl Tone {
    pub fn background(self) -> &'static str {
        match self {
            Self::Error => ERROR_BACKGROUND,
            Self::Success | Self::Neutral => ACCENT_BACKGROUND,
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Error => ERROR_COLOR,
            Self::Success | Self::Neutral => ACCENT_COLOR,
        }
    }
}

/// A transient message for the single shared toast element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub text: &'static str,
    pub duration_ms: u32,
    pub tone: Tone,
}

impl Notice {
    pub const MISSING_FIELDS: Self = Self {
        text: "Isi semua field sebelum mengirim.",
        duration_ms: 3_000,
        tone: Tone::Error,
    };

    pub const MAIL_CLIENT_OPENING: Self = Self {
        text: "Email klien Anda akan terbuka. Pastikan aplikasi email terpasang.",
        duration_ms: 4_500,
        tone: Tone::Success,
    };

    pub const FORM_RESET: Self = Self {
        text: "Form direset.",
        duration_ms: 1_200,
        tone: Tone::Neutral,
    };
}
