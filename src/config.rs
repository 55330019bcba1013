//! Page-level tuning for every controller.
//!
//! The host page may embed a JSON object in
//! `<script type="application/json" id="portfolio-config">`. Every key is
//! optional; missing or out-of-bounds values fall back to the defaults below.

use serde::Deserialize;

use crate::error::Result;

pub const CONFIG_ELEMENT_ID: &str = "portfolio-config";

const DEFAULT_TYPING_LINES: [&str; 3] = [
    "Hi, I'm Hestiyana.",
    "Problem solver — Web Dev & Digital Marketer.",
    "Turning Ideas into Digital Experience.",
];
const DEFAULT_TYPE_MS: u32 = 80;
const DEFAULT_DELETE_MS: u32 = 30;
const DEFAULT_PAUSE_MS: u32 = 900;
const DEFAULT_CARET_MS: u32 = 600;

const DEFAULT_PARTICLE_COUNT: usize = 50;
const DEFAULT_PARTICLE_RADIUS: (f64, f64) = (0.5, 2.2);
const DEFAULT_PARTICLE_VX: (f64, f64) = (-0.2, 0.5);
const DEFAULT_PARTICLE_VY: (f64, f64) = (-0.2, 0.2);
const DEFAULT_PARTICLE_HUE: (f64, f64) = (180.0, 300.0);
const DEFAULT_PARTICLE_MARGIN: f64 = 10.0;

const DEFAULT_HERO_FACTOR: f64 = 0.06;
const DEFAULT_PARALLAX_SPEED: f64 = 0.2;

const DEFAULT_REVEAL_THRESHOLD: f64 = 0.12;
const DEFAULT_REVEAL_SELECTORS: &str = ".section, .skill-card, .project-preview, .timeline-item";

const DEFAULT_CONTACT_RECIPIENT: &str = "hello@example.com";
const DEFAULT_CONTACT_SUBJECT: &str = "Pesan dari Portofolio — Kolaborasi";

const TYPE_MS_BOUNDS: (u32, u32) = (1, 5_000);
const DELETE_MS_BOUNDS: (u32, u32) = (1, 5_000);
const PAUSE_MS_BOUNDS: (u32, u32) = (0, 60_000);
const CARET_MS_BOUNDS: (u32, u32) = (50, 10_000);
const PARTICLE_COUNT_BOUNDS: (usize, usize) = (0, 1_000);
const PARTICLE_RADIUS_BOUNDS: (f64, f64) = (0.0, 50.0);
const PARTICLE_SPEED_BOUNDS: (f64, f64) = (-20.0, 20.0);
const PARTICLE_HUE_BOUNDS: (f64, f64) = (0.0, 360.0);
const PARTICLE_MARGIN_BOUNDS: (f64, f64) = (0.0, 500.0);
const HERO_FACTOR_BOUNDS: (f64, f64) = (-2.0, 2.0);
const PARALLAX_SPEED_BOUNDS: (f64, f64) = (-5.0, 5.0);
const REVEAL_THRESHOLD_BOUNDS: (f64, f64) = (0.0, 1.0);

/// Inclusive numeric range used for random particle attributes.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
pub struct Span {
    pub min: f64,
    pub max: f64,
}

impl Span {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn from_pair(pair: (f64, f64)) -> Self {
        Self::new(pair.0, pair.1)
    }

    fn normalized(self, default: (f64, f64), bounds: (f64, f64)) -> Self {
        let inside = |value: f64| value.is_finite() && (bounds.0..=bounds.1).contains(&value);
        if !inside(self.min) || !inside(self.max) {
            return Self::from_pair(default);
        }
        if self.min > self.max {
            Self::new(self.max, self.min)
        } else {
            self
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct PortfolioConfig {
    pub typing: TypingConfig,
    pub particles: ParticleConfig,
    pub parallax: ParallaxConfig,
    pub reveal: RevealConfig,
    pub contact: ContactConfig,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct TypingConfig {
    pub lines: Vec<String>,
    pub type_ms: u32,
    pub delete_ms: u32,
    pub pause_ms: u32,
    pub caret_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            lines: DEFAULT_TYPING_LINES.iter().map(ToString::to_string).collect(),
            type_ms: DEFAULT_TYPE_MS,
            delete_ms: DEFAULT_DELETE_MS,
            pause_ms: DEFAULT_PAUSE_MS,
            caret_ms: DEFAULT_CARET_MS,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParticleConfig {
    pub count: usize,
    pub radius: Span,
    pub velocity_x: Span,
    pub velocity_y: Span,
    pub hue: Span,
    pub margin: f64,
}

impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            count: DEFAULT_PARTICLE_COUNT,
            radius: Span::from_pair(DEFAULT_PARTICLE_RADIUS),
            velocity_x: Span::from_pair(DEFAULT_PARTICLE_VX),
            velocity_y: Span::from_pair(DEFAULT_PARTICLE_VY),
            hue: Span::from_pair(DEFAULT_PARTICLE_HUE),
            margin: DEFAULT_PARTICLE_MARGIN,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ParallaxConfig {
    pub hero_factor: f64,
    pub default_speed: f64,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            hero_factor: DEFAULT_HERO_FACTOR,
            default_speed: DEFAULT_PARALLAX_SPEED,
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct RevealConfig {
    pub threshold: f64,
    pub selectors: String,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_REVEAL_THRESHOLD,
            selectors: DEFAULT_REVEAL_SELECTORS.to_string(),
        }
    }
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactConfig {
    pub recipient: String,
    pub subject: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_CONTACT_RECIPIENT.to_string(),
            subject: DEFAULT_CONTACT_SUBJECT.to_string(),
        }
    }
}

impl PortfolioConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let parsed: Self = serde_json::from_str(raw)?;
        Ok(parsed.normalized())
    }

    pub fn normalized(self) -> Self {
        Self {
            typing: self.typing.normalized(),
            particles: self.particles.normalized(),
            parallax: self.parallax.normalized(),
            reveal: self.reveal.normalized(),
            contact: self.contact.normalized(),
        }
    }
}

impl TypingConfig {
    fn normalized(self) -> Self {
        let defaults = Self::default();
        let lines: Vec<String> = self
            .lines
            .into_iter()
            .filter(|line| !line.trim().is_empty())
            .collect();

        Self {
            lines: if lines.is_empty() { defaults.lines } else { lines },
            type_ms: within(self.type_ms, TYPE_MS_BOUNDS, DEFAULT_TYPE_MS),
            delete_ms: within(self.delete_ms, DELETE_MS_BOUNDS, DEFAULT_DELETE_MS),
            pause_ms: within(self.pause_ms, PAUSE_MS_BOUNDS, DEFAULT_PAUSE_MS),
            caret_ms: within(self.caret_ms, CARET_MS_BOUNDS, DEFAULT_CARET_MS),
        }
    }
}

impl ParticleConfig {
    fn normalized(self) -> Self {
        Self {
            count: within(self.count, PARTICLE_COUNT_BOUNDS, DEFAULT_PARTICLE_COUNT),
            radius: self
                .radius
                .normalized(DEFAULT_PARTICLE_RADIUS, PARTICLE_RADIUS_BOUNDS),
            velocity_x: self
                .velocity_x
                .normalized(DEFAULT_PARTICLE_VX, PARTICLE_SPEED_BOUNDS),
            velocity_y: self
                .velocity_y
                .normalized(DEFAULT_PARTICLE_VY, PARTICLE_SPEED_BOUNDS),
            hue: self.hue.normalized(DEFAULT_PARTICLE_HUE, PARTICLE_HUE_BOUNDS),
            margin: within_f64(self.margin, PARTICLE_MARGIN_BOUNDS, DEFAULT_PARTICLE_MARGIN),
        }
    }
}

impl ParallaxConfig {
    fn normalized(self) -> Self {
        Self {
            hero_factor: within_f64(self.hero_factor, HERO_FACTOR_BOUNDS, DEFAULT_HERO_FACTOR),
            default_speed: within_f64(
                self.default_speed,
                PARALLAX_SPEED_BOUNDS,
                DEFAULT_PARALLAX_SPEED,
            ),
        }
    }
}

impl RevealConfig {
    fn normalized(self) -> Self {
        let selectors = non_empty_or(self.selectors, DEFAULT_REVEAL_SELECTORS);
        Self {
            threshold: within_f64(
                self.threshold,
                REVEAL_THRESHOLD_BOUNDS,
                DEFAULT_REVEAL_THRESHOLD,
            ),
            selectors,
        }
    }
}

impl ContactConfig {
    fn normalized(self) -> Self {
        Self {
            recipient: non_empty_or(self.recipient, DEFAULT_CONTACT_RECIPIENT),
            subject: non_empty_or(self.subject, DEFAULT_CONTACT_SUBJECT),
        }
    }
}

fn within<T: PartialOrd + Copy>(value: T, bounds: (T, T), default: T) -> T {
    if (bounds.0..=bounds.1).contains(&value) {
        value
    } else {
        default
    }
}

fn within_f64(value: f64, bounds: (f64, f64), default: f64) -> f64 {
    if value.is_finite() {
        within(value, bounds, default)
    } else {
        default
    }
}

fn non_empty_or(value: String, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}
