//! Drifting glow particles for the full-window background canvas.
//!
//! The field is pure state: the browser side resizes it, steps it once per
//! animation frame and paints each [`Particle`] with the [`Glow`] it
//! describes.

use fastrand::Rng;

use crate::config::{ParticleConfig, Span};

pub const CANVAS_ID: &str = "particles";

const GLOW_GRADIENT_SCALE: f64 = 6.0;
const GLOW_DISC_SCALE: f64 = 8.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub vx: f64,
    pub vy: f64,
    pub hue: f64,
}

/// Paint instructions for a particle: a radial gradient from the centre out
/// to `gradient_radius`, filled over a disc of `disc_radius`.
#[derive(Clone, Debug, PartialEq)]
pub struct Glow {
    pub gradient_radius: f64,
    pub disc_radius: f64,
    pub stops: [(f32, String); 3],
}

impl Particle {
    pub fn glow(&self) -> Glow {
        let hue = self.hue;
        Glow {
            gradient_radius: self.radius * GLOW_GRADIENT_SCALE,
            disc_radius: self.radius * GLOW_DISC_SCALE,
            stops: [
                (0.0, format!("hsla({hue},65%,60%,0.12)")),
                (0.5, format!("hsla({hue},55%,50%,0.06)")),
                (1.0, "transparent".to_string()),
            ],
        }
    }
}

pub struct ParticleField {
    config: ParticleConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    rng: Rng,
}

impl ParticleField {
    pub fn new(config: ParticleConfig, rng: Rng) -> Self {
        Self {
            config,
            width: 0.0,
            height: 0.0,
            particles: Vec::new(),
            rng,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Adopts the new surface size and replaces every particle.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width.max(0.0);
        self.height = height.max(0.0);

        let config = &self.config;
        let rng = &mut self.rng;
        let (width, height) = (self.width, self.height);
        self.particles = (0..config.count)
            .map(|_| Particle {
                x: sample(rng, Span::new(0.0, width)),
                y: sample(rng, Span::new(0.0, height)),
                radius: sample(rng, config.radius),
                vx: sample(rng, config.velocity_x),
                vy: sample(rng, config.velocity_y),
                hue: sample(rng, config.hue),
            })
            .collect();
    }

    /// Advances every particle by its velocity and wraps it across the
    /// margin band in the same frame.
    pub fn step(&mut self) {
        let margin = self.config.margin;
        let (width, height) = (self.width, self.height);
        for particle in &mut self.particles {
            particle.x = wrap(particle.x + particle.vx, width, margin);
            particle.y = wrap(particle.y + particle.vy, height, margin);
        }
    }
}

fn sample(rng: &mut Rng, span: Span) -> f64 {
    span.min + rng.f64() * (span.max - span.min)
}

fn wrap(value: f64, extent: f64, margin: f64) -> f64 {
    if value < -margin {
        extent + margin
    } else if value > extent + margin {
        -margin
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn field(seed: u64) -> ParticleField {
        ParticleField::new(ParticleConfig::default(), Rng::with_seed(seed))
    }

    #[test]
    fn starts_empty_until_sized() {
        assert!(field(1).particles().is_empty());
    }

    #[test]
    fn resize_regenerates_the_whole_collection() {
        let mut field = field(7);
        field.resize(800.0, 600.0);
        let before = field.particles().to_vec();
        field.resize(400.0, 300.0);

        assert_eq!(field.particles().len(), 50);
        assert_eq!(field.size(), (400.0, 300.0));
        assert_ne!(before, field.particles().to_vec());
        assert!(field.particles().iter().all(|p| p.x <= 400.0 && p.y <= 300.0));
    }

    #[test]
    fn particle_leaving_the_right_margin_reappears_on_the_left() {
        let mut field = field(3);
        field.resize(100.0, 100.0);
        field.particles = vec![Particle {
            x: 109.9,
            y: 50.0,
            radius: 1.0,
            vx: 0.5,
            vy: 0.0,
            hue: 200.0,
        }];

        field.step();
        assert_eq!(field.particles()[0].x, -10.0);
        assert_eq!(field.particles()[0].y, 50.0);
    }

    #[test]
    fn particle_leaving_the_top_margin_reappears_at_the_bottom() {
        let mut field = field(3);
        field.resize(100.0, 80.0);
        field.particles = vec![Particle {
            x: 50.0,
            y: -9.9,
            radius: 1.0,
            vx: 0.0,
            vy: -0.2,
            hue: 200.0,
        }];

        field.step();
        assert_eq!(field.particles()[0].y, 90.0);
    }

    #[test]
    fn glow_uses_three_stops_with_the_particle_hue() {
        let particle = Particle {
            x: 0.0,
            y: 0.0,
            radius: 2.0,
            vx: 0.0,
            vy: 0.0,
            hue: 240.0,
        };
        let glow = particle.glow();

        assert_eq!(glow.gradient_radius, 12.0);
        assert_eq!(glow.disc_radius, 16.0);
        assert_eq!(glow.stops[0], (0.0, "hsla(240,65%,60%,0.12)".to_string()));
        assert_eq!(glow.stops[1], (0.5, "hsla(240,55%,50%,0.06)".to_string()));
        assert_eq!(glow.stops[2], (1.0, "transparent".to_string()));
    }

    proptest! {
        #[test]
        fn resized_particles_respect_configured_ranges(
            seed in any::<u64>(),
            width in 0.0f64..4000.0,
            height in 0.0f64..4000.0
        ) {
            let config = ParticleConfig::default();
            let mut field = field(seed);
            field.resize(width, height);

            prop_assert_eq!(field.particles().len(), config.count);
            for p in field.particles() {
                prop_assert!((0.0..=width).contains(&p.x));
                prop_assert!((0.0..=height).contains(&p.y));
                prop_assert!(config.radius.contains(p.radius));
                prop_assert!(config.hue.contains(p.hue));
            }
        }

        #[test]
        fn stepping_keeps_particles_inside_the_margin_band(
            seed in any::<u64>(),
            frames in 1usize..400
        ) {
            let mut field = field(seed);
            field.resize(320.0, 240.0);
            for _ in 0..frames {
                field.step();
            }
            for p in field.particles() {
                prop_assert!((-10.0..=330.0).contains(&p.x));
                prop_assert!((-10.0..=250.0).contains(&p.y));
            }
        }
    }
}
