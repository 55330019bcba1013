use std::cell::RefCell;
use std::f64::consts::TAU;
use std::rc::Rc;

use fastrand::Rng;
use gloo_events::EventListener;
use gloo_render::{request_animation_frame, AnimationFrame};
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::dom;
use crate::config::ParticleConfig;
use crate::error::{PortfolioError, Result};
use crate::particles::{ParticleField, CANVAS_ID};

struct Renderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
    field: RefCell<ParticleField>,
    frame: RefCell<Option<AnimationFrame>>,
}

pub fn install(config: &ParticleConfig) -> Result<()> {
    let canvas = dom::element_by_id::<HtmlCanvasElement>(CANVAS_ID)?;
    let context = canvas
        .get_context("2d")?
        .ok_or(PortfolioError::MissingElement("canvas 2d context"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(|_| PortfolioError::Js("unexpected 2d context type".to_string()))?;

    let renderer = Rc::new(Renderer {
        canvas,
        context,
        field: RefCell::new(ParticleField::new(config.clone(), Rng::new())),
        frame: RefCell::new(None),
    });
    renderer.resize();

    let on_resize = Rc::clone(&renderer);
    EventListener::new(&dom::browser_window()?, "resize", move |_| on_resize.resize()).forget();

    renderer.animate();
    Ok(())
}

impl Renderer {
    fn resize(&self) {
        let (width, height) = dom::viewport_size();
        self.canvas.set_width(width.max(0.0) as u32);
        self.canvas.set_height(height.max(0.0) as u32);
        self.field.borrow_mut().resize(
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    fn animate(self: &Rc<Self>) {
        self.frame.borrow_mut().take();
        self.draw();

        let next = Rc::clone(self);
        let handle = request_animation_frame(move |_| next.animate());
        *self.frame.borrow_mut() = Some(handle);
    }

    fn draw(&self) {
        let mut field = self.field.borrow_mut();
        let (width, height) = field.size();
        self.context.clear_rect(0.0, 0.0, width, height);
        field.step();

        for particle in field.particles() {
            let glow = particle.glow();
            let Ok(gradient) = self.context.create_radial_gradient(
                particle.x,
                particle.y,
                0.0,
                particle.x,
                particle.y,
                glow.gradient_radius,
            ) else {
                continue;
            };
            for (offset, color) in &glow.stops {
                let _ = gradient.add_color_stop(*offset, color);
            }

            self.context.begin_path();
            self.context.set_fill_style_canvas_gradient(&gradient);
            let _ = self
                .context
                .arc(particle.x, particle.y, glow.disc_radius, 0.0, TAU);
            self.context.fill();
        }
    }
}
