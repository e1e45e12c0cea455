//! Drifting network of points joined by proximity lines (page background).

use crate::config::NetworkConfig;
use crate::rng::FxRng;

use super::{ACCENT, Scene, Surface, distance};

/// Pointer influence radius in pixels.
const POINTER_RADIUS: f64 = 100.0;
/// Fraction of the pointer delta applied per frame at zero distance.
const POINTER_PUSH: f64 = 0.01;
const LINE_WIDTH: f64 = 0.5;
const NODE_FILL: &str = "#00D9FF";

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub radius: f64,
}

pub struct ParticleField {
    config: NetworkConfig,
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    pointer: Option<(f64, f64)>,
    rng: FxRng,
}

impl ParticleField {
    pub fn new(config: NetworkConfig, width: f64, height: f64, rng: FxRng) -> Self {
        let mut field = Self {
            config,
            width,
            height,
            particles: Vec::new(),
            pointer: None,
            rng,
        };
        field.populate();
        field
    }

    fn populate(&mut self) {
        let speed = self.config.node_speed;
        let radius = self.config.node_size;
        let (w, h) = (self.width, self.height);
        let rng = &mut self.rng;
        self.particles = (0..self.config.node_count)
            .map(|_| Particle {
                x: rng.next_f64() * w,
                y: rng.next_f64() * h,
                vx: (rng.next_f64() - 0.5) * speed,
                vy: (rng.next_f64() - 0.5) * speed,
                radius,
            })
            .collect();
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Overwrite the particle set, e.g. to pin a layout. The count becomes
    /// whatever `particles` holds.
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.particles = particles;
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Pointer position in canvas coordinates; `None` when unknown.
    pub fn set_pointer(&mut self, pointer: Option<(f64, f64)>) {
        self.pointer = pointer;
    }

    pub fn pointer(&self) -> Option<(f64, f64)> {
        self.pointer
    }

    /// Opacity of the line joining two particles `dist` apart, or `None` when
    /// they are too far apart to be linked.
    pub fn connection_opacity(&self, dist: f64) -> Option<f64> {
        let max = self.config.max_distance;
        if dist < max {
            Some((1.0 - dist / max) * self.config.line_opacity)
        } else {
            None
        }
    }
}

impl Scene for ParticleField {
    fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.populate();
    }

    fn update(&mut self) {
        let (w, h) = (self.width, self.height);
        let pointer = self.pointer;
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;

            // Flip velocity only; the position may sit outside for this frame.
            if p.x < 0.0 || p.x > w {
                p.vx = -p.vx;
            }
            if p.y < 0.0 || p.y > h {
                p.vy = -p.vy;
            }

            if let Some((mx, my)) = pointer {
                let dx = mx - p.x;
                let dy = my - p.y;
                let dist = (dx * dx + dy * dy).sqrt();
                if dist < POINTER_RADIUS {
                    let force = (POINTER_RADIUS - dist) / POINTER_RADIUS;
                    p.x -= dx * force * POINTER_PUSH;
                    p.y -= dy * force * POINTER_PUSH;
                }
            }
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.clear(self.width, self.height);

        for (i, a) in self.particles.iter().enumerate() {
            for b in &self.particles[i + 1..] {
                let dist = distance(a.x, a.y, b.x, b.y);
                if let Some(opacity) = self.connection_opacity(dist) {
                    surface.line(a.x, a.y, b.x, b.y, ACCENT.with_alpha(opacity), LINE_WIDTH);
                }
            }
        }

        for p in &self.particles {
            surface.fill_circle(p.x, p.y, p.radius, NODE_FILL);
        }
    }
}
