//! Per-frame canvas scenes.
//!
//! A scene owns a small set of simulated points, advances them once per frame
//! and draws itself onto a [`Surface`]. Scenes never touch the DOM: the browser
//! glue wraps a `CanvasRenderingContext2d` in [`CanvasSurface`], while tests use
//! [`RecordingSurface`] and drive frames by hand through [`AnimationHost`].

mod canvas;
pub mod orbit_cloud;
pub mod particle_field;
mod recording;

pub use canvas::CanvasSurface;
pub use orbit_cloud::{Filter, OrbitCloud, OrbitNode, Tooltip};
pub use particle_field::{Particle, ParticleField};
pub use recording::{DrawOp, RecordingSurface};

/// Accent used for connection lines in both scenes.
pub const ACCENT: Rgba = Rgba::new(0, 217, 255, 1.0);

/// Straight-line color with a float alpha, rendered as CSS `rgba()`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn with_alpha(self, a: f64) -> Self {
        Self { a, ..self }
    }

    pub fn to_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

/// 2D drawing target. Mirrors the handful of canvas calls the scenes need.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, color: Rgba, width: f64);
    /// `fill` is any CSS color string.
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, fill: &str);
    /// Shadow glow applied to following fills; `blur == 0` turns it off.
    fn set_glow(&mut self, blur: f64, color: &str);
    /// Text centered horizontally and vertically on `(x, y)`.
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, fill: &str);
}

/// Something that can be stepped and drawn once per frame.
pub trait Scene {
    /// Adopt a new surface size. Prior simulation state is discarded.
    fn resize(&mut self, width: f64, height: f64);
    fn update(&mut self);
    fn render(&self, surface: &mut dyn Surface);
}

/// Pairs a scene with the surface it draws on and runs whole frames.
///
/// In the browser a `requestAnimationFrame` loop calls [`AnimationHost::frame`];
/// tests call it directly, which makes the frame clock deterministic.
pub struct AnimationHost<S, D> {
    scene: S,
    surface: D,
    frames: u64,
}

impl<S: Scene, D: Surface> AnimationHost<S, D> {
    pub fn new(scene: S, surface: D) -> Self {
        Self {
            scene,
            surface,
            frames: 0,
        }
    }

    /// One simulation step followed by one render.
    pub fn frame(&mut self) {
        self.scene.update();
        self.scene.render(&mut self.surface);
        self.frames += 1;
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn scene(&self) -> &S {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut S {
        &mut self.scene
    }

    pub fn surface(&self) -> &D {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }
}

pub(crate) fn distance(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    ((x2 - x1).powi(2) + (y2 - y1).powi(2)).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter {
        updates: u32,
        size: (f64, f64),
    }

    impl Scene for Counter {
        fn resize(&mut self, width: f64, height: f64) {
            self.size = (width, height);
        }
        fn update(&mut self) {
            self.updates += 1;
        }
        fn render(&self, surface: &mut dyn Surface) {
            surface.clear(self.size.0, self.size.1);
        }
    }

    #[test]
    fn host_frame_updates_then_renders() {
        let scene = Counter {
            updates: 0,
            size: (10.0, 20.0),
        };
        let mut host = AnimationHost::new(scene, RecordingSurface::new());
        host.frame();
        host.frame();
        assert_eq!(host.frames(), 2);
        assert_eq!(host.scene().updates, 2);
        assert_eq!(
            host.surface().ops(),
            &[
                DrawOp::Clear {
                    width: 10.0,
                    height: 20.0
                },
                DrawOp::Clear {
                    width: 10.0,
                    height: 20.0
                },
            ]
        );
    }

    #[test]
    fn rgba_css_formatting() {
        assert_eq!(ACCENT.with_alpha(0.15).to_css(), "rgba(0, 217, 255, 0.15)");
    }

    #[test]
    fn distance_is_euclidean() {
        assert!((distance(0.0, 0.0, 3.0, 4.0) - 5.0).abs() < 1e-12);
    }
}
