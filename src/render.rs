//! Surface abstraction and shape rasterization dispatch.
//!
//! The simulator owns the geometry: which corners a square or triangle has,
//! how rotation is applied, how opacity turns into paint alpha. A [`Surface`]
//! only needs to fill circles and convex polygons into its backing raster.
//!
//! Every frame redraws from a cleared surface; there is no accumulation.

use glam::{Vec2, Vec3};

use crate::burst::Burst;
use crate::particle::Shape;

/// Triangle extent relative to particle size.
const TRIANGLE_SCALE: f32 = 1.4;

/// Fill style for one shape.
#[derive(Clone, Copy, Debug)]
pub struct Paint {
    /// RGB, each channel in 0..=1.
    pub color: Vec3,
    /// Alpha in 0..=1, already floored at zero.
    pub alpha: f32,
}

/// A raster target sized in device pixels.
///
/// Implementations must treat `resize` as a backing-store operation only;
/// nothing about in-flight particle physics depends on raster size.
pub trait Surface {
    /// Width and height in device pixels.
    fn dimensions(&self) -> Vec2;

    /// Reset every pixel to fully transparent.
    fn clear(&mut self);

    /// Fill a circle centered at `center`.
    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint);

    /// Fill a convex polygon given its corners in order.
    fn fill_convex(&mut self, corners: &[Vec2], paint: Paint);

    /// Resize the backing raster, discarding current contents.
    fn resize(&mut self, width: u32, height: u32);
}

/// Clear the surface and rasterize every alive particle.
///
/// A particle whose age has exceeded its lifespan is skipped, including on
/// the tick it expired.
pub fn draw(burst: &Burst, surface: &mut impl Surface) {
    surface.clear();

    for p in burst.particles() {
        if !p.is_alive() {
            continue;
        }
        let paint = Paint {
            color: burst.color_of(p),
            alpha: p.opacity().max(0.0),
        };
        let size = p.size();
        let rot = Vec2::from_angle(p.rotation);

        match p.shape {
            Shape::Circle => surface.fill_circle(p.position, size, paint),
            Shape::Square => {
                let corners = [
                    Vec2::new(-size, -size),
                    Vec2::new(size, -size),
                    Vec2::new(size, size),
                    Vec2::new(-size, size),
                ]
                .map(|c| p.position + rot.rotate(c));
                surface.fill_convex(&corners, paint);
            }
            Shape::Triangle => {
                let s = size * TRIANGLE_SCALE;
                let corners = [Vec2::new(0.0, -s), Vec2::new(s, s), Vec2::new(-s, s)]
                    .map(|c| p.position + rot.rotate(c));
                surface.fill_convex(&corners, paint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BurstConfig;
    use crate::rng::SeededRandom;

    /// Surface that records calls instead of rasterizing.
    #[derive(Default)]
    struct Recording {
        clears: usize,
        fills: Vec<Paint>,
    }

    impl Surface for Recording {
        fn dimensions(&self) -> Vec2 {
            Vec2::new(100.0, 100.0)
        }
        fn clear(&mut self) {
            self.clears += 1;
        }
        fn fill_circle(&mut self, _center: Vec2, _radius: f32, paint: Paint) {
            self.fills.push(paint);
        }
        fn fill_convex(&mut self, _corners: &[Vec2], paint: Paint) {
            self.fills.push(paint);
        }
        fn resize(&mut self, _width: u32, _height: u32) {}
    }

    #[test]
    fn test_draw_clears_then_fills_each_alive_particle() {
        let mut rng = SeededRandom::new(8);
        let burst = Burst::new(
            &BurstConfig::new().with_particle_count(25),
            Vec2::new(100.0, 100.0),
            &mut rng,
        );

        let mut surface = Recording::default();
        draw(&burst, &mut surface);
        assert_eq!(surface.clears, 1);
        assert_eq!(surface.fills.len(), 25);
    }

    #[test]
    fn test_expired_particles_are_not_rasterized() {
        let mut rng = SeededRandom::new(8);
        let mut burst = Burst::new(
            &BurstConfig::new().with_particle_count(12).with_ticks(4),
            Vec2::new(100.0, 100.0),
            &mut rng,
        );
        while burst.advance() > 0 {}

        let mut surface = Recording::default();
        draw(&burst, &mut surface);
        assert_eq!(surface.clears, 1);
        assert!(surface.fills.is_empty());
    }

    #[test]
    fn test_alpha_is_floored_at_zero() {
        let mut rng = SeededRandom::new(8);
        let mut burst = Burst::new(
            &BurstConfig::new().with_particle_count(40).with_ticks(10),
            Vec2::new(100.0, 100.0),
            &mut rng,
        );

        loop {
            let alive = burst.advance();
            let mut surface = Recording::default();
            draw(&burst, &mut surface);
            for paint in &surface.fills {
                assert!(paint.alpha >= 0.0 && paint.alpha <= 1.0);
            }
            if alive == 0 {
                break;
            }
        }
    }
}
