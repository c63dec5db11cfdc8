//! CPU rasterizer backing the windowed launcher.
//!
//! [`PixelSurface`] keeps a premultiplied RGBA8 buffer and point-samples
//! shapes at pixel centers: a distance test for circles, a half-plane test
//! for convex polygons. Good enough for confetti-sized shapes; this is not a
//! general-purpose renderer.

use glam::{Vec2, Vec3};

use crate::render::{Paint, Surface};

/// RGBA8 raster, premultiplied alpha, row-major from the top-left.
pub struct PixelSurface {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl PixelSurface {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw premultiplied RGBA8 bytes, ready for texture upload.
    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    /// Multiply every channel by `factor`. The launcher uses repeated calls
    /// for its teardown fade-out.
    pub fn fade(&mut self, factor: f32) {
        let factor = factor.clamp(0.0, 1.0);
        for byte in &mut self.pixels {
            *byte = (*byte as f32 * factor) as u8;
        }
    }

    /// Source-over blend of a straight-alpha color into one pixel.
    fn blend(&mut self, x: u32, y: u32, color: Vec3, alpha: f32) {
        let i = ((y * self.width + x) * 4) as usize;
        let src = [
            color.x * alpha * 255.0,
            color.y * alpha * 255.0,
            color.z * alpha * 255.0,
            alpha * 255.0,
        ];
        let keep = 1.0 - alpha;
        for (offset, s) in src.iter().enumerate() {
            let d = self.pixels[i + offset] as f32;
            self.pixels[i + offset] = (s + d * keep).min(255.0) as u8;
        }
    }

    /// Clamped pixel bounding box for a set of points.
    fn clip_box(&self, min: Vec2, max: Vec2) -> Option<(u32, u32, u32, u32)> {
        if self.width == 0 || self.height == 0 {
            return None;
        }
        let x0 = min.x.floor().max(0.0) as u32;
        let y0 = min.y.floor().max(0.0) as u32;
        let x1 = (max.x.ceil() as i64).clamp(0, self.width as i64 - 1) as u32;
        let y1 = (max.y.ceil() as i64).clamp(0, self.height as i64 - 1) as u32;
        if min.x > self.width as f32 || min.y > self.height as f32 || max.x < 0.0 || max.y < 0.0 {
            return None;
        }
        Some((x0, y0, x1, y1))
    }
}

impl Surface for PixelSurface {
    fn dimensions(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    fn clear(&mut self) {
        self.pixels.fill(0);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, paint: Paint) {
        if paint.alpha <= 0.0 || radius <= 0.0 {
            return;
        }
        let r = Vec2::splat(radius);
        let Some((x0, y0, x1, y1)) = self.clip_box(center - r, center + r) else {
            return;
        };
        let r2 = radius * radius;
        for y in y0..=y1 {
            for x in x0..=x1 {
                let at = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if at.distance_squared(center) <= r2 {
                    self.blend(x, y, paint.color, paint.alpha);
                }
            }
        }
    }

    fn fill_convex(&mut self, corners: &[Vec2], paint: Paint) {
        if paint.alpha <= 0.0 || corners.len() < 3 {
            return;
        }
        let mut min = corners[0];
        let mut max = corners[0];
        for c in &corners[1..] {
            min = min.min(*c);
            max = max.max(*c);
        }
        let Some((x0, y0, x1, y1)) = self.clip_box(min, max) else {
            return;
        };

        for y in y0..=y1 {
            for x in x0..=x1 {
                let at = Vec2::new(x as f32 + 0.5, y as f32 + 0.5);
                if inside_convex(corners, at) {
                    self.blend(x, y, paint.color, paint.alpha);
                }
            }
        }
    }

    fn resize(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
        self.pixels = vec![0; (width * height * 4) as usize];
    }
}

/// Point-in-convex-polygon test, winding-agnostic: the point is inside when
/// every edge cross product carries the same sign (zero counts as inside).
fn inside_convex(corners: &[Vec2], at: Vec2) -> bool {
    let mut sign = 0.0_f32;
    for (i, a) in corners.iter().enumerate() {
        let b = corners[(i + 1) % corners.len()];
        let edge = b - *a;
        let cross = edge.perp_dot(at - *a);
        if cross != 0.0 {
            if sign != 0.0 && cross.signum() != sign {
                return false;
            }
            sign = cross.signum();
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alpha_at(surface: &PixelSurface, x: u32, y: u32) -> u8 {
        surface.pixels()[((y * surface.width() + x) * 4 + 3) as usize]
    }

    fn paint() -> Paint {
        Paint {
            color: Vec3::new(1.0, 0.5, 0.0),
            alpha: 1.0,
        }
    }

    #[test]
    fn test_circle_covers_center_not_corner() {
        let mut surface = PixelSurface::new(20, 20);
        surface.fill_circle(Vec2::new(10.0, 10.0), 4.0, paint());
        assert!(alpha_at(&surface, 10, 10) > 0);
        assert_eq!(alpha_at(&surface, 0, 0), 0);
        assert_eq!(alpha_at(&surface, 10, 15), 0);
    }

    #[test]
    fn test_square_fill() {
        let mut surface = PixelSurface::new(20, 20);
        let corners = [
            Vec2::new(5.0, 5.0),
            Vec2::new(15.0, 5.0),
            Vec2::new(15.0, 15.0),
            Vec2::new(5.0, 15.0),
        ];
        surface.fill_convex(&corners, paint());
        assert!(alpha_at(&surface, 10, 10) > 0);
        assert!(alpha_at(&surface, 6, 6) > 0);
        assert_eq!(alpha_at(&surface, 2, 10), 0);
    }

    #[test]
    fn test_winding_does_not_matter() {
        let cw = [
            Vec2::new(5.0, 5.0),
            Vec2::new(15.0, 5.0),
            Vec2::new(10.0, 15.0),
        ];
        let ccw = [cw[2], cw[1], cw[0]];
        assert!(inside_convex(&cw, Vec2::new(10.0, 8.0)));
        assert!(inside_convex(&ccw, Vec2::new(10.0, 8.0)));
        assert!(!inside_convex(&cw, Vec2::new(1.0, 1.0)));
        assert!(!inside_convex(&ccw, Vec2::new(1.0, 1.0)));
    }

    #[test]
    fn test_clear_and_partial_alpha_blend() {
        let mut surface = PixelSurface::new(4, 4);
        let half = Paint {
            color: Vec3::ONE,
            alpha: 0.5,
        };
        surface.fill_circle(Vec2::new(2.0, 2.0), 3.0, half);
        let first = alpha_at(&surface, 2, 2);
        assert!(first > 100 && first < 150);

        // Blending the same paint again moves alpha toward opaque.
        surface.fill_circle(Vec2::new(2.0, 2.0), 3.0, half);
        assert!(alpha_at(&surface, 2, 2) > first);

        surface.clear();
        assert!(surface.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_offscreen_shapes_are_clipped() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(Vec2::new(-50.0, -50.0), 3.0, paint());
        surface.fill_circle(Vec2::new(50.0, 4.0), 3.0, paint());
        assert!(surface.pixels().iter().all(|&b| b == 0));

        // Partially visible shapes still land.
        surface.fill_circle(Vec2::new(0.0, 4.0), 3.0, paint());
        assert!(alpha_at(&surface, 0, 4) > 0);
    }

    #[test]
    fn test_resize_discards_contents() {
        let mut surface = PixelSurface::new(8, 8);
        surface.fill_circle(Vec2::new(4.0, 4.0), 2.0, paint());
        surface.resize(16, 16);
        assert_eq!(surface.dimensions(), Vec2::new(16.0, 16.0));
        assert!(surface.pixels().iter().all(|&b| b == 0));
    }

    #[test]
    fn test_fade_steps_toward_transparent() {
        let mut surface = PixelSurface::new(4, 4);
        surface.fill_circle(Vec2::new(2.0, 2.0), 3.0, paint());
        let before = alpha_at(&surface, 2, 2);
        surface.fade(0.5);
        let after = alpha_at(&surface, 2, 2);
        assert!(after < before);
        for _ in 0..16 {
            surface.fade(0.5);
        }
        assert_eq!(alpha_at(&surface, 2, 2), 0);
    }
}
