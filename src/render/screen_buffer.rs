//! RGBA frame buffer shared with the host.
//!
//! Layout is row-major, 4 bytes per pixel, so the data slice can be handed
//! to `ImageData` as-is. The depth buffer stores `1/z`: larger is nearer,
//! 0 means empty.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::color::Color;
use super::projection::ScreenPoint;

pub const BYTES_PER_PIXEL: usize = 4;

/// Depth used for overlays that must win every depth test.
const IN_FRONT_DEPTH: f64 = f64::MAX;

pub struct ScreenBuffer {
    width: u32,
    height: u32,
    data: Vec<u8>,
    depth: Vec<f64>,
}

impl ScreenBuffer {
    pub fn new(width: u32, height: u32) -> Self {
        let len = (width as usize) * (height as usize);
        let mut buffer = Self {
            width,
            height,
            data: vec![0; len * BYTES_PER_PIXEL],
            depth: vec![0.0; len],
        };
        buffer.clear(Color::BLACK);
        buffer
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }

    /// Fill with an opaque colour and reset depth.
    pub fn clear(&mut self, color: Color) {
        let rgba = color.to_rgba();
        #[cfg(feature = "parallel")]
        {
            self.data
                .par_chunks_exact_mut(BYTES_PER_PIXEL)
                .for_each(|px| px.copy_from_slice(&rgba));
            self.depth.par_iter_mut().for_each(|d| *d = 0.0);
        }
        #[cfg(not(feature = "parallel"))]
        {
            for px in self.data.chunks_exact_mut(BYTES_PER_PIXEL) {
                px.copy_from_slice(&rgba);
            }
            self.depth.fill(0.0);
        }
    }

    /// RGBA at (x, y), None when outside
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = self.index(x, y) * BYTES_PER_PIXEL;
        let mut out = [0u8; 4];
        out.copy_from_slice(&self.data[i..i + BYTES_PER_PIXEL]);
        Some(out)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Depth-tested write. Returns whether the pixel was written.
    #[inline]
    pub fn fill_point(&mut self, x: i32, y: i32, depth: f64, color: Color) -> bool {
        if x < 0 || y < 0 || x as u32 >= self.width || y as u32 >= self.height {
            return false;
        }
        let idx = self.index(x as u32, y as u32);
        if depth <= self.depth[idx] {
            return false;
        }
        self.depth[idx] = depth;
        let i = idx * BYTES_PER_PIXEL;
        self.data[i..i + BYTES_PER_PIXEL].copy_from_slice(&color.to_rgba());
        true
    }

    /// Axis-aligned rectangle, `min` inclusive, `max` exclusive.
    pub fn fill_rect(&mut self, min: (i32, i32), max: (i32, i32), depth: f64, color: Color) {
        let x0 = min.0.max(0);
        let y0 = min.1.max(0);
        let x1 = max.0.min(self.width as i32);
        let y1 = max.1.min(self.height as i32);
        for y in y0..y1 {
            for x in x0..x1 {
                self.fill_point(x, y, depth, color);
            }
        }
    }

    /// Bresenham line with depth interpolated along the major axis.
    ///
    /// Endpoints are expected to be clipped to the window already; anything
    /// outside is still discarded per pixel.
    pub fn draw_line(&mut self, start: ScreenPoint, end: ScreenPoint, color: Color, in_front: bool) {
        let (mut x, mut y) = (start.x.round() as i32, start.y.round() as i32);
        let (x1, y1) = (end.x.round() as i32, end.y.round() as i32);

        let dx = (x1 - x).abs();
        let dy = -(y1 - y).abs();
        let sx = if x < x1 { 1 } else { -1 };
        let sy = if y < y1 { 1 } else { -1 };
        let steps = dx.max(-dy).max(1);
        let mut err = dx + dy;
        let mut step = 0;

        loop {
            let depth = if in_front {
                IN_FRONT_DEPTH
            } else {
                start.depth + (end.depth - start.depth) * f64::from(step) / f64::from(steps)
            };
            self.fill_point(x, y, depth, color);

            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
            step += 1;
        }
    }

    /// Filled triangle via edge functions over its clipped bounding box.
    /// Depth is interpolated barycentrically; both windings are accepted.
    pub fn fill_triangle(&mut self, v: [ScreenPoint; 3], color: Color) -> bool {
        let area = edge(v[0], v[1], v[2].x, v[2].y);
        if area.abs() < 1e-9 {
            return false;
        }

        let min_x = v.iter().map(|p| p.x).fold(f64::INFINITY, f64::min).floor().max(0.0) as i32;
        let min_y = v.iter().map(|p| p.y).fold(f64::INFINITY, f64::min).floor().max(0.0) as i32;
        let max_x = v
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(f64::from(self.width) - 1.0) as i32;
        let max_y = v
            .iter()
            .map(|p| p.y)
            .fold(f64::NEG_INFINITY, f64::max)
            .ceil()
            .min(f64::from(self.height) - 1.0) as i32;

        let mut wrote = false;
        for y in min_y..=max_y {
            let py = f64::from(y) + 0.5;
            for x in min_x..=max_x {
                let px = f64::from(x) + 0.5;
                let w0 = edge(v[1], v[2], px, py) / area;
                let w1 = edge(v[2], v[0], px, py) / area;
                let w2 = edge(v[0], v[1], px, py) / area;
                if w0 < 0.0 || w1 < 0.0 || w2 < 0.0 {
                    continue;
                }
                let depth = w0 * v[0].depth + w1 * v[1].depth + w2 * v[2].depth;
                wrote |= self.fill_point(x, y, depth, color);
            }
        }
        wrote
    }
}

#[inline]
fn edge(a: ScreenPoint, b: ScreenPoint, px: f64, py: f64) -> f64 {
    (b.x - a.x) * (py - a.y) - (b.y - a.y) * (px - a.x)
}
