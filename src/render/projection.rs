//! Perspective projection from view space to window pixels.
//!
//! Lines are clipped against the near plane in view space, projected, then
//! clipped to the window rectangle so the rasterizer never walks off-screen.
//! Triangles are cut at the near plane into one or two pieces; the
//! rasterizer clips them to the window per pixel.

use std::f64::consts::FRAC_PI_2;

use crate::math::Vec3;

use super::camera::Camera;

/// Window-space point; `depth` is `1/z` (larger is nearer).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
    pub depth: f64,
}

#[derive(Clone, Copy, Debug)]
pub struct Projection {
    half_width: f64,
    half_height: f64,
    near: f64,
    far: f64,
    /// cot(fov / 2)
    focal: f64,
}

impl Projection {
    pub const DEFAULT_NEAR: f64 = 0.1;
    pub const DEFAULT_FAR: f64 = 20000.0;
    pub const DEFAULT_FOV: f64 = FRAC_PI_2;

    pub fn new(width: u32, height: u32, near: f64, far: f64, fov: f64) -> Self {
        Self {
            half_width: f64::from(width) / 2.0,
            half_height: f64::from(height) / 2.0,
            near,
            far,
            focal: 1.0 / (fov / 2.0).tan(),
        }
    }

    pub fn for_window(width: u32, height: u32) -> Self {
        Self::new(width, height, Self::DEFAULT_NEAR, Self::DEFAULT_FAR, Self::DEFAULT_FOV)
    }

    pub fn near(&self) -> f64 {
        self.near
    }

    pub fn far(&self) -> f64 {
        self.far
    }

    fn in_depth_range(&self, z: f64) -> bool {
        z >= self.near && z <= self.far
    }

    /// View-space point to window; caller guarantees `v.z >= near`.
    /// Horizontal scale follows the vertical one so pixels stay square.
    fn project_view(&self, v: Vec3) -> ScreenPoint {
        let inv_z = 1.0 / v.z;
        let scale = self.focal * self.half_height;
        ScreenPoint {
            x: self.half_width + v.x * scale * inv_z,
            y: self.half_height - v.y * scale * inv_z,
            depth: inv_z,
        }
    }

    pub fn project_point(&self, p: Vec3, camera: &Camera) -> Option<ScreenPoint> {
        let v = camera.view(p);
        if !self.in_depth_range(v.z) {
            return None;
        }
        let s = self.project_view(v);
        let inside = s.x >= 0.0
            && s.y >= 0.0
            && s.x < self.half_width * 2.0
            && s.y < self.half_height * 2.0;
        inside.then_some(s)
    }

    pub fn project_line(&self, start: Vec3, end: Vec3, camera: &Camera) -> Option<(ScreenPoint, ScreenPoint)> {
        let (a, b) = clip_near(camera.view(start), camera.view(end), self.near)?;
        let a = self.project_view(a);
        let b = self.project_view(b);
        let max_x = self.half_width * 2.0 - 1.0;
        let max_y = self.half_height * 2.0 - 1.0;
        clip_rect(a, b, max_x, max_y)
    }

    /// Project a world triangle, cutting off whatever lies in front of the
    /// near plane. Triangles entirely beyond the far plane are dropped.
    pub fn project_triangle(&self, tri: [Vec3; 3], camera: &Camera) -> ProjectedTriangles {
        let v = tri.map(|p| camera.view(p));
        let mut out = ProjectedTriangles::default();
        if v.iter().all(|p| p.z > self.far) {
            return out;
        }
        match clip_triangle_near(v, self.near) {
            NearClip::Outside => {}
            NearClip::One(a) => out.push(a.map(|p| self.project_view(p))),
            NearClip::Two(a, b) => {
                out.push(a.map(|p| self.project_view(p)));
                out.push(b.map(|p| self.project_view(p)));
            }
        }
        out
    }
}

/// Up to two window triangles left after near-plane clipping.
#[derive(Clone, Copy, Debug, Default)]
pub struct ProjectedTriangles {
    tris: [[ScreenPoint; 3]; 2],
    len: usize,
}

impl ProjectedTriangles {
    fn push(&mut self, tri: [ScreenPoint; 3]) {
        self.tris[self.len] = tri;
        self.len += 1;
    }

    pub fn as_slice(&self) -> &[[ScreenPoint; 3]] {
        &self.tris[..self.len]
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

enum NearClip {
    Outside,
    One([Vec3; 3]),
    Two([Vec3; 3], [Vec3; 3]),
}

/// Point on a-b where z crosses `near`
fn near_intercept(a: Vec3, b: Vec3, near: f64) -> Vec3 {
    a.lerp(b, (near - a.z) / (b.z - a.z))
}

/// Split a view-space triangle at `z = near`, keeping the far side.
fn clip_triangle_near(v: [Vec3; 3], near: f64) -> NearClip {
    let mut inside = [0usize; 3];
    let mut count = 0;
    for (i, p) in v.iter().enumerate() {
        if p.z >= near {
            inside[count] = i;
            count += 1;
        }
    }
    match count {
        0 => NearClip::Outside,
        1 => {
            let i = inside[0];
            let (o1, o2) = ((i + 1) % 3, (i + 2) % 3);
            NearClip::One([v[i], near_intercept(v[i], v[o1], near), near_intercept(v[i], v[o2], near)])
        }
        2 => {
            let (i1, i2) = (inside[0], inside[1]);
            let o = 3 - i1 - i2;
            let c1 = near_intercept(v[o], v[i1], near);
            let c2 = near_intercept(v[o], v[i2], near);
            NearClip::Two([v[i1], v[i2], c2], [v[i1], c2, c1])
        }
        _ => NearClip::One(v),
    }
}

/// Keep the part of segment a-b with `z >= near`.
fn clip_near(a: Vec3, b: Vec3, near: f64) -> Option<(Vec3, Vec3)> {
    match (a.z >= near, b.z >= near) {
        (true, true) => Some((a, b)),
        (false, false) => None,
        (true, false) => Some((a, a.lerp(b, (near - a.z) / (b.z - a.z)))),
        (false, true) => Some((b.lerp(a, (near - b.z) / (a.z - b.z)), b)),
    }
}

/// Liang-Barsky clip of a screen segment to [0, max_x] x [0, max_y].
/// Depth is interpolated linearly with the parameter.
fn clip_rect(a: ScreenPoint, b: ScreenPoint, max_x: f64, max_y: f64) -> Option<(ScreenPoint, ScreenPoint)> {
    if max_x < 0.0 || max_y < 0.0 {
        return None;
    }
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let mut t0 = 0.0f64;
    let mut t1 = 1.0f64;

    for (p, q) in [(-dx, a.x), (dx, max_x - a.x), (-dy, a.y), (dy, max_y - a.y)] {
        if p == 0.0 {
            if q < 0.0 {
                return None;
            }
            continue;
        }
        let r = q / p;
        if p < 0.0 {
            if r > t1 {
                return None;
            }
            t0 = t0.max(r);
        } else {
            if r < t0 {
                return None;
            }
            t1 = t1.min(r);
        }
    }

    let at = |t: f64| ScreenPoint {
        x: a.x + dx * t,
        y: a.y + dy * t,
        depth: a.depth + (b.depth - a.depth) * t,
    };
    Some((at(t0), at(t1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera_at(z: f64) -> Camera {
        Camera::new(Vec3::new(0.0, 0.0, z), 0.0, 0.0)
    }

    #[test]
    fn origin_projects_to_window_center() {
        let projection = Projection::for_window(800, 600);
        let p = projection.project_point(Vec3::zero(), &camera_at(-10.0)).unwrap();
        assert!((p.x - 400.0).abs() < 1e-9);
        assert!((p.y - 300.0).abs() < 1e-9);
        assert!((p.depth - 0.1).abs() < 1e-12);
    }

    #[test]
    fn up_is_up_on_screen() {
        let projection = Projection::for_window(800, 600);
        let p = projection.project_point(Vec3::new(0.0, 1.0, 0.0), &camera_at(-10.0)).unwrap();
        assert!(p.y < 300.0);
    }

    #[test]
    fn point_behind_camera_is_rejected() {
        let projection = Projection::for_window(800, 600);
        assert!(projection.project_point(Vec3::new(0.0, 0.0, -20.0), &camera_at(-10.0)).is_none());
    }

    #[test]
    fn line_crossing_near_plane_is_cut() {
        let projection = Projection::for_window(800, 600);
        let camera = camera_at(0.0);
        let (a, b) = projection
            .project_line(Vec3::new(0.0, 0.0, -5.0), Vec3::new(0.0, 0.0, 5.0), &camera)
            .unwrap();
        // the visible end sits on the near plane, depth 1/near
        let nearest = a.depth.max(b.depth);
        assert!((nearest - 10.0).abs() < 1e-6);
    }

    #[test]
    fn line_fully_behind_is_dropped() {
        let projection = Projection::for_window(800, 600);
        let camera = camera_at(0.0);
        assert!(projection
            .project_line(Vec3::new(-1.0, 0.0, -5.0), Vec3::new(1.0, 0.0, -5.0), &camera)
            .is_none());
    }

    #[test]
    fn long_line_is_clipped_to_window() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(-1.0);
        let (a, b) = projection
            .project_line(Vec3::new(-1000.0, 0.0, 0.0), Vec3::new(1000.0, 0.0, 0.0), &camera)
            .unwrap();
        for p in [a, b] {
            assert!(p.x >= 0.0 && p.x <= 99.0);
            assert!(p.y >= 0.0 && p.y <= 99.0);
        }
    }

    #[test]
    fn offscreen_line_is_dropped() {
        let a = ScreenPoint { x: -10.0, y: -10.0, depth: 1.0 };
        let b = ScreenPoint { x: -1.0, y: 50.0, depth: 1.0 };
        assert!(clip_rect(a, b, 99.0, 99.0).is_none());
    }

    #[test]
    fn triangle_behind_camera_is_dropped() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(0.0);
        let tri = [Vec3::new(0.0, 0.0, -5.0), Vec3::new(1.0, 0.0, -5.0), Vec3::new(0.0, 1.0, -1.0)];
        assert!(projection.project_triangle(tri, &camera).is_empty());
    }

    #[test]
    fn triangle_in_front_is_kept_whole() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(0.0);
        let tri = [Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 1.0, 6.0)];
        assert_eq!(projection.project_triangle(tri, &camera).as_slice().len(), 1);
    }

    #[test]
    fn one_vertex_behind_splits_in_two() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(0.0);
        let tri = [Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, 5.0), Vec3::new(0.0, 1.0, -1.0)];
        let parts = projection.project_triangle(tri, &camera);
        assert_eq!(parts.as_slice().len(), 2);
        for p in parts.as_slice().iter().flatten() {
            // nothing nearer than the near plane survives
            assert!(p.depth <= 1.0 / projection.near() + 1e-9);
        }
        let cut = parts.as_slice().iter().flatten().filter(|p| (p.depth - 10.0).abs() < 1e-6).count();
        assert!(cut >= 2);
    }

    #[test]
    fn two_vertices_behind_leave_one_piece() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(0.0);
        let tri = [Vec3::new(0.0, 0.0, 5.0), Vec3::new(1.0, 0.0, -5.0), Vec3::new(0.0, 1.0, -1.0)];
        let parts = projection.project_triangle(tri, &camera);
        assert_eq!(parts.as_slice().len(), 1);
        let [a, b, c] = parts.as_slice()[0];
        assert!((a.depth - 0.2).abs() < 1e-12);
        assert!((b.depth - 10.0).abs() < 1e-6);
        assert!((c.depth - 10.0).abs() < 1e-6);
    }

    #[test]
    fn triangle_beyond_far_plane_is_dropped() {
        let projection = Projection::for_window(100, 100);
        let camera = camera_at(0.0);
        let far = Projection::DEFAULT_FAR + 1.0;
        let tri = [Vec3::new(0.0, 0.0, far), Vec3::new(1.0, 0.0, far), Vec3::new(0.0, 1.0, far)];
        assert!(projection.project_triangle(tri, &camera).is_empty());
    }
}
