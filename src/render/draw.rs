use crate::math::{Mat3, Vec3};

use super::camera::Camera;
use super::color::Color;
use super::mesh::Mesh;
use super::projection::Projection;
use super::screen_buffer::ScreenBuffer;

/// Primitives that reached the rasterizer since the last `clear`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DrawCounters {
    pub lines: u32,
    pub triangles: u32,
}

/// World-space drawing on top of the screen buffer.
pub struct Draw3d {
    pub camera: Camera,
    projection: Projection,
    screen: ScreenBuffer,
    counters: DrawCounters,
}

impl Draw3d {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            camera: Camera::default(),
            projection: Projection::for_window(width, height),
            screen: ScreenBuffer::new(width, height),
            counters: DrawCounters::default(),
        }
    }

    pub fn screen(&self) -> &ScreenBuffer {
        &self.screen
    }

    pub fn counters(&self) -> DrawCounters {
        self.counters
    }

    pub fn clear(&mut self, color: Color) {
        self.screen.clear(color);
        self.counters = DrawCounters::default();
    }

    /// Flat shading: faces looking straight at the camera get full colour,
    /// grazing faces half.
    pub fn lit_color(color: Color, light: f64) -> Color {
        color.shade((1.0 - light) / 2.0)
    }

    pub fn draw_line(&mut self, start: Vec3, end: Vec3, color: Color, in_front: bool) {
        if let Some((a, b)) = self.projection.project_line(start, end, &self.camera) {
            self.screen.draw_line(a, b, color, in_front);
            self.counters.lines += 1;
        }
    }

    /// The 12 edges of an axis-aligned box.
    pub fn draw_aligned_cuboid(&mut self, min: Vec3, max: Vec3, color: Color) {
        let c = |x: bool, y: bool, z: bool| {
            Vec3::new(
                if x { max.x } else { min.x },
                if y { max.y } else { min.y },
                if z { max.z } else { min.z },
            )
        };
        for z in [false, true] {
            self.draw_line(c(false, false, z), c(true, false, z), color, false);
            self.draw_line(c(true, false, z), c(true, true, z), color, false);
            self.draw_line(c(true, true, z), c(false, true, z), color, false);
            self.draw_line(c(false, true, z), c(false, false, z), color, false);
        }
        for (x, y) in [(false, false), (true, false), (true, true), (false, true)] {
            self.draw_line(c(x, y, false), c(x, y, true), color, false);
        }
    }

    /// Back-face culled, flat-lit filled mesh.
    pub fn draw_mesh(&mut self, mesh: &Mesh, position: Vec3, orientation: &Mat3, color: Color) {
        let dir = self.camera.dir();
        for tri in &mesh.triangles {
            let world = tri.transformed(orientation, position);
            if world.normal.dot(self.camera.position - world.vertices[0]) < 0.0 {
                continue;
            }
            let parts = self.projection.project_triangle(world.vertices, &self.camera);
            let shade = Self::lit_color(color, world.normal.dot(dir));
            let mut wrote = false;
            for &screen in parts.as_slice() {
                wrote |= self.screen.fill_triangle(screen, shade);
            }
            if wrote {
                self.counters.triangles += 1;
            }
        }
    }

    /// Wireframe of every mesh triangle, no culling.
    pub fn draw_mesh_lines(&mut self, mesh: &Mesh, position: Vec3, orientation: &Mat3, color: Color, in_front: bool) {
        for tri in &mesh.triangles {
            let [a, b, c] = tri.transformed(orientation, position).vertices;
            self.draw_line(a, b, color, in_front);
            self.draw_line(b, c, color, in_front);
            self.draw_line(c, a, color, in_front);
        }
    }

    /// 6x6 marker centred on a world position.
    pub fn draw_position(&mut self, position: Vec3, color: Color) {
        if let Some(p) = self.projection.project_point(position, &self.camera) {
            let (x, y) = (p.x as i32, p.y as i32);
            self.screen.fill_rect((x - 3, y - 3), (x + 3, y + 3), p.depth, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit_pixels(draw: &Draw3d) -> usize {
        draw.screen().data().chunks(4).filter(|px| px[..3] != [0, 0, 0]).count()
    }

    fn looking_at_origin(width: u32, height: u32) -> Draw3d {
        let mut draw = Draw3d::new(width, height);
        draw.camera = Camera::new(Vec3::new(0.0, 0.0, -20.0), 0.0, 0.0);
        draw
    }

    #[test]
    fn cube_in_view_renders_front_faces_only() {
        let mut draw = looking_at_origin(64, 48);
        draw.draw_mesh(&Mesh::cuboid(Vec3::splat(4.0)), Vec3::zero(), &Mat3::identity(), Color::WHITE);
        // only the -z face is visible head-on: its two triangles
        assert_eq!(draw.counters().triangles, 2);
        assert!(lit_pixels(&draw) > 0);
        // centre pixel shaded at full intensity (normal opposes view dir)
        assert_eq!(draw.screen().pixel(32, 24), Some([255, 255, 255, 255]));
    }

    #[test]
    fn cube_behind_camera_draws_nothing() {
        let mut draw = looking_at_origin(64, 48);
        draw.draw_mesh(
            &Mesh::cuboid(Vec3::splat(4.0)),
            Vec3::new(0.0, 0.0, -40.0),
            &Mat3::identity(),
            Color::WHITE,
        );
        assert_eq!(draw.counters().triangles, 0);
        assert_eq!(lit_pixels(&draw), 0);
    }

    #[test]
    fn face_crossing_near_plane_is_cut_not_dropped() {
        let mut draw = Draw3d::new(64, 48);
        // the -x face spans z in [-1, 3] beside a camera at the origin
        draw.draw_mesh(&Mesh::cuboid(Vec3::splat(4.0)), Vec3::new(3.0, 0.0, 1.0), &Mat3::identity(), Color::WHITE);
        assert!(draw.counters().triangles > 0);
        assert!(lit_pixels(&draw) > 0);
    }

    #[test]
    fn box_outline_counts_twelve_edges() {
        let mut draw = looking_at_origin(64, 48);
        draw.draw_aligned_cuboid(Vec3::splat(-2.0), Vec3::splat(2.0), Color::RED);
        assert_eq!(draw.counters().lines, 12);
        draw.clear(Color::BLACK);
        assert_eq!(draw.counters(), DrawCounters::default());
        assert_eq!(lit_pixels(&draw), 0);
    }

    #[test]
    fn position_marker_is_six_pixels_wide() {
        let mut draw = looking_at_origin(64, 48);
        draw.draw_position(Vec3::zero(), Color::RED);
        assert_eq!(lit_pixels(&draw), 36);
    }

    #[test]
    fn wireframe_draws_every_edge_without_culling() {
        let mut draw = looking_at_origin(64, 48);
        draw.draw_mesh_lines(&Mesh::regular_tetrahedron(4.0), Vec3::zero(), &Mat3::identity(), Color::RED, true);
        // three lines per triangle, back faces included
        assert_eq!(draw.counters().lines, 12);
        assert_eq!(draw.counters().triangles, 0);
        assert!(lit_pixels(&draw) > 0);
    }
}
