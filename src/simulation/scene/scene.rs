use crate::core::config::SceneSettings;
use crate::math::{Mat3, Vec3};
use crate::render::{Color, ColorRamp, Draw3d, Mesh};

const SHAPE_COUNT: usize = 3;

/// Body shapes of the preview lattice, cycled along the `j` axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Shape {
    Cuboid = 0,
    Icosahedron = 1,
    Tetrahedron = 2,
}

impl Shape {
    fn cycle(j: usize) -> Self {
        match j % SHAPE_COUNT {
            0 => Shape::Cuboid,
            1 => Shape::Icosahedron,
            _ => Shape::Tetrahedron,
        }
    }
}

/// One lattice body. Pose is a pure function of the frame number.
#[derive(Clone, Debug)]
pub(crate) struct SceneBody {
    pub(crate) position: Vec3,
    pub(crate) color: Color,
    pub(crate) shape: Shape,
    /// Initial yaw so neighbours do not spin in lockstep
    pub(crate) phase: f64,
}

/// Static preview: an enclosing box and an n*n*n lattice of bodies.
pub(crate) struct Scene {
    bounds_min: Vec3,
    bounds_max: Vec3,
    meshes: [Mesh; SHAPE_COUNT],
    bodies: Vec<SceneBody>,
    spin_rate: f64,
}

impl Scene {
    pub(crate) fn from_settings(settings: &SceneSettings) -> Self {
        let half = settings.bounding_box_size / 2.0;
        let n = settings.density as usize;
        let dim = settings.body_size;
        // equal gaps between the walls and every pair of neighbours
        let gap = (settings.bounding_box_size - dim * n as f64) / (n + 1) as f64;
        let center = |i: usize| -half + gap * (i + 1) as f64 + dim * (i as f64 + 0.5);

        let mut ramp = ColorRamp::new(n * n * n);
        let mut bodies = Vec::with_capacity(n * n * n);
        for i in 0..n {
            for j in 0..n {
                for k in 0..n {
                    bodies.push(SceneBody {
                        position: Vec3::new(center(i), center(j), center(k)),
                        color: ramp.next_color(),
                        shape: Shape::cycle(j),
                        phase: (i + 2 * j + 3 * k) as f64 * 0.35,
                    });
                }
            }
        }

        Self {
            bounds_min: Vec3::splat(-half),
            bounds_max: Vec3::splat(half),
            meshes: [
                Mesh::cuboid(Vec3::splat(dim)),
                Mesh::regular_icosahedron(dim / 2.0),
                Mesh::regular_tetrahedron(dim / 2.0),
            ],
            bodies,
            spin_rate: settings.spin_rate,
        }
    }

    pub(crate) fn bodies(&self) -> &[SceneBody] {
        &self.bodies
    }

    pub(crate) fn mesh(&self, shape: Shape) -> &Mesh {
        &self.meshes[shape as usize]
    }

    pub(crate) fn orientation(&self, body: &SceneBody, frame: u64) -> Mat3 {
        Mat3::rotation_y(body.phase + frame as f64 * self.spin_rate)
    }

    pub(crate) fn draw(&self, draw: &mut Draw3d, frame: u64) {
        for body in &self.bodies {
            let orientation = self.orientation(body, frame);
            draw.draw_mesh(self.mesh(body.shape), body.position, &orientation, body.color);
        }
        draw.draw_aligned_cuboid(self.bounds_min, self.bounds_max, Color::RED);
    }

    /// Wireframe view: mesh edges and a marker on every body centre.
    pub(crate) fn draw_debug(&self, draw: &mut Draw3d, frame: u64) {
        for body in &self.bodies {
            let orientation = self.orientation(body, frame);
            draw.draw_mesh_lines(self.mesh(body.shape), body.position, &orientation, Color::GREEN, false);
            draw.draw_position(body.position, body.color);
        }
        draw.draw_aligned_cuboid(self.bounds_min, self.bounds_max, Color::RED);
    }
}
