use crate::math::{Mat3, Vec3};

/// Counter-clockwise (seen from outside) triangle with its outward normal
#[derive(Clone, Copy, Debug)]
pub struct Triangle {
    pub vertices: [Vec3; 3],
    pub normal: Vec3,
}

impl Triangle {
    pub fn new(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let normal = (b - a).cross(c - a).normalize();
        Self { vertices: [a, b, c], normal }
    }

    /// Triangle of a convex solid centred at the origin, wound so the
    /// normal points away from the centre.
    pub fn outward(a: Vec3, b: Vec3, c: Vec3) -> Self {
        let tri = Self::new(a, b, c);
        if tri.normal.dot(a + b + c) < 0.0 {
            Self::new(a, c, b)
        } else {
            tri
        }
    }

    /// Rotate then translate into world space
    pub fn transformed(&self, orientation: &Mat3, position: Vec3) -> Triangle {
        let [a, b, c] = self.vertices.map(|v| orientation.mul_vec(v) + position);
        Triangle::new(a, b, c)
    }
}

/// Triangle mesh in body-local coordinates
#[derive(Clone, Debug, Default)]
pub struct Mesh {
    pub triangles: Vec<Triangle>,
}

impl Mesh {
    /// Axis-aligned box of the given edge lengths centred at the origin.
    pub fn cuboid(dim: Vec3) -> Self {
        let h = dim * 0.5;
        let corner = |sx: f64, sy: f64, sz: f64| Vec3::new(sx * h.x, sy * h.y, sz * h.z);

        let quads = [
            // -z
            [corner(-1.0, -1.0, -1.0), corner(-1.0, 1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, -1.0, -1.0)],
            // +z
            [corner(-1.0, -1.0, 1.0), corner(1.0, -1.0, 1.0), corner(1.0, 1.0, 1.0), corner(-1.0, 1.0, 1.0)],
            // -x
            [corner(-1.0, -1.0, -1.0), corner(-1.0, -1.0, 1.0), corner(-1.0, 1.0, 1.0), corner(-1.0, 1.0, -1.0)],
            // +x
            [corner(1.0, -1.0, -1.0), corner(1.0, 1.0, -1.0), corner(1.0, 1.0, 1.0), corner(1.0, -1.0, 1.0)],
            // -y
            [corner(-1.0, -1.0, -1.0), corner(1.0, -1.0, -1.0), corner(1.0, -1.0, 1.0), corner(-1.0, -1.0, 1.0)],
            // +y
            [corner(-1.0, 1.0, -1.0), corner(-1.0, 1.0, 1.0), corner(1.0, 1.0, 1.0), corner(1.0, 1.0, -1.0)],
        ];

        let mut triangles = Vec::with_capacity(12);
        for [a, b, c, d] in quads {
            triangles.push(Triangle::new(a, b, c));
            triangles.push(Triangle::new(a, c, d));
        }
        Self { triangles }
    }

    /// Regular icosahedron with all 12 vertices at distance `radius`.
    pub fn regular_icosahedron(radius: f64) -> Self {
        let golden = (1.0 + 5f64.sqrt()) * 0.5;
        let w = (radius * radius / (1.0 + 1.0 / (golden * golden))).sqrt();
        let h = w / golden;
        let v = [
            Vec3::new(-h, 0.0, w),
            Vec3::new(h, 0.0, w),
            Vec3::new(-h, 0.0, -w),
            Vec3::new(h, 0.0, -w),
            Vec3::new(0.0, w, h),
            Vec3::new(0.0, w, -h),
            Vec3::new(0.0, -w, h),
            Vec3::new(0.0, -w, -h),
            Vec3::new(w, h, 0.0),
            Vec3::new(-w, h, 0.0),
            Vec3::new(w, -h, 0.0),
            Vec3::new(-w, -h, 0.0),
        ];
        const FACES: [[usize; 3]; 20] = [
            [4, 0, 1], [9, 0, 4], [5, 9, 4], [5, 4, 8], [8, 4, 1],
            [10, 8, 1], [3, 8, 10], [3, 5, 8], [2, 5, 3], [7, 2, 3],
            [10, 7, 3], [6, 7, 10], [11, 7, 6], [0, 11, 6], [1, 0, 6],
            [1, 6, 10], [0, 9, 11], [11, 9, 2], [2, 9, 5], [2, 7, 11],
        ];
        Self {
            triangles: FACES
                .iter()
                .map(|&[a, b, c]| Triangle::outward(v[a], v[b], v[c]))
                .collect(),
        }
    }

    /// Icosahedron subdivided `depth` times, new vertices pushed out to the sphere.
    pub fn icosphere(radius: f64, depth: u8) -> Self {
        let mut mesh = Self::regular_icosahedron(radius);
        let on_sphere = |v: Vec3| v.normalize() * radius;
        for _ in 0..depth {
            let mut triangles = Vec::with_capacity(mesh.triangles.len() * 4);
            for tri in &mesh.triangles {
                let [a, b, c] = tri.vertices;
                let ab = on_sphere(a + b);
                let bc = on_sphere(b + c);
                let ca = on_sphere(c + a);
                triangles.push(Triangle::outward(a, ab, ca));
                triangles.push(Triangle::outward(ab, b, bc));
                triangles.push(Triangle::outward(ca, bc, c));
                triangles.push(Triangle::outward(ab, bc, ca));
            }
            mesh.triangles = triangles;
        }
        mesh
    }

    /// Regular tetrahedron inscribed in a sphere of `radius`: alternate
    /// corners of a cube.
    pub fn regular_tetrahedron(radius: f64) -> Self {
        let s = radius / 3f64.sqrt();
        let v = [
            Vec3::new(s, s, s),
            Vec3::new(s, -s, -s),
            Vec3::new(-s, s, -s),
            Vec3::new(-s, -s, s),
        ];
        Self {
            triangles: vec![
                Triangle::outward(v[0], v[1], v[2]),
                Triangle::outward(v[0], v[1], v[3]),
                Triangle::outward(v[0], v[2], v[3]),
                Triangle::outward(v[1], v[2], v[3]),
            ],
        }
    }

    pub fn len(&self) -> usize {
        self.triangles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.triangles.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuboid_normals_point_outward() {
        let mesh = Mesh::cuboid(Vec3::new(2.0, 4.0, 6.0));
        assert_eq!(mesh.len(), 12);
        for tri in &mesh.triangles {
            let centroid = (tri.vertices[0] + tri.vertices[1] + tri.vertices[2]) * (1.0 / 3.0);
            assert!(tri.normal.dot(centroid) > 0.0, "inward normal {:?}", tri.normal);
            assert!((tri.normal.length() - 1.0).abs() < 1e-12);
        }
    }

    fn assert_outward(mesh: &Mesh) {
        for tri in &mesh.triangles {
            let centroid = (tri.vertices[0] + tri.vertices[1] + tri.vertices[2]) * (1.0 / 3.0);
            assert!(tri.normal.dot(centroid) > 0.0, "inward normal {:?}", tri.normal);
            assert!((tri.normal.length() - 1.0).abs() < 1e-12);
        }
    }

    fn assert_on_sphere(mesh: &Mesh, radius: f64) {
        for v in mesh.triangles.iter().flat_map(|t| t.vertices) {
            assert!((v.length() - radius).abs() < 1e-9);
        }
    }

    #[test]
    fn icosahedron_is_regular_and_outward() {
        let mesh = Mesh::regular_icosahedron(1.5);
        assert_eq!(mesh.len(), 20);
        assert_outward(&mesh);
        assert_on_sphere(&mesh, 1.5);
        let edge = |t: &Triangle| t.vertices[0].distance(t.vertices[1]);
        let first = edge(&mesh.triangles[0]);
        for tri in &mesh.triangles {
            assert!((edge(tri) - first).abs() < 1e-9);
        }
    }

    #[test]
    fn icosphere_subdivides_onto_sphere() {
        let mesh = Mesh::icosphere(2.0, 2);
        assert_eq!(mesh.len(), 20 * 16);
        assert_outward(&mesh);
        assert_on_sphere(&mesh, 2.0);
    }

    #[test]
    fn tetrahedron_is_regular_and_outward() {
        let mesh = Mesh::regular_tetrahedron(1.5);
        assert_eq!(mesh.len(), 4);
        assert_outward(&mesh);
        assert_on_sphere(&mesh, 1.5);
    }

    #[test]
    fn transform_moves_and_keeps_normals_unit() {
        let tri = Triangle::new(Vec3::zero(), Vec3::new(1.0, 0.0, 0.0), Vec3::new(0.0, 1.0, 0.0));
        let moved = tri.transformed(&Mat3::rotation_y(0.5), Vec3::new(0.0, 0.0, 10.0));
        assert!((moved.vertices[0] - Vec3::new(0.0, 0.0, 10.0)).length() < 1e-12);
        assert!((moved.normal.length() - 1.0).abs() < 1e-12);
    }
}
