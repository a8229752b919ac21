use super::Vec3;

/// Row-major 3x3 matrix
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat3 {
    pub rows: [[f64; 3]; 3],
}

impl Mat3 {
    pub const fn identity() -> Self {
        Self { rows: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]] }
    }

    /// Rotation about the x axis
    pub fn rotation_x(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { rows: [[1.0, 0.0, 0.0], [0.0, cos, -sin], [0.0, sin, cos]] }
    }

    /// Rotation about the y axis
    pub fn rotation_y(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self { rows: [[cos, 0.0, sin], [0.0, 1.0, 0.0], [-sin, 0.0, cos]] }
    }

    pub fn mul(&self, other: &Mat3) -> Mat3 {
        let mut rows = [[0.0; 3]; 3];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.rows[i][k] * other.rows[k][j]).sum();
            }
        }
        Mat3 { rows }
    }

    pub fn mul_vec(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[0][1] * v.y + r[0][2] * v.z,
            r[1][0] * v.x + r[1][1] * v.y + r[1][2] * v.z,
            r[2][0] * v.x + r[2][1] * v.y + r[2][2] * v.z,
        )
    }

    /// `self^T * v` without building the transpose
    pub fn mul_vec_transposed(&self, v: Vec3) -> Vec3 {
        let r = &self.rows;
        Vec3::new(
            r[0][0] * v.x + r[1][0] * v.y + r[2][0] * v.z,
            r[0][1] * v.x + r[1][1] * v.y + r[2][1] * v.z,
            r[0][2] * v.x + r[1][2] * v.y + r[2][2] * v.z,
        )
    }
}

impl Default for Mat3 {
    fn default() -> Self {
        Self::identity()
    }
}
