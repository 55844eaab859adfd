/// Row-major 3×3 rotation block.
pub type Mat3 = [[f64; 3]; 3];

/// 3×3 identity.
pub const MAT3_IDENTITY: Mat3 = [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]];

/// Row-major 4×4 homogeneous transform.
///
/// Points are column vectors: a local point `p` maps to `M · [p, 1]ᵀ`, so in `a * b` the
/// right-hand transform is applied first.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat4(pub [[f64; 4]; 4]);

impl Mat4 {
    /// 4×4 identity.
    pub const IDENTITY: Mat4 = Mat4([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [0.0, 0.0, 0.0, 1.0],
    ]);

    /// Diagonal matrix with `d` on the diagonal and zeros elsewhere.
    pub fn diagonal(d: [f64; 4]) -> Self {
        let mut m = [[0.0; 4]; 4];
        for (i, v) in d.into_iter().enumerate() {
            m[i][i] = v;
        }
        Self(m)
    }

    /// Non-uniform scale `diag(sx, sy, sz, 1)`.
    pub fn scale(s: [f64; 3]) -> Self {
        Self::diagonal([s[0], s[1], s[2], 1.0])
    }

    /// Identity with the top-right column set to `t`.
    pub fn translation(t: [f64; 3]) -> Self {
        let mut m = Self::IDENTITY;
        for (row, v) in t.into_iter().enumerate() {
            m.0[row][3] = v;
        }
        m
    }

    /// Identity with the top-left 3×3 block replaced by `r`.
    pub fn from_mat3(r: Mat3) -> Self {
        let mut m = Self::IDENTITY;
        for (row, src) in r.iter().enumerate() {
            m.0[row][..3].copy_from_slice(src);
        }
        m
    }

    /// Entry at `(row, col)`.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// Entries in row-major traversal order.
    pub fn to_row_major(&self) -> [f64; 16] {
        let mut out = [0.0; 16];
        for (row, vals) in self.0.iter().enumerate() {
            out[row * 4..row * 4 + 4].copy_from_slice(vals);
        }
        out
    }

    /// Apply the transform to a point (implicit `w = 1`), dropping the homogeneous row.
    pub fn transform_point(&self, p: [f64; 3]) -> [f64; 3] {
        let v = [p[0], p[1], p[2], 1.0];
        let mut out = [0.0; 3];
        for (row, o) in out.iter_mut().enumerate() {
            *o = dot4(self.0[row], v);
        }
        out
    }

    /// Entry-wise comparison within `eps`.
    pub fn approx_eq(&self, other: &Mat4, eps: f64) -> bool {
        self.to_row_major()
            .iter()
            .zip(other.to_row_major().iter())
            .all(|(a, b)| (a - b).abs() <= eps)
    }
}

impl Default for Mat4 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl std::ops::Mul for Mat4 {
    type Output = Mat4;

    fn mul(self, rhs: Mat4) -> Mat4 {
        let mut out = [[0.0; 4]; 4];
        for (i, row) in out.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                let col = [rhs.0[0][j], rhs.0[1][j], rhs.0[2][j], rhs.0[3][j]];
                *cell = dot4(self.0[i], col);
            }
        }
        Mat4(out)
    }
}

/// 3×3 product `a · b`.
pub fn mul3(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

fn dot4(a: [f64; 4], b: [f64; 4]) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2] + a[3] * b[3]
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
