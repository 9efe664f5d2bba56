use std::fmt;
use std::ops::Mul;

use super::error::TransformError;

/// A 3x3 homogeneous matrix describing a 2D affine map.
///
/// Points are column vectors, `[x', y', 1]^T = M * [x, y, 1]^T`:
///
/// | a  b  tx |
/// | c  d  ty |
/// | 0  0  1  |
///
/// The bottom row is always `[0, 0, 1]`, so only the top two rows are stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix3x3 {
    m: [f32; 6],
}

impl Default for Matrix3x3 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix3x3 {
    /// The identity transform.
    pub const IDENTITY: Matrix3x3 = Matrix3x3 {
        m: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
    };

    /// Creates a matrix from the top two rows `[a, b, tx, c, d, ty]`.
    pub fn from_affine_2x3(m: [f32; 6]) -> Self {
        Self { m }
    }

    /// Returns the top two rows `[a, b, tx, c, d, ty]`.
    pub fn to_affine_2x3(&self) -> [f32; 6] {
        self.m
    }

    /// Creates a matrix from its three rows.
    ///
    /// # Errors
    ///
    /// Fails with [`TransformError::InvalidParameter`] when the bottom row is
    /// not `[0, 0, 1]`, since perspective maps are not supported.
    ///
    /// # Example
    ///
    /// ```
    /// use geowarp_imgproc::warp::Matrix3x3;
    ///
    /// let m = Matrix3x3::from_rows([[1.0, 0.0, 5.0], [0.0, 1.0, -2.0], [0.0, 0.0, 1.0]]).unwrap();
    /// assert_eq!(m.transform_point(1.0, 1.0), (6.0, -1.0));
    ///
    /// assert!(Matrix3x3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.1, 0.0, 1.0]]).is_err());
    /// ```
    pub fn from_rows(rows: [[f32; 3]; 3]) -> Result<Self, TransformError> {
        if rows[2] != [0.0, 0.0, 1.0] {
            return Err(TransformError::invalid(
                "rows",
                format!("bottom row must be [0, 0, 1], got {:?}", rows[2]),
            ));
        }
        let [[a, b, tx], [c, d, ty], _] = rows;
        Ok(Self {
            m: [a, b, tx, c, d, ty],
        })
    }

    /// Returns the three rows of the matrix.
    pub fn to_rows(&self) -> [[f32; 3]; 3] {
        let [a, b, tx, c, d, ty] = self.m;
        [[a, b, tx], [c, d, ty], [0.0, 0.0, 1.0]]
    }

    /// Translation by `(dx, dy)`.
    pub fn translation(dx: f32, dy: f32) -> Self {
        Self {
            m: [1.0, 0.0, dx, 0.0, 1.0, dy],
        }
    }

    /// Scaling by `(sx, sy)` about the origin.
    pub fn scaling(sx: f32, sy: f32) -> Self {
        Self {
            m: [sx, 0.0, 0.0, 0.0, sy, 0.0],
        }
    }

    /// Rotation about the origin, `[[cos, -sin], [sin, cos]]`.
    pub fn rotation(radians: f32) -> Self {
        let (sin, cos) = radians.sin_cos();
        Self {
            m: [cos, -sin, 0.0, sin, cos, 0.0],
        }
    }

    /// Shear with `x' = x + shx * y` and `y' = shy * x + y`.
    pub fn shear(shx: f32, shy: f32) -> Self {
        Self {
            m: [1.0, shx, 0.0, shy, 1.0, 0.0],
        }
    }

    /// Determinant of the linear part.
    pub fn determinant(&self) -> f32 {
        let [a, b, _, c, d, _] = self.m;
        a * d - b * c
    }

    /// True when every coefficient is finite.
    pub fn is_finite(&self) -> bool {
        self.m.iter().all(|v| v.is_finite())
    }

    /// Inverts the affine transform.
    ///
    /// # Errors
    ///
    /// Fails with [`TransformError::SingularTransform`] when the determinant is
    /// zero or any coefficient is not finite.
    pub fn inverse(&self) -> Result<Self, TransformError> {
        let [a, b, c, d, e, f] = self.m;

        let determinant = self.determinant();
        if determinant == 0.0 || !determinant.is_finite() || !self.is_finite() {
            return Err(TransformError::SingularTransform(determinant));
        }
        let inv_determinant = 1.0 / determinant;

        let new_a = e * inv_determinant;
        let new_b = -b * inv_determinant;
        let new_d = -d * inv_determinant;
        let new_e = a * inv_determinant;
        let new_c = -(new_a * c + new_b * f);
        let new_f = -(new_d * c + new_e * f);

        Ok(Self {
            m: [new_a, new_b, new_c, new_d, new_e, new_f],
        })
    }

    /// Applies the transform to the point `(x, y)`.
    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.m;
        let u = m[0] * x + m[1] * y + m[2];
        let v = m[3] * x + m[4] * y + m[5];
        (u, v)
    }

    /// Returns the transform that applies `self` first and then `next`,
    /// i.e. `next * self`.
    pub fn then(&self, next: &Matrix3x3) -> Matrix3x3 {
        *next * *self
    }
}

impl Mul for Matrix3x3 {
    type Output = Matrix3x3;

    /// Matrix product, `(lhs * rhs) * p == lhs * (rhs * p)`.
    fn mul(self, rhs: Matrix3x3) -> Matrix3x3 {
        let [a1, b1, t1, c1, d1, u1] = self.m;
        let [a2, b2, t2, c2, d2, u2] = rhs.m;
        Matrix3x3 {
            m: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                a1 * t2 + b1 * u2 + t1,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
                c1 * t2 + d1 * u2 + u1,
            ],
        }
    }
}

impl fmt::Display for Matrix3x3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, tx, c, d, ty] = self.m;
        write!(f, "[[{a}, {b}, {tx}], [{c}, {d}, {ty}], [0, 0, 1]]")
    }
}

#[cfg(test)]
mod tests {
    use super::Matrix3x3;
    use crate::warp::TransformError;
    use approx::assert_relative_eq;

    fn assert_matrix_eq(lhs: &Matrix3x3, rhs: &Matrix3x3) {
        for (l, r) in lhs.to_affine_2x3().iter().zip(rhs.to_affine_2x3().iter()) {
            assert_relative_eq!(*l, *r, epsilon = 1e-4);
        }
    }

    #[test]
    fn rows_round_trip() -> Result<(), TransformError> {
        let rows = [[2.0, 0.5, 3.0], [-1.0, 1.5, 4.0], [0.0, 0.0, 1.0]];
        assert_eq!(Matrix3x3::from_rows(rows)?.to_rows(), rows);
        Ok(())
    }

    #[test]
    fn rejects_perspective_rows() {
        let res = Matrix3x3::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 2.0]]);
        assert!(matches!(
            res,
            Err(TransformError::InvalidParameter { name: "rows", .. })
        ));
    }

    #[test]
    fn product_applies_rhs_first() {
        let t = Matrix3x3::translation(3.0, -1.0);
        let s = Matrix3x3::scaling(2.0, 4.0);

        // scale first, then translate
        let m = t * s;
        assert_eq!(m.transform_point(1.0, 1.0), (5.0, 3.0));
        assert_eq!(s.then(&t), m);
    }

    #[test]
    fn inverse_undoes_transform() -> Result<(), TransformError> {
        let m = Matrix3x3::translation(5.0, 7.0)
            * Matrix3x3::rotation(0.3)
            * Matrix3x3::shear(0.2, -0.4)
            * Matrix3x3::scaling(1.5, 0.5);
        let inv = m.inverse()?;

        assert_matrix_eq(&(m * inv), &Matrix3x3::IDENTITY);
        assert_matrix_eq(&(inv * m), &Matrix3x3::IDENTITY);

        let (x, y) = m.transform_point(12.0, -3.0);
        let (bx, by) = inv.transform_point(x, y);
        assert_relative_eq!(bx, 12.0, epsilon = 1e-4);
        assert_relative_eq!(by, -3.0, epsilon = 1e-4);
        Ok(())
    }

    #[test]
    fn singular_has_no_inverse() {
        let m = Matrix3x3::scaling(0.0, 1.0);
        assert_eq!(m.inverse(), Err(TransformError::SingularTransform(0.0)));

        // a shear of 1 in both directions collapses the plane onto a line
        let m = Matrix3x3::shear(1.0, 1.0);
        assert_eq!(m.inverse(), Err(TransformError::SingularTransform(0.0)));

        let m = Matrix3x3::translation(f32::NAN, 0.0);
        assert!(matches!(
            m.inverse(),
            Err(TransformError::SingularTransform(_))
        ));
    }

    #[test]
    fn determinant_and_display() {
        assert_eq!(Matrix3x3::scaling(2.0, 3.0).determinant(), 6.0);
        assert_eq!(
            Matrix3x3::translation(1.0, 2.0).to_string(),
            "[[1, 0, 1], [0, 1, 2], [0, 0, 1]]"
        );
    }
}
