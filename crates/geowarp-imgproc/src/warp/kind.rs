/// The axis a reflection mirrors the image about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ReflectionAxis {
    /// Mirror about the horizontal axis: the image is flipped upside down.
    Horizontal,
    /// Mirror about the vertical axis: the image is flipped left to right.
    Vertical,
    /// Mirror about the main diagonal: x and y are swapped.
    ///
    /// The result is not re-anchored into the image bounds, so on non-square
    /// images part of the output samples outside of the source.
    Diagonal,
}

/// A geometric transform and its parameters.
///
/// Angles are in degrees. With x to the right and y downwards, a positive
/// rotation angle turns the image clockwise on screen (counter-clockwise in
/// the usual y-up math convention).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum TransformKind {
    /// Shift by `(dx, dy)` pixels.
    Translation {
        /// Horizontal offset in pixels.
        dx: f32,
        /// Vertical offset in pixels.
        dy: f32,
    },
    /// Scale about the top-left corner. Factors must be strictly positive.
    Scaling {
        /// Horizontal factor.
        sx: f32,
        /// Vertical factor.
        sy: f32,
    },
    /// Rotate about `center`, the image center when `None`.
    Rotation {
        /// Rotation angle in degrees.
        angle_degrees: f32,
        /// Center of rotation `(x, y)` in pixels.
        #[cfg_attr(feature = "serde", serde(default))]
        center: Option<(f32, f32)>,
    },
    /// Shear with `x' = x + shx * y` and `y' = shy * x + y`.
    Shear {
        /// Horizontal shear factor.
        shx: f32,
        /// Vertical shear factor.
        shy: f32,
    },
    /// Mirror about an axis, re-anchored into the image bounds.
    Reflection {
        /// The mirror axis.
        axis: ReflectionAxis,
    },
}

impl TransformKind {
    /// Short lowercase name of the transform, e.g. `"rotation"`.
    pub fn name(&self) -> &'static str {
        match self {
            TransformKind::Translation { .. } => "translation",
            TransformKind::Scaling { .. } => "scaling",
            TransformKind::Rotation { .. } => "rotation",
            TransformKind::Shear { .. } => "shear",
            TransformKind::Reflection { .. } => "reflection",
        }
    }
}
