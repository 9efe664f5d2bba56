/// A border type for sampling outside of the image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BorderMode {
    /// This border type fills the border with a single, constant value.
    ///
    /// Example: ...d c b a | v v v v...
    Constant(f32),

    /// This border type takes the outermost row or column of pixels and repeats it into the padded region.
    ///
    /// Example: ...d c b a | a a a a...
    Replicate,

    /// This border type reflects the pixel values at the boundary, starting with the edge pixel itself.
    /// Corresponds to OpenCV's `BORDER_REFLECT`.
    ///
    /// Example: ...d c b a | a b c d...
    #[default]
    Reflect,

    /// This border type reflects the pixel values at the boundary, starting with the pixel 'next' to the edge.
    /// Corresponds to OpenCV's `BORDER_REFLECT_101`.
    ///
    /// Example: ...d c b a | b c d e...
    Reflect101,

    /// This border type wraps the content from the opposite side to fill the border.
    ///
    /// Example: ...d c b a | w x y z...
    Wrap,
}

impl BorderMode {
    #[inline]
    fn reflect(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let m = i.rem_euclid(2 * len);
        if m < len {
            m as usize
        } else {
            (2 * len - 1 - m) as usize
        }
    }

    #[inline]
    fn reflect101(i: isize, len: usize) -> usize {
        if len == 1 {
            return 0;
        }
        let len = len as isize;
        let m = i.rem_euclid(2 * (len - 1));
        if m < len {
            m as usize
        } else {
            (2 * (len - 1) - m) as usize
        }
    }

    #[inline]
    fn wrap(i: isize, len: usize) -> usize {
        i.rem_euclid(len as isize) as usize
    }

    /// Maps index `i` to a valid index i.e. within `[0, len)` according to the border mode.
    ///
    /// - `Constant`: `None` outside of the image
    /// - `Replicate`: clamp to edge
    /// - `Reflect`: mirror including edge
    /// - `Reflect101`: mirror excluding edge
    /// - `Wrap`: circular wrap
    ///
    /// Indices arbitrarily far from the image are folded back periodically.
    ///
    /// # Arguments
    ///
    /// * `i` - The index to map.
    /// * `len` - The length of the dimension, must be greater than zero.
    pub fn map_index(&self, i: isize, len: usize) -> Option<usize> {
        if len == 0 {
            return None;
        }
        if i >= 0 && (i as usize) < len {
            return Some(i as usize);
        }
        match self {
            BorderMode::Constant(_) => None,
            BorderMode::Replicate => Some(i.clamp(0, len as isize - 1) as usize),
            BorderMode::Reflect => Some(Self::reflect(i, len)),
            BorderMode::Reflect101 => Some(Self::reflect101(i, len)),
            BorderMode::Wrap => Some(Self::wrap(i, len)),
        }
    }

    /// The value used for samples that [`BorderMode::map_index`] rejects.
    pub fn fill_value(&self) -> f32 {
        match self {
            BorderMode::Constant(v) => *v,
            _ => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::BorderMode;

    fn mapped(
        border: BorderMode,
        range: std::ops::Range<isize>,
        len: usize,
    ) -> Vec<Option<usize>> {
        range.map(|i| border.map_index(i, len)).collect()
    }

    #[test]
    fn reflect_includes_edge() {
        // ...c b a | a b c d | d c b...
        assert_eq!(
            mapped(BorderMode::Reflect, -3..7, 4),
            [2, 1, 0, 0, 1, 2, 3, 3, 2, 1].map(Some).to_vec()
        );
    }

    #[test]
    fn reflect_far_outside() {
        // period of the reflection is 2 * len
        assert_eq!(BorderMode::Reflect.map_index(-9, 4), Some(0));
        assert_eq!(BorderMode::Reflect.map_index(8 * 1000 + 5, 4), Some(2));
        assert_eq!(BorderMode::Reflect.map_index(isize::MIN + 1, 1), Some(0));
    }

    #[test]
    fn reflect101_excludes_edge() {
        assert_eq!(
            mapped(BorderMode::Reflect101, -3..7, 4),
            [3, 2, 1, 0, 1, 2, 3, 2, 1, 0].map(Some).to_vec()
        );
    }

    #[test]
    fn replicate_and_wrap() {
        assert_eq!(
            mapped(BorderMode::Replicate, -2..6, 4),
            [0, 0, 0, 1, 2, 3, 3, 3].map(Some).to_vec()
        );
        assert_eq!(
            mapped(BorderMode::Wrap, -2..6, 4),
            [2, 3, 0, 1, 2, 3, 0, 1].map(Some).to_vec()
        );
    }

    #[test]
    fn constant_rejects_outside() {
        let border = BorderMode::Constant(7.0);
        assert_eq!(border.map_index(-1, 4), None);
        assert_eq!(border.map_index(4, 4), None);
        assert_eq!(border.map_index(2, 4), Some(2));
        assert_eq!(border.fill_value(), 7.0);
    }
}
