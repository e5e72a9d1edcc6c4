/// Position in input index space of the output sample `index`.
#[inline]
pub fn sample_position(index: usize, scale: f64) -> f64 {
    index as f64 / scale
}

/// Pin an index to the valid range `[0, len - 1]`.
///
/// This is the single boundary rule of the crate: every method reads its input through it.
#[inline]
pub fn clamp_index(index: usize, len: usize) -> usize {
    index.min(len.saturating_sub(1))
}

/// Pin a real position to the valid range `[0, len - 1]`.
#[inline]
pub fn clamp_position(pos: f64, len: usize) -> f64 {
    pos.clamp(0.0, len.saturating_sub(1) as f64)
}

/// Input indices read by nearest-neighbor sampling for each of `out_len` outputs.
///
/// The position is rounded half to even, then clamped.
///
/// # Example
///
/// ```
/// use resampler_imgproc::interpolation::nearest_indices;
///
/// assert_eq!(nearest_indices(4, 2.0, 2), vec![0, 0, 1, 1]);
/// ```
pub fn nearest_indices(out_len: usize, scale: f64, in_len: usize) -> Vec<usize> {
    (0..out_len)
        .map(|i| {
            let pos = sample_position(i, scale).round_ties_even();
            clamp_index(pos as usize, in_len)
        })
        .collect()
}

/// The two input samples bracketing an output position and the weight of the second one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearTap {
    /// Index of the sample at or before the position.
    pub i0: usize,
    /// Index of the following sample, clamped to the last index.
    pub i1: usize,
    /// Fractional distance from `i0`.
    pub frac: f64,
}

/// Linear taps for each of `out_len` outputs along an axis of `in_len` samples.
///
/// At the last index `i1 == i0`, so the blend degrades to a copy instead of reading out of
/// bounds.
pub fn linear_taps(out_len: usize, scale: f64, in_len: usize) -> Vec<LinearTap> {
    (0..out_len)
        .map(|i| {
            let pos = sample_position(i, scale);
            let i0 = clamp_index(pos.floor() as usize, in_len);
            LinearTap {
                i0,
                i1: clamp_index(i0 + 1, in_len),
                frac: pos - i0 as f64,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamping() {
        assert_eq!(clamp_index(0, 3), 0);
        assert_eq!(clamp_index(2, 3), 2);
        assert_eq!(clamp_index(7, 3), 2);
        assert_eq!(clamp_position(-0.5, 3), 0.0);
        assert_eq!(clamp_position(1.25, 3), 1.25);
        assert_eq!(clamp_position(2.5, 3), 2.0);
    }

    #[test]
    fn nearest_rounds_half_to_even() {
        // positions 0, 0.5, 1, 1.5 -> 0, 0, 1, 2 (clamped to 1)
        assert_eq!(nearest_indices(4, 2.0, 2), vec![0, 0, 1, 1]);
        // positions 0, 0.4, 0.8, ..., 2.8
        assert_eq!(
            nearest_indices(8, 2.5, 3),
            vec![0, 0, 1, 1, 2, 2, 2, 2]
        );
        assert_eq!(nearest_indices(3, 1.0, 3), vec![0, 1, 2]);
    }

    #[test]
    fn taps_at_border() {
        let taps = linear_taps(4, 2.0, 2);
        assert_eq!(taps[0], LinearTap { i0: 0, i1: 1, frac: 0.0 });
        assert_eq!(taps[1], LinearTap { i0: 0, i1: 1, frac: 0.5 });
        assert_eq!(taps[2], LinearTap { i0: 1, i1: 1, frac: 0.0 });
        assert_eq!(taps[3], LinearTap { i0: 1, i1: 1, frac: 0.5 });
    }

    #[test]
    fn taps_identity() {
        for (i, tap) in linear_taps(5, 1.0, 5).iter().enumerate() {
            assert_eq!(tap.i0, i);
            assert_eq!(tap.frac, 0.0);
        }
    }
}
