use std::sync::Arc;

use rustfft::{num_complex::Complex, Fft, FftDirection, FftPlanner};

/// A planned 2-D discrete Fourier transform over a row-major `rows x cols` buffer.
///
/// The transform is computed by row-column decomposition: a 1-D transform over every row,
/// then over every column. Like the underlying 1-D transforms it is unnormalized, so a forward
/// transform followed by an inverse one scales the data by `rows * cols`.
pub struct Fft2d {
    rows: usize,
    cols: usize,
    row_fft: Arc<dyn Fft<f64>>,
    col_fft: Arc<dyn Fft<f64>>,
}

impl Fft2d {
    /// Plan a transform of the given size and direction.
    pub fn new(
        planner: &mut FftPlanner<f64>,
        rows: usize,
        cols: usize,
        direction: FftDirection,
    ) -> Self {
        Self {
            rows,
            cols,
            row_fft: planner.plan_fft(cols, direction),
            col_fft: planner.plan_fft(rows, direction),
        }
    }

    /// Transform `data` in place.
    ///
    /// # Panics
    ///
    /// Panics if `data.len() != rows * cols`.
    pub fn process(&self, data: &mut [Complex<f64>]) {
        assert_eq!(data.len(), self.rows * self.cols);

        // the 1-D transforms process every consecutive chunk of their length
        self.row_fft.process(data);

        let mut transposed = transpose(data, self.rows, self.cols);
        self.col_fft.process(&mut transposed);

        data.copy_from_slice(&transpose(&transposed, self.cols, self.rows));
    }
}

/// Transpose a row-major `rows x cols` buffer into a `cols x rows` one.
pub fn transpose<T: Copy>(data: &[T], rows: usize, cols: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(data.len());
    for c in 0..cols {
        for r in 0..rows {
            out.push(data[r * cols + c]);
        }
    }
    out
}

/// Circularly shift a `rows x cols` buffer by `(shift_r, shift_c)` positions.
fn roll<T: Copy + Default>(
    data: &[T],
    rows: usize,
    cols: usize,
    shift_r: usize,
    shift_c: usize,
) -> Vec<T> {
    let mut out = vec![T::default(); data.len()];
    for r in 0..rows {
        let dst_r = (r + shift_r) % rows;
        for c in 0..cols {
            let dst_c = (c + shift_c) % cols;
            out[dst_r * cols + dst_c] = data[r * cols + c];
        }
    }
    out
}

/// Move the zero-frequency component to the center of the spectrum.
///
/// Each axis of length `n` is rolled forward by `n / 2`.
///
/// # Example
///
/// ```
/// use resampler_imgproc::fft::{fftshift, ifftshift};
///
/// let data = [0, 1, 2, 3, 4];
/// assert_eq!(fftshift(&data, 1, 5), vec![3, 4, 0, 1, 2]);
/// assert_eq!(ifftshift(&fftshift(&data, 1, 5), 1, 5), data.to_vec());
/// ```
pub fn fftshift<T: Copy + Default>(data: &[T], rows: usize, cols: usize) -> Vec<T> {
    roll(data, rows, cols, rows / 2, cols / 2)
}

/// Inverse of [`fftshift`]: each axis of length `n` is rolled back by `n / 2`.
pub fn ifftshift<T: Copy + Default>(data: &[T], rows: usize, cols: usize) -> Vec<T> {
    roll(data, rows, cols, rows - rows / 2, cols - cols / 2)
}

#[cfg(test)]
mod tests {
    use super::{fftshift, ifftshift, transpose, Fft2d};
    use approx::assert_relative_eq;
    use rustfft::{num_complex::Complex, FftDirection, FftPlanner};

    #[test]
    fn shifts_even_and_odd() {
        let data = (0..6).collect::<Vec<u8>>();
        // 2 x 3
        let shifted = fftshift(&data, 2, 3);
        assert_eq!(shifted, vec![5, 3, 4, 2, 0, 1]);
        assert_eq!(ifftshift(&shifted, 2, 3), data);

        let data = (0..4).collect::<Vec<u8>>();
        assert_eq!(fftshift(&data, 1, 4), vec![2, 3, 0, 1]);
        assert_eq!(ifftshift(&data, 1, 4), vec![2, 3, 0, 1]);
    }

    #[test]
    fn transpose_rect() {
        let data = [1, 2, 3, 4, 5, 6];
        assert_eq!(transpose(&data, 2, 3), vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn dc_of_constant() {
        let mut planner = FftPlanner::new();
        let fft = Fft2d::new(&mut planner, 2, 3, FftDirection::Forward);
        let mut data = vec![Complex::new(2.0, 0.0); 6];
        fft.process(&mut data);
        assert_relative_eq!(data[0].re, 12.0);
        for v in &data[1..] {
            assert!(v.norm() < 1e-12);
        }
    }

    #[test]
    fn forward_inverse_roundtrip() {
        let mut planner = FftPlanner::new();
        let (rows, cols) = (3, 4);
        let forward = Fft2d::new(&mut planner, rows, cols, FftDirection::Forward);
        let inverse = Fft2d::new(&mut planner, rows, cols, FftDirection::Inverse);

        let original = (0..rows * cols)
            .map(|i| Complex::new((i * i) as f64, 0.0))
            .collect::<Vec<_>>();
        let mut data = original.clone();
        forward.process(&mut data);
        inverse.process(&mut data);

        let n = (rows * cols) as f64;
        for (a, b) in data.iter().zip(original.iter()) {
            assert_relative_eq!(a.re / n, b.re, epsilon = 1e-9);
            assert!((a.im / n).abs() < 1e-9);
        }
    }
}
