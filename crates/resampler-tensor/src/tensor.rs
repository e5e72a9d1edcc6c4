use thiserror::Error;

/// An error type for tensor operations.
#[derive(Error, Debug, PartialEq)]
pub enum TensorError {
    /// Tensor shape does not match the provided data.
    #[error("Shape mismatch: expected {expected} elements for shape, but got {actual} elements in data")]
    InvalidShape {
        /// Expected number of elements based on shape
        expected: usize,
        /// Actual number of elements in the data
        actual: usize,
    },
}

impl TensorError {
    /// Creates an InvalidShape error with clear context.
    pub fn invalid_shape(expected: usize, actual: usize) -> Self {
        Self::InvalidShape { expected, actual }
    }
}

/// Computes the strides for a row-major (C-contiguous) tensor layout.
///
/// The rightmost dimension has stride 1, and each dimension's stride is the product of all
/// dimensions to its right.
///
/// # Examples
///
/// ```rust
/// use resampler_tensor::get_strides_from_shape;
///
/// assert_eq!(get_strides_from_shape([2, 3]), [3, 1]);
/// assert_eq!(get_strides_from_shape([2, 3, 4]), [12, 4, 1]);
/// ```
pub fn get_strides_from_shape<const N: usize>(shape: [usize; N]) -> [usize; N] {
    let mut strides: [usize; N] = [0; N];
    let mut stride = 1;
    for i in (0..shape.len()).rev() {
        strides[i] = stride;
        stride *= shape[i];
    }
    strides
}

/// A multi-dimensional array (tensor) with owned, contiguous data.
///
/// # Type Parameters
///
/// * `T` - The element type stored in the tensor
/// * `N` - The number of dimensions (const generic, checked at compile time)
///
/// The data is always stored in row-major order, so `strides` is fully determined by
/// `shape` and kept alongside it for offset computations.
#[derive(Clone, Debug, PartialEq)]
pub struct Tensor<T, const N: usize> {
    /// The storage of the tensor.
    pub storage: Vec<T>,
    /// The shape of the tensor.
    pub shape: [usize; N],
    /// The strides of the tensor data in memory.
    pub strides: [usize; N],
}

impl<T, const N: usize> Tensor<T, N> {
    /// Create a new tensor with the given shape and data.
    ///
    /// # Errors
    ///
    /// Returns [`TensorError::InvalidShape`] if the product of `shape` differs from the data
    /// length.
    ///
    /// # Example
    ///
    /// ```
    /// use resampler_tensor::Tensor;
    ///
    /// let t = Tensor::<u8, 2>::from_shape_vec([2, 2], vec![1, 2, 3, 4]).unwrap();
    /// assert_eq!(t.shape, [2, 2]);
    /// assert!(Tensor::<u8, 2>::from_shape_vec([2, 3], vec![1, 2, 3, 4]).is_err());
    /// ```
    pub fn from_shape_vec(shape: [usize; N], data: Vec<T>) -> Result<Self, TensorError> {
        let numel = shape.iter().product::<usize>();
        if numel != data.len() {
            return Err(TensorError::invalid_shape(numel, data.len()));
        }
        Ok(Self {
            storage: data,
            shape,
            strides: get_strides_from_shape(shape),
        })
    }

    /// Create a new tensor with the given shape, filled with a single value.
    pub fn from_shape_val(shape: [usize; N], value: T) -> Self
    where
        T: Clone,
    {
        let numel = shape.iter().product::<usize>();
        Self {
            storage: vec![value; numel],
            shape,
            strides: get_strides_from_shape(shape),
        }
    }

    /// Create a new tensor by evaluating `f` at every index in row-major order.
    ///
    /// # Example
    ///
    /// ```
    /// use resampler_tensor::Tensor;
    ///
    /// let t = Tensor::<usize, 2>::from_shape_fn([2, 3], |[r, c]| r * 10 + c);
    /// assert_eq!(t.as_slice(), &[0, 1, 2, 10, 11, 12]);
    /// ```
    pub fn from_shape_fn<F>(shape: [usize; N], mut f: F) -> Self
    where
        F: FnMut([usize; N]) -> T,
    {
        let numel = shape.iter().product::<usize>();
        let strides = get_strides_from_shape(shape);
        let storage = (0..numel)
            .map(|offset| {
                let mut index = [0; N];
                let mut rem = offset;
                for (i, &stride) in strides.iter().enumerate() {
                    index[i] = rem / stride;
                    rem %= stride;
                }
                f(index)
            })
            .collect();
        Self {
            storage,
            shape,
            strides,
        }
    }

    /// Get the data of the tensor as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.storage
    }

    /// Get the data of the tensor as a mutable slice.
    #[inline]
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.storage
    }

    /// Returns the number of elements in the tensor.
    #[inline]
    pub fn numel(&self) -> usize {
        self.storage.len()
    }

    /// Returns a reference to the element at `index`, or `None` if out of bounds.
    pub fn get(&self, index: [usize; N]) -> Option<&T> {
        let mut offset = 0;
        for ((&idx, &dim_size), &stride) in index.iter().zip(self.shape.iter()).zip(&self.strides)
        {
            if idx >= dim_size {
                return None;
            }
            offset += idx * stride;
        }
        self.storage.get(offset)
    }
}
