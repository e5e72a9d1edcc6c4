use num_traits::{AsPrimitive, Bounded, NumCast};

/// The numeric family of an image element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DtypeKind {
    /// Unsigned integer samples.
    Unsigned,
    /// Signed integer samples.
    Signed,
    /// Floating point samples.
    Float,
}

impl DtypeKind {
    /// Returns true for the floating point family.
    pub fn is_float(&self) -> bool {
        matches!(self, DtypeKind::Float)
    }
}

/// Trait for image element types.
///
/// Every element type carries its kind, bit width and representable range. The range is the
/// integer bounds for integer kinds and the finite bounds `[-MAX, MAX]` for floating kinds; it
/// drives the dtype-aware clipping of the resamplers.
///
/// `from_f64` stores a computed value the way array libraries assign a float into an array of
/// this kind: integers truncate toward zero and saturate at their bounds (`NaN` maps to zero),
/// floats use a plain float cast.
///
/// # Example
///
/// ```
/// use resampler_image::{DtypeKind, ImageDtype};
///
/// assert_eq!(u8::KIND, DtypeKind::Unsigned);
/// assert_eq!(u8::range(), (0.0, 255.0));
/// assert_eq!(u8::from_f64(2.9), 2);
/// assert_eq!(u8::from_f64(300.0), 255);
/// assert_eq!(i16::from_f64(-3.7), -3);
/// ```
pub trait ImageDtype:
    Copy
    + Default
    + PartialOrd
    + std::fmt::Debug
    + Send
    + Sync
    + NumCast
    + Bounded
    + AsPrimitive<f64>
    + 'static
{
    /// The numeric family of the type.
    const KIND: DtypeKind;

    /// The bit width of the type.
    const BITS: u32;

    /// Convert a f64 value to the image data type.
    fn from_f64(x: f64) -> Self;

    /// Convert the value to f64.
    #[inline]
    fn as_f64(self) -> f64 {
        self.as_()
    }

    /// The representable `[min, max]` range of the type, as f64.
    #[inline]
    fn range() -> (f64, f64) {
        (Self::min_value().as_f64(), Self::max_value().as_f64())
    }

    /// A short name of the type, e.g. `u8` or `f32`.
    fn name() -> &'static str {
        std::any::type_name::<Self>()
    }
}

macro_rules! impl_image_dtype {
    ($($t:ty => $kind:expr),* $(,)?) => {
        $(
            impl ImageDtype for $t {
                const KIND: DtypeKind = $kind;
                const BITS: u32 = (std::mem::size_of::<$t>() * 8) as u32;

                #[inline]
                fn from_f64(x: f64) -> Self {
                    x as $t
                }
            }
        )*
    };
}

impl_image_dtype!(
    u8 => DtypeKind::Unsigned,
    u16 => DtypeKind::Unsigned,
    u32 => DtypeKind::Unsigned,
    i8 => DtypeKind::Signed,
    i16 => DtypeKind::Signed,
    i32 => DtypeKind::Signed,
    f32 => DtypeKind::Float,
    f64 => DtypeKind::Float,
);

#[cfg(test)]
mod tests {
    use super::{DtypeKind, ImageDtype};

    #[test]
    fn kinds_and_bits() {
        assert_eq!(u16::KIND, DtypeKind::Unsigned);
        assert_eq!(<u16 as ImageDtype>::BITS, 16);
        assert_eq!(i32::KIND, DtypeKind::Signed);
        assert_eq!(<f32 as ImageDtype>::BITS, 32);
        assert!(f64::KIND.is_float());
        assert!(!i8::KIND.is_float());
    }

    #[test]
    fn ranges() {
        assert_eq!(i8::range(), (-128.0, 127.0));
        assert_eq!(u16::range(), (0.0, 65535.0));
        assert_eq!(f32::range(), (f32::MIN as f64, f32::MAX as f64));
        assert_eq!(f64::range(), (f64::MIN, f64::MAX));
    }

    #[test]
    fn from_f64_truncates_and_saturates() {
        assert_eq!(u8::from_f64(254.99), 254);
        assert_eq!(u8::from_f64(-1.0), 0);
        assert_eq!(u8::from_f64(f64::NAN), 0);
        assert_eq!(i8::from_f64(-200.0), -128);
        assert_eq!(u32::from_f64(1.5), 1);
        assert_eq!(f32::from_f64(0.25), 0.25f32);
    }

    #[test]
    fn as_f64_through_references() {
        fn total<T: ImageDtype>(values: &[T]) -> f64 {
            values.iter().map(|v| v.as_f64()).sum()
        }
        assert_eq!(total(&[1u8, 2, 255]), 258.0);
        assert_eq!(total(&[-1.5f32, 0.5]), -1.0);
        assert_eq!(i16::MIN.as_f64(), -32768.0);
    }

    #[test]
    fn names() {
        assert_eq!(u8::name(), "u8");
        assert_eq!(f64::name(), "f64");
    }
}
