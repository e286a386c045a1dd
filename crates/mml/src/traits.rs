use std::ops;

/// Element types with an additive identity.
pub trait Zero {
    /// The additive identity.
    const ZERO: Self;
}

/// Element types with a multiplicative identity.
pub trait One {
    /// The multiplicative identity.
    const ONE: Self;
}

/// Element types usable in vector and matrix arithmetic.
///
/// Unlike [`Real`], this does not require negation, so unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + PartialEq
        + Copy
{
}

/// Sine and cosine, as needed by rotations.
pub trait Trig {
    /// Computes the sine of the angle `self` (in radians).
    fn sin(self) -> Self;
    /// Computes the cosine of the angle `self` (in radians).
    fn cos(self) -> Self;
}

/// Square root, as needed by lengths and normalization.
pub trait Sqrt {
    /// Computes the square root of `self`.
    fn sqrt(self) -> Self;
}

/// Floating-point element types.
///
/// Rotations, projections and in-place normalization are only available for these.
pub trait Real: Number + ops::Neg<Output = Self> + Trig + Sqrt + PartialOrd {}
impl<T> Real for T where T: Number + ops::Neg<Output = Self> + Trig + Sqrt + PartialOrd {}

/// Element types with an associated floating-point type used for lengths and normalization.
///
/// Floats map to themselves. Integers up to 32 bits map to [`f32`], 64-bit integers to [`f64`].
pub trait ToReal: Copy {
    /// The floating-point type `Self` converts to.
    type Real: Real;

    /// Converts `self` to [`ToReal::Real`], rounding if the value is not representable.
    fn to_real(self) -> Self::Real;
}

/// Element types that can be compared with elements of type `U`.
///
/// Every [`PartialEq`] type compares with itself. Differing primitive types compare after a
/// lossless conversion of both sides into a common type, so `1u8` equals `1.0f32` but `u64` and
/// `f64` are not comparable. [`f32`] and [`f64`] are not comparable with each other either, which
/// keeps float literals compared against an `f32` vector typed as `f32`.
pub trait ElementEq<U> {
    /// Returns `true` if `self` and `other` represent the same value.
    fn element_eq(&self, other: &U) -> bool;
}

impl<T: PartialEq> ElementEq<T> for T {
    #[inline]
    fn element_eq(&self, other: &T) -> bool {
        self == other
    }
}

macro_rules! element_eq {
    ($($common:ty: { $($a:ty, $b:ty);+ $(;)? })+) => {
        $($(
            impl ElementEq<$b> for $a {
                #[inline]
                fn element_eq(&self, other: &$b) -> bool {
                    <$common>::from(*self) == <$common>::from(*other)
                }
            }

            impl ElementEq<$a> for $b {
                #[inline]
                fn element_eq(&self, other: &$a) -> bool {
                    <$common>::from(*self) == <$common>::from(*other)
                }
            }
        )+)+
    };
}

element_eq! {
    u16: { u8, u16; }
    u32: { u8, u32; u16, u32; }
    u64: { u8, u64; u16, u64; u32, u64; }
    i16: { i8, i16; u8, i8; u8, i16; }
    i32: { i8, i32; i16, i32; u8, i32; u16, i8; u16, i16; u16, i32; }
    i64: { i8, i64; i16, i64; i32, i64; u8, i64; u16, i64; u32, i8; u32, i16; u32, i32; u32, i64; }
    i128: { u64, i8; u64, i16; u64, i32; u64, i64; }
    f32: { u8, f32; u16, f32; i8, f32; i16, f32; }
    f64: { u32, f32; i32, f32; u8, f64; u16, f64; u32, f64; i8, f64; i16, f64; i32, f64; }
}

macro_rules! impl_consts {
    ($zero:literal, $one:literal: $($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = $zero;
            }
            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
impl_consts!(0, 1: u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);
impl_consts!(0.0, 1.0: f32, f64);

macro_rules! impl_float {
    ($($types:ty),+) => {
        $(
            impl Trig for $types {
                fn sin(self) -> Self {
                    self.sin()
                }

                fn cos(self) -> Self {
                    self.cos()
                }
            }

            impl Sqrt for $types {
                fn sqrt(self) -> Self {
                    self.sqrt()
                }
            }

            impl ToReal for $types {
                type Real = $types;

                #[inline]
                fn to_real(self) -> Self {
                    self
                }
            }
        )+
    };
}
impl_float!(f32, f64);

macro_rules! int_to_real {
    ($real:ty: $($types:ty),+) => {
        $(
            impl ToReal for $types {
                type Real = $real;

                #[inline]
                fn to_real(self) -> $real {
                    self as $real
                }
            }
        )+
    };
}
int_to_real!(f32: u8, u16, u32, i8, i16, i32);
int_to_real!(f64: u64, i64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_reals() {
        assert_eq!(7u8.to_real(), 7.0f32);
        assert_eq!((-3i32).to_real(), -3.0f32);
        assert_eq!(u64::MAX.to_real(), u64::MAX as f64);
        assert_eq!(2.5f64.to_real(), 2.5);
    }

    #[test]
    fn mixed_element_eq() {
        assert!(3i32.element_eq(&3.0f64));
        assert!(!3i32.element_eq(&3.5f64));
        assert!(200u8.element_eq(&200i16));
        assert!(!u64::MAX.element_eq(&-1i64));
        assert!(255u8.element_eq(&255.0f32));
        assert!((-1i8).element_eq(&-1i64));
        assert!(!(-1i32).element_eq(&u32::MAX));
    }
}
