use std::ops;

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// A trait for numeric types that can be stored in a [`Matrix`][crate::Matrix] and take part in
/// its arithmetic.
///
/// This is implemented automatically for every type that satisfies the bounds, which includes all
/// built-in integer and floating-point types. Unlike signed arithmetic, nothing here requires
/// negation, so unsigned element types work too.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
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
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + PartialEq
        + Copy
{
}

macro_rules! int_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0;
            }
            impl One for $types {
                const ONE: Self = 1;
            }
        )+
    };
}
int_consts!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize);

macro_rules! float_consts {
    ($($types:ty),+) => {
        $(
            impl Zero for $types {
                const ZERO: Self = 0.0;
            }
            impl One for $types {
                const ONE: Self = 1.0;
            }
        )+
    };
}
float_consts!(f32, f64);
