//! Ordered-numeric capability for the zero-comparison checks.
//!
//! One generic implementation replaces the per-primitive-type overloads a
//! validation library tends to accumulate: any `PartialOrd` type that can
//! name its zero value gets the whole `…_zero` check family.

// ============================================================================
// HAS ZERO
// ============================================================================

/// Ordered numerics with a zero value.
///
/// Comparisons against zero go through `PartialOrd`, so types whose
/// ordering is exact-value (scale insensitive, like `rust_decimal`'s
/// `Decimal`) get exact mathematical zero comparison: `0.0` and `0.00`
/// are both zero.
pub trait HasZero: PartialOrd + Sized {
    /// The zero value of the type.
    fn zero() -> Self;
}

macro_rules! impl_has_zero {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl HasZero for $ty {
                fn zero() -> Self {
                    $zero
                }
            }
        )*
    };
}

impl_has_zero! {
    i8 => 0,
    i16 => 0,
    i32 => 0,
    i64 => 0,
    i128 => 0,
    isize => 0,
    u8 => 0,
    u16 => 0,
    u32 => 0,
    u64 => 0,
    u128 => 0,
    usize => 0,
    f32 => 0.0,
    f64 => 0.0,
}

#[cfg(feature = "decimal")]
impl HasZero for rust_decimal::Decimal {
    fn zero() -> Self {
        Self::ZERO
    }
}

// ============================================================================
// TESTS
// ============================================================================
