// Our Real scalar type:
#[cfg(feature = "f32")]
pub type Real = f32;
#[cfg(feature = "f64")]
pub type Real = f64;

/// Unsigned integer type with the same width as [`Real`], used for exact-match hashing.
#[cfg(feature = "f32")]
pub type RealBits = u32;
/// Unsigned integer type with the same width as [`Real`], used for exact-match hashing.
#[cfg(feature = "f64")]
pub type RealBits = u64;

/// Tolerance used for "is this length effectively zero" checks.
#[cfg(feature = "f32")]
pub const EPSILON: Real = 1e-6;
/// Tolerance used for "is this length effectively zero" checks.
#[cfg(feature = "f64")]
pub const EPSILON: Real = 1e-12;

/// Bit pattern of `value` such that two values compare equal with `==`
/// exactly when their canonical bits are equal.
///
/// `-0.0` and `+0.0` are folded together. NaN never compares equal with `==`,
/// but every NaN maps to one canonical pattern so it can still be stored once.
#[inline]
pub fn canonical_bits(value: Real) -> RealBits {
    if value == 0.0 {
        (0.0 as Real).to_bits()
    } else if value.is_nan() {
        Real::NAN.to_bits()
    } else {
        value.to_bits()
    }
}
