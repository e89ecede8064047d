//! Traits that we use.

use core::marker::PhantomData;

use num_traits::{Bounded, CheckedDiv, CheckedMul, Zero};

/// Fractional scaler.
///
/// Effectively represent multiplication of the value to a fraction operation: x * (a/b).
pub trait FracScale {
    /// The value type to scale.
    type Value;
    /// The type used for the fraction nominator and denominator.
    type FracPart;

    /// Compute `value` * (`nom` / `denom`), rounding down.
    ///
    /// Callers are expected to uphold `nom <= denom`, and to resolve a zero `denom`
    /// before scaling.
    fn frac_scale(value: &Self::Value, nom: &Self::FracPart, denom: &Self::FracPart) -> Self::Value;
}

/// Not super precise, but generic scaler that saturates at the numeric bounds
/// instead of failing.
///
/// The computation is widened into `T`; pick a `T` that fits `Value::MAX * FracPart::MAX`
/// to keep the saturation branches unreachable.
pub struct SaturatingFracScaler<T, Value, FracPart>(PhantomData<(T, Value, FracPart)>);

impl<T, Value, FracPart> FracScale for SaturatingFracScaler<T, Value, FracPart>
where
    T: CheckedMul + CheckedDiv + Zero + Bounded,
    Value: Into<T> + Copy + Zero + Bounded,
    FracPart: Into<T> + Copy,
    T: TryInto<Value>,
{
    type Value = Value;
    type FracPart = FracPart;

    fn frac_scale(
        value: &Self::Value,
        nom: &Self::FracPart,
        denom: &Self::FracPart,
    ) -> Self::Value {
        let value = (*value).into();
        let nom = (*nom).into();

        let upscaled = value.checked_mul(&nom).unwrap_or_else(T::max_value);
        if upscaled.is_zero() {
            return Zero::zero();
        }

        let denom = (*denom).into();
        let downscaled = match upscaled.checked_div(&denom) {
            // The denom is zero, saturate to zero.
            None => return Zero::zero(),
            Some(v) => v,
        };

        downscaled.try_into().unwrap_or_else(|_| Value::max_value())
    }
}
