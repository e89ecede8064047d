//! The linear schedule for vesting.

#![cfg_attr(not(feature = "std"), no_std)]

use core::marker::PhantomData;

use num_traits::{CheckedSub, SaturatingAdd, Unsigned, Zero};
use vesting_schedule::VestingSchedule;

pub mod traits;

use traits::FracScale;

/// The linear schedule.
///
/// Vests nothing before `start`, the whole allocation at `start + duration` and
/// onwards, and a time-proportional fraction in between.
#[derive(
    Debug,
    Clone,
    PartialEq,
    Eq,
    codec::Encode,
    codec::Decode,
    codec::MaxEncodedLen,
    scale_info::TypeInfo,
)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(deny_unknown_fields))]
pub struct LinearSchedule<Moment> {
    /// The moment the vesting starts at.
    pub start: Moment,
    /// The vesting duration (counting from the start).
    pub duration: Moment,
}

impl<Moment> LinearSchedule<Moment>
where
    Moment: PartialOrd + Unsigned + CheckedSub + Copy,
{
    /// Compute the amount of `total_allocation` vested at any given `moment`.
    pub fn vested_amount<S, Balance>(&self, total_allocation: Balance, moment: Moment) -> Balance
    where
        S: FracScale<Value = Balance, FracPart = Moment>,
        Balance: Unsigned + Copy,
    {
        let elapsed = match moment.checked_sub(&self.start) {
            // The vesting did not start yet, so nothing is vested.
            None => return Zero::zero(),
            Some(v) => v,
        };

        if elapsed >= self.duration {
            // The vesting is already over, the whole allocation is vested.
            return total_allocation;
        }

        S::frac_scale(&total_allocation, &elapsed, &self.duration)
    }
}

/// A [`LinearSchedule`] bound to a concrete fractional scaler, forming a complete
/// accrual strategy.
pub struct ScaledLinearSchedule<S: FracScale> {
    /// The schedule parameters.
    pub schedule: LinearSchedule<S::FracPart>,
    /// The scaler binding.
    _scaler: PhantomData<S>,
}

impl<S: FracScale> ScaledLinearSchedule<S> {
    /// Bind the given schedule to the scaler `S`.
    pub fn new(schedule: LinearSchedule<S::FracPart>) -> Self {
        Self {
            schedule,
            _scaler: PhantomData,
        }
    }
}

impl<S> VestingSchedule for ScaledLinearSchedule<S>
where
    S: FracScale,
    S::Value: Unsigned + Copy,
    S::FracPart: PartialOrd + Unsigned + CheckedSub + SaturatingAdd + Copy,
{
    type Balance = S::Value;
    type Moment = S::FracPart;

    fn start(&self) -> Self::Moment {
        self.schedule.start
    }

    fn duration(&self) -> Self::Moment {
        self.schedule.duration
    }

    fn end(&self) -> Self::Moment {
        self.schedule.start.saturating_add(&self.schedule.duration)
    }

    fn vested_amount(
        &self,
        total_allocation: Self::Balance,
        moment: Self::Moment,
    ) -> Self::Balance {
        self.schedule.vested_amount::<S, _>(total_allocation, moment)
    }
}
