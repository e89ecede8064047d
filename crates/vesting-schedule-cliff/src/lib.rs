//! The cliff gate for vesting schedules.
//!
//! A [`CliffSchedule`] wraps a base accrual schedule and withholds everything
//! before a configured cliff moment: nothing is vested before the cliff no matter
//! what the base schedule would accrue, and from the cliff onwards the base result
//! is passed through unmodified.

#![cfg_attr(not(feature = "std"), no_std)]

use num_traits::{CheckedSub, SaturatingAdd, Unsigned, Zero};
use vesting_schedule::VestingSchedule;
use vesting_schedule_linear::{traits::FracScale, LinearSchedule, ScaledLinearSchedule};

pub mod types;

#[cfg(test)]
mod mock;

use types::VestingConfig;

/// An error that can happen when setting up a [`CliffSchedule`].
#[derive(Debug, thiserror::Error, Clone, PartialEq, Eq)]
#[error("cliff offset {cliff_offset} exceeds the vesting duration {duration}")]
pub struct InvalidCliffDuration<Moment> {
    /// The cliff offset that was requested.
    pub cliff_offset: Moment,
    /// The vesting duration it was checked against.
    pub duration: Moment,
}

/// The cliff gate around a base accrual schedule.
///
/// Holds the base schedule and the cliff moment derived at setup. The only way to
/// obtain a value of this type is a successful [`CliffSchedule::new`] call, so
/// a schedule with a cliff longer than its duration cannot exist.
pub struct CliffSchedule<Schedule: VestingSchedule> {
    /// The base schedule consulted once the cliff has passed.
    schedule: Schedule,
    /// The cliff moment; nothing is vested before it.
    cliff: Schedule::Moment,
}

impl<Schedule> CliffSchedule<Schedule>
where
    Schedule: VestingSchedule,
    Schedule::Moment: PartialOrd + SaturatingAdd + Copy,
{
    /// Gate the given schedule with a cliff at `cliff_offset` from its start.
    ///
    /// The cliff moment `start + cliff_offset` is computed once here and never
    /// recomputed. Fails with [`InvalidCliffDuration`] when `cliff_offset` exceeds
    /// the schedule duration, in which case nothing is left behind.
    pub fn new(
        schedule: Schedule,
        cliff_offset: Schedule::Moment,
    ) -> Result<Self, InvalidCliffDuration<Schedule::Moment>> {
        let duration = schedule.duration();
        if cliff_offset > duration {
            return Err(InvalidCliffDuration {
                cliff_offset,
                duration,
            });
        }

        let cliff = schedule.start().saturating_add(&cliff_offset);
        Ok(Self { schedule, cliff })
    }

    /// The cliff moment.
    pub fn cliff(&self) -> Schedule::Moment {
        self.cliff
    }
}

impl<Schedule> VestingSchedule for CliffSchedule<Schedule>
where
    Schedule: VestingSchedule,
    Schedule::Moment: PartialOrd,
    Schedule::Balance: Zero,
{
    type Balance = Schedule::Balance;
    type Moment = Schedule::Moment;

    fn start(&self) -> Self::Moment {
        self.schedule.start()
    }

    fn duration(&self) -> Self::Moment {
        self.schedule.duration()
    }

    fn end(&self) -> Self::Moment {
        self.schedule.end()
    }

    fn vested_amount(
        &self,
        total_allocation: Self::Balance,
        moment: Self::Moment,
    ) -> Self::Balance {
        if moment < self.cliff {
            // The base schedule is not consulted before the cliff; any side effects
            // it might have stay unevaluated.
            return Zero::zero();
        }

        self.schedule.vested_amount(total_allocation, moment)
    }
}

/// The cliff gated linear schedule, with the interpolation computed by the scaler `S`.
pub type CliffGatedLinearSchedule<S> = CliffSchedule<ScaledLinearSchedule<S>>;

impl<S> CliffSchedule<ScaledLinearSchedule<S>>
where
    S: FracScale,
    S::Value: Unsigned + Copy,
    S::FracPart: PartialOrd + Unsigned + CheckedSub + SaturatingAdd + Copy,
{
    /// Set up a cliff gated linear schedule from the given config.
    ///
    /// This is the assembly the setup entry point of the containing wallet layer
    /// is expected to invoke with `(start, cliff_offset, duration)`.
    pub fn from_config(
        config: VestingConfig<S::FracPart>,
    ) -> Result<Self, InvalidCliffDuration<S::FracPart>> {
        let VestingConfig {
            start,
            cliff_offset,
            duration,
        } = config;

        Self::new(
            ScaledLinearSchedule::new(LinearSchedule { start, duration }),
            cliff_offset,
        )
    }
}
