//! Generic vesting schedule related traits to abstract away the implementations.

/// [`VestingSchedule`] defines the accrual logic of a vesting schedule.
///
/// An implementation is a pure function from time to the cumulative share of a fixed
/// total allocation that is vested at that time. It does not hold or transfer
/// the allocation itself; custody belongs to the calling layer.
pub trait VestingSchedule {
    /// The balance type the accrual is computed in.
    type Balance;
    /// The type used to denote time: Timestamp, BlockNumber, etc.
    type Moment;

    /// The moment the schedule starts accruing at.
    fn start(&self) -> Self::Moment;

    /// The overall length of the schedule.
    fn duration(&self) -> Self::Moment;

    /// The moment at which the schedule ends and the whole allocation is vested.
    fn end(&self) -> Self::Moment;

    /// The amount out of `total_allocation` that is vested at `moment`.
    ///
    /// Total over all allocations and moments, and non-decreasing in `moment`
    /// for a fixed `total_allocation`.
    fn vested_amount(&self, total_allocation: Self::Balance, moment: Self::Moment) -> Self::Balance;
}
