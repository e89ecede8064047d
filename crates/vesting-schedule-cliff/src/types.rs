//! Custom types we use.

use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
#[cfg(feature = "std")]
use serde::{Deserialize, Serialize};

/// The vesting configuration: the parameters a cliff gated schedule is set up from.
///
/// Created once by the setup entry point and immutable thereafter; the cliff moment
/// derived from it is stored in the schedule, not here.
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode, MaxEncodedLen, TypeInfo)]
#[cfg_attr(feature = "std", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "std", serde(deny_unknown_fields))]
pub struct VestingConfig<Moment> {
    /// The moment the vesting starts at.
    pub start: Moment,
    /// The cliff length (counting from the start).
    pub cliff_offset: Moment,
    /// The vesting duration (counting from the start).
    pub duration: Moment,
}
