use mockall::mock;
use vesting_schedule::VestingSchedule;

mock! {
    pub Schedule {}

    impl VestingSchedule for Schedule {
        type Balance = u64;
        type Moment = u64;

        fn start(&self) -> u64;
        fn duration(&self) -> u64;
        fn end(&self) -> u64;
        fn vested_amount(&self, total_allocation: u64, moment: u64) -> u64;
    }
}
