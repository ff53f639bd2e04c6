//! Property-Based Test Generators
//!
//! Provides proptest strategies for stay dates, rates and fee schedules.

use chrono::{Duration, NaiveDate};
use core_kernel::{Currency, Money};
use domain_booking::{Fee, FeeSchedule};
use proptest::prelude::*;
use rust_decimal::Decimal;

/// Strategy for calendar dates between 2020 and roughly 2035
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..5_500).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + Duration::days(offset)
    })
}

/// Strategy for (checkin, checkout) with checkout strictly later
pub fn valid_stay_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 1i64..400).prop_map(|(checkin, nights)| (checkin, checkin + Duration::days(nights)))
}

/// Strategy for (checkin, checkout) with checkout on or before checkin
pub fn non_increasing_stay_strategy() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (date_strategy(), 0i64..400).prop_map(|(checkin, back)| (checkin, checkin - Duration::days(back)))
}

/// Strategy for a non-negative nightly rate in USD, up to 100,000.00
pub fn usd_rate_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::USD))
}

/// Strategy for night counts
pub fn nights_strategy() -> impl Strategy<Value = u32> {
    0u32..1_000
}

/// Strategy for up to four non-negative USD fees
pub fn usd_fee_schedule_strategy() -> impl Strategy<Value = FeeSchedule> {
    prop::collection::vec(0i64..100_000i64, 0..4).prop_map(|amounts| {
        amounts
            .into_iter()
            .enumerate()
            .map(|(i, cents)| Fee::new(format!("Fee {}", i + 1), Money::from_minor(cents, Currency::USD)))
            .collect()
    })
}

/// Sum of the fee amounts in a schedule
pub fn fee_sum(schedule: &FeeSchedule) -> Decimal {
    schedule.fees().iter().map(|fee| fee.amount.amount()).sum()
}
