//! Unit tests for the Money module
//!
//! Tests cover money creation, checked arithmetic, rounding to the
//! currency's minor unit, and currency parsing.

use core_kernel::{Money, Currency, MoneyError};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_rounds_to_four_decimal_places() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.1235));
    }

    #[test]
    fn test_from_minor_handles_jpy_no_decimals() {
        let m = Money::from_minor(10000, Currency::JPY);
        assert_eq!(m.amount(), dec!(10000));
    }

    #[test]
    fn test_zero_creates_zero_amount() {
        let m = Money::zero(Currency::EUR);
        assert!(m.is_zero());
        assert!(!m.is_negative());
        assert_eq!(m.currency(), Currency::EUR);
    }

    #[test]
    fn test_negative_amount_is_reported() {
        let m = Money::new(dec!(-0.01), Currency::USD);
        assert!(m.is_negative());
    }
}

mod arithmetic {
    use super::*;

    #[test]
    fn test_checked_add_same_currency() {
        let a = Money::new(dec!(50), Currency::USD);
        let b = Money::new(dec!(30), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(80));
    }

    #[test]
    fn test_checked_add_currency_mismatch() {
        let usd = Money::new(dec!(1), Currency::USD);
        let gbp = Money::new(dec!(1), Currency::GBP);
        assert_eq!(
            usd.checked_add(&gbp),
            Err(MoneyError::CurrencyMismatch("USD".to_string(), "GBP".to_string()))
        );
    }

    #[test]
    fn test_decimal_sums_are_exact() {
        let a = Money::new(dec!(0.1), Currency::USD);
        let b = Money::new(dec!(0.2), Currency::USD);
        assert_eq!(a.checked_add(&b).unwrap().amount(), dec!(0.3));
    }

    #[test]
    fn test_checked_multiply_by_zero() {
        let rate = Money::new(dec!(2500), Currency::USD);
        assert!(rate.checked_multiply(Decimal::ZERO).unwrap().is_zero());
    }

    #[test]
    fn test_checked_multiply_overflow() {
        let huge = Money::new(Decimal::MAX, Currency::USD);
        assert_eq!(huge.checked_multiply(dec!(2)), Err(MoneyError::Overflow));
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_round_to_currency_usd() {
        let m = Money::new(dec!(19.995), Currency::USD);
        assert_eq!(m.round_to_currency().amount(), dec!(20.00));
    }

    #[test]
    fn test_round_to_currency_jpy() {
        let m = Money::new(dec!(1234.5678), Currency::JPY);
        assert_eq!(m.round_to_currency().amount(), dec!(1235));
    }

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        let cents = Money::new(dec!(0.125), Currency::USD);
        assert_eq!(cents.round_to_currency().amount(), dec!(0.13));

        let yen = Money::new(dec!(2.5), Currency::JPY);
        assert_eq!(yen.round_to_currency().amount(), dec!(3));
    }

    #[test]
    fn test_midpoint_below_fourth_place_on_construction() {
        let m = Money::new(dec!(1.00005), Currency::USD);
        assert_eq!(m.amount(), dec!(1.0001));
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_default_currency_is_usd() {
        assert_eq!(Currency::default(), Currency::USD);
    }

    #[test]
    fn test_codes_round_trip_through_from_str() {
        for currency in [
            Currency::USD,
            Currency::EUR,
            Currency::GBP,
            Currency::JPY,
            Currency::CHF,
            Currency::AUD,
            Currency::CAD,
            Currency::MXN,
            Currency::ZAR,
            Currency::KES,
        ] {
            assert_eq!(currency.code().parse::<Currency>().unwrap(), currency);
            assert!(!currency.symbol().is_empty());
        }
    }

    #[test]
    fn test_serde_uses_uppercase_code() {
        let json = serde_json::to_string(&Currency::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
    }
}

mod display {
    use super::*;

    #[test]
    fn test_money_display_usd() {
        assert_eq!(Money::new(dec!(65), Currency::USD).to_string(), "$ 65.00");
    }

    #[test]
    fn test_money_display_jpy() {
        assert_eq!(Money::new(dec!(9000), Currency::JPY).to_string(), "¥ 9000");
    }
}
