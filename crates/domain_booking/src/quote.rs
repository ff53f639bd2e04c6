//! Stay pricing
//!
//! A quote is the nightly rate times the number of nights, plus a schedule of
//! fixed per-booking fees (cleaning, service) that do not scale with the
//! length of the stay.

use core_kernel::{Currency, Money};
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::debug;

use crate::error::BookingError;

/// A fixed charge applied once per booking
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Fee {
    /// Label shown on the quote (e.g., "Cleaning fee")
    pub label: String,
    /// Amount charged
    pub amount: Money,
}

impl Fee {
    pub fn new(label: impl Into<String>, amount: Money) -> Self {
        Self {
            label: label.into(),
            amount,
        }
    }
}

/// Ordered list of per-booking fees
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FeeSchedule {
    fees: Vec<Fee>,
}

impl FeeSchedule {
    /// Creates an empty schedule
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a fee, keeping insertion order
    pub fn with_fee(mut self, label: impl Into<String>, amount: Money) -> Self {
        self.fees.push(Fee::new(label, amount));
        self
    }

    /// Returns the fees in the order they were added
    pub fn fees(&self) -> &[Fee] {
        &self.fees
    }

    pub fn is_empty(&self) -> bool {
        self.fees.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fees.len()
    }
}

impl FromIterator<Fee> for FeeSchedule {
    fn from_iter<I: IntoIterator<Item = Fee>>(iter: I) -> Self {
        Self {
            fees: iter.into_iter().collect(),
        }
    }
}

/// Priced breakdown of a stay
///
/// A quote is never edited in place. When the dates or the rate change,
/// compose a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StayQuote {
    nights: u32,
    nightly_rate: Money,
    subtotal: Money,
    fees: Vec<Fee>,
    total: Money,
}

impl StayQuote {
    pub fn nights(&self) -> u32 {
        self.nights
    }

    pub fn nightly_rate(&self) -> Money {
        self.nightly_rate
    }

    /// Nightly rate times nights
    pub fn subtotal(&self) -> Money {
        self.subtotal
    }

    /// Itemized fees, in schedule order
    pub fn fees(&self) -> &[Fee] {
        &self.fees
    }

    /// Subtotal plus every fee
    pub fn total(&self) -> Money {
        self.total
    }

    pub fn currency(&self) -> Currency {
        self.nightly_rate.currency()
    }

    /// Sum of the fees alone
    ///
    /// `compose` checked every addition, so the difference is exact.
    pub fn fees_total(&self) -> Money {
        Money::new(self.total.amount() - self.subtotal.amount(), self.currency())
    }
}

/// Composes stay quotes
pub struct PriceComposer;

impl PriceComposer {
    /// Prices a stay
    ///
    /// The subtotal and every fee are rounded to the currency's minor unit,
    /// and the total is their exact sum, so the itemized lines always add up
    /// to the total shown.
    ///
    /// # Arguments
    ///
    /// * `nightly_rate` - Price per night, must not be negative
    /// * `nights` - Number of nights; 0 gives a zero subtotal
    /// * `schedule` - Fixed fees, each in the rate's currency
    ///
    /// # Errors
    ///
    /// - `NonNegativeConstraintViolation` for a negative rate or fee
    /// - `Money(CurrencyMismatch)` when a fee is in another currency
    /// - `Money(Overflow)` for amounts beyond decimal range
    pub fn compose(
        nightly_rate: Money,
        nights: u32,
        schedule: &FeeSchedule,
    ) -> Result<StayQuote, BookingError> {
        if nightly_rate.is_negative() {
            return Err(BookingError::negative("nightly rate", nightly_rate.amount()));
        }

        let subtotal = nightly_rate
            .checked_multiply(Decimal::from(nights))?
            .round_to_currency();

        let mut total = subtotal;
        let mut fees = Vec::with_capacity(schedule.len());
        for fee in schedule.fees() {
            if fee.amount.is_negative() {
                return Err(BookingError::negative(&fee.label, fee.amount.amount()));
            }
            let amount = fee.amount.round_to_currency();
            total = total.checked_add(&amount)?;
            fees.push(Fee::new(fee.label.clone(), amount));
        }

        debug!(
            nights,
            rate = %nightly_rate,
            subtotal = %subtotal,
            total = %total,
            fee_count = fees.len(),
            "Composed stay quote"
        );

        Ok(StayQuote {
            nights,
            nightly_rate,
            subtotal,
            fees,
            total,
        })
    }

    /// Converts a night count from an untyped caller
    ///
    /// # Errors
    ///
    /// `NonNegativeConstraintViolation` for a negative count, or one too
    /// large to represent.
    pub fn nights_from_signed(nights: i64) -> Result<u32, BookingError> {
        u32::try_from(nights).map_err(|_| BookingError::negative("night count", nights))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn usd(amount: Decimal) -> Money {
        Money::new(amount, Currency::USD)
    }

    #[test]
    fn test_quote_with_fees() {
        let fees = FeeSchedule::new()
            .with_fee("Cleaning fee", usd(dec!(50)))
            .with_fee("Service fee", usd(dec!(30)));

        let quote = PriceComposer::compose(usd(dec!(2500)), 3, &fees).unwrap();

        assert_eq!(quote.subtotal().amount(), dec!(7500));
        assert_eq!(quote.total().amount(), dec!(7580));
        assert_eq!(quote.fees_total().amount(), dec!(80));
        assert_eq!(quote.fees()[0].label, "Cleaning fee");
    }

    #[test]
    fn test_zero_nights_leaves_only_fees() {
        let fees = FeeSchedule::new().with_fee("Service fee", usd(dec!(65)));
        let quote = PriceComposer::compose(usd(dec!(2500)), 0, &fees).unwrap();

        assert!(quote.subtotal().is_zero());
        assert_eq!(quote.total().amount(), dec!(65));
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let result = PriceComposer::compose(usd(dec!(-1)), 2, &FeeSchedule::new());
        assert!(matches!(
            result,
            Err(BookingError::NonNegativeConstraintViolation { .. })
        ));
    }

    #[test]
    fn test_fee_in_other_currency_is_rejected() {
        let fees = FeeSchedule::new().with_fee("Cleaning fee", Money::new(dec!(10), Currency::EUR));
        let result = PriceComposer::compose(usd(dec!(100)), 1, &fees);
        assert!(matches!(result, Err(BookingError::Money(_))));
    }

    #[test]
    fn test_nights_from_signed() {
        assert_eq!(PriceComposer::nights_from_signed(4).unwrap(), 4);
        assert!(PriceComposer::nights_from_signed(-1).is_err());
    }
}
