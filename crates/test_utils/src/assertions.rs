//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_booking::{BookingError, FormField, StayQuote};

/// Asserts that a quote's lines add up to its total
///
/// # Panics
///
/// Panics if subtotal plus fees differs from the total, or a fee is in
/// another currency.
pub fn assert_quote_balances(quote: &StayQuote) {
    let mut expected = quote.subtotal();
    for fee in quote.fees() {
        expected = expected
            .checked_add(&fee.amount)
            .unwrap_or_else(|e| panic!("Fee '{}' cannot be added: {}", fee.label, e));
    }
    assert_eq!(
        quote.total(),
        expected,
        "Quote total {} does not equal subtotal {} plus fees",
        quote.total(),
        quote.subtotal()
    );
}

/// Asserts that a Money value is zero
pub fn assert_money_zero(money: &Money) {
    assert!(
        money.is_zero(),
        "Expected zero money, got {}",
        money
    );
}

/// Asserts that a result failed validation on the given field
pub fn assert_validation_field<T: std::fmt::Debug>(
    result: &Result<T, BookingError>,
    expected: FormField,
) {
    match result {
        Err(err) => assert_eq!(
            err.field(),
            Some(expected),
            "Expected validation error on {}, got {}",
            expected,
            err
        ),
        Ok(value) => panic!("Expected validation error on {}, got Ok({:?})", expected, value),
    }
}
