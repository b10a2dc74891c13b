use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calc::round_money;
use crate::error::TallyError;

/// An exchange rate between two currencies, effective on a given date.
///
/// Invoices can be issued in a currency other than the account's base
/// currency; the submitted payload carries the rate used so the backend
/// can reproduce the conversion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRate {
    /// Currency the amount is denominated in (ISO 4217, e.g. "EUR").
    pub base: String,
    /// Currency to convert into.
    pub quote: String,
    /// Units of `quote` per unit of `base`. Always positive.
    pub rate: Decimal,
    /// Date the rate was sourced.
    pub as_of: NaiveDate,
}

impl ExchangeRate {
    /// Create an exchange rate, rejecting malformed currency codes and
    /// non-positive rates.
    pub fn new(
        base: impl Into<String>,
        quote: impl Into<String>,
        rate: Decimal,
        as_of: NaiveDate,
    ) -> Result<Self, TallyError> {
        let base = base.into();
        let quote = quote.into();
        check_currency_code(&base)?;
        check_currency_code(&quote)?;
        if rate <= Decimal::ZERO {
            return Err(TallyError::Currency(format!(
                "exchange rate must be positive, got {rate}"
            )));
        }
        Ok(Self {
            base,
            quote,
            rate,
            as_of,
        })
    }

    /// Convert an amount from `base` to `quote`, rounded to 2 decimal
    /// places with the same commercial rounding as the tax arithmetic.
    pub fn convert(&self, amount: Decimal) -> Decimal {
        round_money(amount * self.rate)
    }
}

fn check_currency_code(code: &str) -> Result<(), TallyError> {
    if code.len() != 3 || !code.chars().all(|c| c.is_ascii_uppercase()) {
        return Err(TallyError::Currency(format!(
            "currency code '{code}' must be 3 uppercase letters (ISO 4217)"
        )));
    }
    Ok(())
}
