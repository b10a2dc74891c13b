//! # taxtally
//!
//! Line-item tax arithmetic and VAT breakdown aggregation for invoicing.
//!
//! All monetary values use [`rust_decimal::Decimal`] — never floating
//! point. Amounts are rounded to 2 decimal places with commercial
//! (half-away-from-zero) rounding; per-rate breakdown groups keep the
//! order in which rates first appear among the line items, the order a
//! VAT invoice lists them in.
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_decimal_macros::dec;
//! use taxtally::{LineItem, invoice_totals};
//!
//! let lines = vec![
//!     LineItem::new("Design work", dec!(10), dec!(120), dec!(20)),
//!     LineItem::new("Stock photos", dec!(3), dec!(15), dec!(0)),
//! ];
//!
//! let totals = invoice_totals(&lines);
//! assert_eq!(totals.subtotal, dec!(1245));
//! assert_eq!(totals.tax_amount, dec!(240));
//! assert_eq!(totals.total, dec!(1485));
//!
//! let standard = totals.vat_breakdown.get(dec!(20)).unwrap();
//! assert_eq!(standard.vat, dec!(240));
//! assert_eq!(standard.count, 1);
//! ```
//!
//! The calculation functions are pure and permissive: they never fail and
//! accept negative amounts (credit lines). Input policy belongs to the
//! caller — [`validate_items`] and [`invoice_totals_checked`] provide it
//! for callers that want rejection instead of propagation.

mod calc;
mod currency;
mod error;
mod summary;
mod totals;
mod types;
mod validation;

pub use calc::{line_amounts, round_money, vat_from_net};
pub use currency::ExchangeRate;
pub use error::{TallyError, ValidationError};
pub use summary::{RateGroup, VatSummary, aggregate_by_rate};
pub use totals::{invoice_totals, invoice_totals_checked};
pub use types::{InvoiceTotals, ItemAmounts, LineItem, VatAmounts};
pub use validation::validate_items;
