use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::types::{ItemAmounts, LineItem, VatAmounts};

/// Round a monetary value to 2 decimal places using half-away-from-zero
/// (commercial rounding).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, rust_decimal::RoundingStrategy::MidpointAwayFromZero)
}

/// Compute tax and gross figures from a net amount and a tax rate
/// percentage.
///
/// `net`, the tax amount and `net + tax` are each rounded to 2 decimal
/// places **independently**, so `net + vat` can differ from `gross` by up
/// to 0.01. No validation is performed: negative amounts (credit lines)
/// and out-of-range rates pass through unchanged.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxtally::vat_from_net;
///
/// let a = vat_from_net(dec!(100), dec!(20));
/// assert_eq!(a.net, dec!(100));
/// assert_eq!(a.vat, dec!(20));
/// assert_eq!(a.gross, dec!(120));
/// ```
pub fn vat_from_net(net: Decimal, rate: Decimal) -> VatAmounts {
    let vat = net * rate / dec!(100);
    VatAmounts {
        net: round_money(net),
        vat: round_money(vat),
        gross: round_money(net + vat),
    }
}

/// Compute the persisted amount fields for one line item.
///
/// The net base is `quantity × unit_price`, unrounded, fed through
/// [`vat_from_net`]. Returns a fully populated [`ItemAmounts`] row ready
/// for aggregation.
pub fn line_amounts(item: &LineItem) -> ItemAmounts {
    let amounts = vat_from_net(item.quantity * item.unit_price, item.tax_rate);
    ItemAmounts {
        tax_rate: Some(item.tax_rate),
        net_amount: Some(amounts.net),
        tax_amount: Some(amounts.vat),
        gross_amount: Some(amounts.gross),
    }
}
