use rust_decimal::Decimal;

use crate::calc::line_amounts;
use crate::error::TallyError;
use crate::summary::aggregate_by_rate;
use crate::types::{InvoiceTotals, ItemAmounts, LineItem};
use crate::validation::validate_items;

/// Compute invoice totals and the per-rate breakdown for a set of line
/// items.
///
/// Each line is computed with [`line_amounts`]; `subtotal`, `tax_amount`
/// and `total` are the sums of the per-line rounded figures, and the
/// breakdown groups the same figures by rate. Inputs are not validated —
/// see [`invoice_totals_checked`] for the validating variant.
pub fn invoice_totals(lines: &[LineItem]) -> InvoiceTotals {
    let rows: Vec<ItemAmounts> = lines.iter().map(line_amounts).collect();

    let mut subtotal = Decimal::ZERO;
    let mut tax_amount = Decimal::ZERO;
    let mut total = Decimal::ZERO;
    for row in &rows {
        subtotal += row.net_amount.unwrap_or(Decimal::ZERO);
        tax_amount += row.tax_amount.unwrap_or(Decimal::ZERO);
        total += row.gross_amount.unwrap_or(Decimal::ZERO);
    }

    InvoiceTotals {
        subtotal,
        tax_amount,
        total,
        vat_breakdown: aggregate_by_rate(&rows),
    }
}

/// Validate line items, then compute totals.
/// Returns all validation errors joined into one error.
pub fn invoice_totals_checked(lines: &[LineItem]) -> Result<InvoiceTotals, TallyError> {
    let errors = validate_items(lines);
    if !errors.is_empty() {
        let msg = errors
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(TallyError::Validation(msg));
    }
    Ok(invoice_totals(lines))
}
