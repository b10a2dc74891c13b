use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::summary::VatSummary;

/// One invoice form row as entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Free-text description of the goods or service.
    pub description: String,
    /// Number of units invoiced.
    pub quantity: Decimal,
    /// Price per unit in the invoice currency. May be negative to
    /// represent a discount or credit line.
    pub unit_price: Decimal,
    /// Tax rate percentage applied to this line (e.g. `20` for 20%).
    #[serde(default)]
    pub tax_rate: Decimal,
}

impl LineItem {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit_price: Decimal,
        tax_rate: Decimal,
    ) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            tax_rate,
        }
    }
}

/// Net, tax and gross figures for a single amount, each rounded to
/// 2 decimal places. Returned by [`crate::vat_from_net`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VatAmounts {
    /// Pre-tax amount.
    pub net: Decimal,
    /// Tax amount (`net × rate / 100`).
    pub vat: Decimal,
    /// Net plus tax. Rounded independently of `net` and `vat`, so it can
    /// differ from their sum by up to 0.01.
    pub gross: Decimal,
}

/// Computed amounts for one line item, in the shape persisted with the
/// invoice record.
///
/// All fields are optional: rows arriving from a partially filled form or
/// an older payload may lack any of them. Aggregation treats a missing
/// `tax_rate` as `0` and missing amounts as contributing `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ItemAmounts {
    /// Tax rate percentage the amounts were computed with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<Decimal>,
    /// Rounded net amount (`quantity × unit_price`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub net_amount: Option<Decimal>,
    /// Rounded tax amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_amount: Option<Decimal>,
    /// Rounded gross amount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gross_amount: Option<Decimal>,
}

/// Invoice-level totals plus the per-rate breakdown snapshot persisted as
/// tax metadata alongside the invoice record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceTotals {
    /// Sum of all line net amounts.
    pub subtotal: Decimal,
    /// Sum of all line tax amounts.
    pub tax_amount: Decimal,
    /// Sum of all line gross amounts.
    pub total: Decimal,
    /// Per-rate breakdown, grouped in order of first appearance.
    pub vat_breakdown: VatSummary,
}
