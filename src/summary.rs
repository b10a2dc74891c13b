//! Per-rate VAT breakdown aggregation.
//!
//! Invoices present one summary row per distinct tax rate, in the order
//! the rates first appear among the line items. [`VatSummary`] keeps that
//! order explicitly instead of relying on map iteration order.

use rust_decimal::Decimal;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::calc::round_money;
use crate::types::ItemAmounts;

/// Aggregated amounts for all line items sharing one tax rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateGroup {
    /// The tax rate percentage this group represents.
    pub rate: Decimal,
    /// Sum of the items' net amounts.
    pub net: Decimal,
    /// Sum of the items' tax amounts.
    pub vat: Decimal,
    /// Sum of the items' gross amounts.
    pub gross: Decimal,
    /// Number of line items aggregated into this group.
    pub count: u32,
}

/// Per-rate breakdown groups in order of first appearance.
///
/// Serializes as a JSON object keyed by the rate rendered without trailing
/// zeros (`"20"`, `"17.5"`, `"0"`), entries in group order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VatSummary {
    groups: Vec<RateGroup>,
}

impl VatSummary {
    /// Groups in first-appearance order.
    pub fn groups(&self) -> &[RateGroup] {
        &self.groups
    }

    /// Look up the group for a tax rate. Rates compare numerically, so
    /// `17.5` and `17.50` find the same group.
    pub fn get(&self, rate: Decimal) -> Option<&RateGroup> {
        self.groups.iter().find(|g| g.rate == rate)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RateGroup> {
        self.groups.iter()
    }
}

impl<'a> IntoIterator for &'a VatSummary {
    type Item = &'a RateGroup;
    type IntoIter = std::slice::Iter<'a, RateGroup>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.iter()
    }
}

/// Group computed line items by tax rate.
///
/// Groups are created lazily on first encounter of a distinct rate, so the
/// summary lists rates in input order. A missing `tax_rate` groups under
/// rate `0`; missing amounts contribute `0` to their sums. Group sums
/// accumulate unrounded and are rounded to 2 decimal places once, after
/// all items are processed.
///
/// ```
/// use rust_decimal_macros::dec;
/// use taxtally::{ItemAmounts, aggregate_by_rate};
///
/// let rows = [
///     ItemAmounts {
///         tax_rate: Some(dec!(20)),
///         net_amount: Some(dec!(100.00)),
///         tax_amount: Some(dec!(20.00)),
///         gross_amount: Some(dec!(120.00)),
///     },
///     ItemAmounts::default(),
/// ];
/// let summary = aggregate_by_rate(&rows);
/// assert_eq!(summary.len(), 2);
/// assert_eq!(summary.get(dec!(20)).unwrap().count, 1);
/// assert_eq!(summary.get(dec!(0)).unwrap().net, dec!(0));
/// ```
pub fn aggregate_by_rate(items: &[ItemAmounts]) -> VatSummary {
    let mut groups: Vec<RateGroup> = Vec::new();

    for item in items {
        let rate = item.tax_rate.unwrap_or(Decimal::ZERO);
        let idx = match groups.iter().position(|g| g.rate == rate) {
            Some(idx) => idx,
            None => {
                groups.push(RateGroup {
                    rate,
                    net: Decimal::ZERO,
                    vat: Decimal::ZERO,
                    gross: Decimal::ZERO,
                    count: 0,
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        group.net += item.net_amount.unwrap_or(Decimal::ZERO);
        group.vat += item.tax_amount.unwrap_or(Decimal::ZERO);
        group.gross += item.gross_amount.unwrap_or(Decimal::ZERO);
        group.count += 1;
    }

    for group in &mut groups {
        group.net = round_money(group.net);
        group.vat = round_money(group.vat);
        group.gross = round_money(group.gross);
    }

    VatSummary { groups }
}

fn rate_key(rate: Decimal) -> String {
    rate.normalize().to_string()
}

impl Serialize for VatSummary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.groups.len()))?;
        for group in &self.groups {
            map.serialize_entry(&rate_key(group.rate), group)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for VatSummary {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SummaryVisitor;

        impl<'de> Visitor<'de> for SummaryVisitor {
            type Value = VatSummary;

            fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str("a map of tax rate keys to rate groups")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut groups = Vec::with_capacity(access.size_hint().unwrap_or(0));
                // Document order is the group order; the key repeats the
                // group's own rate field and carries no extra information.
                while let Some((_key, group)) = access.next_entry::<String, RateGroup>()? {
                    groups.push(group);
                }
                Ok(VatSummary { groups })
            }
        }

        deserializer.deserialize_map(SummaryVisitor)
    }
}
