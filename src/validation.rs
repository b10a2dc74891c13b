use rust_decimal_macros::dec;

use crate::error::ValidationError;
use crate::types::LineItem;

/// Validate line items before computing totals.
/// Returns all validation errors found (not just the first).
///
/// The calculation functions themselves accept any input; this is the
/// boundary policy a form controller can apply before calling them.
/// A negative `unit_price` is deliberately not rejected — discount and
/// credit lines are legitimate.
pub fn validate_items(lines: &[LineItem]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let prefix = format!("lines[{i}]");

        if line.quantity.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.quantity"),
                "quantity must not be negative",
            ));
        }

        if line.tax_rate.is_sign_negative() {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_rate"),
                "tax rate must not be negative",
            ));
        } else if line.tax_rate > dec!(100) {
            errors.push(ValidationError::new(
                format!("{prefix}.tax_rate"),
                format!("tax rate {}% exceeds 100%", line.tax_rate),
            ));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_lines_pass() {
        let lines = [
            LineItem::new("Design", dec!(10), dec!(120), dec!(20)),
            LineItem::new("Credit", dec!(1), dec!(-50), dec!(20)),
            LineItem::new("Zero-rated", dec!(2), dec!(15), dec!(0)),
        ];
        assert!(validate_items(&lines).is_empty());
    }

    #[test]
    fn negative_quantity_rejected() {
        let lines = [LineItem::new("Broken", dec!(-1), dec!(10), dec!(20))];
        let errors = validate_items(&lines);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "lines[0].quantity");
    }

    #[test]
    fn negative_tax_rate_rejected() {
        let lines = [LineItem::new("Broken", dec!(1), dec!(10), dec!(-5))];
        let errors = validate_items(&lines);
        assert_eq!(errors[0].field, "lines[0].tax_rate");
    }

    #[test]
    fn tax_rate_above_100_rejected() {
        let lines = [LineItem::new("Broken", dec!(1), dec!(10), dec!(120))];
        let errors = validate_items(&lines);
        assert!(errors[0].message.contains("120"));
    }

    #[test]
    fn all_errors_reported() {
        let lines = [
            LineItem::new("A", dec!(-1), dec!(10), dec!(20)),
            LineItem::new("B", dec!(1), dec!(10), dec!(-5)),
        ];
        let errors = validate_items(&lines);
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[1].field, "lines[1].tax_rate");
    }
}
