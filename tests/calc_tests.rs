use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use taxtally::{LineItem, invoice_totals, invoice_totals_checked, line_amounts, vat_from_net};

// --- Per-amount calculation ---

#[test]
fn net_component_is_independent_of_rate() {
    for rate in [dec!(0), dec!(5), dec!(17.5), dec!(20), dec!(100)] {
        let a = vat_from_net(dec!(123.456), rate);
        assert_eq!(a.net, dec!(123.46), "rate {rate}");
    }
}

#[test]
fn tax_is_net_times_rate_over_100() {
    let a = vat_from_net(dec!(100), dec!(20));
    assert_eq!(a.vat, dec!(20));
    assert_eq!(a.gross, dec!(120));

    // 250.00 × 17.5% = 43.75
    let a = vat_from_net(dec!(250.00), dec!(17.5));
    assert_eq!(a.vat, dec!(43.75));
    assert_eq!(a.gross, dec!(293.75));
}

#[test]
fn zero_rate_idempotence() {
    for net in [dec!(0), dec!(0.004), dec!(10.005), dec!(-3.333), dec!(999999.99)] {
        let a = vat_from_net(net, dec!(0));
        assert_eq!(a.vat, dec!(0), "net {net}");
        assert_eq!(a.net, a.gross, "net {net}");
    }
}

#[test]
fn near_additivity_within_one_cent() {
    // Independent rounding keeps gross within a cent of net + vat but
    // does not guarantee equality.
    let cases = [
        (dec!(10.005), dec!(10)),
        (dec!(1.004), dec!(0.2)),
        (dec!(33.335), dec!(7)),
        (dec!(-10.005), dec!(19)),
    ];
    for (net, rate) in cases {
        let a = vat_from_net(net, rate);
        let drift = (a.gross - (a.net + a.vat)).abs();
        assert!(drift <= dec!(0.01), "net {net} rate {rate}: drift {drift}");
    }

    // Concrete case where the drift is exactly one cent.
    let a = vat_from_net(dec!(1.004), dec!(0.2));
    assert_eq!(a.net + a.vat, dec!(1.00));
    assert_eq!(a.gross, dec!(1.01));
}

#[test]
fn determinism() {
    let first = vat_from_net(dec!(76.543), dec!(19));
    for _ in 0..10 {
        assert_eq!(vat_from_net(dec!(76.543), dec!(19)), first);
    }
}

// --- Invoice totals over line items ---

#[test]
fn totals_for_mixed_rate_invoice() {
    let lines = vec![
        LineItem::new("Consulting", dec!(5), dec!(100), dec!(20)),
        LineItem::new("Printing", dec!(10), dec!(5), dec!(20)),
        LineItem::new("Postage", dec!(1), dec!(30), dec!(0)),
    ];
    let totals = invoice_totals(&lines);

    // 500 + 50 + 30
    assert_eq!(totals.subtotal, dec!(580));
    // 100 + 10 + 0
    assert_eq!(totals.tax_amount, dec!(110));
    assert_eq!(totals.total, dec!(690));

    let breakdown = &totals.vat_breakdown;
    assert_eq!(breakdown.len(), 2);
    let standard = breakdown.get(dec!(20)).unwrap();
    assert_eq!(standard.net, dec!(550));
    assert_eq!(standard.vat, dec!(110));
    assert_eq!(standard.gross, dec!(660));
    assert_eq!(standard.count, 2);
    let zero = breakdown.get(dec!(0)).unwrap();
    assert_eq!(zero.net, dec!(30));
    assert_eq!(zero.vat, dec!(0));
    assert_eq!(zero.count, 1);
}

#[test]
fn credit_line_reduces_totals() {
    let lines = vec![
        LineItem::new("Licence", dec!(1), dec!(200), dec!(20)),
        LineItem::new("Goodwill credit", dec!(1), dec!(-50), dec!(20)),
    ];
    let totals = invoice_totals(&lines);
    assert_eq!(totals.subtotal, dec!(150));
    assert_eq!(totals.tax_amount, dec!(30));
    assert_eq!(totals.total, dec!(180));
    assert_eq!(totals.vat_breakdown.get(dec!(20)).unwrap().count, 2);
}

#[test]
fn per_line_rounding_feeds_totals() {
    // Each line rounds before summation: 3 × 0.335 = 1.005 → 1.01 per
    // line, so two identical lines total 2.02 rather than round(2.01).
    let lines = vec![
        LineItem::new("Widget", dec!(3), dec!(0.335), dec!(0)),
        LineItem::new("Widget", dec!(3), dec!(0.335), dec!(0)),
    ];
    let totals = invoice_totals(&lines);
    assert_eq!(totals.subtotal, dec!(2.02));
}

#[test]
fn line_amounts_match_manual_calculation() {
    let line = LineItem::new("Hosting", dec!(12), dec!(4.99), dec!(19));
    let row = line_amounts(&line);
    // 12 × 4.99 = 59.88; 19% = 11.3772 → 11.38; gross 71.2572 → 71.26
    assert_eq!(row.net_amount, Some(dec!(59.88)));
    assert_eq!(row.tax_amount, Some(dec!(11.38)));
    assert_eq!(row.gross_amount, Some(dec!(71.26)));
}

#[test]
fn checked_totals_report_every_violation() {
    let lines = vec![
        LineItem::new("A", dec!(-2), dec!(10), dec!(20)),
        LineItem::new("B", dec!(1), dec!(10), dec!(250)),
    ];
    let err = invoice_totals_checked(&lines).unwrap_err().to_string();
    assert!(err.contains("lines[0].quantity"), "got: {err}");
    assert!(err.contains("lines[1].tax_rate"), "got: {err}");
}

#[test]
fn breakdown_totals_agree_with_invoice_totals() {
    let lines = vec![
        LineItem::new("A", dec!(7), dec!(13.37), dec!(20)),
        LineItem::new("B", dec!(2.5), dec!(81.30), dec!(5)),
        LineItem::new("C", dec!(1), dec!(19.99), dec!(20)),
        LineItem::new("D", dec!(4), dec!(2.25), dec!(0)),
    ];
    let totals = invoice_totals(&lines);

    let net: Decimal = totals.vat_breakdown.iter().map(|g| g.net).sum();
    let vat: Decimal = totals.vat_breakdown.iter().map(|g| g.vat).sum();
    let gross: Decimal = totals.vat_breakdown.iter().map(|g| g.gross).sum();
    assert_eq!(net, totals.subtotal);
    assert_eq!(vat, totals.tax_amount);
    assert_eq!(gross, totals.total);
}
