use chrono::NaiveDate;
use rust_decimal_macros::dec;
use taxtally::{ExchangeRate, LineItem, invoice_totals_checked};

fn main() {
    let lines = vec![
        LineItem::new("Web design", dec!(24), dec!(85), dec!(20)),
        LineItem::new("Hosting (12 months)", dec!(12), dec!(4.99), dec!(20)),
        LineItem::new("Stock photography", dec!(6), dec!(15), dec!(0)),
        LineItem::new("Early payment credit", dec!(1), dec!(-50), dec!(20)),
    ];

    let totals = match invoice_totals_checked(&lines) {
        Ok(totals) => totals,
        Err(err) => {
            eprintln!("invalid line items: {err}");
            std::process::exit(1);
        }
    };

    println!("Invoice");
    println!("=======");
    for line in &lines {
        println!(
            "{:<24} {:>6} x {:>8}  @ {:>5}%",
            line.description, line.quantity, line.unit_price, line.tax_rate
        );
    }

    println!();
    println!("Subtotal:  {:>10}", totals.subtotal);
    println!("Tax:       {:>10}", totals.tax_amount);
    println!("Total:     {:>10}", totals.total);

    println!();
    println!("VAT breakdown");
    for group in &totals.vat_breakdown {
        println!(
            "  {:>5}%  net {:>10}  vat {:>9}  gross {:>10}  ({} items)",
            group.rate, group.net, group.vat, group.gross, group.count
        );
    }

    // The invoice is issued in GBP; show the EUR equivalent.
    let fx = ExchangeRate::new(
        "GBP",
        "EUR",
        dec!(1.1693),
        NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date"),
    )
    .expect("valid exchange rate");

    println!();
    println!(
        "Total in EUR (rate {} as of {}): {}",
        fx.rate,
        fx.as_of,
        fx.convert(totals.total)
    );
}
