use webitof_crm_backend::util::totals::{calculate_invoice_totals, line_total, LineInput};

#[test]
fn invoice_scenario_with_discount_and_tax() {
    // items [{quantity: 2, unitPrice: 100, discount: 10}], tax 18, secondTax 0
    let items = [LineInput { quantity: 2, unit_price: 100.0, discount: 10.0 }];
    let totals = calculate_invoice_totals(&items, 18.0, 0.0).expect("valid items");

    assert_eq!(totals.subtotal, 190.0);
    assert_eq!(totals.tax_amount, 34.2);
    assert_eq!(totals.total_amount, 224.2);
}

#[test]
fn subtotal_is_the_sum_of_item_totals() {
    let items = [
        LineInput { quantity: 1, unit_price: 100.0, discount: 0.0 },
        LineInput { quantity: 3, unit_price: 40.0, discount: 20.0 },
        LineInput { quantity: 2, unit_price: 9.99, discount: 0.0 },
    ];
    let totals = calculate_invoice_totals(&items, 0.0, 0.0).expect("valid items");

    let expected: f64 = items.iter().map(line_total).sum();
    assert_eq!(totals.subtotal, (expected * 100.0).round() / 100.0);
    assert_eq!(totals.total_amount, totals.subtotal);
}

#[test]
fn empty_sequence_produces_zero_totals() {
    let totals = calculate_invoice_totals(&[], 18.0, 12.0).expect("empty is valid");
    assert_eq!(totals.subtotal, 0.0);
    assert_eq!(totals.tax_amount, 0.0);
    assert_eq!(totals.second_tax_amount, 0.0);
    assert_eq!(totals.total_amount, 0.0);
}

#[test]
fn taxes_are_independent_not_compounded() {
    let items = [LineInput { quantity: 10, unit_price: 100.0, discount: 0.0 }];
    let totals = calculate_invoice_totals(&items, 18.0, 12.0).expect("valid items");
    assert_eq!(totals.tax_amount, 180.0);
    assert_eq!(totals.second_tax_amount, 120.0);
    assert_eq!(totals.total_amount, 1300.0);
}

#[test]
fn negative_discount_is_a_validation_error() {
    let items = [LineInput { quantity: 1, unit_price: 50.0, discount: -5.0 }];
    assert!(calculate_invoice_totals(&items, 0.0, 0.0).is_err());
}
