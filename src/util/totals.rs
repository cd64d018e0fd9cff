//! Monetary derivation for invoices and subscription/service lines.
//!
//! `itemTotal = quantity * unitPrice - discount` where the discount is a flat
//! deduction applied once per item. Up to two taxes apply independently to
//! the same subtotal base; they are never compounded on each other. Every
//! derived value is rounded to 2 decimal places (half-up) at computation
//! time, so stored totals are stable regardless of float representation.
//! Derived values are recomputed and written together with the item change
//! that invalidated them; stale totals are never persisted.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TotalsError {
    #[error("discount cannot be negative (item {index}: {discount})")]
    NegativeDiscount { index: usize, discount: f64 },
    #[error("unit price cannot be negative (item {index}: {unit_price})")]
    NegativeUnitPrice { index: usize, unit_price: f64 },
    #[error("quantity must be at least 1 (item {index})")]
    ZeroQuantity { index: usize },
}

/// The inputs of one line item, before derivation.
#[derive(Debug, Clone, Copy)]
pub struct LineInput {
    pub quantity: u32,
    pub unit_price: f64,
    pub discount: f64,
}

/// Document-level derived amounts.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceTotals {
    /// Per-item totals, in input order.
    pub item_totals: Vec<f64>,
    pub subtotal: f64,
    pub tax_amount: f64,
    pub second_tax_amount: f64,
    pub total_amount: f64,
}

pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Total of one line: `quantity * unitPrice - discount`, floored at 0.
///
/// A discount larger than the undiscounted amount is clamped rather than
/// producing a negative line. Negative inputs are rejected upstream by
/// [`calculate_invoice_totals`].
pub fn line_total(line: &LineInput) -> f64 {
    let gross = f64::from(line.quantity) * line.unit_price;
    let discount = line.discount.min(gross);
    round2(gross - discount)
}

/// Derive all stored totals for an item sequence and the configured taxes.
///
/// Tax percentages are whole percents (`18` means 18%). An empty item
/// sequence yields a zero subtotal and zero total.
pub fn calculate_invoice_totals(
    items: &[LineInput],
    tax_percentage: f64,
    second_tax_percentage: f64,
) -> Result<InvoiceTotals, TotalsError> {
    for (index, item) in items.iter().enumerate() {
        if item.quantity == 0 {
            return Err(TotalsError::ZeroQuantity { index });
        }
        if item.unit_price < 0.0 {
            return Err(TotalsError::NegativeUnitPrice { index, unit_price: item.unit_price });
        }
        if item.discount < 0.0 {
            return Err(TotalsError::NegativeDiscount { index, discount: item.discount });
        }
    }

    let item_totals: Vec<f64> = items.iter().map(line_total).collect();
    let subtotal = round2(item_totals.iter().sum());
    let tax_amount = round2(subtotal * (tax_percentage / 100.0));
    let second_tax_amount = round2(subtotal * (second_tax_percentage / 100.0));
    let total_amount = round2(subtotal + tax_amount + second_tax_amount);

    Ok(InvoiceTotals { item_totals, subtotal, tax_amount, second_tax_amount, total_amount })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_item_with_tax() {
        // 2 * 100 - 10 = 190; 18% of 190 = 34.2; total 224.2
        let items = [LineInput { quantity: 2, unit_price: 100.0, discount: 10.0 }];
        let totals = calculate_invoice_totals(&items, 18.0, 0.0).unwrap();
        assert_eq!(totals.item_totals, vec![190.0]);
        assert_eq!(totals.subtotal, 190.0);
        assert_eq!(totals.tax_amount, 34.2);
        assert_eq!(totals.second_tax_amount, 0.0);
        assert_eq!(totals.total_amount, 224.2);
    }

    #[test]
    fn empty_items_yield_zero_totals() {
        let totals = calculate_invoice_totals(&[], 18.0, 5.0).unwrap();
        assert!(totals.item_totals.is_empty());
        assert_eq!(totals.subtotal, 0.0);
        assert_eq!(totals.total_amount, 0.0);
    }

    #[test]
    fn both_taxes_apply_to_the_same_base() {
        let items = [LineInput { quantity: 1, unit_price: 1000.0, discount: 0.0 }];
        let totals = calculate_invoice_totals(&items, 10.0, 5.0).unwrap();
        assert_eq!(totals.tax_amount, 100.0);
        assert_eq!(totals.second_tax_amount, 50.0);
        // not 1000 * 1.10 * 1.05
        assert_eq!(totals.total_amount, 1150.0);
    }

    #[test]
    fn discount_is_flat_not_per_unit() {
        let items = [LineInput { quantity: 3, unit_price: 50.0, discount: 5.0 }];
        let totals = calculate_invoice_totals(&items, 0.0, 0.0).unwrap();
        assert_eq!(totals.subtotal, 145.0);
    }

    #[test]
    fn oversized_discount_clamps_to_zero_line() {
        let line = LineInput { quantity: 1, unit_price: 20.0, discount: 100.0 };
        assert_eq!(line_total(&line), 0.0);
    }

    #[test]
    fn negative_discount_is_rejected() {
        let items = [LineInput { quantity: 1, unit_price: 10.0, discount: -1.0 }];
        assert!(matches!(
            calculate_invoice_totals(&items, 0.0, 0.0),
            Err(TotalsError::NegativeDiscount { index: 0, .. })
        ));
    }

    #[test]
    fn zero_quantity_is_rejected() {
        let items = [LineInput { quantity: 0, unit_price: 10.0, discount: 0.0 }];
        assert!(matches!(
            calculate_invoice_totals(&items, 0.0, 0.0),
            Err(TotalsError::ZeroQuantity { index: 0 })
        ));
    }

    #[test]
    fn rounding_is_stable_at_two_decimals() {
        let items = [LineInput { quantity: 2, unit_price: 10.004, discount: 0.0 }];
        let totals = calculate_invoice_totals(&items, 0.0, 0.0).unwrap();
        assert_eq!(totals.subtotal, 20.01);
    }
}
