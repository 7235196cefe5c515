//! Line-item pricing.
//!
//! Turns the operator's line items into priced [`SubscriptionItem`]s and
//! aggregate totals, using explicit product and tax snapshots.

use crate::error::PricingError;
use crate::models::{
    find_product, find_tax, LineItemInput, LineItemTotals, Product, SubscriptionItem, Tax,
};
use rust_decimal::Decimal;

/// Price one line item against an already resolved product and tax.
///
/// Amounts that do not fit a `Decimal` return `AmountOutOfRange`.
pub fn price_line_item(
    line_item: &LineItemInput,
    product: &Product,
    tax: Option<&Tax>,
) -> Result<SubscriptionItem, PricingError> {
    let out_of_range = || PricingError::AmountOutOfRange(line_item.id.clone());

    let subtotal = product
        .price
        .checked_mul(Decimal::from(line_item.quantity))
        .ok_or_else(out_of_range)?;
    let tax_amount = match tax {
        Some(t) => subtotal
            .checked_mul(t.rate)
            .and_then(|taxed| taxed.checked_div(Decimal::ONE_HUNDRED))
            .ok_or_else(out_of_range)?,
        None => Decimal::ZERO,
    };
    let total = subtotal.checked_add(tax_amount).ok_or_else(out_of_range)?;

    Ok(SubscriptionItem {
        id: line_item.id.clone(),
        product_id: product.product_id.clone(),
        product_name: product.name.clone(),
        quantity: line_item.quantity,
        unit_price: product.price,
        tax_id: tax.map(|t| t.id.clone()),
        tax_name: tax.map(|t| t.name.clone()),
        tax_rate: tax.map(|t| t.rate),
        subtotal,
        tax_amount,
        total,
        currency: product.currency.clone(),
    })
}

/// Price every resolvable line item and sum the results in input order.
///
/// Line items whose product is empty or missing from `products` are dropped.
/// A tax id that does not resolve counts as no tax. Fails only when an amount
/// or a running total overflows.
pub fn compute_line_items(
    line_items: &[LineItemInput],
    products: &[Product],
    taxes: &[Tax],
) -> Result<LineItemTotals, PricingError> {
    let mut totals = LineItemTotals::default();

    for line_item in line_items {
        let Some(product) = find_product(products, &line_item.product_id) else {
            tracing::debug!(
                line_item_id = %line_item.id,
                product_id = %line_item.product_id,
                "Dropping line item without a resolvable product"
            );
            continue;
        };
        let tax = find_tax(taxes, line_item.tax_id.as_deref());

        let item = price_line_item(line_item, product, tax)?;
        let out_of_range = || PricingError::AmountOutOfRange(item.id.clone());
        totals.subtotal = totals
            .subtotal
            .checked_add(item.subtotal)
            .ok_or_else(out_of_range)?;
        totals.tax_total = totals
            .tax_total
            .checked_add(item.tax_amount)
            .ok_or_else(out_of_range)?;
        totals.items.push(item);
    }

    totals.total = totals
        .subtotal
        .checked_add(totals.tax_total)
        .ok_or_else(|| {
            let last = totals.items.last().map(|i| i.id.clone());
            PricingError::AmountOutOfRange(last.unwrap_or_default())
        })?;
    Ok(totals)
}
