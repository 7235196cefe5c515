//! Line-item editing session.
//!
//! Holds the ordered list of line items while an operator builds or edits a
//! subscription. Only the priced output of the calculator is ever persisted.

use crate::models::{LineItemInput, Product, SubscriptionItem, Tax};
use uuid::Uuid;

/// Value the tax selector uses for "no tax".
const NO_TAX: &str = "none";

/// Ordered, mutable list of line items for one editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineItemEditor {
    items: Vec<LineItemInput>,
}

impl LineItemEditor {
    /// Empty session, used when creating a subscription.
    pub fn new() -> Self {
        Self::default()
    }

    /// Session hydrated from the items of an existing subscription.
    pub fn from_items(items: &[SubscriptionItem]) -> Self {
        Self {
            items: items
                .iter()
                .map(|item| LineItemInput {
                    id: item.id.clone(),
                    product_id: item.product_id.clone(),
                    quantity: item.quantity.max(1),
                    tax_id: item.tax_id.clone().filter(|id| !id.is_empty()),
                })
                .collect(),
        }
    }

    /// Append a blank line item and return its id.
    pub fn add(&mut self) -> String {
        let id = new_line_item_id();
        self.items.push(LineItemInput::new(id.clone()));
        id
    }

    pub fn set_product(&mut self, id: &str, product_id: &str) -> bool {
        self.update(id, |item| item.product_id = product_id.to_string())
    }

    /// Set the quantity from raw form input. Anything that is not a positive
    /// integer becomes 1.
    pub fn set_quantity(&mut self, id: &str, raw: &str) -> bool {
        let quantity = coerce_quantity(raw);
        self.update(id, |item| item.quantity = quantity)
    }

    /// Attach a tax, or clear it with `None`, `""` or `"none"`.
    pub fn set_tax(&mut self, id: &str, tax_id: Option<&str>) -> bool {
        let tax_id = tax_id
            .filter(|t| !t.is_empty() && *t != NO_TAX)
            .map(str::to_string);
        self.update(id, |item| item.tax_id = tax_id)
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }

    pub fn items(&self) -> &[LineItemInput] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn into_items(self) -> Vec<LineItemInput> {
        self.items
    }

    fn update(&mut self, id: &str, apply: impl FnOnce(&mut LineItemInput)) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                apply(item);
                true
            }
            None => false,
        }
    }
}

/// `li_` followed by the first eight hex digits of a v4 UUID.
fn new_line_item_id() -> String {
    let uuid = Uuid::new_v4().simple().to_string();
    format!("li_{}", &uuid[..8])
}

/// Parse a quantity from form input. Anything that is not a positive integer
/// becomes 1; values above `u32::MAX` saturate.
pub fn coerce_quantity(raw: &str) -> u32 {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|q| *q >= 1)
        .map(|q| u32::try_from(q).unwrap_or(u32::MAX))
        .unwrap_or(1)
}

/// Products an operator may pick, in catalogue order.
pub fn selectable_products(products: &[Product]) -> Vec<&Product> {
    products.iter().filter(|p| p.active).collect()
}

/// Taxes an operator may pick, in catalogue order.
pub fn selectable_taxes(taxes: &[Tax]) -> Vec<&Tax> {
    taxes.iter().filter(|t| t.active).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn add_appends_blank_items_in_order() {
        let mut editor = LineItemEditor::new();
        let first = editor.add();
        let second = editor.add();

        assert_ne!(first, second);
        assert!(first.starts_with("li_"));
        assert_eq!(first.len(), 11);

        let ids: Vec<&str> = editor.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, [first.as_str(), second.as_str()]);
        assert_eq!(editor.items()[0], LineItemInput::new(first.clone()));
    }

    #[test]
    fn updates_target_only_the_given_item() {
        let mut editor = LineItemEditor::new();
        let a = editor.add();
        let b = editor.add();

        assert!(editor.set_product(&b, "p2"));
        assert!(editor.set_quantity(&b, "4"));
        assert!(editor.set_tax(&b, Some("t1")));

        assert_eq!(editor.items()[0], LineItemInput::new(a));
        let updated = &editor.items()[1];
        assert_eq!(updated.product_id, "p2");
        assert_eq!(updated.quantity, 4);
        assert_eq!(updated.tax_id.as_deref(), Some("t1"));
    }

    #[test]
    fn unknown_id_is_reported() {
        let mut editor = LineItemEditor::new();
        editor.add();
        assert!(!editor.set_product("li_missing", "p1"));
        assert!(!editor.set_quantity("li_missing", "2"));
        assert!(!editor.set_tax("li_missing", Some("t1")));
        assert!(!editor.remove("li_missing"));
        assert_eq!(editor.len(), 1);
    }

    #[test]
    fn quantity_coercion() {
        assert_eq!(coerce_quantity("3"), 3);
        assert_eq!(coerce_quantity(" 12 "), 12);
        assert_eq!(coerce_quantity(""), 1);
        assert_eq!(coerce_quantity("abc"), 1);
        assert_eq!(coerce_quantity("0"), 1);
        assert_eq!(coerce_quantity("-5"), 1);
        assert_eq!(coerce_quantity("99999999999"), u32::MAX);
    }

    #[test]
    fn tax_can_be_cleared() {
        let mut editor = LineItemEditor::new();
        let id = editor.add();

        editor.set_tax(&id, Some("t1"));
        editor.set_tax(&id, Some("none"));
        assert!(editor.items()[0].tax_id.is_none());

        editor.set_tax(&id, Some("t1"));
        editor.set_tax(&id, Some(""));
        assert!(editor.items()[0].tax_id.is_none());

        editor.set_tax(&id, Some("t1"));
        editor.set_tax(&id, None);
        assert!(editor.items()[0].tax_id.is_none());
    }

    #[test]
    fn remove_keeps_remaining_order() {
        let mut editor = LineItemEditor::new();
        let a = editor.add();
        let b = editor.add();
        let c = editor.add();

        assert!(editor.remove(&b));
        let ids: Vec<String> = editor.into_items().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec![a, c]);
    }

    #[test]
    fn hydrates_from_existing_items() {
        let existing = vec![
            SubscriptionItem {
                id: "li_one".to_string(),
                product_id: "p1".to_string(),
                product_name: "Starter".to_string(),
                quantity: 2,
                unit_price: dec!(10),
                tax_id: Some("t1".to_string()),
                tax_name: Some("VAT".to_string()),
                tax_rate: Some(dec!(20)),
                subtotal: dec!(20),
                tax_amount: dec!(4),
                total: dec!(24),
                currency: "USD".to_string(),
            },
            SubscriptionItem {
                id: "li_two".to_string(),
                product_id: "p2".to_string(),
                product_name: "Add-on".to_string(),
                quantity: 1,
                unit_price: dec!(5),
                tax_id: Some(String::new()),
                tax_name: None,
                tax_rate: None,
                subtotal: dec!(5),
                tax_amount: dec!(0),
                total: dec!(5),
                currency: "USD".to_string(),
            },
        ];

        let editor = LineItemEditor::from_items(&existing);
        assert_eq!(
            editor.items(),
            &[
                LineItemInput {
                    id: "li_one".to_string(),
                    product_id: "p1".to_string(),
                    quantity: 2,
                    tax_id: Some("t1".to_string()),
                },
                LineItemInput {
                    id: "li_two".to_string(),
                    product_id: "p2".to_string(),
                    quantity: 1,
                    tax_id: None,
                },
            ]
        );
    }

    #[test]
    fn only_active_entries_are_selectable() {
        let products = vec![
            Product {
                product_id: "p1".to_string(),
                name: "Live".to_string(),
                price: dec!(1),
                currency: "USD".to_string(),
                active: true,
            },
            Product {
                product_id: "p2".to_string(),
                name: "Retired".to_string(),
                price: dec!(1),
                currency: "USD".to_string(),
                active: false,
            },
        ];
        let taxes = vec![
            Tax {
                id: "t1".to_string(),
                name: "Old VAT".to_string(),
                rate: dec!(17),
                active: false,
            },
            Tax {
                id: "t2".to_string(),
                name: "VAT".to_string(),
                rate: dec!(18),
                active: true,
            },
        ];

        let product_ids: Vec<&str> = selectable_products(&products)
            .iter()
            .map(|p| p.product_id.as_str())
            .collect();
        assert_eq!(product_ids, ["p1"]);

        let tax_ids: Vec<&str> = selectable_taxes(&taxes)
            .iter()
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(tax_ids, ["t2"]);
    }
}
