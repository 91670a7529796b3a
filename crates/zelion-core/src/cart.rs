//! # Cart
//!
//! The shopping cart state and its transition rules.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart State Transitions                               │
//! │                                                                         │
//! │  Action                          Effect on items            Derived     │
//! │  ──────                          ───────────────            ───────     │
//! │                                                                         │
//! │  AddToCart(product) ───────────► qty += 1 or push(qty 1)    recompute   │
//! │                                                                         │
//! │  UpdateQuantity(id, n > 0) ────► items[id].qty = n          recompute   │
//! │  UpdateQuantity(id, n <= 0) ───► remove(id)                 recompute   │
//! │                                                                         │
//! │  RemoveFromCart(id) ───────────► remove(id)                 recompute   │
//! │                                                                         │
//! │  ClearCart ────────────────────► items.clear()              recompute   │
//! │                                                                         │
//! │  Unknown ids are no-ops. No transition can fail.                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Derived Fields
//! `total` (Σ price × quantity) and `item_count` (Σ quantity) are cached on
//! the state and recomputed from `items` at the end of every transition.
//! Recomputation is O(n) in the number of distinct products, which stays
//! small for a storefront cart.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::Product;
use crate::MAX_ITEM_QUANTITY;

// =============================================================================
// Cart Item
// =============================================================================

/// A product line in the cart.
///
/// ## Invariants
/// - `1 <= quantity <= MAX_ITEM_QUANTITY`
/// - At most one item per `product.id` within a cart
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub product: Product,
    pub quantity: i64,
}

impl CartItem {
    fn new(product: &Product) -> Self {
        CartItem {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.product.unit_price().multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Cart Action
// =============================================================================

/// A cart transition request, in the shape the presentation layer dispatches.
///
/// ```json
/// { "type": "UPDATE_QUANTITY", "payload": { "productId": "bat-1", "quantity": 3 } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CartAction {
    AddToCart(Product),
    RemoveFromCart(String),
    UpdateQuantity {
        #[serde(rename = "productId")]
        product_id: String,
        quantity: i64,
    },
    ClearCart,
}

// =============================================================================
// Cart State
// =============================================================================

/// The shopping cart.
///
/// Fields are private so that `total` and `item_count` can only be produced
/// by the transitions below. The state serializes for the presentation layer
/// but cannot be deserialized.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartState {
    items: Vec<CartItem>,
    total: Money,
    item_count: i64,
}

impl CartState {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        CartState::default()
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Items in insertion order.
    #[inline]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    /// Σ price × quantity.
    #[inline]
    pub fn total(&self) -> Money {
        self.total
    }

    /// Σ quantity (units, not distinct products).
    #[inline]
    pub fn item_count(&self) -> i64 {
        self.item_count
    }

    /// Number of distinct products.
    #[inline]
    pub fn distinct_items(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&CartItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    pub fn contains(&self, product_id: &str) -> bool {
        self.get(product_id).is_some()
    }

    /// Quantity of a product in the cart, 0 when absent.
    pub fn quantity_of(&self, product_id: &str) -> i64 {
        self.get(product_id).map_or(0, |i| i.quantity)
    }

    // -------------------------------------------------------------------------
    // Transitions
    // -------------------------------------------------------------------------
    // Each returns whether observable state changed.

    /// Adds one unit of `product`.
    ///
    /// ## Behavior
    /// - Product already in cart: quantity + 1, stored product data untouched
    /// - Product not in cart: appended with quantity 1
    /// - Line already at [`MAX_ITEM_QUANTITY`]: no-op
    pub fn add_product(&mut self, product: &Product) -> bool {
        match self.items.iter_mut().find(|i| i.product.id == product.id) {
            Some(item) if item.quantity >= MAX_ITEM_QUANTITY => return false,
            Some(item) => item.quantity += 1,
            None => self.items.push(CartItem::new(product)),
        }
        self.recompute();
        true
    }

    /// Removes the line for `product_id`. Absent ids are a no-op.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.recompute();
        self.items.len() != initial_len
    }

    /// Sets the quantity of `product_id`.
    ///
    /// ## Behavior
    /// - `quantity <= 0`: removes the line
    /// - Otherwise replaces the quantity (does not add to it), clamped to
    ///   [`MAX_ITEM_QUANTITY`]
    /// - Absent ids are a no-op
    pub fn update_quantity(&mut self, product_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove_product(product_id);
        }
        let quantity = quantity.min(MAX_ITEM_QUANTITY);

        let changed = match self.items.iter_mut().find(|i| i.product.id == product_id) {
            Some(item) if item.quantity != quantity => {
                item.quantity = quantity;
                true
            }
            _ => false,
        };
        self.recompute();
        changed
    }

    /// Resets to the empty cart.
    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        *self = CartState::new();
        changed
    }

    /// Applies `action` in place.
    pub fn apply(&mut self, action: CartAction) -> bool {
        match action {
            CartAction::AddToCart(product) => self.add_product(&product),
            CartAction::RemoveFromCart(product_id) => self.remove_product(&product_id),
            CartAction::UpdateQuantity {
                product_id,
                quantity,
            } => self.update_quantity(&product_id, quantity),
            CartAction::ClearCart => self.clear(),
        }
    }

    /// Pure transition: `(state, action) -> state`.
    pub fn reduce(mut self, action: CartAction) -> CartState {
        self.apply(action);
        self
    }

    fn recompute(&mut self) {
        self.total = self.items.iter().map(CartItem::line_total).sum();
        self.item_count = self.items.iter().map(|i| i.quantity).sum();
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::test_product;

    fn assert_totals_consistent(cart: &CartState) {
        let total: i64 = cart
            .items()
            .iter()
            .map(|i| i.product.price * i.quantity)
            .sum();
        let count: i64 = cart.items().iter().map(|i| i.quantity).sum();
        assert_eq!(cart.total().amount(), total);
        assert_eq!(cart.item_count(), count);
    }

    #[test]
    fn test_new_cart_is_empty() {
        let cart = CartState::new();
        assert!(cart.is_empty());
        assert!(cart.total().is_zero());
        assert_eq!(cart.item_count(), 0);
    }

    #[test]
    fn test_add_same_product_increases_quantity() {
        let mut cart = CartState::new();
        let p1 = test_product("p1", 100);

        cart.add_product(&p1);
        cart.add_product(&p1);

        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.quantity_of("p1"), 2);
        assert_eq!(cart.total().amount(), 200);
        assert_eq!(cart.item_count(), 2);
    }

    #[test]
    fn test_totals_hold_after_every_add() {
        let products = [
            test_product("a", 15999),
            test_product("b", 2999),
            test_product("c", 4999),
        ];
        let mut cart = CartState::new();

        for p in products.iter().chain(products.iter().take(2)).chain([&products[0]]) {
            cart.add_product(p);
            assert_totals_consistent(&cart);
        }

        assert_eq!(cart.distinct_items(), 3);
        assert_eq!(cart.quantity_of("a"), 3);
        assert_eq!(cart.item_count(), 6);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("b", 1));
        cart.add_product(&test_product("a", 1));
        cart.add_product(&test_product("b", 1));

        let ids: Vec<&str> = cart.items().iter().map(|i| i.product.id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a"]);
    }

    #[test]
    fn test_re_add_keeps_first_snapshot() {
        let mut cart = CartState::new();
        let original = test_product("p1", 100);
        let mut repriced = original.clone();
        repriced.price = 500;

        cart.add_product(&original);
        cart.add_product(&repriced);

        assert_eq!(cart.get("p1").unwrap().product.price, 100);
        assert_eq!(cart.total().amount(), 200);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("p1", 100));
        let before = cart.clone();

        assert!(!cart.remove_product("missing"));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_remove_present() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("p1", 100));
        cart.add_product(&test_product("p2", 50));

        assert!(cart.remove_product("p1"));
        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.total().amount(), 50);
        assert_eq!(cart.item_count(), 1);
    }

    #[test]
    fn test_update_quantity_replaces() {
        let mut cart = CartState::new();
        let p1 = test_product("p1", 100);
        cart.add_product(&p1);
        cart.add_product(&p1);

        assert!(cart.update_quantity("p1", 5));
        assert_eq!(cart.quantity_of("p1"), 5);
        assert_eq!(cart.total().amount(), 500);

        // Same quantity again is not a change
        assert!(!cart.update_quantity("p1", 5));
    }

    #[test]
    fn test_update_quantity_clamps_to_max() {
        let mut cart = CartState::new();
        let p1 = test_product("p1", 15999);
        cart.add_product(&p1);

        assert!(cart.update_quantity("p1", i64::MAX / 2));
        assert_eq!(cart.quantity_of("p1"), MAX_ITEM_QUANTITY);
        assert_eq!(cart.total().amount(), 15999 * MAX_ITEM_QUANTITY);
        assert_totals_consistent(&cart);

        assert!(!cart.update_quantity("p1", i64::MAX));
    }

    #[test]
    fn test_add_stops_at_max() {
        let mut cart = CartState::new();
        let p1 = test_product("p1", 100);
        cart.add_product(&p1);
        cart.update_quantity("p1", MAX_ITEM_QUANTITY);
        let before = cart.clone();

        assert!(!cart.add_product(&p1));
        assert_eq!(cart, before);
        assert_totals_consistent(&cart);
    }

    #[test]
    fn test_update_quantity_zero_or_negative_removes() {
        for qty in [0, -1, i64::MIN] {
            let mut cart = CartState::new();
            let p1 = test_product("p1", 100);
            cart.add_product(&p1);
            cart.add_product(&p1);

            assert!(cart.update_quantity("p1", qty));
            assert!(cart.is_empty());
            assert!(cart.total().is_zero());
            assert_eq!(cart.item_count(), 0);
        }
    }

    #[test]
    fn test_update_quantity_absent_is_noop() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("p1", 100));
        let before = cart.clone();

        assert!(!cart.update_quantity("missing", 3));
        assert!(!cart.update_quantity("missing", 0));
        assert_eq!(cart, before);
    }

    #[test]
    fn test_clear() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("p1", 100));
        cart.add_product(&test_product("p2", 300));

        assert!(cart.clear());
        assert_eq!(cart, CartState::new());
        assert!(!cart.clear());
    }

    #[test]
    fn test_reduce_is_pure_transition() {
        let p1 = test_product("p1", 100);
        let state = CartState::new()
            .reduce(CartAction::AddToCart(p1.clone()))
            .reduce(CartAction::AddToCart(p1))
            .reduce(CartAction::UpdateQuantity {
                product_id: "p1".to_string(),
                quantity: 4,
            });
        assert_eq!(state.item_count(), 4);

        let state = state.reduce(CartAction::RemoveFromCart("p1".to_string()));
        assert!(state.is_empty());
    }

    #[test]
    fn test_action_json_shape() {
        let action: CartAction = serde_json::from_str(
            r#"{"type":"UPDATE_QUANTITY","payload":{"productId":"bat-1","quantity":3}}"#,
        )
        .unwrap();
        assert_eq!(
            action,
            CartAction::UpdateQuantity {
                product_id: "bat-1".to_string(),
                quantity: 3
            }
        );

        let clear = serde_json::to_value(CartAction::ClearCart).unwrap();
        assert_eq!(clear["type"], "CLEAR_CART");
    }

    #[test]
    fn test_state_json_shape() {
        let mut cart = CartState::new();
        cart.add_product(&test_product("p1", 100));

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json["total"], 100);
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["items"][0]["product"]["id"], "p1");
    }
}
