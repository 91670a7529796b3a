//! # Wishlist
//!
//! Saved products, unique by id, with the time each one was saved.
//!
//! Same shape as the cart: an explicit state value plus transitions that
//! report whether anything changed. There are no quantities or totals; the
//! only derived field is `item_count`, which always equals the number of
//! entries.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Product;

/// A saved product.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistItem {
    pub product: Product,

    /// When the product was first saved. Re-saving does not touch it.
    #[ts(as = "String")]
    pub added_at: DateTime<Utc>,
}

/// A wishlist transition request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WishlistAction {
    AddToWishlist(Product),
    RemoveFromWishlist(String),
    ClearWishlist,
}

/// The wishlist.
#[derive(Debug, Clone, Default, PartialEq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct WishlistState {
    items: Vec<WishlistItem>,
    item_count: usize,
}

impl WishlistState {
    pub fn new() -> Self {
        WishlistState::default()
    }

    /// Entries in the order they were saved.
    #[inline]
    pub fn items(&self) -> &[WishlistItem] {
        &self.items
    }

    #[inline]
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&WishlistItem> {
        self.items.iter().find(|i| i.product.id == product_id)
    }

    /// Whether a product with `product_id` is saved.
    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.items.iter().any(|i| i.product.id == product_id)
    }

    /// Saves `product` stamped with the current time.
    pub fn add_product(&mut self, product: &Product) -> bool {
        self.add_at(product, Utc::now())
    }

    /// Saves `product` stamped with `added_at`.
    ///
    /// An already-saved product is left exactly as it was, original
    /// timestamp included.
    pub fn add_at(&mut self, product: &Product, added_at: DateTime<Utc>) -> bool {
        if self.is_in_wishlist(&product.id) {
            return false;
        }
        self.items.push(WishlistItem {
            product: product.clone(),
            added_at,
        });
        self.recompute();
        true
    }

    /// Removes the entry for `product_id`. Absent ids are a no-op.
    pub fn remove_product(&mut self, product_id: &str) -> bool {
        let initial_len = self.items.len();
        self.items.retain(|i| i.product.id != product_id);
        self.recompute();
        self.items.len() != initial_len
    }

    /// Removes and returns the entry for `product_id`.
    pub fn take(&mut self, product_id: &str) -> Option<WishlistItem> {
        let pos = self.items.iter().position(|i| i.product.id == product_id)?;
        let item = self.items.remove(pos);
        self.recompute();
        Some(item)
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.items.is_empty();
        *self = WishlistState::new();
        changed
    }

    pub fn apply(&mut self, action: WishlistAction) -> bool {
        match action {
            WishlistAction::AddToWishlist(product) => self.add_product(&product),
            WishlistAction::RemoveFromWishlist(product_id) => self.remove_product(&product_id),
            WishlistAction::ClearWishlist => self.clear(),
        }
    }

    /// Pure transition: `(state, action) -> state`.
    pub fn reduce(mut self, action: WishlistAction) -> WishlistState {
        self.apply(action);
        self
    }

    fn recompute(&mut self) {
        self.item_count = self.items.len();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::test_product;
    use chrono::TimeZone;

    #[test]
    fn test_add_then_query() {
        let mut wishlist = WishlistState::new();
        assert!(!wishlist.is_in_wishlist("p2"));

        assert!(wishlist.add_product(&test_product("p2", 100)));
        assert!(wishlist.is_in_wishlist("p2"));
        assert_eq!(wishlist.item_count(), 1);

        assert!(wishlist.remove_product("p2"));
        assert!(!wishlist.is_in_wishlist("p2"));
        assert_eq!(wishlist.item_count(), 0);
    }

    #[test]
    fn test_re_add_keeps_original_timestamp() {
        let first = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        let later = Utc.with_ymd_and_hms(2024, 5, 2, 9, 0, 0).unwrap();
        let p2 = test_product("p2", 100);

        let mut wishlist = WishlistState::new();
        assert!(wishlist.add_at(&p2, first));
        assert!(!wishlist.add_at(&p2, later));
        assert!(!wishlist.add_product(&p2));

        assert_eq!(wishlist.item_count(), 1);
        assert_eq!(wishlist.get("p2").unwrap().added_at, first);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut wishlist = WishlistState::new();
        wishlist.add_product(&test_product("p1", 100));
        let before = wishlist.clone();

        assert!(!wishlist.remove_product("missing"));
        assert_eq!(wishlist, before);
        assert!(wishlist.take("missing").is_none());
    }

    #[test]
    fn test_take() {
        let mut wishlist = WishlistState::new();
        wishlist.add_product(&test_product("p1", 100));
        wishlist.add_product(&test_product("p2", 200));

        let taken = wishlist.take("p1").unwrap();
        assert_eq!(taken.product.id, "p1");
        assert_eq!(wishlist.item_count(), 1);
        assert!(!wishlist.is_in_wishlist("p1"));
    }

    #[test]
    fn test_clear_and_reduce() {
        let state = WishlistState::new()
            .reduce(WishlistAction::AddToWishlist(test_product("p1", 1)))
            .reduce(WishlistAction::AddToWishlist(test_product("p2", 1)));
        assert_eq!(state.item_count(), 2);

        let state = state.reduce(WishlistAction::ClearWishlist);
        assert_eq!(state, WishlistState::new());
    }

    #[test]
    fn test_state_json_shape() {
        let mut wishlist = WishlistState::new();
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap();
        wishlist.add_at(&test_product("p1", 100), at);

        let json = serde_json::to_value(&wishlist).unwrap();
        assert_eq!(json["itemCount"], 1);
        assert_eq!(json["items"][0]["addedAt"], "2024-05-01T09:00:00Z");
    }
}
