//! # Cart Store
//!
//! Owns the session's shopping cart.
//!
//! ## Thread Safety
//! The cart lives inside a `tokio::sync::watch` channel:
//! 1. The sender is the only writer; every mutation runs inside
//!    `send_if_modified`, which holds the channel's write lock for the whole
//!    transition
//! 2. Readers borrow the current value under the read lock, so they never
//!    see items and totals from different transitions
//! 3. Subscribers are woken only when a transition actually changed the cart
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Presentation Action      Store Call              Cart State Change     │
//! │  ───────────────────      ──────────              ─────────────────     │
//! │                                                                         │
//! │  Click "Add to Cart" ────► add() ───────────────► qty += 1 / push      │
//! │                                                                         │
//! │  Quantity stepper ───────► update_quantity() ───► qty = n / remove     │
//! │                                                                         │
//! │  Click Remove ───────────► remove() ────────────► items.remove(i)      │
//! │                                                                         │
//! │  Click Clear ────────────► clear() ─────────────► items.clear()        │
//! │                                                                         │
//! │  Render sidebar ─────────► with_cart() ─────────► (read only)          │
//! │                                                                         │
//! │  NOTE: Every write returns the cart as it was right after that write.  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tokio::sync::watch;
use zelion_core::{CartAction, CartState, Product};

/// Thread-safe cart handle.
#[derive(Debug)]
pub struct CartStore {
    cart: watch::Sender<CartState>,
}

impl CartStore {
    /// Creates a store holding an empty cart.
    pub fn new() -> Self {
        let (cart, _) = watch::channel(CartState::new());
        CartStore { cart }
    }

    /// Executes a function with read access to the cart.
    ///
    /// The cart's read lock is held while `f` runs. `f` must not touch the
    /// `WishlistStore`: `move_to_cart` takes the wishlist lock before the
    /// cart lock, so doing so here can deadlock. Use [`CartStore::snapshot`]
    /// when both collections are needed.
    ///
    /// ## Usage
    /// ```rust
    /// # use zelion_storefront::state::CartStore;
    /// let store = CartStore::new();
    /// let count = store.with_cart(|cart| cart.item_count());
    /// assert_eq!(count, 0);
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        f(&self.cart.borrow())
    }

    /// Current cart, cloned.
    pub fn snapshot(&self) -> CartState {
        self.cart.borrow().clone()
    }

    /// Executes a function with write access to the cart.
    ///
    /// `f` returns its result plus whether the cart changed; subscribers are
    /// only notified on change.
    pub(crate) fn with_cart_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut CartState) -> (R, bool),
        R: Default,
    {
        let mut out = R::default();
        self.cart.send_if_modified(|cart| {
            let (result, changed) = f(cart);
            out = result;
            changed
        });
        out
    }

    /// Applies `action` and returns the resulting cart.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        self.with_cart_mut(|cart| {
            let changed = cart.apply(action);
            (cart.clone(), changed)
        })
    }

    pub fn add(&self, product: &Product) -> CartState {
        self.dispatch(CartAction::AddToCart(product.clone()))
    }

    pub fn remove(&self, product_id: &str) -> CartState {
        self.dispatch(CartAction::RemoveFromCart(product_id.to_string()))
    }

    pub fn update_quantity(&self, product_id: &str, quantity: i64) -> CartState {
        self.dispatch(CartAction::UpdateQuantity {
            product_id: product_id.to_string(),
            quantity,
        })
    }

    pub fn clear(&self) -> CartState {
        self.dispatch(CartAction::ClearCart)
    }

    /// Empties the cart and returns what it held, in one step.
    ///
    /// Returns `None` (and leaves the cart alone) when it is already empty.
    pub fn drain(&self) -> Option<CartState> {
        self.with_cart_mut(|cart| {
            if cart.is_empty() {
                return (None, false);
            }
            (Some(std::mem::take(cart)), true)
        })
    }

    /// Receiver that observes every change to the cart.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.cart.subscribe()
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;
    use zelion_core::Catalog;

    fn product(id: &str) -> Product {
        Catalog::builtin().get(id).cloned().unwrap()
    }

    #[test]
    fn test_add_twice_then_zero() {
        let store = CartStore::new();
        let bat = product("bat-3"); // 4999

        store.add(&bat);
        let cart = store.add(&bat);
        assert_eq!(cart.distinct_items(), 1);
        assert_eq!(cart.quantity_of("bat-3"), 2);
        assert_eq!(cart.total().amount(), 9998);
        assert_eq!(cart.item_count(), 2);

        let cart = store.update_quantity("bat-3", 0);
        assert!(cart.is_empty());
        assert_eq!(store.snapshot(), CartState::new());
    }

    #[test]
    fn test_remove_absent_leaves_state() {
        let store = CartStore::new();
        let before = store.add(&product("ball-1"));
        let after = store.remove("kit-1");
        assert_eq!(before, after);
    }

    #[test]
    fn test_oversized_quantity_keeps_totals_consistent() {
        let store = CartStore::new();
        store.add(&product("bat-1"));

        let cart = store.update_quantity("bat-1", i64::MAX / 2);
        assert_eq!(cart.quantity_of("bat-1"), zelion_core::MAX_ITEM_QUANTITY);
        assert_eq!(cart.item_count(), zelion_core::MAX_ITEM_QUANTITY);
        assert_eq!(cart.total().amount(), 15999 * zelion_core::MAX_ITEM_QUANTITY);
        assert_eq!(store.snapshot(), cart);
    }

    #[test]
    fn test_drain() {
        let store = CartStore::new();
        assert!(store.drain().is_none());

        store.add(&product("kit-1"));
        store.add(&product("ball-2"));
        let drained = store.drain().unwrap();
        assert_eq!(drained.item_count(), 2);
        assert!(store.with_cart(|c| c.is_empty()));
    }

    #[test]
    fn test_concurrent_adds_keep_totals_consistent() {
        let store = Arc::new(CartStore::new());
        let ids = ["bat-1", "ball-1", "equipment-2", "kit-1"];

        let handles: Vec<_> = ids
            .iter()
            .map(|id| {
                let store = Arc::clone(&store);
                let p = product(id);
                thread::spawn(move || {
                    for _ in 0..50 {
                        store.add(&p);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        let cart = store.snapshot();
        assert_eq!(cart.distinct_items(), 4);
        assert_eq!(cart.item_count(), 200);
        let expected: i64 = ids.iter().map(|id| product(id).price * 50).sum();
        assert_eq!(cart.total().amount(), expected);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes_only() {
        let store = CartStore::new();
        let mut rx = store.subscribe();

        store.remove("bat-1");
        store.clear();
        assert!(!rx.has_changed().unwrap());

        store.add(&product("bat-1"));
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().item_count(), 1);
    }
}
