//! # Wishlist Store
//!
//! Owns the session's wishlist, plus the one operation that spans both
//! stores: moving a saved product into the cart.
//!
//! ## Lock Order
//! `move_to_cart` holds the wishlist write lock while it takes the cart
//! write lock. Nothing takes them in the opposite order.

use tokio::sync::watch;
use zelion_core::{CartState, Product, WishlistAction, WishlistState};

use super::CartStore;

/// Thread-safe wishlist handle.
#[derive(Debug)]
pub struct WishlistStore {
    wishlist: watch::Sender<WishlistState>,
}

/// Both collections right after a successful move.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoveOutcome {
    pub cart: CartState,
    pub wishlist: WishlistState,
}

impl WishlistStore {
    pub fn new() -> Self {
        let (wishlist, _) = watch::channel(WishlistState::new());
        WishlistStore { wishlist }
    }

    /// Executes a function with read access to the wishlist.
    ///
    /// The wishlist's read lock is held while `f` runs. `f` must not touch
    /// the `CartStore`; read both through `snapshot` instead.
    pub fn with_wishlist<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&WishlistState) -> R,
    {
        f(&self.wishlist.borrow())
    }

    pub fn snapshot(&self) -> WishlistState {
        self.wishlist.borrow().clone()
    }

    fn with_wishlist_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut WishlistState) -> (R, bool),
        R: Default,
    {
        let mut out = R::default();
        self.wishlist.send_if_modified(|wishlist| {
            let (result, changed) = f(wishlist);
            out = result;
            changed
        });
        out
    }

    /// Applies `action` and returns the resulting wishlist.
    pub fn dispatch(&self, action: WishlistAction) -> WishlistState {
        self.with_wishlist_mut(|wishlist| {
            let changed = wishlist.apply(action);
            (wishlist.clone(), changed)
        })
    }

    pub fn add(&self, product: &Product) -> WishlistState {
        self.dispatch(WishlistAction::AddToWishlist(product.clone()))
    }

    pub fn remove(&self, product_id: &str) -> WishlistState {
        self.dispatch(WishlistAction::RemoveFromWishlist(product_id.to_string()))
    }

    pub fn clear(&self) -> WishlistState {
        self.dispatch(WishlistAction::ClearWishlist)
    }

    pub fn is_in_wishlist(&self, product_id: &str) -> bool {
        self.with_wishlist(|wishlist| wishlist.is_in_wishlist(product_id))
    }

    /// Moves a saved product into `cart`.
    ///
    /// ## Behavior
    /// - Saved: the entry leaves the wishlist and the product is added to the
    ///   cart (quantity +1), with no point in between where an observer could
    ///   see it in neither or both
    /// - Not saved: nothing changes, returns `None`
    pub fn move_to_cart(&self, cart: &CartStore, product_id: &str) -> Option<MoveOutcome> {
        self.with_wishlist_mut(|wishlist| {
            let Some(item) = wishlist.take(product_id) else {
                return (None, false);
            };

            let cart = cart.with_cart_mut(|cart| {
                let changed = cart.add_product(&item.product);
                (cart.clone(), changed)
            });

            let outcome = MoveOutcome {
                cart,
                wishlist: wishlist.clone(),
            };
            (Some(outcome), true)
        })
    }

    pub fn subscribe(&self) -> watch::Receiver<WishlistState> {
        self.wishlist.subscribe()
    }
}

impl Default for WishlistStore {
    fn default() -> Self {
        Self::new()
    }
}
