//! # Wishlist Commands
//!
//! Commands for saving products for later and moving them into the cart.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Product card heart icon                                                │
//! │       │                                                                 │
//! │       ├── is_in_wishlist('ball-3') ──► filled / outline heart          │
//! │       │                                                                 │
//! │       └── click ──► add_to_wishlist / remove_from_wishlist              │
//! │                                                                         │
//! │  Wishlist page "Move to cart" ──► move_to_cart('ball-3')               │
//! │       wishlist: -ball-3      cart: ball-3 qty +1      (one step)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tracing::debug;
use zelion_core::WishlistState;

use super::cart::CartResponse;
use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, WishlistStore};

/// Both collections after a product moved from the wishlist to the cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoveToCartResponse {
    pub cart: CartResponse,
    pub wishlist: WishlistState,
}

pub fn get_wishlist(wishlist: &WishlistStore) -> WishlistState {
    debug!("get_wishlist command");
    wishlist.snapshot()
}

/// Saves a catalog product.
///
/// ## Behavior
/// - Not saved: added, stamped with the current time
/// - Already saved: unchanged (the original timestamp stays)
///
/// ## Returns
/// Updated wishlist, or `NOT_FOUND` when the id is not in the catalog
pub fn add_to_wishlist(
    catalog: &CatalogState,
    wishlist: &WishlistStore,
    product_id: &str,
) -> Result<WishlistState, ApiError> {
    debug!(product_id = %product_id, "add_to_wishlist command");

    let product = catalog.inner().require(product_id)?;
    Ok(wishlist.add(product))
}

/// Removes a saved product. Ids not saved are a no-op.
pub fn remove_from_wishlist(wishlist: &WishlistStore, product_id: &str) -> WishlistState {
    debug!(product_id = %product_id, "remove_from_wishlist command");
    wishlist.remove(product_id)
}

pub fn clear_wishlist(wishlist: &WishlistStore) -> WishlistState {
    debug!("clear_wishlist command");
    wishlist.clear()
}

pub fn is_in_wishlist(wishlist: &WishlistStore, product_id: &str) -> bool {
    wishlist.is_in_wishlist(product_id)
}

/// Moves a saved product into the cart.
///
/// ## Returns
/// Both updated collections, or `NOT_FOUND` when the product is not saved
pub fn move_to_cart(
    wishlist: &WishlistStore,
    cart: &CartStore,
    product_id: &str,
) -> Result<MoveToCartResponse, ApiError> {
    debug!(product_id = %product_id, "move_to_cart command");

    let outcome = wishlist
        .move_to_cart(cart, product_id)
        .ok_or_else(|| ApiError::not_found("Wishlist item", product_id))?;

    Ok(MoveToCartResponse {
        cart: CartResponse::from(&outcome.cart),
        wishlist: outcome.wishlist,
    })
}
