//! # Cart Commands
//!
//! Commands for cart manipulation and checkout.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │──► OrderReceipt         │
//! │  │  Cart    │     │          │     │          │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │       ▲                │                 │                              │
//! │       │           add_to_cart            │                              │
//! │       │           update_cart_item       │                              │
//! │       │           remove_from_cart       │                              │
//! │       │           move_to_cart           │                              │
//! │       │           (wishlist.rs)          │                              │
//! │       │                │                 │                              │
//! │       │                ▼                 │                              │
//! │       └─────────── clear_cart ◄──────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;
use zelion_core::validation::validate_quantity_input;
use zelion_core::{CartItem, CartState, CoreError, Money};

use crate::error::ApiError;
use crate::state::{CartStore, CatalogState, ConfigState};

/// Cart totals, already derived by the cart itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Sum of quantities
    pub item_count: i64,

    /// Number of lines
    pub distinct_items: usize,

    /// Sum of unit price × quantity
    pub total: Money,
}

impl From<&CartState> for CartTotals {
    fn from(cart: &CartState) -> Self {
        CartTotals {
            item_count: cart.item_count(),
            distinct_items: cart.distinct_items(),
            total: cart.total(),
        }
    }
}

/// Cart response including items and totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub items: Vec<CartItem>,
    pub totals: CartTotals,
}

impl From<&CartState> for CartResponse {
    fn from(cart: &CartState) -> Self {
        CartResponse {
            items: cart.items().to_vec(),
            totals: CartTotals::from(cart),
        }
    }
}

/// What the shopper gets back from a successful checkout.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderReceipt {
    pub order_id: Uuid,
    pub store_name: String,
    pub items: Vec<CartItem>,
    #[serde(flatten)]
    pub totals: CartTotals,
    pub currency_code: String,

    /// Total rendered with the store's currency settings, e.g. "₹21,998"
    pub formatted_total: String,
    pub placed_at: DateTime<Utc>,
}

/// Gets the current cart contents.
///
/// ## Returns
/// Current cart with items and totals
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.with_cart(|c| CartResponse::from(c))
}

/// Adds one unit of a catalog product to the cart.
///
/// ## Behavior
/// - Already in cart: quantity increases by 1
/// - Not in cart: added as a new line with quantity 1
/// - The product snapshot taken on first add is kept for that line
///
/// ## Arguments
/// * `product_id` - Catalog id, e.g. `"bat-1"`
///
/// ## Returns
/// Updated cart, or `NOT_FOUND` when the id is not in the catalog
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartStore,
    product_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, "add_to_cart command");

    let product = catalog.inner().require(product_id)?;
    let updated = cart.add(product);
    Ok(CartResponse::from(&updated))
}

/// Sets the quantity of a cart line.
///
/// ## Behavior
/// - Quantity 0 removes the line
/// - Negative quantities, or more than `MAX_ITEM_QUANTITY`, are refused
///   with `VALIDATION_ERROR`
/// - Ids not in the cart leave it unchanged
///
/// ## User Workflow
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Cart sidebar line:  Zelion Junior Bat   [-] 2 [+]   ₹9,998            │
/// │                                                                         │
/// │  [+] → update_cart_item('bat-3', 3)                                    │
/// │  [-] → update_cart_item('bat-3', 1)                                    │
/// │  [-] at 1 → update_cart_item('bat-3', 0) → line removed                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn update_cart_item(
    cart: &CartStore,
    product_id: &str,
    quantity: i64,
) -> Result<CartResponse, ApiError> {
    debug!(product_id = %product_id, quantity = %quantity, "update_cart_item command");

    if let Err(err) = validate_quantity_input(quantity) {
        warn!(product_id = %product_id, quantity = %quantity, "rejected quantity");
        return Err(err.into());
    }
    let updated = cart.update_quantity(product_id, quantity);
    Ok(CartResponse::from(&updated))
}

/// Removes a line from the cart. Ids not in the cart are a no-op.
pub fn remove_from_cart(cart: &CartStore, product_id: &str) -> CartResponse {
    debug!(product_id = %product_id, "remove_from_cart command");
    CartResponse::from(&cart.remove(product_id))
}

/// Clears all items from the cart.
pub fn clear_cart(cart: &CartStore) -> CartResponse {
    debug!("clear_cart command");
    CartResponse::from(&cart.clear())
}

/// Places the order for everything in the cart.
///
/// ## Behavior
/// The cart is emptied in the same step its contents are read, so two
/// concurrent checkouts cannot both receive the same items.
///
/// ## Returns
/// The receipt, or `CART_EMPTY` when there is nothing to buy
pub fn checkout(config: &ConfigState, cart: &CartStore) -> Result<OrderReceipt, ApiError> {
    debug!("checkout command");

    let order = cart.drain().ok_or(CoreError::EmptyCart)?;
    let totals = CartTotals::from(&order);
    let receipt = OrderReceipt {
        order_id: Uuid::new_v4(),
        store_name: config.store_name.clone(),
        items: order.items().to_vec(),
        totals,
        currency_code: config.currency_code.clone(),
        formatted_total: config.format_currency(totals.total),
        placed_at: Utc::now(),
    };

    info!(
        order_id = %receipt.order_id,
        items = totals.item_count,
        total = %receipt.formatted_total,
        "order placed"
    );
    Ok(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    fn setup() -> (CatalogState, CartStore) {
        (CatalogState::default(), CartStore::new())
    }

    #[test]
    fn test_add_to_cart() {
        let (catalog, cart) = setup();

        add_to_cart(&catalog, &cart, "bat-1").unwrap();
        let response = add_to_cart(&catalog, &cart, "bat-1").unwrap();

        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].quantity, 2);
        assert_eq!(response.totals.item_count, 2);
        assert_eq!(response.totals.total, Money::from_minor(15999 * 2));
    }

    #[test]
    fn test_add_unknown_product() {
        let (catalog, cart) = setup();
        let err = add_to_cart(&catalog, &cart, "bat-9").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert!(get_cart(&cart).items.is_empty());
    }

    #[test]
    fn test_update_cart_item() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "ball-1").unwrap();

        let response = update_cart_item(&cart, "ball-1", 4).unwrap();
        assert_eq!(response.totals.item_count, 4);

        let response = update_cart_item(&cart, "ball-1", 0).unwrap();
        assert!(response.items.is_empty());
        assert_eq!(response.totals.total, Money::zero());
    }

    #[test]
    fn test_update_rejects_negative_quantity() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "ball-1").unwrap();
        let before = get_cart(&cart);

        let err = update_cart_item(&cart, "ball-1", -2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart), before);
    }

    #[test]
    fn test_update_rejects_huge_quantity() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "bat-1").unwrap();
        let before = get_cart(&cart);

        let err = update_cart_item(&cart, "bat-1", i64::MAX / 2).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(get_cart(&cart), before);

        let response = update_cart_item(&cart, "bat-1", zelion_core::MAX_ITEM_QUANTITY).unwrap();
        assert_eq!(response.totals.item_count, 999);
        assert_eq!(response.totals.total, Money::from_minor(15999 * 999));
    }

    #[test]
    fn test_remove_and_clear() {
        let (catalog, cart) = setup();
        add_to_cart(&catalog, &cart, "kit-1").unwrap();
        add_to_cart(&catalog, &cart, "equipment-2").unwrap();

        let response = remove_from_cart(&cart, "kit-1");
        assert_eq!(response.totals.distinct_items, 1);

        let response = remove_from_cart(&cart, "kit-1");
        assert_eq!(response.totals.distinct_items, 1);

        let response = clear_cart(&cart);
        assert_eq!(response.totals.item_count, 0);
    }

    #[test]
    fn test_checkout() {
        let (catalog, cart) = setup();
        let config = ConfigState::default();
        add_to_cart(&catalog, &cart, "bat-3").unwrap();
        add_to_cart(&catalog, &cart, "bat-3").unwrap();
        add_to_cart(&catalog, &cart, "ball-1").unwrap();

        let receipt = checkout(&config, &cart).unwrap();
        assert_eq!(receipt.items.len(), 2);
        assert_eq!(receipt.totals.item_count, 3);
        assert_eq!(receipt.totals.total, Money::from_minor(4999 * 2 + 2999));
        assert_eq!(receipt.formatted_total, "₹12,997");
        assert_eq!(receipt.store_name, "Zelion Cricket");
        assert!(get_cart(&cart).items.is_empty());

        let json = serde_json::to_value(&receipt).unwrap();
        assert_eq!(json["itemCount"], 3);
        assert_eq!(json["total"], 12997);
        assert!(json["orderId"].is_string());
        assert!(json["placedAt"].is_string());
    }

    #[test]
    fn test_checkout_empty_cart() {
        let (_, cart) = setup();
        let err = checkout(&ConfigState::default(), &cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartEmpty);
    }

    #[test]
    fn test_response_json_shape() {
        let (catalog, cart) = setup();
        let response = add_to_cart(&catalog, &cart, "equipment-1").unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["items"][0]["product"]["id"], "equipment-1");
        assert_eq!(json["items"][0]["quantity"], 1);
        assert_eq!(json["totals"]["itemCount"], 1);
        assert_eq!(json["totals"]["distinctItems"], 1);
    }
}
