//! # zelion-core: Pure Storefront Logic for Zelion
//!
//! This crate is the **heart** of the Zelion storefront. It contains the cart,
//! wishlist and catalog rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Zelion Storefront Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Presentation (web views)                     │   │
//! │  │   Product Grid ──► Cart Sidebar ──► Wishlist Sidebar           │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ command calls                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 apps/storefront (commands + stores)             │   │
//! │  │    add_to_cart, move_to_cart, search_products, etc.            │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ zelion-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │   cart    │  │ wishlist  │  │  catalog  │  │   │
//! │  │   │  Product  │  │ CartState │  │ Wishlist  │  │  filter   │  │   │
//! │  │   │ Category  │  │ CartItem  │  │   State   │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOCKS • NO NETWORK • PURE FUNCTIONS              │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Product, Category, CategoryFilter)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`cart`] - Cart state and its reducer
//! - [`wishlist`] - Wishlist state and its reducer
//! - [`catalog`] - Read-only product catalog and the category/search filter
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every transition is `(state, action) -> state`
//! 2. **No I/O**: Locks, files and logging live in the app layer
//! 3. **Integer Money**: Prices are in the smallest currency unit (i64)
//! 4. **Derived Totals**: Cart total and counts are recomputed on every change
//!
//! ## Example Usage
//!
//! ```rust
//! use zelion_core::{CartState, Catalog, CategoryFilter, Category};
//!
//! let catalog = Catalog::builtin();
//! let bats = catalog.filter_products(CategoryFilter::Only(Category::Bat), "");
//!
//! let mut cart = CartState::new();
//! cart.add_product(bats[0]);
//! cart.add_product(bats[0]);
//!
//! assert_eq!(cart.item_count(), 2);
//! assert_eq!(cart.total(), bats[0].unit_price() * 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod types;
pub mod validation;
pub mod wishlist;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use zelion_core::Money` instead of
// `use zelion_core::money::Money`

pub use cart::{CartAction, CartItem, CartState};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use types::*;
pub use wishlist::{WishlistAction, WishlistItem, WishlistState};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a free-text product search term.
pub const MAX_SEARCH_TERM_LEN: usize = 100;

/// Maximum quantity of a single product in the cart.
/// Larger requests are refused at input and clamped by the cart itself.
pub const MAX_ITEM_QUANTITY: i64 = 999;

/// Highest product rating on the storefront's star scale.
pub const MAX_RATING: f32 = 5.0;
