//! # Commands Module
//!
//! All commands exposed to the presentation layer.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── product.rs   ◄─── Catalog search and lookup
//! ├── cart.rs      ◄─── Cart manipulation, checkout
//! ├── wishlist.rs  ◄─── Wishlist manipulation, move to cart
//! └── config.rs    ◄─── Configuration retrieval
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation                                                           │
//! │  ────────────                                                           │
//! │  "Add to Cart" on the bat-1 card                                        │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  Rust Storefront                                                        │
//! │  ───────────────                                                        │
//! │  fn add_to_cart(                                                        │
//! │      catalog: &CatalogState,  ◄── From the Storefront                  │
//! │      cart: &CartStore,        ◄── From the Storefront                  │
//! │      product_id: &str,        ◄── From the caller                      │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Presentation receives: { items: [...], totals: {...} }                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the catalog
//! fn search_products(catalog: &CatalogState, ...)
//!
//! // Only needs the cart
//! fn get_cart(cart: &CartStore)
//!
//! // Needs both stores
//! fn move_to_cart(wishlist: &WishlistStore, cart: &CartStore, ...)
//! ```

pub mod cart;
pub mod config;
pub mod product;
pub mod wishlist;
