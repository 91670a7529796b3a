//! # State Module
//!
//! Manages storefront state.
//!
//! Each concern gets its own state type, and commands declare exactly which
//! ones they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                      Storefront                                 │   │
//! │  │  owns one of each, created at startup                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │       ┌──────────────┬───────┴───────┬──────────────┐                  │
//! │       ▼              ▼               ▼              ▼                   │
//! │  ┌──────────┐  ┌────────────┐  ┌─────────────┐  ┌─────────────┐        │
//! │  │ Catalog  │  │ CartStore  │  │ Wishlist    │  │ ConfigState │        │
//! │  │ State    │  │            │  │ Store       │  │             │        │
//! │  │ products │  │ watch<     │  │ watch<      │  │ store_name  │        │
//! │  │          │  │  CartState>│  │  Wishlist-  │  │ currency    │        │
//! │  │          │  │            │  │  State>     │  │             │        │
//! │  └──────────┘  └────────────┘  └─────────────┘  └─────────────┘        │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CatalogState / ConfigState: read-only after initialization          │
//! │  • CartStore / WishlistStore: single writer cell per store; readers    │
//! │    and subscribers only ever see whole transitions                     │
//! │  • move_to_cart: wishlist lock, then cart lock                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod catalog;
mod config;
mod wishlist;

pub use cart::CartStore;
pub use catalog::CatalogState;
pub use config::{ConfigError, ConfigState};
pub use wishlist::{MoveOutcome, WishlistStore};
