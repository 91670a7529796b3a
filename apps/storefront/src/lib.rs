//! # Zelion Storefront Library
//!
//! Service layer for the Zelion cricket storefront: owns the catalog,
//! configuration and the session's cart and wishlist, and exposes the
//! commands a presentation layer calls.
//!
//! ## Module Organization
//! ```text
//! zelion_storefront/
//! ├── lib.rs           ◄─── You are here (Storefront, startup, logging)
//! ├── state/
//! │   ├── mod.rs       ◄─── State type exports
//! │   ├── catalog.rs   ◄─── Catalog wrapper and loading
//! │   ├── cart.rs      ◄─── Cart store (watch cell)
//! │   ├── wishlist.rs  ◄─── Wishlist store, move to cart
//! │   └── config.rs    ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs       ◄─── Command exports
//! │   ├── product.rs   ◄─── Search and lookup commands
//! │   ├── cart.rs      ◄─── Cart and checkout commands
//! │   ├── wishlist.rs  ◄─── Wishlist commands
//! │   └── config.rs    ◄─── Config command
//! └── error.rs         ◄─── API error type for commands
//! ```
//!
//! ## Usage
//! ```rust
//! use zelion_storefront::commands::{cart, wishlist};
//! use zelion_storefront::Storefront;
//!
//! let store = Storefront::default();
//! wishlist::add_to_wishlist(&store.catalog, &store.wishlist, "bat-1")?;
//! let moved = wishlist::move_to_cart(&store.wishlist, &store.cart, "bat-1")?;
//! assert_eq!(moved.cart.totals.item_count, 1);
//!
//! let receipt = cart::checkout(&store.config, &store.cart)?;
//! assert_eq!(receipt.formatted_total, "₹15,999");
//! # Ok::<(), zelion_storefront::error::ApiError>(())
//! ```

pub mod commands;
pub mod error;
pub mod state;

use tracing::info;
use tracing_subscriber::EnvFilter;

use error::ApiError;
use state::{CartStore, CatalogState, ConfigError, ConfigState, WishlistStore};

/// Everything one storefront session needs, created once at startup and
/// passed to commands by reference.
#[derive(Debug, Default)]
pub struct Storefront {
    pub config: ConfigState,
    pub catalog: CatalogState,
    pub cart: CartStore,
    pub wishlist: WishlistStore,
}

impl Storefront {
    /// Creates a storefront with empty cart and wishlist.
    pub fn new(config: ConfigState, catalog: CatalogState) -> Self {
        Storefront {
            config,
            catalog,
            cart: CartStore::new(),
            wishlist: WishlistStore::new(),
        }
    }

    /// Loads the catalog `config` points at, then builds the storefront.
    pub fn load(config: ConfigState) -> Result<Self, ConfigError> {
        let catalog = CatalogState::load(&config)?;
        Ok(Self::new(config, catalog))
    }
}

/// Starts the storefront.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Storefront Startup                                │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter                                │
/// │     • Default: INFO, can be overridden with RUST_LOG                    │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ZELION_* environment variables over defaults                      │
/// │                                                                         │
/// │  3. Load Catalog ─────────────────────────────────────────────────────► │
/// │     • ZELION_CATALOG_PATH JSON file, or the built-in table              │
/// │     • Every record validated, ids unique                                │
/// │                                                                         │
/// │  4. Initialize State Objects ─────────────────────────────────────────► │
/// │     • CartStore / WishlistStore: empty                                  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run() -> Result<Storefront, ApiError> {
    init_tracing();

    info!("Starting Zelion Storefront");

    let config = ConfigState::try_from_env()?;
    let storefront = Storefront::load(config)?;

    info!(
        store = %storefront.config.store_name,
        currency = %storefront.config.currency_code,
        products = storefront.catalog.inner().len(),
        "State initialized"
    );
    for summary in commands::product::list_categories(&storefront.catalog) {
        info!(category = %summary.category, products = summary.count, "category");
    }

    Ok(storefront)
}

/// Filter used when `RUST_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "info,zelion=debug";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=zelion_storefront=trace` - Show trace for the storefront only
/// - Default: INFO, DEBUG for zelion crates
pub fn init_tracing() {
    tracing_subscriber::fmt().with_env_filter(log_filter()).init();
}

fn log_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| default_log_filter())
}

fn default_log_filter() -> EnvFilter {
    EnvFilter::new(DEFAULT_LOG_FILTER)
}
