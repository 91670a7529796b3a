//! # Product Commands
//!
//! Commands for browsing and searching the catalog.
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Product Search Flow                                  │
//! │                                                                         │
//! │  Category chips: [All] [Bats] [Balls] [Equipment] [Kits]               │
//! │  Search box:     "junior"                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  search_products('bat', ' junior ')                                    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌───────────────────────────────────────────┐                         │
//! │  │  1. Parse category ("all" or a category)  │──► unknown? VALIDATION  │
//! │  │  2. Trim + length-check the term          │──► too long? VALIDATION │
//! │  │  3. Category stage, then text stage       │                         │
//! │  └───────────────────────────────────────────┘                         │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Vec<Product> in catalog order                                          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::time::Instant;

use serde::Serialize;
use tracing::{debug, warn};
use zelion_core::validation::validate_search_term;
use zelion_core::{Category, CategoryFilter, Product};

use crate::error::ApiError;
use crate::state::CatalogState;

/// A category present in the catalog, with how many products it holds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySummary {
    pub category: Category,
    pub count: usize,
}

/// Filters the catalog by category and free-text term.
///
/// ## Arguments
/// * `category` - `"all"` or a category name (`"bat"`, `"ball"`, ...)
/// * `term` - Matched case-insensitively against name and description;
///   empty means no text filtering
///
/// ## Returns
/// Matching products in catalog order (possibly empty)
pub fn search_products(
    catalog: &CatalogState,
    category: &str,
    term: &str,
) -> Result<Vec<Product>, ApiError> {
    let start = Instant::now();
    debug!(category = %category, term = %term, "search_products command");

    let filter: CategoryFilter = category.parse().map_err(|e| {
        warn!(category = %category, "rejected category");
        ApiError::from(e)
    })?;
    let term = validate_search_term(term)?;

    let products: Vec<Product> = catalog
        .inner()
        .filter_products(filter, &term)
        .into_iter()
        .cloned()
        .collect();

    debug!(
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        count = products.len(),
        "search_products complete"
    );
    Ok(products)
}

/// Gets a single product by id.
///
/// ## Returns
/// The product if found, or `NOT_FOUND`
pub fn get_product(catalog: &CatalogState, product_id: &str) -> Result<Product, ApiError> {
    debug!(product_id = %product_id, "get_product command");
    Ok(catalog.inner().require(product_id)?.clone())
}

/// Lists the categories present in the catalog, in first-seen order.
pub fn list_categories(catalog: &CatalogState) -> Vec<CategorySummary> {
    debug!("list_categories command");
    let catalog = catalog.inner();
    catalog
        .categories()
        .into_iter()
        .map(|category| CategorySummary {
            category,
            count: catalog.count_in(category),
        })
        .collect()
}
