//! # Domain Types
//!
//! Core domain types used throughout the Zelion storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    Category     │   │ CategoryFilter  │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id ("bat-1")   │   │  Bat            │   │  All            │       │
//! │  │  name           │   │  Ball           │   │  Only(Category) │       │
//! │  │  price          │   │  Equipment      │   └─────────────────┘       │
//! │  │  category       │   │  Kit            │                             │
//! │  └─────────────────┘   └─────────────────┘                             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Products are immutable inputs: the cart and wishlist hold copies and never
//! change them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use ts_rs::TS;

use crate::error::CoreError;
use crate::money::Money;

// =============================================================================
// Category
// =============================================================================

/// Product category. The set is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Bat,
    Ball,
    Equipment,
    Kit,
}

impl Category {
    /// Every category, in storefront display order.
    pub const ALL: [Category; 4] = [
        Category::Bat,
        Category::Ball,
        Category::Equipment,
        Category::Kit,
    ];

    /// Lowercase wire name (`"bat"`, `"ball"`, ...).
    pub const fn as_str(&self) -> &'static str {
        match self {
            Category::Bat => "bat",
            Category::Ball => "ball",
            Category::Equipment => "equipment",
            Category::Kit => "kit",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CoreError::UnknownCategory(s.to_string()))
    }
}

// =============================================================================
// Category Filter
// =============================================================================

/// Category selector for the product grid: everything, or one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    /// Whether a product in `category` passes this selector.
    #[inline]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CoreError;

    /// Parses `"all"` or a category name, ignoring case and surrounding
    /// whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        s.parse::<Category>().map(CategoryFilter::Only)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier (e.g. `"bat-1"`).
    pub id: String,

    /// Display name.
    pub name: String,

    pub description: String,

    /// Unit price in the smallest currency unit.
    pub price: i64,

    /// List price before discount.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<i64>,

    /// Image URL.
    pub image: String,

    pub category: Category,

    pub in_stock: bool,

    /// Star rating, 0 to 5.
    pub rating: f32,

    /// Number of reviews behind the rating.
    pub reviews: u32,

    /// Feature tags, in display order.
    #[serde(default)]
    pub features: Vec<String>,

    /// Advertised discount percentage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub discount: Option<u8>,
}

impl Product {
    /// Returns the price as a Money type.
    #[inline]
    pub fn unit_price(&self) -> Money {
        Money::from_minor(self.price)
    }

    /// Returns the pre-discount price, if the product has one.
    #[inline]
    pub fn original_price(&self) -> Option<Money> {
        self.original_price.map(Money::from_minor)
    }

    /// Amount saved against the original price (zero without one).
    pub fn savings(&self) -> Money {
        self.original_price()
            .map(|original| original - self.unit_price())
            .filter(Money::is_positive)
            .unwrap_or_default()
    }

    /// Discount percentage to display: the advertised one, otherwise the one
    /// implied by the original price.
    pub fn effective_discount_percent(&self) -> Option<u8> {
        if self.discount.is_some() {
            return self.discount;
        }
        let original = self.original_price()?;
        self.savings()
            .percent_of(original)
            .filter(|pct| *pct > 0)
    }

    /// Case-insensitive substring match against name or description.
    ///
    /// `needle_lower` must already be lowercase.
    pub(crate) fn matches_search(&self, needle_lower: &str) -> bool {
        self.name.to_lowercase().contains(needle_lower)
            || self.description.to_lowercase().contains(needle_lower)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
