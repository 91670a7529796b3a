//! # Catalog
//!
//! The read-only product list and the category/search filter over it.
//!
//! ## Filter Pipeline
//! ```text
//! catalog (original order)
//!      │
//!      ▼
//! category == selector ?     (skipped for "all")
//!      │
//!      ▼
//! name or description contains term, ignoring case ?   (skipped for "")
//!      │
//!      ▼
//! result (original relative order, possibly empty)
//! ```
//!
//! The catalog is loaded once and never mutated afterwards. Cart and wishlist
//! receive clones of its products.

use std::collections::HashSet;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{Category, CategoryFilter, Product};
use crate::validation::validate_product;

// =============================================================================
// Built-in Data
// =============================================================================

/// One row of the built-in table.
struct SeedProduct {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    price: i64,
    original_price: i64,
    image: &'static str,
    category: Category,
    rating: f32,
    reviews: u32,
    features: [&'static str; 4],
    discount: u8,
}

/// The Zelion range: 3 bats, 3 balls, 2 equipment, 1 kit.
const BUILTIN_PRODUCTS: &[SeedProduct] = &[
    // Cricket Bats
    SeedProduct {
        id: "bat-1",
        name: "Zelion Elite Pro Bat",
        description: "Premium English willow cricket bat with perfect balance and exceptional power. Handcrafted by master craftsmen for professional players.",
        price: 15999,
        original_price: 19999,
        image: "https://images.pexels.com/photos/3657154/pexels-photo-3657154.jpeg",
        category: Category::Bat,
        rating: 4.8,
        reviews: 124,
        features: ["English Willow", "Hand-Finished", "Professional Grade", "Perfect Balance"],
        discount: 20,
    },
    SeedProduct {
        id: "bat-2",
        name: "Zelion Champion Bat",
        description: "High-quality Kashmir willow bat designed for intermediate to advanced players. Excellent value for money with superior performance.",
        price: 8999,
        original_price: 11999,
        image: "https://arena.cricketgraph.com/uploads/priyanshu-bats-up-ss-bat-3-jpeg_1649237240.jpeg",
        category: Category::Bat,
        rating: 4.6,
        reviews: 89,
        features: ["Kashmir Willow", "Lightweight", "Durable", "Great Value"],
        discount: 25,
    },
    SeedProduct {
        id: "bat-3",
        name: "Zelion Junior Bat",
        description: "Perfect starter bat for young cricketers. Lightweight design with excellent grip and control for developing players.",
        price: 4999,
        original_price: 6999,
        image: "https://tse2.mm.bing.net/th/id/OIP.zgt-OwzaDVhHVuwWa2Z4dgHaFF?r=0&rs=1&pid=ImgDetMain&o=7&rm=3",
        category: Category::Bat,
        rating: 4.5,
        reviews: 67,
        features: ["Junior Size", "Lightweight", "Easy Grip", "Beginner Friendly"],
        discount: 29,
    },
    // Cricket Balls
    SeedProduct {
        id: "ball-1",
        name: "Zelion Test Match Ball",
        description: "Official test match quality leather cricket ball. Hand-stitched with premium leather for professional matches and practice.",
        price: 2999,
        original_price: 3999,
        image: "https://th.bing.com/th/id/OIP.XP-toTaZlY9ofJ73z4tkUAHaE8?r=0&o=7rm=3&rs=1&pid=ImgDetMain&o=7&rm=3",
        category: Category::Ball,
        rating: 4.9,
        reviews: 156,
        features: ["Genuine Leather", "Hand-Stitched", "Test Match Quality", "Professional Grade"],
        discount: 25,
    },
    SeedProduct {
        id: "ball-2",
        name: "Zelion Practice Ball Set",
        description: "Set of 6 high-quality practice balls. Perfect for training sessions and club matches. Durable construction for extended use.",
        price: 4999,
        original_price: 6999,
        image: "https://tse1.mm.bing.net/th/id/OIP.rAmItNQiDpCqShRJAqSG8gHaJ4?r=0&w=1500&h=2000&rs=1&pid=ImgDetMain&o=7&rm=3",
        category: Category::Ball,
        rating: 4.7,
        reviews: 98,
        features: ["Set of 6 Balls", "Practice Quality", "Durable", "Club Standard"],
        discount: 29,
    },
    SeedProduct {
        id: "ball-3",
        name: "Zelion White Ball",
        description: "Premium white leather cricket ball for limited overs matches. Excellent visibility and consistent bounce for competitive play.",
        price: 3499,
        original_price: 4499,
        image: "https://bettingplanet.com/wp-content/uploads/2024/02/White-cricket-ball.jpg",
        category: Category::Ball,
        rating: 4.8,
        reviews: 112,
        features: ["White Leather", "Limited Overs", "High Visibility", "Consistent Bounce"],
        discount: 22,
    },
    // Equipment
    SeedProduct {
        id: "equipment-1",
        name: "Zelion Pro Pads",
        description: "Professional batting pads with advanced protection and lightweight design. Comfortable fit with superior mobility.",
        price: 8999,
        original_price: 12999,
        image: "https://images.pexels.com/photos/28759016/pexels-photo-28759016.jpeg",
        category: Category::Equipment,
        rating: 4.7,
        reviews: 78,
        features: ["Lightweight", "Advanced Protection", "Comfortable Fit", "Professional Grade"],
        discount: 31,
    },
    SeedProduct {
        id: "equipment-2",
        name: "Zelion Batting Gloves",
        description: "Premium batting gloves with superior grip and protection. Flexible design for natural hand movement and comfort.",
        price: 3999,
        original_price: 5999,
        image: "https://images.pexels.com/photos/3800517/pexels-photo-3800517.jpeg",
        category: Category::Equipment,
        rating: 4.6,
        reviews: 134,
        features: ["Superior Grip", "Flexible Design", "Comfortable", "Durable"],
        discount: 33,
    },
    // Complete Kits
    SeedProduct {
        id: "kit-1",
        name: "Zelion Complete Cricket Kit",
        description: "Everything you need to start playing cricket. Includes bat, pads, gloves, helmet, and carry bag. Perfect for beginners.",
        price: 25999,
        original_price: 35999,
        image: "https://tse3.mm.bing.net/th/id/OIP.8q3VPTBSaf3Q7qmM3Uv9fgHaHa?r=0&rs=1&pid=ImgDetMain&o=7&rm=3",
        category: Category::Kit,
        rating: 4.8,
        reviews: 45,
        features: ["Complete Set", "Beginner Friendly", "Carry Bag Included", "Great Value"],
        discount: 28,
    },
];

impl SeedProduct {
    fn to_product(&self) -> Product {
        Product {
            id: self.id.to_string(),
            name: self.name.to_string(),
            description: self.description.to_string(),
            price: self.price,
            original_price: Some(self.original_price),
            image: self.image.to_string(),
            category: self.category,
            in_stock: true,
            rating: self.rating,
            reviews: self.reviews,
            features: self.features.iter().map(|f| f.to_string()).collect(),
            discount: Some(self.discount),
        }
    }
}

// =============================================================================
// Catalog
// =============================================================================

/// The read-only product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog from `products`, keeping their order.
    ///
    /// ## Errors
    /// - Any record failing [`validate_product`]
    /// - Two records sharing an id
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_records(&products)?;
        Ok(Catalog { products })
    }

    /// Parses a JSON array of products (camelCase fields) and validates it.
    pub fn from_json(json: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Catalog::new(products)
    }

    /// The built-in Zelion range.
    pub fn builtin() -> Self {
        Catalog {
            products: BUILTIN_PRODUCTS.iter().map(SeedProduct::to_product).collect(),
        }
    }

    #[inline]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, product_id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == product_id)
    }

    /// Like [`Catalog::get`], failing with `ProductNotFound`.
    pub fn require(&self, product_id: &str) -> CoreResult<&Product> {
        self.get(product_id)
            .ok_or_else(|| CoreError::ProductNotFound(product_id.to_string()))
    }

    /// Categories that have at least one product, in first-seen order.
    pub fn categories(&self) -> Vec<Category> {
        let mut categories = Vec::new();
        for product in &self.products {
            if !categories.contains(&product.category) {
                categories.push(product.category);
            }
        }
        categories
    }

    pub fn count_in(&self, category: Category) -> usize {
        self.products
            .iter()
            .filter(|p| p.category == category)
            .count()
    }

    /// Filters by category, then by case-insensitive text on name or
    /// description.
    ///
    /// An empty `term` disables the text stage. The term is used as given;
    /// trimming is the caller's job.
    pub fn filter_products(&self, category: CategoryFilter, term: &str) -> Vec<&Product> {
        let needle = term.to_lowercase();
        self.products
            .iter()
            .filter(|p| category.matches(p.category))
            .filter(|p| needle.is_empty() || p.matches_search(&needle))
            .collect()
    }
}

fn validate_records(products: &[Product]) -> CoreResult<()> {
    let mut seen = HashSet::with_capacity(products.len());
    for product in products {
        validate_product(product)?;
        if !seen.insert(product.id.as_str()) {
            return Err(ValidationError::Duplicate {
                field: "id".to_string(),
                value: product.id.clone(),
            }
            .into());
        }
    }
    Ok(())
}

impl Default for Catalog {
    fn default() -> Self {
        Catalog::builtin()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::tests::test_product;

    fn ids(products: &[&Product]) -> Vec<String> {
        products.iter().map(|p| p.id.clone()).collect()
    }

    #[test]
    fn test_builtin_catalog_is_valid() {
        let builtin = Catalog::builtin();
        assert_eq!(builtin.len(), 9);

        let rebuilt = Catalog::new(builtin.products().to_vec()).unwrap();
        assert_eq!(rebuilt, builtin);
    }

    #[test]
    fn test_builtin_category_counts() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.count_in(Category::Bat), 3);
        assert_eq!(catalog.count_in(Category::Ball), 3);
        assert_eq!(catalog.count_in(Category::Equipment), 2);
        assert_eq!(catalog.count_in(Category::Kit), 1);
        assert_eq!(catalog.categories(), Category::ALL.to_vec());
    }

    #[test]
    fn test_filter_all_empty_returns_everything_in_order() {
        let catalog = Catalog::builtin();
        let all = catalog.filter_products(CategoryFilter::All, "");
        let expected: Vec<String> = catalog.products().iter().map(|p| p.id.clone()).collect();
        assert_eq!(ids(&all), expected);
    }

    #[test]
    fn test_filter_by_category() {
        let catalog = Catalog::builtin();
        let bats = catalog.filter_products(CategoryFilter::Only(Category::Bat), "");
        assert_eq!(ids(&bats), vec!["bat-1", "bat-2", "bat-3"]);
        assert!(bats.iter().all(|p| p.category == Category::Bat));
    }

    #[test]
    fn test_filter_by_term_is_case_insensitive() {
        let catalog = Catalog::builtin();

        let junior = catalog.filter_products(CategoryFilter::All, "junior");
        assert_eq!(ids(&junior), vec!["bat-3"]);

        let upper = catalog.filter_products(CategoryFilter::All, "JUNIOR");
        assert_eq!(ids(&upper), vec!["bat-3"]);
    }

    #[test]
    fn test_filter_matches_description() {
        let catalog = Catalog::builtin();
        // "leather" only appears in ball descriptions/names
        let leather = catalog.filter_products(CategoryFilter::All, "leather");
        assert_eq!(ids(&leather), vec!["ball-1", "ball-3"]);
    }

    #[test]
    fn test_filter_category_then_term() {
        let catalog = Catalog::builtin();
        let result = catalog.filter_products(CategoryFilter::Only(Category::Equipment), "lightweight");
        assert_eq!(ids(&result), vec!["equipment-1"]);
    }

    #[test]
    fn test_filter_no_match_is_empty() {
        let catalog = Catalog::builtin();
        assert!(catalog
            .filter_products(CategoryFilter::Only(Category::Kit), "helmetless")
            .is_empty());
    }

    #[test]
    fn test_filter_two_of_four_bats() {
        let mut products = Vec::new();
        for (id, category) in [
            ("x1", Category::Ball),
            ("x2", Category::Bat),
            ("x3", Category::Kit),
            ("x4", Category::Bat),
        ] {
            let mut p = test_product(id, 100);
            p.category = category;
            products.push(p);
        }
        let catalog = Catalog::new(products).unwrap();

        let bats = catalog.filter_products(CategoryFilter::Only(Category::Bat), "");
        assert_eq!(ids(&bats), vec!["x2", "x4"]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![test_product("p1", 1), test_product("p1", 2)]);
        assert!(matches!(
            result,
            Err(CoreError::Validation(ValidationError::Duplicate { .. }))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "bat-9",
                "name": "Backyard Bat",
                "description": "Tape-ball bat",
                "price": 999,
                "image": "bat.jpg",
                "category": "bat",
                "inStock": false,
                "rating": 3.9,
                "reviews": 2
            }
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.require("bat-9").unwrap();
        assert!(!product.in_stock);
        assert!(product.features.is_empty());
        assert_eq!(product.original_price, None);

        assert!(matches!(
            catalog.require("bat-1"),
            Err(CoreError::ProductNotFound(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoreError::InvalidCatalog(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id":"x"}]"#),
            Err(CoreError::InvalidCatalog(_))
        ));
    }
}
