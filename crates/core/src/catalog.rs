//! Product catalog store.
//!
//! The catalog is the only owner of [`Product`]s; everything else (cart
//! lines included) works on copies taken at a point in time. IDs are
//! assigned from a high-watermark counter and are never reused, even after
//! the product that held the highest ID is deleted.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::ProductId;

/// A product in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Free-text category label (e.g., "Aceites").
    pub category: String,
    /// Non-negative amount in MXN.
    pub price: Decimal,
    pub image: String,
    /// Promotional label (e.g., "Nuevo", "Más Vendido").
    pub badge: String,
    /// Star rating, 0 to 5.
    pub rating: Decimal,
    pub description: Option<String>,
}

/// Fields for creating a product; the store assigns the ID.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProduct {
    pub name: String,
    pub category: String,
    pub price: Decimal,
    pub image: String,
    pub badge: String,
    pub rating: Decimal,
    #[serde(default)]
    pub description: Option<String>,
}

/// Partial field set merged into an existing product on update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProductPatch {
    pub name: Option<String>,
    pub category: Option<String>,
    pub price: Option<Decimal>,
    pub image: Option<String>,
    pub badge: Option<String>,
    pub rating: Option<Decimal>,
    pub description: Option<String>,
}

/// In-memory product catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogStore {
    products: Vec<Product>,
    /// Next ID to assign. Monotonic: deletes never lower it.
    next_id: i32,
}

impl CatalogStore {
    /// Create an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            products: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog pre-populated with `products`.
    ///
    /// The watermark starts just above the highest seeded ID.
    #[must_use]
    pub fn with_products(products: Vec<Product>) -> Self {
        let next_id = products.iter().map(|p| p.id.as_i32()).max().unwrap_or(0) + 1;
        Self { products, next_id }
    }

    /// Add a product, assigning the next ID.
    pub fn add(&mut self, new: NewProduct) -> ProductId {
        let id = ProductId::new(self.next_id.max(1));
        self.next_id = id.as_i32() + 1;

        self.products.push(Product {
            id,
            name: new.name,
            category: new.category,
            price: new.price,
            image: new.image,
            badge: new.badge,
            rating: new.rating,
            description: new.description,
        });
        id
    }

    /// Merge a partial field set into the product with `id`.
    ///
    /// Returns `false` (and changes nothing) if the product does not exist.
    pub fn update(&mut self, id: ProductId, patch: ProductPatch) -> bool {
        let Some(product) = self.products.iter_mut().find(|p| p.id == id) else {
            return false;
        };

        if let Some(name) = patch.name {
            product.name = name;
        }
        if let Some(category) = patch.category {
            product.category = category;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }
        if let Some(image) = patch.image {
            product.image = image;
        }
        if let Some(badge) = patch.badge {
            product.badge = badge;
        }
        if let Some(rating) = patch.rating {
            product.rating = rating;
        }
        if let Some(description) = patch.description {
            product.description = Some(description);
        }
        true
    }

    /// Remove the product with `id`. Returns `false` if it was not present.
    pub fn remove(&mut self, id: ProductId) -> bool {
        let before = self.products.len();
        self.products.retain(|p| p.id != id);
        self.products.len() < before
    }

    /// Look up a product by ID.
    #[must_use]
    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// All products, in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.products.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}
