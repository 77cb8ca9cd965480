//! Launch catalog seed data.

use rust_decimal::Decimal;
use velvet_luna_core::types::ProductId;
use velvet_luna_core::{CatalogStore, Product};

/// The four launch products.
#[must_use]
pub fn launch_catalog() -> CatalogStore {
    CatalogStore::with_products(vec![
        Product {
            id: ProductId::new(1),
            name: "Esencia Sensual".to_string(),
            category: "Aceites".to_string(),
            price: Decimal::new(4599, 2),
            image: "https://images.velvetluna.mx/products/esencia-sensual.jpg".to_string(),
            badge: "Nuevo".to_string(),
            rating: Decimal::new(48, 1),
            description: Some(
                "Aceite de masaje sensual con aroma exquisito para momentos especiales"
                    .to_string(),
            ),
        },
        Product {
            id: ProductId::new(2),
            name: "Vibrador Discreto".to_string(),
            category: "Vibradores".to_string(),
            price: Decimal::new(8999, 2),
            image: "https://images.velvetluna.mx/products/vibrador-discreto.jpg".to_string(),
            badge: "Más Vendido".to_string(),
            rating: Decimal::new(49, 1),
            description: Some(
                "Vibrador compacto y silencioso, ideal para principiantes".to_string(),
            ),
        },
        Product {
            id: ProductId::new(3),
            name: "Kit Parejas".to_string(),
            category: "Kits".to_string(),
            price: Decimal::new(12999, 2),
            image: "https://images.velvetluna.mx/products/kit-parejas.jpg".to_string(),
            badge: "Recomendado".to_string(),
            rating: Decimal::new(50, 1),
            description: Some(
                "Kit completo para parejas que buscan explorar nuevas experiencias".to_string(),
            ),
        },
        Product {
            id: ProductId::new(4),
            name: "Lencería Premium".to_string(),
            category: "Ropa Íntima".to_string(),
            price: Decimal::new(6599, 2),
            image: "https://images.velvetluna.mx/products/lenceria-premium.jpg".to_string(),
            badge: "Nuevo".to_string(),
            rating: Decimal::new(47, 1),
            description: Some(
                "Lencería de alta calidad con diseño exclusivo y materiales suaves".to_string(),
            ),
        },
    ])
}
