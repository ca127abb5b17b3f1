//! Products
//!
//! Data model of the products resource.

use serde::{Deserialize, Serialize};

/// Image sent with every new product
pub const PLACEHOLDER_IMAGE: &str = "https://fakestoreapi.com/img/placeholder.jpg";

/// Product as returned by the server
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
    pub rating: Rating,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rating {
    pub rate: f64,
    pub count: u64,
}

/// Payload of a creation request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProduct {
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

impl NewProduct {
    /// Build the payload, synthesizing description and image
    pub fn new(title: &str, price: f64, category: &str) -> Self {
        Self {
            title: title.to_string(),
            price,
            description: format!("Producto {} de la categoría {}", title, category),
            image: PLACEHOLDER_IMAGE.to_string(),
            category: category.to_string(),
        }
    }
}

/// Server echo of a created product. Any field may be missing.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreatedProduct {
    pub id: Option<u64>,
    pub title: Option<String>,
    pub price: Option<f64>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub category: Option<String>,
}

impl CreatedProduct {
    /// Fill missing or empty fields from what was submitted
    pub fn or_submitted(&self, submitted: &NewProduct) -> NewProduct {
        fn text(value: &Option<String>, fallback: &str) -> String {
            value
                .as_deref()
                .filter(|s| !s.is_empty())
                .unwrap_or(fallback)
                .to_string()
        }

        NewProduct {
            title: text(&self.title, &submitted.title),
            price: self.price.filter(|p| *p != 0.0).unwrap_or(submitted.price),
            description: text(&self.description, &submitted.description),
            image: text(&self.image, &submitted.image),
            category: text(&self.category, &submitted.category),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_product_payload() {
        let payload = serde_json::to_value(NewProduct::new("Widget", 9.99, "toys")).unwrap();
        assert_eq!(
            payload,
            json!({
                "title": "Widget",
                "price": 9.99,
                "description": "Producto Widget de la categoría toys",
                "image": PLACEHOLDER_IMAGE,
                "category": "toys"
            })
        );
    }

    #[test]
    fn test_partial_product_uses_defaults() {
        let product: Product = serde_json::from_value(json!({"id": 3, "title": "Mug"})).unwrap();
        assert_eq!(product.id, 3);
        assert_eq!(product.title, "Mug");
        assert_eq!(product.rating, Rating::default());
    }

    #[test]
    fn test_created_product_falls_back_to_submitted() {
        let submitted = NewProduct::new("Widget", 9.99, "toys");
        let created: CreatedProduct =
            serde_json::from_value(json!({"id": 21, "title": "", "price": 12.5})).unwrap();

        let shown = created.or_submitted(&submitted);
        assert_eq!(created.id, Some(21));
        assert_eq!(shown.title, "Widget");
        assert_eq!(shown.price, 12.5);
        assert_eq!(shown.category, "toys");
        assert_eq!(shown.description, submitted.description);
    }
}
