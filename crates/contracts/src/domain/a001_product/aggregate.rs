use crate::enums::SalesStatus;
use crate::shared::placeholder::placeholder_uri;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// ID Type
// ============================================================================

/// Уникальный идентификатор товара (положительное целое)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub u32);

impl ProductId {
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Aggregate
// ============================================================================

/// Товар каталога. После загрузки каталога не изменяется.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    /// Цена в иенах
    pub price: u32,
    /// URI картинки (заглушка)
    pub image: String,
    pub tags: Vec<String>,
    pub status: SalesStatus,
}

impl Product {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// URI картинки; для товара без картинки строится заглушка с названием
    pub fn image_or_placeholder(&self, width: u32, height: u32) -> String {
        if self.image.trim().is_empty() {
            placeholder_uri(width, height, &self.name)
        } else {
            self.image.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(image: &str) -> Product {
        Product {
            id: ProductId::new(7),
            name: "Joy-Con".to_string(),
            price: 8980,
            image: image.to_string(),
            tags: vec!["周辺機器".to_string()],
            status: SalesStatus::OnSale,
        }
    }

    #[test]
    fn test_has_tag_is_exact_match() {
        let p = product("");
        assert!(p.has_tag("周辺機器"));
        assert!(!p.has_tag("周辺"));
    }

    #[test]
    fn test_image_or_placeholder() {
        assert_eq!(
            product("/img/joycon.png").image_or_placeholder(150, 150),
            "/img/joycon.png"
        );
        assert_eq!(
            product("").image_or_placeholder(512, 256),
            "/api/placeholder/512/256?text=Joy-Con"
        );
    }

    #[test]
    fn test_product_deserializes_from_catalog_json() {
        let json = r#"{"id":3,"name":"マリオカート8","price":5980,"image":"","tags":["ゲームソフト"],"status":"売り切れ"}"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, ProductId(3));
        assert_eq!(p.status, SalesStatus::SoldOut);
    }
}
