use super::aggregate::{Product, ProductId};
use std::collections::HashSet;
use thiserror::Error;

const SEED_JSON: &str = include_str!("seed.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog JSON is malformed: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("product id must be positive")]
    InvalidId,
    #[error("duplicate product id {0}")]
    DuplicateId(ProductId),
}

/// Неизменяемый упорядоченный каталог товаров
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Встроенный каталог, загружается один раз при старте приложения
    pub fn seed() -> Result<Self, CatalogError> {
        Self::from_json(SEED_JSON)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;
        Self::from_products(products)
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for p in &products {
            if p.id.value() == 0 {
                return Err(CatalogError::InvalidId);
            }
            if !seen.insert(p.id) {
                return Err(CatalogError::DuplicateId(p.id));
            }
        }
        Ok(Self { products })
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Все теги каталога без повторов, в порядке первого появления
    pub fn all_tags(&self) -> Vec<String> {
        let mut seen = HashSet::new();
        self.products
            .iter()
            .flat_map(|p| p.tags.iter())
            .filter(|t| seen.insert(t.as_str()))
            .cloned()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_catalog() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(catalog.len(), 5);
        let ids: Vec<u32> = catalog.products().iter().map(|p| p.id.value()).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(catalog.find(ProductId(4)).map(|p| p.name.as_str()), Some("Switch Lite"));
        assert!(catalog.find(ProductId(99)).is_none());
    }

    #[test]
    fn test_all_tags_keeps_first_appearance_order() {
        let catalog = Catalog::seed().unwrap();
        assert_eq!(
            catalog.all_tags(),
            vec!["本体", "ゲーム機", "新品", "ゲームソフト"]
        );
    }

    #[test]
    fn test_rejects_duplicate_id() {
        let json = r#"[
            {"id":1,"name":"a","price":1,"image":"","tags":[],"status":"販売中"},
            {"id":1,"name":"b","price":2,"image":"","tags":[],"status":"販売中"}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(ProductId(1)))
        ));
    }

    #[test]
    fn test_rejects_zero_id_and_bad_json() {
        let json = r#"[{"id":0,"name":"a","price":1,"image":"","tags":[],"status":"販売中"}]"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::InvalidId)));
        assert!(matches!(
            Catalog::from_json(r#"[{"id":1}]"#),
            Err(CatalogError::Parse(_))
        ));
        assert!(matches!(
            Catalog::from_json(r#"[{"id":1,"name":"a","price":-5,"image":"","tags":[],"status":"販売中"}]"#),
            Err(CatalogError::Parse(_))
        ));
    }
}
