use crate::domain::a001_product::aggregate::Product;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Порядок сортировки списка товаров
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "おすすめ順")]
    Recommended,
    #[serde(rename = "安い順")]
    PriceAsc,
    #[serde(rename = "高い順")]
    PriceDesc,
}

impl SortOrder {
    pub fn label(&self) -> &'static str {
        match self {
            SortOrder::Recommended => "おすすめ順",
            SortOrder::PriceAsc => "安い順",
            SortOrder::PriceDesc => "高い順",
        }
    }

    pub fn all() -> Vec<SortOrder> {
        vec![SortOrder::Recommended, SortOrder::PriceAsc, SortOrder::PriceDesc]
    }

    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|s| s.label() == label)
            .unwrap_or_default()
    }

    /// Компаратор для стабильной сортировки.
    /// "おすすめ順" всегда возвращает `Equal`, порядок после фильтра не меняется.
    pub fn compare(&self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortOrder::Recommended => Ordering::Equal,
            SortOrder::PriceAsc => a.price.cmp(&b.price),
            SortOrder::PriceDesc => b.price.cmp(&a.price),
        }
    }
}
