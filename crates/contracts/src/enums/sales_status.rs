use serde::{Deserialize, Serialize};

/// Статус продажи товара
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SalesStatus {
    #[serde(rename = "販売中")]
    OnSale,
    #[serde(rename = "売り切れ")]
    SoldOut,
}

impl SalesStatus {
    /// Подпись, которую видит пользователь (и которая хранится в каталоге)
    pub fn label(&self) -> &'static str {
        match self {
            SalesStatus::OnSale => "販売中",
            SalesStatus::SoldOut => "売り切れ",
        }
    }

    pub fn all() -> Vec<SalesStatus> {
        vec![SalesStatus::OnSale, SalesStatus::SoldOut]
    }

    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "販売中" => Some(SalesStatus::OnSale),
            "売り切れ" => Some(SalesStatus::SoldOut),
            _ => None,
        }
    }
}

/// Фильтр по статусу продажи: "すべて" либо конкретный статус
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Only(SalesStatus),
}

impl StatusFilter {
    pub const ALL_LABEL: &'static str = "すべて";

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => Self::ALL_LABEL,
            StatusFilter::Only(status) => status.label(),
        }
    }

    /// Варианты в порядке отображения в боковой панели
    pub fn all() -> Vec<StatusFilter> {
        std::iter::once(StatusFilter::All)
            .chain(SalesStatus::all().into_iter().map(StatusFilter::Only))
            .collect()
    }

    /// Неизвестная подпись трактуется как нейтральное значение
    pub fn from_label(label: &str) -> Self {
        SalesStatus::from_label(label)
            .map(StatusFilter::Only)
            .unwrap_or(StatusFilter::All)
    }

    pub fn accepts(&self, status: SalesStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(expected) => *expected == status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_round_trip() {
        for status in SalesStatus::all() {
            assert_eq!(SalesStatus::from_label(status.label()), Some(status));
        }
        assert_eq!(SalesStatus::from_label("在庫あり"), None);
    }

    #[test]
    fn test_status_filter_order_and_fallback() {
        let labels: Vec<&str> = StatusFilter::all().iter().map(|f| f.label()).collect();
        assert_eq!(labels, vec!["すべて", "販売中", "売り切れ"]);
        assert_eq!(StatusFilter::from_label("???"), StatusFilter::All);
        assert_eq!(
            StatusFilter::from_label("売り切れ"),
            StatusFilter::Only(SalesStatus::SoldOut)
        );
    }

    #[test]
    fn test_status_serializes_as_label() {
        let json = serde_json::to_string(&SalesStatus::SoldOut).unwrap();
        assert_eq!(json, "\"売り切れ\"");
    }
}
