use crate::domain::a001_product::aggregate::ProductId;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BrowseError {
    #[error("no product selected")]
    NoSelection,
    #[error("product {0} not found")]
    ProductNotFound(ProductId),
}

impl BrowseError {
    /// Сообщение для пользователя
    pub fn user_message(&self) -> &'static str {
        match self {
            BrowseError::NoSelection | BrowseError::ProductNotFound(_) => "商品が見つかりません。",
        }
    }
}
