use super::error::BrowseError;
use crate::domain::a001_product::aggregate::{Product, ProductId};
use crate::domain::a001_product::catalog::Catalog;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ViewMode {
    #[default]
    List,
    Detail,
}

/// Текущий экран и выбранный товар
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ViewState {
    pub mode: ViewMode,
    /// Имеет смысл только в режиме `Detail`
    pub selected_product_id: Option<ProductId>,
}

impl ViewState {
    pub fn open_detail(&mut self, id: ProductId) {
        self.mode = ViewMode::Detail;
        self.selected_product_id = Some(id);
    }

    /// Возврат к списку. Выбранный id не сбрасывается.
    pub fn show_list(&mut self) {
        self.mode = ViewMode::List;
    }

    pub fn is_detail(&self) -> bool {
        self.mode == ViewMode::Detail
    }

    pub fn resolve<'a>(&self, catalog: &'a Catalog) -> Result<&'a Product, BrowseError> {
        let id = self.selected_product_id.ok_or(BrowseError::NoSelection)?;
        catalog.find(id).ok_or(BrowseError::ProductNotFound(id))
    }
}
