use super::error::BrowseError;
use super::filter::{parse_price_input, price_input_text, FilterConfig, FilterCriteria};
use super::pipeline::derive_listing;
use super::selected_tags::SelectedTags;
use super::view_state::ViewState;
use crate::domain::a001_product::aggregate::{Product, ProductId};
use crate::domain::a001_product::catalog::Catalog;
use crate::enums::{Category, SortOrder, StatusFilter};
use crate::shared::config::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use serde::{Deserialize, Serialize};

/// Состояние сессии просмотра каталога.
///
/// Единственный владелец изменяемого состояния UI; изменения только через методы.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrowseSession {
    // Фильтры
    pub filters: FilterConfig,
    pub search: String,
    pub selected_tags: SelectedTags,

    // Сортировка
    pub sort_order: SortOrder,

    // Экран
    pub view: ViewState,
}

impl BrowseSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn criteria(&self) -> FilterCriteria<'_> {
        FilterCriteria::new(&self.filters, &self.search, &self.selected_tags)
    }

    /// Видимые товары в порядке отображения
    pub fn visible_products<'a>(&self, catalog: &'a Catalog) -> Vec<&'a Product> {
        derive_listing(catalog.products(), &self.criteria(), self.sort_order)
    }

    // ------------------------------------------------------------------------
    // Фильтры
    // ------------------------------------------------------------------------

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn set_exclude_keywords(&mut self, keywords: String) {
        self.filters.exclude_keywords = keywords;
    }

    pub fn set_category_label(&mut self, label: &str) {
        self.filters.category = Category::from_label(label);
    }

    pub fn set_sales_status_label(&mut self, label: &str) {
        self.filters.sales_status = StatusFilter::from_label(label);
    }

    pub fn set_sort_order_label(&mut self, label: &str) {
        self.sort_order = SortOrder::from_label(label);
    }

    pub fn set_price_min_input(&mut self, input: &str) {
        self.filters.price_min = parse_price_input(input, DEFAULT_PRICE_MIN);
    }

    pub fn set_price_max_input(&mut self, input: &str) {
        self.filters.price_max = parse_price_input(input, DEFAULT_PRICE_MAX);
    }

    pub fn price_min_input(&self) -> String {
        price_input_text(self.filters.price_min, DEFAULT_PRICE_MIN)
    }

    pub fn price_max_input(&self) -> String {
        price_input_text(self.filters.price_max, DEFAULT_PRICE_MAX)
    }

    pub fn toggle_tag(&mut self, tag: &str) {
        self.selected_tags.toggle(tag);
    }

    /// Количество активных фильтров, включая выбранные теги
    pub fn active_filter_count(&self) -> usize {
        self.filters.active_count() + self.selected_tags.len()
    }

    /// Сброс фильтров, поиска, сортировки и тегов. Экран не меняется.
    pub fn clear_all(&mut self) {
        self.filters = FilterConfig::default();
        self.search.clear();
        self.sort_order = SortOrder::default();
        self.selected_tags.clear();
    }

    // ------------------------------------------------------------------------
    // Экран
    // ------------------------------------------------------------------------

    /// Переход к странице товара. Экран переключается всегда; ошибка
    /// разрешения id возвращается один раз, здесь, для журнала.
    pub fn open_detail(&mut self, id: ProductId, catalog: &Catalog) -> Result<(), BrowseError> {
        self.view.open_detail(id);
        self.view.resolve(catalog).map(|_| ())
    }

    pub fn show_list(&mut self) {
        self.view.show_list();
    }

    pub fn detail<'a>(&self, catalog: &'a Catalog) -> Result<&'a Product, BrowseError> {
        self.view.resolve(catalog)
    }
}
