use contracts::domain::a001_product::aggregate::{Product, ProductId};
use contracts::domain::a001_product::catalog::Catalog;
use contracts::shared::browse::{BrowseError, BrowseSession};
use leptos::prelude::*;

/// Глобальное состояние приложения.
///
/// Каталог неизменяем; всё изменяемое состояние лежит в одном сигнале
/// `session`, поэтому каждое действие пользователя — одно атомарное обновление.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub catalog: StoredValue<Catalog>,
    pub session: RwSignal<BrowseSession>,
    pub load_error: RwSignal<Option<String>>,
    /// Отфильтрованные и отсортированные товары
    pub listing: Memo<Vec<Product>>,
    /// Товар для экрана деталей
    pub detail: Memo<Result<Product, BrowseError>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        let (catalog, load_error) = match Catalog::seed() {
            Ok(catalog) => {
                log::info!("catalog loaded: {} products", catalog.len());
                (catalog, None)
            }
            Err(e) => {
                log::error!("failed to load catalog: {}", e);
                (Catalog::default(), Some(e.to_string()))
            }
        };

        let catalog = StoredValue::new(catalog);
        let session = RwSignal::new(BrowseSession::new());

        let listing = Memo::new(move |_| {
            session.with(|s| {
                catalog.with_value(|c| s.visible_products(c).into_iter().cloned().collect::<Vec<Product>>())
            })
        });

        let detail = Memo::new(move |_| {
            session.with(|s| catalog.with_value(|c| s.detail(c).cloned()))
        });

        Self {
            catalog,
            session,
            load_error: RwSignal::new(load_error),
            listing,
            detail,
        }
    }

    pub fn all_tags(&self) -> Vec<String> {
        self.catalog.with_value(|c| c.all_tags())
    }

    // ------------------------------------------------------------------------
    // Фильтры
    // ------------------------------------------------------------------------

    pub fn set_search(&self, search: String) {
        self.session.update(|s| s.set_search(search));
    }

    pub fn set_exclude_keywords(&self, keywords: String) {
        self.session.update(|s| s.set_exclude_keywords(keywords));
    }

    pub fn set_category(&self, label: &str) {
        log::debug!("category: {}", label);
        self.session.update(|s| s.set_category_label(label));
    }

    pub fn set_sales_status(&self, label: &str) {
        log::debug!("sales status: {}", label);
        self.session.update(|s| s.set_sales_status_label(label));
    }

    pub fn set_sort_order(&self, label: &str) {
        log::debug!("sort order: {}", label);
        self.session.update(|s| s.set_sort_order_label(label));
    }

    pub fn set_price_min(&self, input: &str) {
        self.session.update(|s| s.set_price_min_input(input));
    }

    pub fn set_price_max(&self, input: &str) {
        self.session.update(|s| s.set_price_max_input(input));
    }

    pub fn toggle_tag(&self, tag: &str) {
        log::debug!("toggle tag: {}", tag);
        self.session.update(|s| s.toggle_tag(tag));
    }

    pub fn clear_all(&self) {
        log::debug!("clear all filters");
        self.session.update(|s| s.clear_all());
    }

    // ------------------------------------------------------------------------
    // Экран
    // ------------------------------------------------------------------------

    pub fn open_detail(&self, id: ProductId) {
        log::debug!("open detail: {}", id);
        let catalog = self.catalog;
        let mut resolved = Ok(());
        self.session
            .update(|s| resolved = catalog.with_value(|c| s.open_detail(id, c)));
        if let Err(e) = resolved {
            log::warn!("detail view: {}", e);
        }
        if let Some(w) = web_sys::window() {
            w.scroll_to_with_x_and_y(0.0, 0.0);
        }
    }

    pub fn show_list(&self) {
        log::debug!("show list");
        self.session.update(|s| s.show_list());
    }

    pub fn is_detail(&self) -> bool {
        self.session.with(|s| s.view.is_detail())
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
