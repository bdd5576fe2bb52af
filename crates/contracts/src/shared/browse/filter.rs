use super::selected_tags::SelectedTags;
use crate::domain::a001_product::aggregate::Product;
use crate::enums::{Category, StatusFilter};
use crate::shared::config::{DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use serde::{Deserialize, Serialize};

/// Фильтры боковой панели
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Исключить товары, в названии которых есть эта строка; пусто = без исключения
    pub exclude_keywords: String,
    pub category: Category,
    /// Границы цены хранятся как введены: отрицательная или огромная
    /// граница честно сужает выборку
    pub price_min: i64,
    pub price_max: i64,
    pub sales_status: StatusFilter,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            exclude_keywords: String::new(),
            category: Category::All,
            price_min: DEFAULT_PRICE_MIN,
            price_max: DEFAULT_PRICE_MAX,
            sales_status: StatusFilter::All,
        }
    }
}

impl FilterConfig {
    /// Количество полей, отличающихся от нейтрального значения (для бейджа)
    pub fn active_count(&self) -> usize {
        [
            !self.exclude_keywords.is_empty(),
            self.category != Category::All,
            self.price_min != DEFAULT_PRICE_MIN,
            self.price_max != DEFAULT_PRICE_MAX,
            self.sales_status != StatusFilter::All,
        ]
        .iter()
        .filter(|active| **active)
        .count()
    }
}

/// Разбор значения поля цены.
///
/// Только пустая строка даёт `default`. Дробное значение обрезается до целого,
/// выходящее за пределы `i64` насыщается. Нечисловой текст (в `type="number"`
/// браузер такой не отдаёт) тоже даёт `default`.
pub fn parse_price_input(input: &str, default: i64) -> i64 {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return default;
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return value;
    }
    match trimmed.parse::<f64>() {
        // `as` насыщает: 1e30 -> i64::MAX, -1e30 -> i64::MIN
        Ok(value) if !value.is_nan() => value.trunc() as i64,
        _ => default,
    }
}

/// Текст поля цены: пусто, если значение совпадает со значением по умолчанию
pub fn price_input_text(value: i64, default: i64) -> String {
    if value == default {
        String::new()
    } else {
        value.to_string()
    }
}

// ============================================================================
// Predicate
// ============================================================================

/// Всё, от чего зависит включение товара в список
#[derive(Debug, Clone, Copy)]
pub struct FilterCriteria<'a> {
    pub filters: &'a FilterConfig,
    pub search: &'a str,
    pub selected_tags: &'a SelectedTags,
}

impl<'a> FilterCriteria<'a> {
    pub fn new(filters: &'a FilterConfig, search: &'a str, selected_tags: &'a SelectedTags) -> Self {
        Self {
            filters,
            search,
            selected_tags,
        }
    }

    /// Товар проходит, только если выполнены все условия
    pub fn matches(&self, product: &Product) -> bool {
        self.matches_search(product)
            && self.matches_tags(product)
            && self.passes_exclusion(product)
            && self.matches_category(product)
            && self.matches_price(product)
            && self.matches_status(product)
    }

    /// Результаты отдельных условий в каноническом порядке
    pub fn clauses(&self, product: &Product) -> [bool; 6] {
        [
            self.matches_search(product),
            self.matches_tags(product),
            self.passes_exclusion(product),
            self.matches_category(product),
            self.matches_price(product),
            self.matches_status(product),
        ]
    }

    fn matches_search(&self, product: &Product) -> bool {
        self.search.is_empty() || contains_ignore_case(&product.name, self.search)
    }

    fn matches_tags(&self, product: &Product) -> bool {
        self.selected_tags.iter().all(|tag| product.has_tag(tag))
    }

    fn passes_exclusion(&self, product: &Product) -> bool {
        let exclude = &self.filters.exclude_keywords;
        exclude.is_empty() || !contains_ignore_case(&product.name, exclude)
    }

    fn matches_category(&self, product: &Product) -> bool {
        self.filters
            .category
            .tag()
            .map_or(true, |tag| product.has_tag(tag))
    }

    fn matches_price(&self, product: &Product) -> bool {
        (self.filters.price_min..=self.filters.price_max).contains(&i64::from(product.price))
    }

    fn matches_status(&self, product: &Product) -> bool {
        self.filters.sales_status.accepts(product.status)
    }
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
