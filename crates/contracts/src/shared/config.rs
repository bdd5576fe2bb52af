//! Константы приложения. Внешней конфигурации (env, файлы) нет.

pub const APP_TITLE: &str = "EC App";

/// Границы цены по умолчанию (включительно)
pub const DEFAULT_PRICE_MIN: i64 = 0;
pub const DEFAULT_PRICE_MAX: i64 = 100_000;

pub const PLACEHOLDER_BASE_PATH: &str = "/api/placeholder";

/// Размер миниатюры в карточке списка
pub const THUMBNAIL_SIZE: (u32, u32) = (150, 150);
/// Размер картинки на странице товара
pub const DETAIL_IMAGE_SIZE: (u32, u32) = (512, 256);

pub const CURRENCY_PREFIX: &str = "¥";

/// Текст пустого списка товаров
pub const EMPTY_LISTING_MESSAGE: &str = "該当する商品がありません。";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::Catalog;
    use crate::shared::browse::BrowseSession;

    #[test]
    fn test_empty_listing_message_matches_shop_wording() {
        let catalog = Catalog::seed().unwrap();
        let mut s = BrowseSession::new();
        s.set_search("zzz".to_string());
        assert!(s.visible_products(&catalog).is_empty());
        assert_eq!(EMPTY_LISTING_MESSAGE, "該当する商品がありません。");
    }
}
