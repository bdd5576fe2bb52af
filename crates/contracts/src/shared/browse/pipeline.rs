use super::filter::FilterCriteria;
use crate::domain::a001_product::aggregate::Product;
use crate::enums::SortOrder;

/// Отфильтровать и отсортировать товары.
///
/// Сортировка стабильная: при равных ключах сохраняется исходный порядок.
pub fn derive_listing<'a, I>(products: I, criteria: &FilterCriteria<'_>, sort: SortOrder) -> Vec<&'a Product>
where
    I: IntoIterator<Item = &'a Product>,
{
    let mut result: Vec<&Product> = products
        .into_iter()
        .filter(|p| criteria.matches(p))
        .collect();
    result.sort_by(|a, b| sort.compare(a, b));
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_product::catalog::Catalog;
    use crate::shared::browse::filter::FilterConfig;
    use crate::shared::browse::selected_tags::SelectedTags;

    fn ids(products: &[&Product]) -> Vec<u32> {
        products.iter().map(|p| p.id.value()).collect()
    }

    #[test]
    fn test_recommended_keeps_catalog_order() {
        let catalog = Catalog::seed().unwrap();
        let filters = FilterConfig::default();
        let tags = SelectedTags::new();
        let criteria = FilterCriteria::new(&filters, "", &tags);

        let listing = derive_listing(catalog.products(), &criteria, SortOrder::Recommended);
        assert_eq!(ids(&listing), vec![1, 2, 3, 4, 5]);

        // любая перестановка входа сохраняется как есть
        let reversed: Vec<&Product> = catalog.products().iter().rev().collect();
        let listing = derive_listing(reversed, &criteria, SortOrder::Recommended);
        assert_eq!(ids(&listing), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn test_price_sort_is_stable_for_ties() {
        let catalog = Catalog::seed().unwrap();
        let filters = FilterConfig::default();
        let tags = SelectedTags::new();
        let criteria = FilterCriteria::new(&filters, "", &tags);

        let asc = derive_listing(catalog.products(), &criteria, SortOrder::PriceAsc);
        assert_eq!(ids(&asc), vec![3, 5, 2, 4, 1]);

        let desc = derive_listing(catalog.products(), &criteria, SortOrder::PriceDesc);
        assert_eq!(ids(&desc), vec![1, 4, 2, 3, 5]);
    }

    #[test]
    fn test_asc_and_desc_are_reverses_for_distinct_prices() {
        let catalog = Catalog::seed().unwrap();
        // без id 5: все цены различны
        let filters = FilterConfig::default();
        let tags = SelectedTags::new();
        let criteria = FilterCriteria::new(&filters, "", &tags);
        let distinct: Vec<&Product> = catalog.products().iter().filter(|p| p.id.value() != 5).collect();

        let asc = derive_listing(distinct.iter().copied(), &criteria, SortOrder::PriceAsc);
        let mut desc = derive_listing(distinct.iter().copied(), &criteria, SortOrder::PriceDesc);
        desc.reverse();
        assert_eq!(ids(&asc), ids(&desc));
        assert!(asc.windows(2).all(|w| w[0].price <= w[1].price));
    }
}
