use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::TagChip;
use crate::shared::components::ui::StatusBadge;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::config::THUMBNAIL_SIZE;
use contracts::shared::number_format::format_yen;
use leptos::prelude::*;

/// Карточка товара в сетке; клик открывает страницу товара
#[component]
pub fn ProductCard(product: Product, #[prop(into)] search: Signal<String>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let id = product.id;
    let (width, height) = THUMBNAIL_SIZE;
    let image = product.image_or_placeholder(width, height);
    let name = product.name.clone();

    view! {
        <div class="product-card" data-product-id=id.to_string() on:click=move |_| ctx.open_detail(id)>
            <img class="product-card__image" src=image alt=product.name.clone() />
            <div class="product-card__body">
                <h3 class="product-card__name">
                    {move || search.with(|q| highlight_matches(&name, q))}
                </h3>
                <p class="product-card__price">{format_yen(product.price)}</p>
                <StatusBadge status=product.status />
                <div class="product-card__tags">
                    {product
                        .tags
                        .into_iter()
                        .map(|tag| view! { <TagChip tag=tag /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
