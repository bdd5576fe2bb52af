use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::TagChip;
use crate::shared::components::ui::{Button, StatusBadge};
use crate::shared::icons::icon;
use contracts::domain::a001_product::aggregate::Product;
use contracts::shared::config::DETAIL_IMAGE_SIZE;
use contracts::shared::number_format::format_yen;
use leptos::prelude::*;

#[component]
pub fn ProductDetails() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let detail = ctx.detail;

    view! {
        <div class="details-container product-details">
            {move || match detail.get() {
                Ok(product) => view! { <ProductDetailsBody product=product /> }.into_any(),
                Err(e) => view! {
                    <div class="details-not-found">{e.user_message()}</div>
                }.into_any(),
            }}
        </div>
    }
}

#[component]
fn ProductDetailsBody(product: Product) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (width, height) = DETAIL_IMAGE_SIZE;
    let image = product.image_or_placeholder(width, height);

    view! {
        <Button class="details-back" on_click=Callback::new(move |_| ctx.show_list())>
            {icon("arrow-left")}
            "戻る"
        </Button>
        <h2 class="details-title">{product.name.clone()}</h2>
        <img class="details-image" src=image alt=product.name.clone() />
        <p class="details-price">{format_yen(product.price)}</p>
        <StatusBadge status=product.status />
        <div class="details-tags">
            <h3>"商品タグ:"</h3>
            <div class="tag-list">
                {product
                    .tags
                    .into_iter()
                    .map(|tag| view! { <TagChip tag=tag /> })
                    .collect_view()}
            </div>
        </div>
    }
}
