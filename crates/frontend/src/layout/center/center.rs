use crate::domain::a001_product::ui::details::ProductDetails;
use crate::domain::a001_product::ui::list::ProductList;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Список или карточка товара, в зависимости от режима экрана
#[component]
pub fn Center() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="center">
            {move || ctx.load_error.get().map(|e| view! {
                <div class="error">{format!("カタログを読み込めませんでした: {}", e)}</div>
            })}
            <Show
                when=move || ctx.is_detail()
                fallback=|| view! { <ProductList /> }
            >
                <ProductDetails />
            </Show>
        </div>
    }
}
