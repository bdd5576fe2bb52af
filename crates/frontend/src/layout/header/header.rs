use crate::layout::global_context::AppGlobalContext;
use crate::shared::list_utils::SearchInput;
use contracts::shared::config::APP_TITLE;
use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let search = Signal::derive(move || ctx.session.with(|s| s.search.clone()));

    view! {
        <header data-zone="header" class="header">
            <div class="header__content">
                // Заголовок всегда возвращает к списку
                <h1 class="header__title" on:click=move |_| ctx.show_list()>{APP_TITLE}</h1>
                <SearchInput
                    value=search
                    on_change=Callback::new(move |val: String| ctx.set_search(val))
                    placeholder="商品を検索".to_string()
                />
            </div>
        </header>
    }
}
