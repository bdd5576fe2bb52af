use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Каталог и состояние сессии доступны всему дереву через контекст
    provide_context(AppGlobalContext::new());

    view! {
        <Shell />
    }
}
