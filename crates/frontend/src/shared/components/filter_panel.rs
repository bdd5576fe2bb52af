use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// FilterTag component - выбранный тег с кнопкой удаления
#[component]
pub fn FilterTag(
    /// Tag label
    #[prop(into)]
    label: String,

    /// Callback when remove is clicked
    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="filter-tag"
            on:click=move |e| {
                e.stop_propagation();
                on_remove.run(());
            }
        >
            <span>{label}</span>
            <svg
                width="12"
                height="12"
                viewBox="0 0 24 24"
                fill="none"
                stroke="currentColor"
                stroke-width="2"
                stroke-linecap="round"
                stroke-linejoin="round"
                class="filter-tag__remove"
            >
                <line x1="18" y1="6" x2="6" y2="18"></line>
                <line x1="6" y1="6" x2="18" y2="18"></line>
            </svg>
        </button>
    }
}

/// Тег товара; клик добавляет его в фильтр или убирает из фильтра
#[component]
pub fn TagChip(#[prop(into)] tag: String) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let tag_for_check = tag.clone();
    let tag_for_toggle = tag.clone();
    let is_selected = move || ctx.session.with(|s| s.selected_tags.contains(&tag_for_check));

    view! {
        <span
            class=move || {
                if is_selected() {
                    "tag-chip tag-chip--selected"
                } else {
                    "tag-chip"
                }
            }
            on:click=move |e| {
                // карточка товара под чипом не должна открываться
                e.stop_propagation();
                ctx.toggle_tag(&tag_for_toggle);
            }
        >
            {tag}
        </span>
    }
}
