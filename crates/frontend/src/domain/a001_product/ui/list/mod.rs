mod card;

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::FilterTag;
use crate::shared::components::ui::Select;
use card::ProductCard;
use contracts::enums::SortOrder;
use contracts::shared::config::EMPTY_LISTING_MESSAGE;
use leptos::prelude::*;

fn sort_options() -> Vec<(String, String)> {
    SortOrder::all()
        .into_iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect()
}

#[component]
#[allow(non_snake_case)]
pub fn ProductList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let session = ctx.session;
    let listing = ctx.listing;
    let selected_tags = move || session.with(|s| s.selected_tags.iter().map(str::to_string).collect::<Vec<_>>());
    let search = Signal::derive(move || session.with(|s| s.search.clone()));

    view! {
        <div class="product-list">
            <div class="product-list__toolbar">
                <div class="product-list__tags">
                    <For
                        each=selected_tags
                        key=|tag| tag.clone()
                        children=move |tag: String| {
                            let tag_for_remove = tag.clone();
                            view! {
                                <FilterTag
                                    label=tag
                                    on_remove=Callback::new(move |_| ctx.toggle_tag(&tag_for_remove))
                                />
                            }
                        }
                    />
                </div>
                <span class="product-list__count">
                    {move || format!("{}件", listing.with(|items| items.len()))}
                </span>
                <Select
                    value=Signal::derive(move || session.with(|s| s.sort_order.label().to_string()))
                    options=Signal::derive(sort_options)
                    on_change=Callback::new(move |val: String| ctx.set_sort_order(&val))
                />
            </div>

            <Show
                when=move || listing.with(|items| !items.is_empty())
                fallback=|| view! {
                    <div class="product-list__empty">{EMPTY_LISTING_MESSAGE}</div>
                }
            >
                <div class="product-grid">
                    <For
                        each=move || listing.get()
                        key=|product| product.id
                        children=move |product| view! { <ProductCard product=product search=search /> }
                    />
                </div>
            </Show>
        </div>
    }
}
