//! Боковая панель фильтров

use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::filter_panel::TagChip;
use crate::shared::components::ui::{Badge, Button, Input, RadioGroup, Select};
use crate::shared::icons::icon;
use contracts::enums::{Category, StatusFilter};
use leptos::prelude::*;

fn status_options() -> Vec<(String, String)> {
    StatusFilter::all()
        .into_iter()
        .map(|s| (s.label().to_string(), s.label().to_string()))
        .collect()
}

fn category_options() -> Vec<(String, String)> {
    Category::all()
        .into_iter()
        .map(|c| (c.label().to_string(), c.label().to_string()))
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let session = ctx.session;
    let active_count = move || session.with(|s| s.active_filter_count());
    let all_tags = ctx.all_tags();

    view! {
        <div class="sidebar">
            <Button
                variant="ghost"
                size="sm"
                on_click=Callback::new(move |_| ctx.clear_all())
            >
                "クリア"
            </Button>

            <h2 class="sidebar__title">
                {icon("filter")}
                <span>"絞り込み"</span>
                {move || {
                    let count = active_count();
                    (count > 0).then(|| view! { <Badge variant="primary">{count}</Badge> })
                }}
            </h2>

            <RadioGroup
                label="販売状況"
                name="sales-status".to_string()
                value=Signal::derive(move || session.with(|s| s.filters.sales_status.label().to_string()))
                options=Signal::derive(status_options)
                on_change=Callback::new(move |val: String| ctx.set_sales_status(&val))
            />

            <Input
                label="除外キーワード"
                placeholder="~を含まない"
                value=Signal::derive(move || session.with(|s| s.filters.exclude_keywords.clone()))
                on_input=Callback::new(move |val: String| ctx.set_exclude_keywords(val))
            />

            <Select
                label="カテゴリー"
                value=Signal::derive(move || session.with(|s| s.filters.category.label().to_string()))
                options=Signal::derive(category_options)
                on_change=Callback::new(move |val: String| ctx.set_category(&val))
            />

            <div class="form__group">
                <label class="form__label">"価格"</label>
                <div class="price-range">
                    <Input
                        input_type="number"
                        placeholder="0"
                        value=Signal::derive(move || session.with(|s| s.price_min_input()))
                        on_input=Callback::new(move |val: String| ctx.set_price_min(&val))
                    />
                    <span>"-"</span>
                    <Input
                        input_type="number"
                        placeholder="100000"
                        value=Signal::derive(move || session.with(|s| s.price_max_input()))
                        on_input=Callback::new(move |val: String| ctx.set_price_max(&val))
                    />
                </div>
            </div>

            <div class="form__group">
                <label class="form__label">"タグ"</label>
                <div class="tag-list">
                    {all_tags
                        .into_iter()
                        .map(|tag| view! { <TagChip tag=tag /> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
