use contracts::enums::SalesStatus;
use leptos::prelude::*;

/// Badge component with different variants
#[component]
pub fn Badge(
    /// Badge variant: "primary" or "neutral" (default)
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Badge content
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("neutral") {
        "primary" => "badge--primary",
        _ => "badge--neutral",
    };

    view! {
        <span class=move || format!("badge {}", variant_class())>
            {children()}
        </span>
    }
}

/// Бейдж статуса продажи
#[component]
pub fn StatusBadge(status: SalesStatus) -> impl IntoView {
    let status_class = match status {
        SalesStatus::OnSale => "badge badge--status badge--status-on-sale",
        SalesStatus::SoldOut => "badge badge--status badge--status-sold-out",
    };

    view! {
        <span class=status_class>{status.label()}</span>
    }
}
