/// Утилиты для списков: поиск и подсветка совпадений
use crate::shared::icons::icon;
use leptos::prelude::*;

/// Байтовые диапазоны совпадений `filter` в `text` без учёта регистра.
///
/// Если нижний регистр меняет длину строки, индексы нельзя перенести
/// обратно на исходный текст, тогда совпадений нет.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    if filter.is_empty() {
        return Vec::new();
    }

    let text_lower = text.to_lowercase();
    let filter_lower = filter.to_lowercase();
    if text_lower.len() != text.len() {
        return Vec::new();
    }

    let mut ranges = Vec::new();
    let mut last_pos = 0;
    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let start = last_pos + pos;
        let end = start + filter_lower.len();
        if !text.is_char_boundary(start) || !text.is_char_boundary(end) {
            return Vec::new();
        }
        ranges.push((start, end));
        last_pos = end;
    }
    ranges
}

/// Подсветка совпадений в тексте (case-insensitive)
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;
    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any());
        last_pos = end;
    }
    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Поле поиска с кнопкой очистки.
/// Каждое изменение сразу уходит в `on_change`, список пересчитывается синхронно.
#[component]
pub fn SearchInput(
    /// Текущее значение
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let is_filter_active = move || !value.get().is_empty();

    view! {
        <div class="search-input">
            <span class="search-input__icon">{icon("search")}</span>
            <input
                type="search"
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
            <Show when=is_filter_active>
                <button
                    type="button"
                    class="search-input__clear"
                    title="クリア"
                    on:click=move |_| on_change.run(String::new())
                >
                    {icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_ranges_ascii_case_insensitive() {
        assert_eq!(match_ranges("Nintendo Switch 本体", "switch"), vec![(9, 15)]);
        assert_eq!(match_ranges("abcabc", "B"), vec![(1, 2), (4, 5)]);
    }

    #[test]
    fn test_match_ranges_japanese() {
        let text = "マリオカート8";
        let ranges = match_ranges(text, "カート");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "カート");
    }

    #[test]
    fn test_match_ranges_empty_or_missing() {
        assert!(match_ranges("Switch Lite", "").is_empty());
        assert!(match_ranges("Switch Lite", "zelda").is_empty());
    }
}
