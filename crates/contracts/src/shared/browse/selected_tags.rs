use serde::{Deserialize, Serialize};

/// Выбранные теги. Порядок нужен только для отображения чипов.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedTags(Vec<String>);

impl SelectedTags {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет тег, если его нет, иначе убирает
    pub fn toggle(&mut self, tag: &str) {
        if let Some(pos) = self.0.iter().position(|t| t == tag) {
            self.0.remove(pos);
        } else {
            self.0.push(tag.to_string());
        }
    }

    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(items: &[&str]) -> SelectedTags {
        let mut s = SelectedTags::new();
        for t in items {
            s.toggle(t);
        }
        s
    }

    #[test]
    fn test_toggle_appends_in_insertion_order() {
        let s = tags(&["新品", "本体", "ゲーム機"]);
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["新品", "本体", "ゲーム機"]);
    }

    #[test]
    fn test_toggle_removes_selected_tag() {
        let mut s = tags(&["新品", "本体"]);
        s.toggle("新品");
        assert_eq!(s.iter().collect::<Vec<_>>(), vec!["本体"]);
        assert!(!s.contains("新品"));
    }

    #[test]
    fn test_toggle_is_involution() {
        let starts = [tags(&[]), tags(&["本体"]), tags(&["新品", "ゲームソフト"])];
        for start in starts {
            for tag in ["本体", "新品", "周辺機器"] {
                let mut s = start.clone();
                s.toggle(tag);
                s.toggle(tag);
                assert_eq!(
                    s.iter().collect::<std::collections::BTreeSet<_>>(),
                    start.iter().collect::<std::collections::BTreeSet<_>>(),
                    "tag {tag}"
                );
            }
        }
    }
}
