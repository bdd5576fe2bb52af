use serde::{Deserialize, Serialize};

/// Категория товара.
///
/// Отдельного поля категории у товара нет: принадлежность к категории
/// определяется наличием одноимённого тега.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    #[default]
    #[serde(rename = "すべて")]
    All,
    #[serde(rename = "本体")]
    Console,
    #[serde(rename = "ゲームソフト")]
    Software,
    #[serde(rename = "周辺機器")]
    Accessory,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::All => "すべて",
            Category::Console => "本体",
            Category::Software => "ゲームソフト",
            Category::Accessory => "周辺機器",
        }
    }

    /// Тег, который должен быть у товара; `None` для "すべて"
    pub fn tag(&self) -> Option<&'static str> {
        match self {
            Category::All => None,
            other => Some(other.label()),
        }
    }

    pub fn all() -> Vec<Category> {
        vec![
            Category::All,
            Category::Console,
            Category::Software,
            Category::Accessory,
        ]
    }

    /// Неизвестная подпись трактуется как "すべて"
    pub fn from_label(label: &str) -> Self {
        Self::all()
            .into_iter()
            .find(|c| c.label() == label)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tag_is_label_except_all() {
        assert_eq!(Category::All.tag(), None);
        assert_eq!(Category::Console.tag(), Some("本体"));
        assert_eq!(Category::Accessory.tag(), Some("周辺機器"));
    }

    #[test]
    fn test_from_label() {
        assert_eq!(Category::from_label("ゲームソフト"), Category::Software);
        assert_eq!(Category::from_label(""), Category::All);
    }
}
