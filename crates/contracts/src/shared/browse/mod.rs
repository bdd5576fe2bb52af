//! Состояние и логика просмотра каталога: фильтры, сортировка, режим экрана

pub mod error;
pub mod filter;
pub mod pipeline;
pub mod selected_tags;
pub mod session;
pub mod view_state;

pub use error::BrowseError;
pub use filter::{FilterConfig, FilterCriteria};
pub use selected_tags::SelectedTags;
pub use session::BrowseSession;
pub use view_state::{ViewMode, ViewState};
