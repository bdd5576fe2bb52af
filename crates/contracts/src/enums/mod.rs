pub mod category;
pub mod sales_status;
pub mod sort_order;

pub use category::Category;
pub use sales_status::{SalesStatus, StatusFilter};
pub use sort_order::SortOrder;
