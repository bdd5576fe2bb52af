pub mod filter_panel;
pub mod ui;
