//! UIコンポーネント

pub mod header;
pub mod history_list;
pub mod preview;
pub mod progress_bar;
pub mod result_panel;
pub mod settings_panel;
pub mod upload_area;
