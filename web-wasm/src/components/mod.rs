//! UIコンポーネント

pub mod header;
pub mod loading_overlay;
pub mod notifications;
pub mod preview_panel;
pub mod result_card;
pub mod result_page;
pub mod result_parts;
pub mod upload_area;
