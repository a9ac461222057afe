//! サーバーAPI

pub mod analyze;
