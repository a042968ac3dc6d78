pub mod alert;
pub mod api_utils;
pub mod browser;
pub mod components;
pub mod icons;
pub mod theme;
