pub mod api_utils;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod lifetime;
pub mod notifications;
pub mod number_format;
