pub mod auth_service;
pub mod editor;
pub mod feed;
pub mod post_service;
pub mod store;
