pub mod error;
pub mod post;
pub mod theme;
pub mod user;
