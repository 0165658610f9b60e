#[cfg(target_arch = "wasm32")]
pub mod browser_store;
pub mod file_store;
pub mod memory_store;
pub mod post_repository;
pub mod preference_repository;
pub mod session_repository;
pub mod substrate;
