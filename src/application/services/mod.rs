//! Business logic services for the application layer.

pub mod click_service;
pub mod cosmetic_service;
pub mod profile_service;

pub use click_service::ClickService;
pub use cosmetic_service::CosmeticService;
pub use profile_service::ProfileService;
