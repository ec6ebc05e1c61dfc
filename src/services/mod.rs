pub mod auth_service;
pub mod notification_service;
pub mod sync_service;
pub mod transaction_service;
