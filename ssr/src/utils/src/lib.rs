pub mod api;
pub mod forms;
pub mod health;
pub mod pagination;
pub mod profile;
pub mod ratings;
pub mod standings;
pub mod types;
pub mod upcoming;
