pub mod announcements;
pub mod footer;
pub mod forms;
pub mod modal;
pub mod navbar;
pub mod pagination;
pub mod spinner;
pub mod table;
pub mod tabs;
pub mod title;
pub mod upcoming;
