#![recursion_limit = "256"]
pub mod about;
pub mod contest_search;
pub mod hall_of_shame;
pub mod home;
pub mod not_found;
pub mod overall;
pub mod register;
pub mod report;
