pub mod catalog;
pub mod forecast;
pub mod health;
pub mod upload;
