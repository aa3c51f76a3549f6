pub mod analyzer;
pub mod dashboard;
pub mod forecast;
pub mod layout;
