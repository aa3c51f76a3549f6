pub mod chart;
pub mod controls;
pub mod view;

pub use view::Forecast;
