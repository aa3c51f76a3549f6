pub mod stats;
pub mod view;

pub use view::Dashboard;
