pub mod preview;
pub mod summary;
pub mod upload_zone;
pub mod view;

pub use view::Analyzer;
