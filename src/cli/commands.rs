pub mod analyze;
pub mod dashboard;
pub mod forecast;
pub mod init_config;
pub mod serve;

pub use analyze::analyze;
pub use dashboard::dashboard;
pub use forecast::forecast;
pub use init_config::init_config;
pub use serve::serve;
