pub mod errors;
pub mod multipart;
