pub mod error;
pub mod images;
pub mod manifest;
pub mod registry;
