pub mod app;
pub mod error;
pub mod materialize;
pub mod paths;
pub mod record;
pub mod render;
