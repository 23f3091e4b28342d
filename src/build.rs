mod builder;
mod paths;
pub mod pipeline;
mod render;

pub use builder::{BuildResult, Builder};
pub use paths::base_path_from_config;
