pub mod loader;
pub mod resources;
