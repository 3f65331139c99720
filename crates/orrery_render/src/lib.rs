pub mod bodies;
pub mod chart;
pub mod hud;
pub mod input;
pub mod plugin;
pub mod stars;
pub mod view;

pub use plugin::OrreryRenderPlugin;
