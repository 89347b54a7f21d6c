pub mod camera;
pub mod canvas;
pub mod plugin;
pub mod ui;
