pub mod config;
pub mod display;
pub mod duration;
pub mod entry;
pub mod menu;
