pub mod board_plugin;
pub mod fetch_plugin;
