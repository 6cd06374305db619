mod api;
mod catalog;
mod config;
mod plugins;

use bevy::prelude::*;

use config::tuning::Tuning;
use plugins::{board_plugin::BoardPlugin, fetch_plugin::FetchPlugin};

fn main() {
    let tuning = Tuning::load_or_default();

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Flash Sales".into(),
                resolution: (tuning.window_width, tuning.window_height).into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(tuning)
        .add_plugins(FetchPlugin)
        .add_plugins(BoardPlugin)
        .run();
}
