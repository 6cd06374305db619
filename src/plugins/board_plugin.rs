use bevy::ecs::hierarchy::ChildSpawnerCommands;
use bevy::prelude::*;

use crate::catalog::components::{
    BoardPhase, BrandCatalog, PromotionCatalog, SelectedBrand, LOAD_ERROR_MESSAGE,
};
use crate::catalog::filter::filter_promotions;
use crate::catalog::models::{display_date, Promotion};

// ── Marker components ────────────────────────────────────────────────

#[derive(Component)]
struct LoadingRoot;

#[derive(Component)]
struct FailedRoot;

#[derive(Component)]
struct BoardRoot;

/// Container the promotion cards are (re)spawned under.
#[derive(Component)]
struct CardGrid;

#[derive(Component)]
struct PromoCard;

#[derive(Component)]
enum FilterButton {
    Brand(String),
    All,
}

#[derive(Component)]
struct FilterHighlight;

// ── Colors ───────────────────────────────────────────────────────────

const COLOR_BG: Color = Color::srgba(0.08, 0.08, 0.12, 1.0);
const COLOR_BTN: Color = Color::srgba(0.18, 0.20, 0.28, 1.0);
const COLOR_BTN_HOVER: Color = Color::srgba(0.28, 0.32, 0.42, 1.0);
const COLOR_BTN_PRESS: Color = Color::srgba(0.12, 0.14, 0.20, 1.0);
const COLOR_SELECTED: Color = Color::srgba(0.0, 0.45, 0.85, 1.0);
const COLOR_SELECTED_HOVER: Color = Color::srgba(0.10, 0.55, 0.95, 1.0);
const COLOR_TEXT: Color = Color::WHITE;
const COLOR_TEXT_DIM: Color = Color::srgba(0.5, 0.5, 0.5, 1.0);
const COLOR_ACCENT: Color = Color::srgba(0.2, 0.7, 1.0, 1.0);
const COLOR_CARD: Color = Color::srgba(0.12, 0.14, 0.20, 1.0);
const COLOR_ERROR: Color = Color::srgba(0.95, 0.4, 0.4, 1.0);

// ── Plugin ───────────────────────────────────────────────────────────

pub struct BoardPlugin;

impl Plugin for BoardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SelectedBrand>();

        app.add_systems(Startup, setup_camera);

        // Loading screen
        app.add_systems(OnEnter(BoardPhase::Loading), spawn_loading_screen);
        app.add_systems(OnExit(BoardPhase::Loading), despawn::<LoadingRoot>);

        // Error screen
        app.add_systems(OnEnter(BoardPhase::Failed), spawn_error_screen);
        app.add_systems(OnExit(BoardPhase::Failed), despawn::<FailedRoot>);

        // Board
        app.add_systems(OnEnter(BoardPhase::Ready), spawn_board);
        app.add_systems(OnExit(BoardPhase::Ready), despawn::<BoardRoot>);
        app.add_systems(
            Update,
            (filter_button_system, update_filter_button_visuals)
                .chain()
                .run_if(in_state(BoardPhase::Ready)),
        );
        // in_state first so the change tick is only consumed on board frames
        app.add_systems(
            Update,
            rebuild_cards
                .run_if(in_state(BoardPhase::Ready).and(resource_changed::<SelectedBrand>)),
        );
    }
}

// ── Generic despawn ──────────────────────────────────────────────────

fn despawn<T: Component>(mut commands: Commands, query: Query<Entity, With<T>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

// ═══════════════════════════════════════════════════════════════════════
// LOADING / ERROR SCREENS
// ═══════════════════════════════════════════════════════════════════════

fn spawn_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            LoadingRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Loading..."),
                TextFont { font_size: 32.0, ..default() },
                TextColor(COLOR_TEXT_DIM),
            ));
        });
}

fn spawn_error_screen(mut commands: Commands) {
    commands
        .spawn((
            FailedRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                row_gap: Val::Px(12.0),
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Error"),
                TextFont { font_size: 40.0, ..default() },
                TextColor(COLOR_ERROR),
            ));
            parent.spawn((
                Text::new(LOAD_ERROR_MESSAGE),
                TextFont { font_size: 22.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
        });
}

// ═══════════════════════════════════════════════════════════════════════
// BOARD
// ═══════════════════════════════════════════════════════════════════════

fn spawn_board(mut commands: Commands, brands: Res<BrandCatalog>, selected: Res<SelectedBrand>) {
    commands
        .spawn((
            BoardRoot,
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                flex_direction: FlexDirection::Column,
                justify_content: JustifyContent::FlexStart,
                align_items: AlignItems::Center,
                padding: UiRect::all(Val::Px(30.0)),
                row_gap: Val::Px(20.0),
                ..default()
            },
            BackgroundColor(COLOR_BG),
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("Exclusive Flash Sales: Up to 60% Off Today!"),
                TextFont { font_size: 36.0, ..default() },
                TextColor(COLOR_ACCENT),
            ));

            // Filter row: one button per brand plus "All Brands"
            root.spawn(Node {
                flex_direction: FlexDirection::Row,
                flex_wrap: FlexWrap::Wrap,
                justify_content: JustifyContent::Center,
                column_gap: Val::Px(12.0),
                row_gap: Val::Px(12.0),
                ..default()
            })
            .with_children(|row| {
                for brand in &brands.0 {
                    spawn_filter_btn(
                        row,
                        &brand.brand_name,
                        FilterButton::Brand(brand.brand_name.clone()),
                        selected.0 == brand.brand_name,
                    );
                }
                spawn_filter_btn(row, "All Brands", FilterButton::All, selected.0.is_empty());
            });

            // Card grid, populated by rebuild_cards
            root.spawn((
                CardGrid,
                Node {
                    flex_direction: FlexDirection::Row,
                    flex_wrap: FlexWrap::Wrap,
                    justify_content: JustifyContent::Center,
                    column_gap: Val::Px(16.0),
                    row_gap: Val::Px(16.0),
                    margin: UiRect::top(Val::Px(10.0)),
                    ..default()
                },
            ));
        });
}

fn filter_button_system(
    mut q: Query<(&Interaction, &FilterButton), Changed<Interaction>>,
    mut selected: ResMut<SelectedBrand>,
) {
    for (interaction, button) in &mut q {
        if *interaction != Interaction::Pressed {
            continue;
        }
        match button {
            FilterButton::Brand(name) => {
                selected.0 = name.clone();
            }
            FilterButton::All => {
                selected.0.clear();
            }
        }
    }
}

fn update_filter_button_visuals(
    selected: Res<SelectedBrand>,
    mut q: Query<(&FilterButton, &Interaction, &mut BackgroundColor), With<FilterHighlight>>,
) {
    for (button, interaction, mut bg) in &mut q {
        let is_selected = match button {
            FilterButton::Brand(name) => selected.0 == *name,
            FilterButton::All => selected.0.is_empty(),
        };
        *bg = BackgroundColor(match (is_selected, interaction) {
            (true, Interaction::Hovered) => COLOR_SELECTED_HOVER,
            (true, _) => COLOR_SELECTED,
            (false, Interaction::Hovered) => COLOR_BTN_HOVER,
            (false, Interaction::Pressed) => COLOR_BTN_PRESS,
            (false, Interaction::None) => COLOR_BTN,
        });
    }
}

/// Re-derive the card grid from the promotion list and the active filter.
/// Runs on entering the board and whenever the selection changes.
fn rebuild_cards(
    mut commands: Commands,
    selected: Res<SelectedBrand>,
    promotions: Res<PromotionCatalog>,
    grid_q: Query<Entity, With<CardGrid>>,
    cards: Query<Entity, With<PromoCard>>,
) {
    let Some(grid) = grid_q.iter().next() else {
        return;
    };
    for card in &cards {
        commands.entity(card).despawn();
    }
    commands.entity(grid).with_children(|grid| {
        for promo in filter_promotions(&promotions.0, &selected.0) {
            spawn_promo_card(grid, promo);
        }
    });
}

fn spawn_promo_card(parent: &mut ChildSpawnerCommands, promo: &Promotion) {
    parent
        .spawn((
            PromoCard,
            Node {
                width: Val::Px(220.0),
                flex_direction: FlexDirection::Column,
                align_items: AlignItems::FlexStart,
                padding: UiRect::all(Val::Px(16.0)),
                row_gap: Val::Px(6.0),
                border_radius: BorderRadius::all(Val::Px(10.0)),
                ..default()
            },
            BackgroundColor(COLOR_CARD),
        ))
        .with_children(|card| {
            card.spawn((
                Text::new(&promo.brand),
                TextFont { font_size: 22.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
            card.spawn((
                Text::new(&promo.title),
                TextFont { font_size: 16.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
            card.spawn((
                Text::new(&promo.kind),
                TextFont { font_size: 14.0, ..default() },
                TextColor(COLOR_ACCENT),
            ));
            card.spawn((
                Text::new(format!("Start: {}", display_date(&promo.start_date))),
                TextFont { font_size: 13.0, ..default() },
                TextColor(COLOR_TEXT_DIM),
            ));
            card.spawn((
                Text::new(format!("End: {}", display_date(&promo.end_date))),
                TextFont { font_size: 13.0, ..default() },
                TextColor(COLOR_TEXT_DIM),
            ));
        });
}

/// Filter-row button with selected highlight.
fn spawn_filter_btn(
    parent: &mut ChildSpawnerCommands,
    label: &str,
    marker: FilterButton,
    selected: bool,
) {
    let bg = if selected { COLOR_SELECTED } else { COLOR_BTN };
    parent
        .spawn((
            marker,
            FilterHighlight,
            Button,
            Node {
                min_width: Val::Px(120.0),
                height: Val::Px(40.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                padding: UiRect::horizontal(Val::Px(14.0)),
                border_radius: BorderRadius::all(Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(bg),
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont { font_size: 18.0, ..default() },
                TextColor(COLOR_TEXT),
            ));
        });
}
