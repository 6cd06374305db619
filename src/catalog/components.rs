use bevy::prelude::*;

use super::models::{Brand, Promotion};

/// Lifecycle of the initial data fetch. `Ready` and `Failed` are terminal;
/// only restarting the app re-runs the load.
#[derive(States, Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum BoardPhase {
    #[default]
    Loading,
    Failed,
    Ready,
}

/// Message shown on the failed screen. Error detail goes to the log only.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to fetch data. Please try again later.";

/// Brands as fetched, empty until the load completes.
#[derive(Resource, Default)]
pub struct BrandCatalog(pub Vec<Brand>);

/// Promotions as fetched, empty until the load completes.
#[derive(Resource, Default)]
pub struct PromotionCatalog(pub Vec<Promotion>);

/// Currently selected brand name; empty string shows all brands.
#[derive(Resource, Default)]
pub struct SelectedBrand(pub String);
