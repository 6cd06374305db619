use bevy::prelude::*;
use tokio::sync::oneshot;
use tokio::sync::oneshot::error::TryRecvError;

use crate::api::client::{ApiError, PromoApi};
use crate::catalog::components::{BoardPhase, BrandCatalog, PromotionCatalog};
use crate::catalog::models::{Brand, Promotion};
use crate::config::tuning::Tuning;

/// Persisted tokio runtime so the fetch task outlives the startup system.
#[derive(Resource)]
pub struct TokioRuntime(#[allow(dead_code)] pub tokio::runtime::Runtime);

/// Receiver for the in-flight fetch. Removed once the result lands.
#[derive(Resource)]
struct PendingFetch(oneshot::Receiver<FetchOutcome>);

type FetchOutcome = Result<(Vec<Brand>, Vec<Promotion>), ApiError>;

pub struct FetchPlugin;

impl Plugin for FetchPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<BoardPhase>();
        app.init_resource::<BrandCatalog>();
        app.init_resource::<PromotionCatalog>();
        app.add_systems(Startup, begin_fetch);
        app.add_systems(Update, poll_fetch.run_if(in_state(BoardPhase::Loading)));
    }
}

/// Kick off the one fetch of the app's lifetime. The task only writes to
/// its channel; all world mutation happens in `poll_fetch` on the main
/// schedule.
fn begin_fetch(world: &mut World) {
    let api = PromoApi::new(world.resource::<Tuning>().api_base.clone());
    info!("Fetching brands and promotions from {}", api.base());

    let rt = tokio::runtime::Runtime::new().expect("Failed to create tokio runtime");
    let (tx, rx) = oneshot::channel();
    rt.spawn(async move {
        let _ = tx.send(api.fetch_all().await);
    });

    world.insert_resource(PendingFetch(rx));
    // Keep runtime alive while the fetch task runs
    world.insert_resource(TokioRuntime(rt));
}

fn poll_fetch(
    mut commands: Commands,
    pending: Option<ResMut<PendingFetch>>,
    mut brands: ResMut<BrandCatalog>,
    mut promotions: ResMut<PromotionCatalog>,
    mut next_state: ResMut<NextState<BoardPhase>>,
) {
    let Some(mut pending) = pending else {
        return;
    };

    match pending.0.try_recv() {
        Ok(Ok((fetched_brands, fetched_promotions))) => {
            info!(
                "Loaded {} brands and {} promotions",
                fetched_brands.len(),
                fetched_promotions.len()
            );
            brands.0 = fetched_brands;
            promotions.0 = fetched_promotions;
            next_state.set(BoardPhase::Ready);
            commands.remove_resource::<PendingFetch>();
        }
        Ok(Err(e)) => {
            error!("Failed to fetch promotional data: {e}");
            next_state.set(BoardPhase::Failed);
            commands.remove_resource::<PendingFetch>();
        }
        Err(TryRecvError::Empty) => {}
        Err(TryRecvError::Closed) => {
            error!("Fetch task ended without delivering a result");
            next_state.set(BoardPhase::Failed);
            commands.remove_resource::<PendingFetch>();
        }
    }
}
