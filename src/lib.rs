pub mod commands;
pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod seed;
pub mod store;


use chrono::Utc;
use commands::{demand, sessions, workstations};
use config::StoreConfig;
use log::info;

pub use db::{Database, KeyValueStore, MemoryStore};
pub use error::{StoreError, StoreResult};
pub use store::{Collection, Store};

/// Opens the configured store, seeds it if needed and logs what it holds.
pub fn run(config: &StoreConfig) -> StoreResult<Store> {
    let store = Store::open(config)?;

    let counts = workstations::get_status_counts(&store)?;
    info!(
        "Workstations: {} free, {} occupied, {} in maintenance",
        counts.free, counts.occupied, counts.maintenance
    );

    let active = store.active_sessions(Utc::now())?;
    let stats = sessions::session_stats(&active);
    info!(
        "Active sessions: {} on {} workstations, {} min average",
        stats.total, stats.unique_workstations, stats.average_minutes
    );

    let forecast = demand::weekly_summary(&store.demand_predictions()?);
    info!(
        "Demand forecast: peak {}%, average {}%",
        forecast.peak, forecast.average
    );

    Ok(store)
}
