use crate::error::StoreResult;
use crate::models::{StatusCounts, Workstation, WorkstationStatus};
use crate::store::Store;

pub fn get_workstations(store: &Store) -> StoreResult<Vec<Workstation>> {
    store.list_workstations()
}

/// Only free workstations can be booked.
pub fn get_reservable_workstations(store: &Store) -> StoreResult<Vec<Workstation>> {
    Ok(store
        .list_workstations()?
        .into_iter()
        .filter(|w| w.status == WorkstationStatus::Free)
        .collect())
}

pub fn update_workstation_status(
    store: &Store,
    id: &str,
    status: WorkstationStatus,
) -> StoreResult<()> {
    store.update_workstation_status(id, status)
}

pub fn status_counts(workstations: &[Workstation]) -> StatusCounts {
    workstations
        .iter()
        .fold(StatusCounts::default(), |mut counts, w| {
            match w.status {
                WorkstationStatus::Free => counts.free += 1,
                WorkstationStatus::Occupied => counts.occupied += 1,
                WorkstationStatus::Maintenance => counts.maintenance += 1,
            }
            counts
        })
}

pub fn get_status_counts(store: &Store) -> StoreResult<StatusCounts> {
    Ok(status_counts(&store.list_workstations()?))
}
