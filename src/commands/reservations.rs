use chrono::NaiveDateTime;
use log::{debug, info};

use crate::error::{StoreError, StoreResult};
use crate::models::{
    CreateReservation, CurrentAccount, Reservation, ReservationStatus,
    ReservationWithWorkstation, Workstation, WorkstationStatus,
};
use crate::store::{Collection, Store};

pub const DURATIONS: [u32; 6] = [1, 2, 3, 4, 6, 8];

pub fn create_reservation(
    store: &Store,
    account: &CurrentAccount,
    reservation: CreateReservation,
) -> StoreResult<Reservation> {
    if reservation.workstation_id.trim().is_empty() {
        return Err(StoreError::MissingField("workstation"));
    }
    if reservation.date.trim().is_empty() {
        return Err(StoreError::MissingField("date"));
    }
    if reservation.time.trim().is_empty() {
        return Err(StoreError::MissingField("time"));
    }
    if !DURATIONS.contains(&reservation.duration) {
        return Err(StoreError::InvalidDuration(reservation.duration));
    }

    let raw_start = format!("{}T{}:00", reservation.date.trim(), reservation.time.trim());
    let start_time = NaiveDateTime::parse_from_str(&raw_start, "%Y-%m-%dT%H:%M:%S")
        .map_err(|_| StoreError::InvalidStartTime(raw_start.clone()))?;

    let workstations = store.list_workstations()?;
    let bookable = workstations
        .iter()
        .any(|w| w.id == reservation.workstation_id && w.status == WorkstationStatus::Free);
    if !bookable {
        return Err(StoreError::WorkstationUnavailable(reservation.workstation_id));
    }

    let created = Reservation {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: account.id.clone(),
        workstation_id: reservation.workstation_id,
        start_time,
        duration: reservation.duration,
        status: ReservationStatus::Active,
    };

    let stored = created.clone();
    store.modify_collection(Collection::Reservations, |all: &mut Vec<Reservation>| {
        all.push(stored)
    })?;

    info!(
        "Account {} reserved {} at {}",
        created.account_id, created.workstation_id, created.start_time
    );
    Ok(created)
}

pub fn get_reservations_for_account(
    store: &Store,
    account_id: &str,
) -> StoreResult<Vec<ReservationWithWorkstation>> {
    store.initialize()?;
    let reservations: Vec<Reservation> = store.read_collection(Collection::Reservations)?;
    let workstations: Vec<Workstation> = store.read_collection(Collection::Workstations)?;

    Ok(reservations
        .into_iter()
        .filter(|r| r.account_id == account_id)
        .map(|reservation| {
            let workstation_number = workstations
                .iter()
                .find(|w| w.id == reservation.workstation_id)
                .map(|w| w.number);
            ReservationWithWorkstation {
                reservation,
                workstation_number,
            }
        })
        .collect())
}

/// Cancels only reservations owned by `account_id`; anything else is left as is.
pub fn cancel_reservation(store: &Store, account_id: &str, reservation_id: &str) -> StoreResult<()> {
    let mut reservations: Vec<Reservation> = store.read_collection(Collection::Reservations)?;

    let Some(reservation) = reservations
        .iter_mut()
        .find(|r| r.id == reservation_id && r.account_id == account_id)
    else {
        debug!("No reservation {reservation_id} for account {account_id}");
        return Ok(());
    };
    reservation.status = ReservationStatus::Cancelled;

    store.write_collection(Collection::Reservations, &reservations)
}
