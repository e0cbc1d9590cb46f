pub mod accounts;
pub mod auth;
pub mod demand;
pub mod orders;
pub mod reports;
pub mod reservations;
pub mod sessions;
pub mod workstations;
