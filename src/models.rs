use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Admin,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
    pub is_banned: bool,
}

/// Admin listing shape: no password, creation date only.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountSummary {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: String,
    pub is_banned: bool,
}

/// Public projection of the logged-in account, cached under `current_account`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CurrentAccount {
    pub id: String,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&Account> for CurrentAccount {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id.clone(),
            email: account.email.clone(),
            name: account.name.clone(),
            role: account.role,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct AccountUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct RegisterAccount {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum WorkstationStatus {
    Free,
    Occupied,
    Maintenance,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Workstation {
    pub id: String,
    pub number: u32,
    pub status: WorkstationStatus,
    pub location: String,
    pub specs: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub free: usize,
    pub occupied: usize,
    pub maintenance: usize,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ActiveSession {
    pub id: String,
    pub account_id: String,
    pub account_name: String,
    pub workstation_id: String,
    pub workstation_number: u32,
    pub start_time: DateTime<Utc>,
}

/// A session as seen at a given instant.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    #[serde(flatten)]
    pub session: ActiveSession,
    pub elapsed_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total: usize,
    pub unique_workstations: usize,
    pub average_minutes: i64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReservationStatus {
    Active,
    Completed,
    Cancelled,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    pub id: String,
    pub account_id: String,
    pub workstation_id: String,
    pub start_time: NaiveDateTime,
    pub duration: u32,
    pub status: ReservationStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateReservation {
    pub workstation_id: String,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM`
    pub time: String,
    pub duration: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReservationWithWorkstation {
    pub reservation: Reservation,
    pub workstation_number: Option<u32>,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Pending,
    Resolved,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub id: String,
    pub account_id: String,
    pub account_name: String,
    pub subject: String,
    pub workstation_number: Option<String>,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub status: ReportStatus,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct CreateReport {
    pub subject: String,
    pub workstation_number: Option<String>,
    pub description: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DemandSample {
    pub hour: u32,
    pub day: String,
    pub predicted_usage: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DemandLevel {
    Low,
    Medium,
    High,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DaySummary {
    pub peak: u8,
    pub average: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WeeklySummary {
    pub peak: u8,
    pub low_demand_hours: u32,
    pub average: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Drinks,
    Snacks,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct Product {
    pub id: &'static str,
    pub name: &'static str,
    pub price: f64,
    pub category: ProductCategory,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Order {
    pub cart: BTreeMap<String, u32>,
    pub total: f64,
    pub date: DateTime<Utc>,
}
