//! Fixture data written the first time a store is opened.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};
use rand::Rng;

use crate::models::{
    Account, ActiveSession, DemandSample, Report, ReportStatus, Reservation, ReservationStatus,
    Role, Workstation, WorkstationStatus,
};

pub const DEMO_PASSWORD: &str = "123456";
pub const WORKSTATION_COUNT: u32 = 20;
pub const WORKSTATION_SPECS: &str = "Intel i7, 16GB RAM, RTX 3060";

pub const DAYS: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

pub const FIRST_HOUR: u32 = 8;
pub const LAST_HOUR: u32 = 23;

const PEAK_HOURS: std::ops::RangeInclusive<u32> = 14..=22;
const PEAK_BASE: f64 = 70.0;
const OFF_PEAK_BASE: f64 = 40.0;
const WEEKEND_BONUS: f64 = 20.0;
const NOISE: f64 = 7.5;

fn account(id: &str, name: &str, email: &str, role: Role, now: DateTime<Utc>) -> Account {
    Account {
        id: id.to_string(),
        name: name.to_string(),
        email: email.to_string(),
        password: DEMO_PASSWORD.to_string(),
        role,
        created_at: now,
        is_banned: false,
    }
}

pub fn accounts(now: DateTime<Utc>) -> Vec<Account> {
    vec![
        account("1", "Admin Cyber", "admin@cybercafe.com", Role::Admin, now),
        account("2", "Juan Pérez", "juan@cybercafe.com", Role::Customer, now),
        account("3", "María Gómez", "maria@cybercafe.com", Role::Customer, now),
    ]
}

/// Every 7th unit (from the first) is occupied, every 11th under maintenance.
pub fn workstation_status(index: u32) -> WorkstationStatus {
    if index % 7 == 0 {
        WorkstationStatus::Occupied
    } else if index % 11 == 0 {
        WorkstationStatus::Maintenance
    } else {
        WorkstationStatus::Free
    }
}

pub fn workstations() -> Vec<Workstation> {
    (0..WORKSTATION_COUNT)
        .map(|i| Workstation {
            id: format!("pc-{}", i + 1),
            number: i + 1,
            status: workstation_status(i),
            location: format!("Zone {}", i / 5 + 1),
            specs: WORKSTATION_SPECS.to_string(),
        })
        .collect()
}

pub fn sessions(now: DateTime<Utc>) -> Vec<ActiveSession> {
    vec![
        ActiveSession {
            id: "sess-1".to_string(),
            account_id: "2".to_string(),
            account_name: "Juan Pérez".to_string(),
            workstation_id: "pc-3".to_string(),
            workstation_number: 3,
            start_time: now - Duration::minutes(45),
        },
        ActiveSession {
            id: "sess-2".to_string(),
            account_id: "3".to_string(),
            account_name: "María Gómez".to_string(),
            workstation_id: "pc-10".to_string(),
            workstation_number: 10,
            start_time: now - Duration::minutes(20),
        },
    ]
}

pub fn reservations() -> Vec<Reservation> {
    let start: NaiveDateTime = NaiveDate::from_ymd_opt(2025, 4, 5)
        .and_then(|d| d.and_hms_opt(18, 0, 0))
        .unwrap_or_default();

    vec![Reservation {
        id: "res-1".to_string(),
        account_id: "2".to_string(),
        workstation_id: "pc-5".to_string(),
        start_time: start,
        duration: 2,
        status: ReservationStatus::Active,
    }]
}

pub fn reports(now: DateTime<Utc>) -> Vec<Report> {
    vec![Report {
        id: "rep-1".to_string(),
        account_id: "2".to_string(),
        account_name: "Juan Pérez".to_string(),
        subject: "PC #3 keeps restarting".to_string(),
        workstation_number: Some("3".to_string()),
        description: "It shuts down and reboots every 10 minutes. Urgent.".to_string(),
        timestamp: now - Duration::hours(1),
        status: ReportStatus::Pending,
    }]
}

pub fn is_weekend(day: &str) -> bool {
    matches!(day, "Saturday" | "Sunday")
}

/// Expected utilization before noise.
pub fn base_usage(day: &str, hour: u32) -> f64 {
    let base = if PEAK_HOURS.contains(&hour) {
        PEAK_BASE
    } else {
        OFF_PEAK_BASE
    };

    if is_weekend(day) {
        base + WEEKEND_BONUS
    } else {
        base
    }
}

pub fn demand_table<R: Rng>(rng: &mut R) -> Vec<DemandSample> {
    DAYS.iter()
        .flat_map(|day| (FIRST_HOUR..=LAST_HOUR).map(move |hour| (*day, hour)))
        .map(|(day, hour)| {
            let variance = rng.gen_range(-NOISE..NOISE);
            let usage = (base_usage(day, hour) + variance).clamp(0.0, 100.0).round();

            DemandSample {
                hour,
                day: day.to_string(),
                predicted_usage: usage as u8,
            }
        })
        .collect()
}
