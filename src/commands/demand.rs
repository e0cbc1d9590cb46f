use crate::error::StoreResult;
use crate::models::{DaySummary, DemandLevel, DemandSample, WeeklySummary};
use crate::seed::DAYS;
use crate::store::Store;

pub const LOW_DEMAND_BELOW: u8 = 40;
pub const HIGH_DEMAND_FROM: u8 = 70;

pub fn get_demand_predictions(store: &Store) -> StoreResult<Vec<DemandSample>> {
    store.demand_predictions()
}

pub fn demand_level(usage: u8) -> DemandLevel {
    if usage < LOW_DEMAND_BELOW {
        DemandLevel::Low
    } else if usage < HIGH_DEMAND_FROM {
        DemandLevel::Medium
    } else {
        DemandLevel::High
    }
}

pub fn samples_for_day<'a>(samples: &'a [DemandSample], day: &str) -> Vec<&'a DemandSample> {
    samples.iter().filter(|s| s.day == day).collect()
}

fn rounded_mean<'a>(values: impl Iterator<Item = &'a DemandSample>) -> u32 {
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), s| {
        (sum + u32::from(s.predicted_usage), count + 1)
    });
    if count == 0 {
        return 0;
    }
    (f64::from(sum) / f64::from(count)).round() as u32
}

pub fn day_summary(samples: &[DemandSample], day: &str) -> DaySummary {
    let day_samples = samples_for_day(samples, day);

    DaySummary {
        peak: day_samples.iter().map(|s| s.predicted_usage).max().unwrap_or(0),
        average: rounded_mean(day_samples.into_iter()),
    }
}

/// Low-demand hours are averaged over the week, giving hours per day.
pub fn weekly_summary(samples: &[DemandSample]) -> WeeklySummary {
    let low = samples
        .iter()
        .filter(|s| s.predicted_usage < LOW_DEMAND_BELOW)
        .count();

    WeeklySummary {
        peak: samples.iter().map(|s| s.predicted_usage).max().unwrap_or(0),
        low_demand_hours: (low as f64 / DAYS.len() as f64).round() as u32,
        average: rounded_mean(samples.iter()),
    }
}
