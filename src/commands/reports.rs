use chrono::Utc;
use log::info;

use crate::error::{StoreError, StoreResult};
use crate::models::{CreateReport, CurrentAccount, Report, ReportStatus};
use crate::store::{Collection, Store};

pub fn get_reports(store: &Store) -> StoreResult<Vec<Report>> {
    store.list_reports()
}

pub fn get_pending_reports(store: &Store) -> StoreResult<Vec<Report>> {
    Ok(store
        .list_reports()?
        .into_iter()
        .filter(|r| r.status == ReportStatus::Pending)
        .collect())
}

pub fn submit_report(
    store: &Store,
    author: &CurrentAccount,
    report: CreateReport,
) -> StoreResult<Report> {
    if report.subject.trim().is_empty() {
        return Err(StoreError::MissingField("subject"));
    }
    if report.description.trim().is_empty() {
        return Err(StoreError::MissingField("description"));
    }

    let workstation_number = report
        .workstation_number
        .map(|n| n.trim().to_string())
        .filter(|n| !n.is_empty());

    let created = Report {
        id: uuid::Uuid::new_v4().to_string(),
        account_id: author.id.clone(),
        account_name: author.name.clone(),
        subject: report.subject,
        workstation_number,
        description: report.description,
        timestamp: Utc::now(),
        status: ReportStatus::Pending,
    };

    store.initialize()?;
    let stored = created.clone();
    store.modify_collection(Collection::Reports, |all: &mut Vec<Report>| all.push(stored))?;

    info!("Report {} filed by {}", created.id, created.account_id);
    Ok(created)
}

pub fn resolve_report(store: &Store, id: &str) -> StoreResult<()> {
    store.resolve_report(id)
}
