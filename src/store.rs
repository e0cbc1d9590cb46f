//! Typed access to the persisted collections.
//!
//! Each collection lives under one key as a JSON array. Mutations read the
//! whole array, transform it and write it back; there is no locking across
//! that sequence, so two handles on the same backend race and the last write
//! wins. Edits that name an id which is not present leave the collection
//! untouched and return `Ok(())`.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use rand::Rng;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::config::StoreConfig;
use crate::db::{Database, KeyValueStore, MemoryStore};
use crate::error::StoreResult;
use crate::models::{
    Account, AccountSummary, ActiveSession, DemandSample, Order, Report, ReportStatus, Role,
    SessionView, Workstation, WorkstationStatus,
};
use crate::seed;

/// Set once seeding has completed.
pub const INITIALIZED_KEY: &str = "initialized";
/// Public projection of whoever is logged in.
pub const CURRENT_ACCOUNT_KEY: &str = "current_account";

/// Display name used when a session's account no longer exists.
pub const UNKNOWN_ACCOUNT: &str = "unknown";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Accounts,
    Workstations,
    Sessions,
    Reservations,
    Reports,
    Orders,
    DemandPredictions,
}

impl Collection {
    pub const ALL: [Collection; 7] = [
        Collection::Accounts,
        Collection::Workstations,
        Collection::Sessions,
        Collection::Reservations,
        Collection::Reports,
        Collection::Orders,
        Collection::DemandPredictions,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Collection::Accounts => "accounts",
            Collection::Workstations => "workstations",
            Collection::Sessions => "sessions",
            Collection::Reservations => "reservations",
            Collection::Reports => "reports",
            Collection::Orders => "orders",
            Collection::DemandPredictions => "demand_predictions",
        }
    }
}

pub struct Store {
    backend: Box<dyn KeyValueStore>,
}

impl Store {
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// Opens the SQLite file named by `config` and seeds it if asked to.
    pub fn open(config: &StoreConfig) -> StoreResult<Self> {
        let db = if config.is_in_memory() {
            Database::open_in_memory()?
        } else {
            Database::open(&config.db_path)?
        };
        info!("Opened store at {}", config.db_path.display());

        let store = Self::new(db);
        if config.seed {
            store.initialize()?;
        }
        Ok(store)
    }

    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    pub fn backend(&self) -> &dyn KeyValueStore {
        self.backend.as_ref()
    }

    pub fn read_raw(&self, key: &str) -> StoreResult<Option<String>> {
        self.backend.get(key)
    }

    /// Missing keys and unparseable JSON both read as an empty collection.
    pub fn read_collection<T: DeserializeOwned>(&self, collection: Collection) -> StoreResult<Vec<T>> {
        let Some(raw) = self.backend.get(collection.key())? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(e) => {
                warn!("Discarding malformed {} data: {e}", collection.key());
                Ok(Vec::new())
            }
        }
    }

    pub fn write_collection<T: Serialize>(&self, collection: Collection, items: &[T]) -> StoreResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(collection.key(), &raw)
    }

    /// Read, apply `f`, write back. Returns whatever `f` returns.
    pub fn modify_collection<T, R, F>(&self, collection: Collection, f: F) -> StoreResult<R>
    where
        T: Serialize + DeserializeOwned,
        F: FnOnce(&mut Vec<T>) -> R,
    {
        let mut items = self.read_collection(collection)?;
        let result = f(&mut items);
        self.write_collection(collection, &items)?;
        Ok(result)
    }

    // ===== SEEDING =====

    pub fn is_initialized(&self) -> StoreResult<bool> {
        Ok(self.backend.get(INITIALIZED_KEY)?.is_some())
    }

    pub fn initialize(&self) -> StoreResult<()> {
        self.initialize_with(&mut rand::thread_rng(), Utc::now())
    }

    /// Seeds every collection unless the sentinel is already present.
    ///
    /// The sentinel alone decides: clearing a collection afterwards does not
    /// bring its fixtures back.
    pub fn initialize_with<R: Rng>(&self, rng: &mut R, now: DateTime<Utc>) -> StoreResult<()> {
        if self.is_initialized()? {
            return Ok(());
        }

        let workstations = seed::workstations();
        self.write_collection(Collection::Accounts, &seed::accounts(now))?;
        self.write_collection(Collection::Workstations, &workstations)?;
        self.write_collection(Collection::Sessions, &seed::sessions(now))?;
        self.write_collection(Collection::Reservations, &seed::reservations())?;
        self.write_collection(Collection::Reports, &seed::reports(now))?;
        self.write_collection::<Order>(Collection::Orders, &[])?;
        self.write_collection(Collection::DemandPredictions, &seed::demand_table(rng))?;

        self.backend.set(INITIALIZED_KEY, "true")?;
        info!("Seeded store with {} workstations", workstations.len());

        Ok(())
    }

    // ===== WORKSTATIONS =====

    pub fn list_workstations(&self) -> StoreResult<Vec<Workstation>> {
        self.initialize()?;
        self.read_collection(Collection::Workstations)
    }

    pub fn update_workstation_status(&self, id: &str, status: WorkstationStatus) -> StoreResult<()> {
        let mut workstations: Vec<Workstation> = self.list_workstations()?;

        let Some(workstation) = workstations.iter_mut().find(|w| w.id == id) else {
            debug!("No workstation {id}; status left unchanged");
            return Ok(());
        };
        workstation.status = status;

        self.write_collection(Collection::Workstations, &workstations)
    }

    // ===== SESSIONS =====

    pub fn active_sessions(&self, now: DateTime<Utc>) -> StoreResult<Vec<SessionView>> {
        self.initialize()?;
        let sessions: Vec<ActiveSession> = self.read_collection(Collection::Sessions)?;
        let accounts: Vec<Account> = self.read_collection(Collection::Accounts)?;

        let views = sessions
            .into_iter()
            .map(|mut session| {
                session.account_name = accounts
                    .iter()
                    .find(|a| a.id == session.account_id)
                    .map(|a| a.name.clone())
                    .unwrap_or_else(|| UNKNOWN_ACCOUNT.to_string());

                let elapsed_minutes = (now - session.start_time).num_seconds().div_euclid(60);
                SessionView {
                    session,
                    elapsed_minutes,
                }
            })
            .collect();

        Ok(views)
    }

    pub fn end_session(&self, id: &str) -> StoreResult<()> {
        let mut sessions: Vec<ActiveSession> = self.read_collection(Collection::Sessions)?;
        let before = sessions.len();
        sessions.retain(|s| s.id != id);

        if sessions.len() == before {
            debug!("No session {id} to end");
            return Ok(());
        }

        self.write_collection(Collection::Sessions, &sessions)
    }

    // ===== ACCOUNTS =====

    pub fn list_accounts(&self) -> StoreResult<Vec<AccountSummary>> {
        self.initialize()?;
        let accounts: Vec<Account> = self.read_collection(Collection::Accounts)?;

        Ok(accounts
            .into_iter()
            .map(|a| AccountSummary {
                id: a.id,
                name: a.name,
                email: a.email,
                role: a.role,
                created_at: a.created_at.format("%Y-%m-%d").to_string(),
                is_banned: a.is_banned,
            })
            .collect())
    }

    pub fn ban_account(&self, id: &str) -> StoreResult<()> {
        self.update_account(id, |account| account.is_banned = true)
    }

    /// No guard against an admin editing their own role; callers enforce that.
    pub fn set_account_role(&self, id: &str, role: Role) -> StoreResult<()> {
        self.update_account(id, |account| account.role = role)
    }

    fn update_account<F: FnOnce(&mut Account)>(&self, id: &str, f: F) -> StoreResult<()> {
        let mut accounts: Vec<Account> = self.read_collection(Collection::Accounts)?;

        let Some(account) = accounts.iter_mut().find(|a| a.id == id) else {
            debug!("No account {id}; left unchanged");
            return Ok(());
        };
        f(account);

        self.write_collection(Collection::Accounts, &accounts)
    }

    // ===== DEMAND =====

    /// The table written at seed time. Never regenerated afterwards.
    pub fn demand_predictions(&self) -> StoreResult<Vec<DemandSample>> {
        self.initialize()?;
        self.read_collection(Collection::DemandPredictions)
    }

    // ===== REPORTS =====

    pub fn list_reports(&self) -> StoreResult<Vec<Report>> {
        self.initialize()?;
        self.read_collection(Collection::Reports)
    }

    pub fn resolve_report(&self, id: &str) -> StoreResult<()> {
        let mut reports = self.list_reports()?;

        let Some(report) = reports.iter_mut().find(|r| r.id == id) else {
            debug!("No report {id} to resolve");
            return Ok(());
        };
        report.status = ReportStatus::Resolved;

        self.write_collection(Collection::Reports, &reports)
    }
}
