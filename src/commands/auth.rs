use chrono::Utc;
use log::{info, warn};

use crate::error::{StoreError, StoreResult};
use crate::models::{Account, AccountUpdate, CurrentAccount, RegisterAccount, Role};
use crate::store::{Collection, Store, CURRENT_ACCOUNT_KEY};

pub const MIN_PASSWORD_LEN: usize = 6;

fn require(value: &str, field: &'static str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::MissingField(field));
    }
    Ok(())
}

fn remember(store: &Store, account: &CurrentAccount) -> StoreResult<()> {
    let raw = serde_json::to_string(account)?;
    store.backend().set(CURRENT_ACCOUNT_KEY, &raw)
}

pub fn register(store: &Store, form: RegisterAccount) -> StoreResult<CurrentAccount> {
    require(&form.name, "name")?;
    require(&form.email, "email")?;
    require(&form.password, "password")?;

    if form.password != form.confirm_password {
        return Err(StoreError::PasswordMismatch);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(StoreError::PasswordTooShort {
            min: MIN_PASSWORD_LEN,
        });
    }

    store.initialize()?;
    let mut accounts: Vec<Account> = store.read_collection(Collection::Accounts)?;

    if accounts.iter().any(|a| a.email == form.email) {
        return Err(StoreError::DuplicateEmail);
    }

    let account = Account {
        id: uuid::Uuid::new_v4().to_string(),
        name: form.name,
        email: form.email,
        password: form.password,
        role: Role::Customer,
        created_at: Utc::now(),
        is_banned: false,
    };
    let current = CurrentAccount::from(&account);

    accounts.push(account);
    store.write_collection(Collection::Accounts, &accounts)?;
    remember(store, &current)?;

    info!("Registered account {}", current.id);
    Ok(current)
}

pub fn login(store: &Store, email: &str, password: &str) -> StoreResult<CurrentAccount> {
    store.initialize()?;
    let accounts: Vec<Account> = store.read_collection(Collection::Accounts)?;

    let account = accounts
        .iter()
        .find(|a| a.email == email && a.password == password)
        .ok_or(StoreError::InvalidCredentials)?;

    if account.is_banned {
        warn!("Rejected login for banned account {}", account.id);
        return Err(StoreError::AccountBanned);
    }

    let current = CurrentAccount::from(account);
    remember(store, &current)?;
    Ok(current)
}

pub fn logout(store: &Store) -> StoreResult<()> {
    store.backend().remove(CURRENT_ACCOUNT_KEY)
}

/// The cached login. A corrupt entry is dropped and reads as logged out.
pub fn current_account(store: &Store) -> StoreResult<Option<CurrentAccount>> {
    let Some(raw) = store.backend().get(CURRENT_ACCOUNT_KEY)? else {
        return Ok(None);
    };

    match serde_json::from_str(&raw) {
        Ok(account) => Ok(Some(account)),
        Err(e) => {
            warn!("Clearing malformed current account: {e}");
            store.backend().remove(CURRENT_ACCOUNT_KEY)?;
            Ok(None)
        }
    }
}

/// Edits the cached login only. The accounts collection keeps its old values.
pub fn update_current_account(
    store: &Store,
    updates: AccountUpdate,
) -> StoreResult<Option<CurrentAccount>> {
    let Some(mut current) = current_account(store)? else {
        return Ok(None);
    };

    if let Some(name) = updates.name {
        current.name = name;
    }
    if let Some(email) = updates.email {
        current.email = email;
    }

    remember(store, &current)?;
    Ok(Some(current))
}
