use log::info;

use crate::error::{StoreError, StoreResult};
use crate::models::{AccountSummary, Role};
use crate::store::Store;

pub fn get_accounts(store: &Store) -> StoreResult<Vec<AccountSummary>> {
    store.list_accounts()
}

pub fn search_accounts<'a>(accounts: &'a [AccountSummary], term: &str) -> Vec<&'a AccountSummary> {
    let term = term.to_lowercase();
    accounts
        .iter()
        .filter(|a| a.name.to_lowercase().contains(&term) || a.email.to_lowercase().contains(&term))
        .collect()
}

/// Admins cannot change their own role.
pub fn change_role(store: &Store, actor_id: &str, target_id: &str, role: Role) -> StoreResult<()> {
    if actor_id == target_id {
        return Err(StoreError::SelfModification);
    }

    store.set_account_role(target_id, role)?;
    info!("Account {target_id} role set to {role:?} by {actor_id}");
    Ok(())
}

/// Admins cannot ban themselves.
pub fn ban(store: &Store, actor_id: &str, target_id: &str) -> StoreResult<()> {
    if actor_id == target_id {
        return Err(StoreError::SelfModification);
    }

    store.ban_account(target_id)?;
    info!("Account {target_id} banned by {actor_id}");
    Ok(())
}
