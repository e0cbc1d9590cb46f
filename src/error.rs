use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("{0} is required")]
    MissingField(&'static str),

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Password must be at least {min} characters")]
    PasswordTooShort { min: usize },

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Account is banned")]
    AccountBanned,

    #[error("Invalid reservation duration: {0} hours")]
    InvalidDuration(u32),

    #[error("Invalid reservation start: {0}")]
    InvalidStartTime(String),

    #[error("Workstation {0} is not available")]
    WorkstationUnavailable(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Cannot change your own account")]
    SelfModification,

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store lock poisoned")]
    LockPoisoned,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl StoreError {
    /// Validation failures are shown to the user and leave the store untouched.
    pub fn is_validation(&self) -> bool {
        !matches!(
            self,
            Self::Storage(_) | Self::Serialization(_) | Self::LockPoisoned | Self::Config(_)
        )
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
