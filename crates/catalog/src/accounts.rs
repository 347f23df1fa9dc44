//! Process-local user accounts and sessions.
//!
//! Passwords are kept as a salted SHA-256 digest and sessions as opaque
//! random tokens. Nothing is persisted; a restart forgets every account.

use std::collections::HashMap;
use std::fmt::Debug;

use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;
use uuid::Uuid;

use crate::error::{AccountError, CatalogResult, ValidationError};

/// Minimum password length, in characters.
pub const MIN_PASSWORD_CHARS: usize = 6;

/// Registration payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Registration {
    /// Creates a payload with all fields set.
    pub fn new(
        full_name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            full_name: Some(full_name.into()),
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Login payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            password: Some(password.into()),
        }
    }
}

/// Public view of an account. Never carries credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: u64,
    pub full_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// A logged-in session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub user: UserProfile,
}

struct Account {
    profile: UserProfile,
    salt: String,
    digest: [u8; 32],
}

#[derive(Default)]
struct Registry {
    accounts: Vec<Account>,
    sessions: HashMap<String, u64>,
}

/// In-memory account registry.
#[derive(Default)]
pub struct AccountRegistry {
    inner: RwLock<Registry>,
}

impl Debug for AccountRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.read();
        f.debug_struct("AccountRegistry")
            .field("accounts", &inner.accounts.len())
            .field("sessions", &inner.sessions.len())
            .finish()
    }
}

impl AccountRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new account.
    ///
    /// The email is trimmed and lower-cased before use.
    ///
    /// # Errors
    ///
    /// * `ValidationError::MissingRequiredField` - a field is missing or blank
    /// * `ValidationError::InvalidValue` - password shorter than six characters
    /// * `AccountError::AlreadyRegistered` - the email is taken
    pub fn register(&self, registration: Registration) -> CatalogResult<UserProfile> {
        let full_name = required("fullName", registration.full_name.as_deref())?.to_string();
        let email = normalize_email(required("email", registration.email.as_deref())?);
        let password = registration
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ValidationError::MissingRequiredField {
                field: "password".to_string(),
            })?;
        if password.chars().count() < MIN_PASSWORD_CHARS {
            return Err(ValidationError::InvalidValue {
                field: "password".to_string(),
                message: format!("must be at least {} characters", MIN_PASSWORD_CHARS),
            }
            .into());
        }

        let mut inner = self.inner.write();
        if inner.accounts.iter().any(|a| a.profile.email == email) {
            return Err(AccountError::AlreadyRegistered { email }.into());
        }

        let salt = Uuid::new_v4().to_string();
        let profile = UserProfile {
            id: inner.accounts.len() as u64 + 1,
            full_name,
            email,
            created_at: Utc::now(),
        };
        inner.accounts.push(Account {
            profile: profile.clone(),
            digest: digest(&salt, &password),
            salt,
        });

        debug!(user_id = profile.id, "Account registered");
        Ok(profile)
    }

    /// Checks credentials and opens a session.
    ///
    /// Each user holds at most one session; logging in again replaces the
    /// previous token.
    ///
    /// # Errors
    ///
    /// * `ValidationError::MissingRequiredField` - email or password missing
    /// * `AccountError::InvalidCredentials` - unknown email or wrong password
    pub fn login(&self, credentials: Credentials) -> CatalogResult<Session> {
        let email = normalize_email(required("email", credentials.email.as_deref())?);
        let password = credentials
            .password
            .filter(|p| !p.is_empty())
            .ok_or_else(|| ValidationError::MissingRequiredField {
                field: "password".to_string(),
            })?;

        let mut inner = self.inner.write();
        let profile = inner
            .accounts
            .iter()
            .find(|a| a.profile.email == email && a.digest == digest(&a.salt, &password))
            .map(|a| a.profile.clone())
            .ok_or(AccountError::InvalidCredentials)?;

        let token = URL_SAFE_NO_PAD.encode(Uuid::new_v4().as_bytes());
        inner.sessions.retain(|_, user_id| *user_id != profile.id);
        inner.sessions.insert(token.clone(), profile.id);

        debug!(user_id = profile.id, "Session opened");
        Ok(Session {
            token,
            user: profile,
        })
    }

    /// Resolves a session token to its user.
    ///
    /// # Errors
    ///
    /// * `AccountError::InvalidToken` - the token is unknown
    pub fn authenticate(&self, token: &str) -> CatalogResult<UserProfile> {
        let inner = self.inner.read();
        let user_id = inner
            .sessions
            .get(token)
            .ok_or(AccountError::InvalidToken)?;
        inner
            .accounts
            .iter()
            .find(|a| a.profile.id == *user_id)
            .map(|a| a.profile.clone())
            .ok_or_else(|| AccountError::InvalidToken.into())
    }

    /// Number of registered accounts.
    pub fn len(&self) -> usize {
        self.inner.read().accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn required<'a>(field: &str, value: Option<&'a str>) -> Result<&'a str, ValidationError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ValidationError::MissingRequiredField {
            field: field.to_string(),
        })
}

fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

fn digest(salt: &str, password: &str) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(salt.as_bytes());
    hasher.update(password.as_bytes());
    let mut out = [0u8; 32];
    out.copy_from_slice(&hasher.finalize());
    out
}
