//! Session store.
//!
//! Single source of truth for authentication state, shared with the whole
//! UI tree through Leptos context. The store is a mock: login and signup
//! validate their inputs, wait a fixed simulated-network delay and then
//! accept, without any backend. The resulting profile is persisted to
//! LocalStorage so the session survives reloads until an explicit logout.

use crate::web::LocalStorage;
use crate::web::sleep;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// LocalStorage key holding the serialized profile. Absence means logged out.
const STORAGE_USER_KEY: &str = "soma-user";

/// Fixed simulated network latency for login/signup.
const MOCK_AUTH_DELAY_MS: u32 = 1000;

/// Profile of the signed-in visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u32,
    pub name: String,
    pub email: String,
}

/// Rejection reasons for login/signup form input.
///
/// The mock accepts any well-formed credentials, so these are the only
/// failure paths until real authentication exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    /// Email does not look like `local@domain.tld`.
    InvalidEmail,
    /// A required field was left blank.
    EmptyField(&'static str),
}

impl std::fmt::Display for AuthError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthError::InvalidEmail => write!(f, "Please enter a valid email address"),
            AuthError::EmptyField(field) => write!(f, "Please fill in your {field}"),
        }
    }
}

/// Session context.
///
/// Authenticated if and only if a profile is present; there is no separate
/// flag that could drift out of sync.
#[derive(Clone, Copy)]
pub struct SessionContext {
    /// Profile of the signed-in visitor, `None` when logged out.
    pub profile: RwSignal<Option<UserProfile>>,
    /// Derived authentication flag, for the route guard and navigation.
    pub is_authenticated: Signal<bool>,
}

impl SessionContext {
    /// Creates an empty (logged-out) session context.
    pub fn new() -> Self {
        let profile = RwSignal::new(None::<UserProfile>);
        let is_authenticated = Signal::derive(move || profile.get().is_some());
        Self {
            profile,
            is_authenticated,
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Fetches the session context.
///
/// Panics when called outside the provider; that signals an integration
/// error, not a recoverable runtime condition.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext should be provided")
}

/// Restores a persisted session at startup.
///
/// A missing entry leaves the session logged out. A malformed entry must
/// never crash startup: it is discarded and the stale key removed.
pub fn init_session(ctx: &SessionContext) {
    let Some(raw) = LocalStorage::get(STORAGE_USER_KEY) else {
        return;
    };
    match parse_stored_profile(&raw) {
        Some(profile) => ctx.profile.set(Some(profile)),
        None => {
            crate::web::console_warn("[Session] Discarding malformed persisted session.");
            LocalStorage::delete(STORAGE_USER_KEY);
        }
    }
}

/// Signs in with the supplied credentials.
///
/// Mock semantics: any well-formed email and non-empty password is accepted
/// after a fixed delay; the profile name is seeded from the local part of
/// the email. On success the profile is persisted and the session flips to
/// authenticated.
pub async fn login(ctx: &SessionContext, email: String, password: String) -> Result<(), AuthError> {
    sleep(MOCK_AUTH_DELAY_MS).await;
    let profile = login_profile(&email, &password)?;
    persist_and_set(ctx, profile);
    Ok(())
}

/// Creates an account with the supplied details.
///
/// Same mock pattern as [`login`], with the profile name taken from the
/// supplied display name.
pub async fn signup(
    ctx: &SessionContext,
    name: String,
    email: String,
    password: String,
) -> Result<(), AuthError> {
    sleep(MOCK_AUTH_DELAY_MS).await;
    let profile = signup_profile(&name, &email, &password)?;
    persist_and_set(ctx, profile);
    Ok(())
}

/// Signs out: clears the in-memory session and the persisted entry.
pub fn logout(ctx: &SessionContext) {
    LocalStorage::delete(STORAGE_USER_KEY);
    ctx.profile.set(None);
}

fn persist_and_set(ctx: &SessionContext, profile: UserProfile) {
    if let Ok(json) = serde_json::to_string(&profile) {
        LocalStorage::set(STORAGE_USER_KEY, &json);
    }
    ctx.profile.set(Some(profile));
}

// ============================================================================
// Pure core (no DOM, unit-tested natively)
// ============================================================================

/// Parses a persisted session record; `None` when malformed.
fn parse_stored_profile(raw: &str) -> Option<UserProfile> {
    serde_json::from_str(raw).ok()
}

/// Minimal `local@domain.tld` shape check.
fn is_well_formed_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

fn login_profile(email: &str, password: &str) -> Result<UserProfile, AuthError> {
    if !is_well_formed_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(AuthError::EmptyField("password"));
    }
    // No backend: seed the display name from the email local part.
    let name = email.split('@').next().unwrap_or(email).to_string();
    Ok(UserProfile {
        id: 1,
        name,
        email: email.to_string(),
    })
}

fn signup_profile(name: &str, email: &str, password: &str) -> Result<UserProfile, AuthError> {
    if name.trim().is_empty() {
        return Err(AuthError::EmptyField("name"));
    }
    if !is_well_formed_email(email) {
        return Err(AuthError::InvalidEmail);
    }
    if password.is_empty() {
        return Err(AuthError::EmptyField("password"));
    }
    Ok(UserProfile {
        id: 1,
        name: name.trim().to_string(),
        email: email.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn well_formed_emails_are_accepted() {
        assert!(is_well_formed_email("farmer@soma.earth"));
        assert!(is_well_formed_email("a.b+c@fields.example.org"));
    }

    #[test]
    fn malformed_emails_are_rejected() {
        assert!(!is_well_formed_email(""));
        assert!(!is_well_formed_email("plainaddress"));
        assert!(!is_well_formed_email("@no-local.example"));
        assert!(!is_well_formed_email("no-domain@"));
        assert!(!is_well_formed_email("no-tld@host"));
        assert!(!is_well_formed_email("dot-at-end@host."));
        assert!(!is_well_formed_email("white space@farm.example"));
    }

    #[test]
    fn login_seeds_name_from_email_local_part() {
        let profile = login_profile("greta@farm.example", "hunter2").unwrap();
        assert_eq!(profile.name, "greta");
        assert_eq!(profile.email, "greta@farm.example");
    }

    #[test]
    fn login_rejects_malformed_email() {
        assert_eq!(
            login_profile("not-an-email", "hunter2"),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            login_profile("no-tld@host", "hunter2"),
            Err(AuthError::InvalidEmail)
        );
        assert_eq!(
            login_profile("spaced out@farm.example", "hunter2"),
            Err(AuthError::InvalidEmail)
        );
    }

    #[test]
    fn login_rejects_empty_password() {
        assert_eq!(
            login_profile("greta@farm.example", ""),
            Err(AuthError::EmptyField("password"))
        );
    }

    #[test]
    fn signup_uses_supplied_name() {
        let profile = signup_profile("Greta Fields", "greta@farm.example", "hunter2").unwrap();
        assert_eq!(profile.name, "Greta Fields");
    }

    #[test]
    fn signup_rejects_blank_name() {
        assert_eq!(
            signup_profile("   ", "greta@farm.example", "hunter2"),
            Err(AuthError::EmptyField("name"))
        );
    }

    #[test]
    fn stored_profile_round_trips() {
        let profile = login_profile("greta@farm.example", "hunter2").unwrap();
        let json = serde_json::to_string(&profile).unwrap();
        assert_eq!(parse_stored_profile(&json), Some(profile));
    }

    #[test]
    fn corrupted_store_entry_parses_to_none() {
        assert_eq!(parse_stored_profile("not json"), None);
        assert_eq!(parse_stored_profile("{\"id\":\"oops\"}"), None);
        assert_eq!(parse_stored_profile(""), None);
    }

    // The store-level tests run against the thread-local storage backend;
    // each test thread gets its own map, so no cross-test cleanup is needed.

    // The Owner is returned so it outlives the signals created under it.
    fn session_ctx() -> (Owner, SessionContext) {
        let owner = Owner::new();
        owner.set();
        let ctx = SessionContext::new();
        (owner, ctx)
    }

    #[test]
    fn login_then_logout_returns_to_initial_state() {
        let (_owner, ctx) = session_ctx();
        assert!(!ctx.is_authenticated.get_untracked());

        futures::executor::block_on(login(
            &ctx,
            "greta@farm.example".to_string(),
            "hunter2".to_string(),
        ))
        .unwrap();
        assert!(ctx.is_authenticated.get_untracked());
        assert_eq!(
            ctx.profile.get_untracked().map(|p| p.email),
            Some("greta@farm.example".to_string())
        );
        assert!(LocalStorage::get(STORAGE_USER_KEY).is_some());

        logout(&ctx);
        assert!(!ctx.is_authenticated.get_untracked());
        assert_eq!(ctx.profile.get_untracked(), None);
        assert_eq!(LocalStorage::get(STORAGE_USER_KEY), None);
    }

    #[test]
    fn failed_login_leaves_state_and_store_untouched() {
        let (_owner, ctx) = session_ctx();

        let result = futures::executor::block_on(login(
            &ctx,
            "not-an-email".to_string(),
            "hunter2".to_string(),
        ));
        assert_eq!(result, Err(AuthError::InvalidEmail));
        assert!(!ctx.is_authenticated.get_untracked());
        assert_eq!(LocalStorage::get(STORAGE_USER_KEY), None);
    }

    #[test]
    fn init_session_restores_persisted_profile() {
        let (_owner, ctx) = session_ctx();
        let stored = UserProfile {
            id: 1,
            name: "greta".to_string(),
            email: "greta@farm.example".to_string(),
        };
        LocalStorage::set(STORAGE_USER_KEY, &serde_json::to_string(&stored).unwrap());

        init_session(&ctx);
        assert_eq!(ctx.profile.get_untracked(), Some(stored));
        assert!(ctx.is_authenticated.get_untracked());
    }

    #[test]
    fn init_session_discards_malformed_entry() {
        let (_owner, ctx) = session_ctx();
        LocalStorage::set(STORAGE_USER_KEY, "{definitely-not-json");

        init_session(&ctx);
        assert!(!ctx.is_authenticated.get_untracked());
        assert_eq!(ctx.profile.get_untracked(), None);
        // The poisoned entry is cleared, not retried on the next startup.
        assert_eq!(LocalStorage::get(STORAGE_USER_KEY), None);
    }

    #[test]
    fn init_session_without_entry_stays_logged_out() {
        let (_owner, ctx) = session_ctx();
        init_session(&ctx);
        assert!(!ctx.is_authenticated.get_untracked());
    }
}
