//! Persistent session storage behind an injectable handle.
//!
//! DESIGN
//! ======
//! `SessionStore` is the seam between session logic and the browser:
//! [`LocalStorageStore`] keeps the record in origin-scoped `localStorage`
//! (hydrate builds only), while [`MemoryStore`] backs tests and server
//! rendering with identical semantics. There is no in-memory cache in
//! front of localStorage; every read goes to the store so freshness is
//! always current.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::PoisonError;

use crate::session::record::SessionRecord;
use crate::session::role::Role;

/// localStorage keys for the five session fields.
pub const KEY_TOKEN: &str = "EducaCenterToken";
pub const KEY_ROLE: &str = "EducaCenterRole";
pub const KEY_NAME: &str = "EducaCenterUser";
pub const KEY_USER_ID: &str = "EducaCenterId";
pub const KEY_LOGIN_AT: &str = "EducaCenterLoginAt";

/// Durable key-value persistence for the session record.
///
/// Only the login, logout, and expiry flows may call `save`/`clear`;
/// everything else is a reader.
pub trait SessionStore: Send + Sync {
    /// Write all five session fields in one step.
    fn save(&self, record: &SessionRecord);
    /// Remove all five session fields. Idempotent.
    fn clear(&self);
    /// Stored token, if any.
    fn token(&self) -> Option<String>;
    /// Stored role, if present and recognized.
    fn role(&self) -> Option<Role>;
    /// Stored display name, if any.
    fn display_name(&self) -> Option<String>;
    /// Stored numeric user id, if present and parseable.
    fn user_id(&self) -> Option<i64>;
    /// Stored login instant in ms since epoch. Missing or corrupt values
    /// read as `None`, never as "already expired".
    fn login_at_ms(&self) -> Option<i64>;

    /// True iff a token is present.
    fn has_session(&self) -> bool {
        self.token().is_some()
    }
}

/// Cheap cloneable handle to the active session store, provided via
/// Leptos context so components receive it by injection.
#[derive(Clone)]
pub struct SessionContext {
    store: Arc<dyn SessionStore>,
}

impl SessionContext {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Handle over the browser's localStorage. Inert outside hydrate
    /// builds (reads yield `None`, writes are dropped).
    pub fn browser() -> Self {
        Self::new(Arc::new(LocalStorageStore))
    }

    /// Handle over a fresh in-memory store, for tests and SSR.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::default()))
    }

    pub fn save(&self, record: &SessionRecord) {
        self.store.save(record);
    }

    pub fn clear(&self) {
        self.store.clear();
    }

    pub fn has_session(&self) -> bool {
        self.store.has_session()
    }

    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    pub fn role(&self) -> Option<Role> {
        self.store.role()
    }

    pub fn display_name(&self) -> Option<String> {
        self.store.display_name()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.store.user_id()
    }

    pub fn login_at_ms(&self) -> Option<i64> {
        self.store.login_at_ms()
    }
}

/// Session store over browser `localStorage`, scoped to the origin.
pub struct LocalStorageStore;

#[cfg(feature = "hydrate")]
impl LocalStorageStore {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    fn read(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(key: &str, value: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.set_item(key, value);
        }
    }

    fn remove(key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}

#[cfg(feature = "hydrate")]
impl SessionStore for LocalStorageStore {
    fn save(&self, record: &SessionRecord) {
        Self::write(KEY_TOKEN, &record.token);
        if let Some(role) = record.role {
            Self::write(KEY_ROLE, role.as_str());
        } else {
            Self::remove(KEY_ROLE);
        }
        Self::write(KEY_NAME, &record.display_name);
        Self::write(KEY_USER_ID, &record.user_id.to_string());
        Self::write(KEY_LOGIN_AT, &record.login_at_ms.to_string());
    }

    fn clear(&self) {
        for key in [KEY_TOKEN, KEY_ROLE, KEY_NAME, KEY_USER_ID, KEY_LOGIN_AT] {
            Self::remove(key);
        }
    }

    fn token(&self) -> Option<String> {
        Self::read(KEY_TOKEN)
    }

    fn role(&self) -> Option<Role> {
        Self::read(KEY_ROLE).as_deref().and_then(Role::parse)
    }

    fn display_name(&self) -> Option<String> {
        Self::read(KEY_NAME)
    }

    fn user_id(&self) -> Option<i64> {
        Self::read(KEY_USER_ID)?.parse().ok()
    }

    fn login_at_ms(&self) -> Option<i64> {
        Self::read(KEY_LOGIN_AT)?.parse().ok()
    }
}

#[cfg(not(feature = "hydrate"))]
impl SessionStore for LocalStorageStore {
    fn save(&self, record: &SessionRecord) {
        let _ = record;
    }

    fn clear(&self) {}

    fn token(&self) -> Option<String> {
        None
    }

    fn role(&self) -> Option<Role> {
        None
    }

    fn display_name(&self) -> Option<String> {
        None
    }

    fn user_id(&self) -> Option<i64> {
        None
    }

    fn login_at_ms(&self) -> Option<i64> {
        None
    }
}

/// In-memory session store with localStorage semantics.
///
/// Values are held as strings, like the real store, so corrupt-field
/// behavior (e.g. an unparseable timestamp) can be exercised in tests.
#[derive(Default)]
pub struct MemoryStore {
    fields: Mutex<MemoryFields>,
}

#[derive(Default)]
struct MemoryFields {
    token: Option<String>,
    role: Option<String>,
    display_name: Option<String>,
    user_id: Option<String>,
    login_at: Option<String>,
}

impl MemoryStore {
    fn fields(&self) -> std::sync::MutexGuard<'_, MemoryFields> {
        self.fields.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Overwrite the raw stored timestamp, bypassing `save`. Lets tests
    /// simulate aged or corrupt sessions.
    pub fn set_raw_login_at(&self, raw: Option<&str>) {
        self.fields().login_at = raw.map(str::to_owned);
    }
}

impl SessionStore for MemoryStore {
    fn save(&self, record: &SessionRecord) {
        let mut fields = self.fields();
        fields.token = Some(record.token.clone());
        fields.role = record.role.map(|r| r.as_str().to_owned());
        fields.display_name = Some(record.display_name.clone());
        fields.user_id = Some(record.user_id.to_string());
        fields.login_at = Some(record.login_at_ms.to_string());
    }

    fn clear(&self) {
        *self.fields() = MemoryFields::default();
    }

    fn token(&self) -> Option<String> {
        self.fields().token.clone()
    }

    fn role(&self) -> Option<Role> {
        self.fields().role.as_deref().and_then(Role::parse)
    }

    fn display_name(&self) -> Option<String> {
        self.fields().display_name.clone()
    }

    fn user_id(&self) -> Option<i64> {
        self.fields().user_id.as_deref()?.parse().ok()
    }

    fn login_at_ms(&self) -> Option<i64> {
        self.fields().login_at.as_deref()?.parse().ok()
    }
}
