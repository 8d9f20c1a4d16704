//! # Session Token Storage
//!
//! Where the access and refresh tokens live between calls (and, for the
//! file store, between runs).
//!
//! ## Token Lifetimes
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Token Lifetimes                                  │
//! │                                                                         │
//! │  accessToken   "Bearer eyJ..."   expires ACCESS_TOKEN_TTL_MINS after    │
//! │                                  it was saved; reads past that return   │
//! │                                  None so the client refreshes first     │
//! │                                                                         │
//! │  refreshToken  "6f1c..."         kept until logout / clear()            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The access token is stored exactly as the server issued it, `Bearer `
//! prefix included, and is sent back verbatim in the `authorization`
//! header.

use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ApiError, ApiResult};

/// Lifetime of a saved access token.
pub const ACCESS_TOKEN_TTL_MINS: i64 = 20;

/// File name used by [`FileSessionStorage`] inside the data directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// A token pair as issued by login, register or refresh.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tokens {
    pub access_token: String,
    pub refresh_token: String,
}

impl Tokens {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

/// Persistent form of the tokens, with the access token's expiry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    access_token: Option<String>,
    access_expires_at: Option<DateTime<Utc>>,
    refresh_token: Option<String>,
}

impl StoredSession {
    fn from_tokens(tokens: &Tokens) -> Self {
        Self {
            access_token: Some(tokens.access_token.clone()),
            access_expires_at: Some(Utc::now() + Duration::minutes(ACCESS_TOKEN_TTL_MINS)),
            refresh_token: Some(tokens.refresh_token.clone()),
        }
    }

    fn live_access_token(&self) -> Option<String> {
        match (&self.access_token, self.access_expires_at) {
            (Some(token), Some(expires_at)) if Utc::now() < expires_at => Some(token.clone()),
            _ => None,
        }
    }
}

// =============================================================================
// Storage Trait
// =============================================================================

/// Token storage used by the HTTP client and the session operations.
pub trait SessionStorage: Send + Sync {
    /// The access token, if one is stored and not yet expired.
    fn access_token(&self) -> Option<String>;

    /// The refresh token, if one is stored.
    fn refresh_token(&self) -> Option<String>;

    /// Replaces both tokens.
    fn save(&self, tokens: &Tokens) -> ApiResult<()>;

    /// Forgets both tokens.
    fn clear(&self) -> ApiResult<()>;

    /// Whether there is anything to authenticate with.
    fn has_session(&self) -> bool {
        self.access_token().is_some() || self.refresh_token().is_some()
    }
}

// =============================================================================
// In-Memory Storage
// =============================================================================

/// Tokens held for the lifetime of the process.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    inner: Mutex<Option<StoredSession>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn with_session<T>(&self, f: impl FnOnce(&mut Option<StoredSession>) -> T) -> ApiResult<T> {
        let mut guard = self
            .inner
            .lock()
            .map_err(|_| ApiError::Storage("session lock poisoned".to_string()))?;
        Ok(f(&mut guard))
    }
}

impl SessionStorage for MemorySessionStorage {
    fn access_token(&self) -> Option<String> {
        self.with_session(|s| s.as_ref().and_then(StoredSession::live_access_token))
            .ok()
            .flatten()
    }

    fn refresh_token(&self) -> Option<String> {
        self.with_session(|s| s.as_ref().and_then(|s| s.refresh_token.clone()))
            .ok()
            .flatten()
    }

    fn save(&self, tokens: &Tokens) -> ApiResult<()> {
        self.with_session(|s| *s = Some(StoredSession::from_tokens(tokens)))
    }

    fn clear(&self) -> ApiResult<()> {
        self.with_session(|s| *s = None)
    }
}

// =============================================================================
// File Storage
// =============================================================================

/// Tokens kept in `session.json` so a later run stays logged in.
///
/// The file is read once on open; every save rewrites it.
#[derive(Debug)]
pub struct FileSessionStorage {
    path: PathBuf,
    cache: Mutex<Option<StoredSession>>,
}

impl FileSessionStorage {
    /// Opens (or prepares) the session file inside `dir`.
    ///
    /// A missing or unreadable file starts an empty session.
    pub fn open(dir: impl AsRef<Path>) -> ApiResult<Self> {
        let dir = dir.as_ref();
        std::fs::create_dir_all(dir)?;
        let path = dir.join(SESSION_FILE_NAME);

        let cached = match std::fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str::<StoredSession>(&raw) {
                Ok(session) => Some(session),
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Ignoring corrupt session file");
                    None
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => None,
            Err(e) => return Err(e.into()),
        };

        debug!(path = %path.display(), restored = cached.is_some(), "Session storage opened");

        Ok(Self {
            path,
            cache: Mutex::new(cached),
        })
    }

    /// Location of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> ApiResult<std::sync::MutexGuard<'_, Option<StoredSession>>> {
        self.cache
            .lock()
            .map_err(|_| ApiError::Storage("session lock poisoned".to_string()))
    }
}

/// Replaces `path` with `contents` via a sibling temp file and a rename.
/// The file is readable by its owner only.
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    let mut file = tempfile::NamedTempFile::new_in(dir)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        file.as_file()
            .set_permissions(std::fs::Permissions::from_mode(0o600))?;
    }

    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

impl SessionStorage for FileSessionStorage {
    fn access_token(&self) -> Option<String> {
        self.lock()
            .ok()?
            .as_ref()
            .and_then(StoredSession::live_access_token)
    }

    fn refresh_token(&self) -> Option<String> {
        self.lock().ok()?.as_ref().and_then(|s| s.refresh_token.clone())
    }

    fn save(&self, tokens: &Tokens) -> ApiResult<()> {
        let session = StoredSession::from_tokens(tokens);
        let raw = serde_json::to_string_pretty(&session)?;
        write_private(&self.path, raw.as_bytes())?;
        *self.lock()? = Some(session);
        Ok(())
    }

    fn clear(&self) -> ApiResult<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        *self.lock()? = None;
        Ok(())
    }
}
