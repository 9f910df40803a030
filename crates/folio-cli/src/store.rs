//! Session persistence between invocations.
//!
//! The session file holds the last login response as JSON. Loading replays
//! it through [`SessionStore::set_auth_data`], so roles and the user id are
//! always re-derived from the token and never read from disk.

use anyhow::Context;
use folio_session::{LoginResponse, SessionStore};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Restore the session saved at `path`, if any.
///
/// A file that cannot be parsed is ignored and the session starts empty.
pub fn load(path: &Path, session: &SessionStore) -> anyhow::Result<()> {
    session.initialize();
    if !path.exists() {
        return Ok(());
    }

    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session file: {}", path.display()))?;
    let login: LoginResponse = match serde_json::from_str(&content) {
        Ok(login) => login,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable session file");
            return Ok(());
        }
    };

    // A token without a readable payload still authenticates requests
    let _ = session.set_auth_data(&login);
    Ok(())
}

/// Write the session to `path`, or remove the file when logged out.
pub fn save(path: &Path, session: &SessionStore) -> anyhow::Result<()> {
    let Some(token) = session.token() else {
        if path.exists() {
            fs::remove_file(path)
                .with_context(|| format!("Failed to remove session file: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "session file removed");
        }
        return Ok(());
    };

    let login = LoginResponse {
        token,
        username: session.username(),
        email: None,
        token_type: Some("Bearer".to_string()),
        auth_provider: None,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }
    write_private(path, &serde_json::to_vec_pretty(&login)?)
        .with_context(|| format!("Failed to write session file: {}", path.display()))?;
    Ok(())
}

/// The file holds a bearer token: owner read/write only on Unix, including
/// when it already existed with wider permissions.
fn write_private(path: &Path, content: &[u8]) -> std::io::Result<()> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};
        options.mode(0o600);
        if path.exists() {
            fs::set_permissions(path, fs::Permissions::from_mode(0o600))?;
        }
    }
    let mut file = options.open(path)?;
    file.write_all(content)
}
