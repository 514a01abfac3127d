use std::env;
use std::fmt;
use std::fs;
use std::path::Path;

use eyre::{eyre, Result, WrapErr};
use serde::Deserialize;

/// Environment variable checked first for the API key.
pub const KEY_ENV_VAR: &str = "RAPIDAPI_KEY";
/// Fallback secrets file, read from the working directory.
pub const SECRETS_FILE: &str = "secrets.toml";

/// The RapidAPI key authorizing upstream requests.
///
/// Resolved once at startup and held only in memory. `Debug` redacts
/// the value so the key cannot leak through error chains or logs.
#[derive(Clone)]
pub struct Credential(String);

impl Credential {
    /// Resolves the key: `RAPIDAPI_KEY` first, then the `[rapidapi]`
    /// table of `secrets.toml`.
    ///
    /// Fails with a diagnostic naming both sources when neither yields
    /// a value. This is the only fatal error in the system; callers
    /// should bail out before any network attempt.
    pub fn resolve() -> Result<Self> {
        Self::resolve_from(env::var(KEY_ENV_VAR).ok(), Path::new(SECRETS_FILE))
    }

    fn resolve_from(env_value: Option<String>, secrets_path: &Path) -> Result<Self> {
        if let Some(key) = env_value.filter(|key| !key.is_empty()) {
            return Ok(Credential(key));
        }
        if let Some(key) = key_from_secrets(secrets_path)? {
            return Ok(Credential(key));
        }
        Err(eyre!(
            "no API key configured: set the {} environment variable \
             or add `key` under `[rapidapi]` in {}",
            KEY_ENV_VAR,
            secrets_path.display()
        ))
    }

    /// The raw key string, for header construction.
    pub fn key(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(<redacted>)")
    }
}

impl From<&str> for Credential {
    fn from(key: &str) -> Self {
        Credential(key.to_owned())
    }
}

#[derive(Deserialize, Default)]
struct Secrets {
    #[serde(default)]
    rapidapi: RapidApi,
}

#[derive(Deserialize, Default)]
struct RapidApi {
    key: Option<String>,
}

/// Reads the key from the secrets file. A missing file is not an
/// error, only an absent source; an unreadable or malformed file is.
fn key_from_secrets(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        return Ok(None);
    }
    let contents = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read {}", path.display()))?;
    let secrets: Secrets = toml::from_str(&contents)
        .wrap_err_with(|| format!("failed to parse {}", path.display()))?;
    Ok(secrets.rapidapi.key)
}
