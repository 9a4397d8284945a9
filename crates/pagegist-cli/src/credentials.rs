//! Credential resolution.
//!
//! The API key can come from three places, checked in order: the
//! `--api-key` flag, the `GEMINI_API_KEY` environment variable, and the
//! config file. Each source is a `CredentialProvider`; the first one
//! that yields a key wins.

use crate::config::Config;
use pagegist_domain::{Credential, CredentialProvider};

/// Environment variable holding the API key.
pub const ENV_API_KEY: &str = "GEMINI_API_KEY";

/// Key passed explicitly on the command line.
pub struct FlagCredentialProvider(pub Option<String>);

impl CredentialProvider for FlagCredentialProvider {
    fn get(&self) -> Option<Credential> {
        self.0
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(Credential::new)
    }
}

/// Key from the process environment.
pub struct EnvCredentialProvider;

impl CredentialProvider for EnvCredentialProvider {
    fn get(&self) -> Option<Credential> {
        std::env::var(ENV_API_KEY)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .map(Credential::new)
    }
}

/// Key stored in the config file.
pub struct StoredCredentialProvider<'a>(pub &'a Config);

impl CredentialProvider for StoredCredentialProvider<'_> {
    fn get(&self) -> Option<Credential> {
        self.0
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .map(Credential::new)
    }
}

/// Resolve the credential from flag, environment, then config file.
pub fn resolve(flag: Option<String>, config: &Config) -> Option<Credential> {
    let providers: [&dyn CredentialProvider; 3] = [
        &FlagCredentialProvider(flag),
        &EnvCredentialProvider,
        &StoredCredentialProvider(config),
    ];
    providers.iter().find_map(|p| p.get())
}
