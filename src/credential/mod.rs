//! Credential lookup for the presentation layer. The engine never calls
//! into this; it only receives the resolved string.

use parking_lot::Mutex;

/// Environment variables consulted, in order.
pub const ENV_KEYS: &[&str] = &["GEMINI_API_KEY", "API_KEY"];

pub trait CredentialProvider: Send + Sync {
    /// A non-blank credential, or `None`.
    fn credential(&self) -> Option<String>;
}

fn non_blank(s: String) -> Option<String> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Reads the process environment.
pub struct EnvCredentials {
    lookup: Box<dyn Fn(&str) -> Option<String> + Send + Sync>,
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::with_lookup(|k| std::env::var(k).ok())
    }
}

impl EnvCredentials {
    pub fn with_lookup(lookup: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        Self { lookup: Box::new(lookup) }
    }
}

impl CredentialProvider for EnvCredentials {
    fn credential(&self) -> Option<String> {
        ENV_KEYS.iter().find_map(|k| (self.lookup)(k).and_then(non_blank))
    }
}

/// In-memory store that lives as long as the session (the process).
/// Filled by the credential prompt.
#[derive(Default)]
pub struct SessionStore {
    slot: Mutex<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores the trimmed value. Blank input is ignored and reported as `false`.
    pub fn store(&self, value: &str) -> bool {
        match non_blank(value.to_string()) {
            Some(v) => {
                *self.slot.lock() = Some(v);
                true
            }
            None => false,
        }
    }
}

impl CredentialProvider for SessionStore {
    fn credential(&self) -> Option<String> {
        self.slot.lock().clone()
    }
}

/// First provider with a credential wins.
#[derive(Default)]
pub struct ChainedCredentials<'a> {
    sources: Vec<&'a dyn CredentialProvider>,
}

impl<'a> ChainedCredentials<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(mut self, source: &'a dyn CredentialProvider) -> Self {
        self.sources.push(source);
        self
    }
}

impl CredentialProvider for ChainedCredentials<'_> {
    fn credential(&self) -> Option<String> {
        self.sources.iter().find_map(|s| s.credential())
    }
}
