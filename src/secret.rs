use anyhow::{bail, Context};
use std::fmt;
use std::fmt::{Debug, Formatter};
use std::path::Path;
use std::sync::Arc;

/// An API token provisioned out-of-band. Loaded once at process start and
/// handed to whatever needs it; the value never appears in `Debug` output.
#[derive(Clone, PartialEq)]
pub struct Credential(Arc<str>);

impl Credential {
    pub fn new(token: impl Into<String>) -> Self {
        Credential(Arc::from(token.into()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read secret at {}", path.display()))?;
        let token = contents.trim_end();
        if token.is_empty() {
            bail!("secret at {} is empty", path.display());
        }
        Ok(Credential::new(token))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl Debug for Credential {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Credential(***)")
    }
}
