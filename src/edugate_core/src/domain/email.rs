use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use thiserror::Error;

/// Institutional address policy: `local-part@domain.edu`, case-insensitive,
/// no embedded whitespace, at least one character in the local part and in
/// the domain label. Permissive beyond that shape (consecutive dots pass);
/// the regex is the canonical validation boundary.
static DOMAIN_POLICY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[^\s@]+@[^\s@]+\.edu$").expect("domain policy pattern is valid")
});

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EmailError {
    #[error("email address does not match the institutional .edu policy")]
    OutsidePolicy,
}

/// An email address that has passed the institutional domain policy.
///
/// Construction is the domain gate: a raw string that fails the policy never
/// becomes an `Email`, and therefore never reaches the identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    pub fn parse(raw: &str) -> Result<Self, EmailError> {
        if DOMAIN_POLICY.is_match(raw) {
            Ok(Self(raw.to_owned()))
        } else {
            Err(EmailError::OutsidePolicy)
        }
    }
}

impl TryFrom<String> for Email {
    type Error = EmailError;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::parse(&raw)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
