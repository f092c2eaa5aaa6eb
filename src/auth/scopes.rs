//! Token scope handling for the Recharge API.
//!
//! This module provides the [`AuthScopes`] type, the set of permission scopes
//! granted to a Recharge API token.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// A set of permission scopes granted to a Recharge access token.
///
/// Recharge does not derive read access from write access: a token holding
/// `write_customers` but not `read_customers` cannot list addresses. Scopes
/// are therefore stored exactly as given.
///
/// # Serialization
///
/// `AuthScopes` serializes to and deserializes from a comma-separated string:
///
/// ```rust
/// use recharge_api::AuthScopes;
///
/// let scopes: AuthScopes = "write_customers,read_customers".parse().unwrap();
/// let json = serde_json::to_string(&scopes).unwrap();
/// assert_eq!(json, r#""read_customers,write_customers""#);
/// ```
///
/// # Example
///
/// ```rust
/// use recharge_api::AuthScopes;
///
/// let scopes: AuthScopes = "read_products, write_products".parse().unwrap();
/// assert!(scopes.contains("read_products"));
/// assert!(!scopes.contains("read_customers"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: HashSet<String>,
}

impl AuthScopes {
    /// Creates an empty scope set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if the scope set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns `true` if the given scope was granted.
    #[must_use]
    pub fn contains(&self, scope: &str) -> bool {
        self.scopes.contains(scope)
    }

    /// Returns the scopes from `required` that are not in this set,
    /// preserving the order of `required`.
    #[must_use]
    pub fn missing<'a>(&self, required: &[&'a str]) -> Vec<&'a str> {
        required
            .iter()
            .copied()
            .filter(|scope| !self.contains(scope))
            .collect()
    }

    /// Returns an iterator over the scopes.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes = HashSet::new();

        for scope in s.split(',') {
            let scope = scope.trim();
            if scope.is_empty() {
                continue;
            }

            if !scope.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }

            scopes.insert(scope.to_string());
        }

        Ok(Self { scopes })
    }
}

impl<S: Into<String>> FromIterator<S> for AuthScopes {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let scopes = iter
            .into_iter()
            .map(|s| s.into().trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        Self { scopes }
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut scopes: Vec<&str> = self.iter().collect();
        scopes.sort_unstable();
        write!(f, "{}", scopes.join(","))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
