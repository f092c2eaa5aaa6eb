//! Endpoint scope verification.
//!
//! Every scoped Recharge endpoint declares the permission scopes it needs.
//! [`ScopeGuard`] rejects a call before any network traffic when the token
//! lacks one of them, and remembers endpoints that already passed so the
//! check runs once per endpoint per client.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

use crate::auth::AuthScopes;

/// Error returned when a token may not call an endpoint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ScopeError {
    /// The client was configured without any scopes.
    #[error("No scopes found for token.")]
    NoScopes,

    /// The token lacks one or more scopes the endpoint requires.
    #[error("Endpoint {endpoint} missing scopes: {missing:?}")]
    MissingScopes {
        /// The endpoint key, e.g. `GET /addresses/{address_id}`.
        endpoint: String,
        /// The required scopes that were not granted, in declaration order.
        missing: Vec<String>,
    },
}

/// Checks endpoint scope requirements against the granted scopes.
///
/// # Example
///
/// ```rust
/// use recharge_api::auth::{ScopeError, ScopeGuard};
///
/// let guard = ScopeGuard::new("read_customers".parse().unwrap());
///
/// assert!(guard.check("GET /addresses/{address_id}", &["read_customers"]).is_ok());
/// assert!(matches!(
///     guard.check("POST /addresses/{address_id}/apply_discount", &["write_discounts"]),
///     Err(ScopeError::MissingScopes { .. })
/// ));
/// ```
#[derive(Debug, Default)]
pub struct ScopeGuard {
    granted: AuthScopes,
    allowed_endpoints: Mutex<HashSet<String>>,
}

// Verify ScopeGuard is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ScopeGuard>();
};

impl ScopeGuard {
    /// Creates a guard for the given granted scopes.
    #[must_use]
    pub fn new(granted: AuthScopes) -> Self {
        Self {
            granted,
            allowed_endpoints: Mutex::new(HashSet::new()),
        }
    }

    /// Returns the granted scopes.
    #[must_use]
    pub const fn granted(&self) -> &AuthScopes {
        &self.granted
    }

    /// Verifies that `endpoint` may be called with the granted scopes.
    ///
    /// Endpoints that passed before are accepted without re-checking.
    ///
    /// # Errors
    ///
    /// Returns [`ScopeError::NoScopes`] if no scopes were granted, or
    /// [`ScopeError::MissingScopes`] listing every required scope the
    /// token lacks.
    pub fn check(&self, endpoint: &str, required: &[&str]) -> Result<(), ScopeError> {
        // A poisoned cache still holds only fully approved endpoints.
        let mut allowed = self
            .allowed_endpoints
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if allowed.contains(endpoint) {
            return Ok(());
        }

        if self.granted.is_empty() {
            return Err(ScopeError::NoScopes);
        }

        let missing = self.granted.missing(required);
        if !missing.is_empty() {
            return Err(ScopeError::MissingScopes {
                endpoint: endpoint.to_string(),
                missing: missing.into_iter().map(ToString::to_string).collect(),
            });
        }

        tracing::trace!(endpoint, "endpoint scopes approved");
        allowed.insert(endpoint.to_string());
        Ok(())
    }

    /// Returns `true` if `endpoint` has already been approved.
    #[must_use]
    pub fn is_allowed(&self, endpoint: &str) -> bool {
        self.allowed_endpoints
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(endpoint)
    }
}
