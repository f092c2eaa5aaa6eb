//! Recharge API version definitions.
//!
//! This module provides the [`ApiVersion`] enum. Recharge selects the API
//! version per request through the `X-Recharge-Version` header, so each
//! resource declares the version its payload shapes belong to.

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;

/// Recharge API version.
///
/// Recharge ships two generations of its REST API. Resources built for the
/// older generation (addresses, products) speak `2021-01`; the newer
/// generation (discounts, async batches) speaks `2021-11`. A `Custom`
/// variant covers versions released after this crate.
///
/// # Example
///
/// ```rust
/// use recharge_api::ApiVersion;
///
/// let version: ApiVersion = "2021-11".parse().unwrap();
/// assert_eq!(version, ApiVersion::V2021_11);
/// assert_eq!(ApiVersion::V2021_01.to_string(), "2021-01");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum ApiVersion {
    /// API version 2021-01, the first public generation.
    V2021_01,
    /// API version 2021-11, the second generation.
    V2021_11,
    /// Custom version string for future or unrecognized versions.
    Custom(String),
}

impl ApiVersion {
    /// Returns the version used when none is configured.
    #[must_use]
    pub const fn default_version() -> Self {
        Self::V2021_01
    }

    /// Returns the newest version known to this crate.
    #[must_use]
    pub const fn latest() -> Self {
        Self::V2021_11
    }

    /// Returns `true` if this is a version known to this crate.
    #[must_use]
    pub const fn is_known(&self) -> bool {
        !matches!(self, Self::Custom(_))
    }

    fn is_valid_version_format(s: &str) -> bool {
        let Some((year, month)) = s.split_once('-') else {
            return false;
        };

        if year.len() != 4 || month.len() != 2 {
            return false;
        }
        if !year.chars().all(|c| c.is_ascii_digit()) {
            return false;
        }

        matches!(month.parse::<u8>(), Ok(1..=12))
    }
}

impl Default for ApiVersion {
    fn default() -> Self {
        Self::default_version()
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let version_str = match self {
            Self::V2021_01 => "2021-01",
            Self::V2021_11 => "2021-11",
            Self::Custom(s) => s,
        };
        f.write_str(version_str)
    }
}

impl FromStr for ApiVersion {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        match s {
            "2021-01" => Ok(Self::V2021_01),
            "2021-11" => Ok(Self::V2021_11),
            _ if Self::is_valid_version_format(s) => Ok(Self::Custom(s.to_string())),
            _ => Err(ConfigError::InvalidApiVersion {
                version: s.to_string(),
            }),
        }
    }
}
