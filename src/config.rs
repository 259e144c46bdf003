// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::error::ValidationError;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

static APP: Lazy<(&str, &str, &str)> = Lazy::new(|| ("com.alphavelocity", "Burnrate", "burnrate"));

/// Policy constants for zone classification and spending analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    /// Percentage points above the days-left line still reported as Warning.
    pub warning_margin: Decimal,
    /// Expenses strictly below this amount count as small spends.
    pub small_spend_threshold: Decimal,
    /// Minimum number of same-amount expenses to flag a subscription.
    pub subscription_min_count: usize,
    /// Categories kept in the breakdown.
    pub top_categories: usize,
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            warning_margin: Decimal::from(10),
            small_spend_threshold: Decimal::from(100),
            subscription_min_count: 2,
            top_categories: 5,
        }
    }
}

impl Policy {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.warning_margin < Decimal::ZERO {
            return Err(ValidationError::InvalidPolicy(format!(
                "warning_margin must not be negative, got {}",
                self.warning_margin
            )));
        }
        if self.small_spend_threshold < Decimal::ZERO {
            return Err(ValidationError::InvalidPolicy(format!(
                "small_spend_threshold must not be negative, got {}",
                self.small_spend_threshold
            )));
        }
        if self.subscription_min_count < 2 {
            return Err(ValidationError::InvalidPolicy(format!(
                "subscription_min_count must be at least 2, got {}",
                self.subscription_min_count
            )));
        }
        Ok(())
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Read policy file {}", path.display()))?;
        let policy: Policy = serde_json::from_str(&raw)
            .with_context(|| format!("Invalid policy JSON in {}", path.display()))?;
        policy.validate()?;
        info!(path = %path.display(), "loaded policy");
        Ok(policy)
    }
}

pub fn default_policy_path() -> Option<PathBuf> {
    ProjectDirs::from(APP.0, APP.1, APP.2).map(|p| p.config_dir().join("policy.json"))
}

/// An explicit path must exist; otherwise fall back to the platform config
/// dir and then to built-in defaults.
pub fn load_policy(explicit: Option<&Path>) -> Result<Policy> {
    if let Some(path) = explicit {
        return Policy::from_path(path);
    }
    match default_policy_path() {
        Some(path) if path.is_file() => Policy::from_path(&path),
        _ => {
            debug!("no policy file found, using defaults");
            Ok(Policy::default())
        }
    }
}
