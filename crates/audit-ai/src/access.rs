//! Plan-based entitlements. The audit core never checks these itself; callers decide
//! whether to run gated steps such as the analysis.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    User,
    Pro,
    Business,
    Enterprise,
    Admin,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Ai,
    Save,
    Analytics,
    Team,
    Api,
}

impl UserRole {
    pub const ALL: [UserRole; 5] = [
        UserRole::User,
        UserRole::Pro,
        UserRole::Business,
        UserRole::Enterprise,
        UserRole::Admin,
    ];

    pub fn features(self) -> &'static [Feature] {
        match self {
            UserRole::User => &[],
            UserRole::Pro => &[Feature::Ai],
            UserRole::Business => &[Feature::Ai, Feature::Save, Feature::Analytics, Feature::Team],
            UserRole::Enterprise | UserRole::Admin => &[
                Feature::Ai,
                Feature::Save,
                Feature::Analytics,
                Feature::Team,
                Feature::Api,
            ],
        }
    }

    pub fn has_access(self, feature: Feature) -> bool {
        self.features().contains(&feature)
    }

    /// Fails with [`AccessDenied`] when the role's plan lacks `feature`.
    pub fn require(self, feature: Feature) -> Result<(), AccessDenied> {
        if self.has_access(feature) {
            Ok(())
        } else {
            Err(AccessDenied {
                role: self,
                feature,
            })
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Pro => "pro",
            UserRole::Business => "business",
            UserRole::Enterprise => "enterprise",
            UserRole::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let wanted = raw.trim().to_ascii_lowercase();
        UserRole::ALL
            .into_iter()
            .find(|role| role.label() == wanted)
            .ok_or_else(|| format!("unknown role '{raw}' (expected user, pro, business, enterprise, or admin)"))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("the {role} plan does not include the {feature:?} feature")]
pub struct AccessDenied {
    pub role: UserRole,
    pub feature: Feature,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn free_users_cannot_run_analysis() {
        assert!(!UserRole::User.has_access(Feature::Ai));
        assert!(UserRole::User.features().is_empty());
        assert_eq!(
            UserRole::User.require(Feature::Ai),
            Err(AccessDenied {
                role: UserRole::User,
                feature: Feature::Ai
            })
        );
    }

    #[test]
    fn plans_unlock_features_incrementally() {
        assert!(UserRole::Pro.has_access(Feature::Ai));
        assert!(!UserRole::Pro.has_access(Feature::Save));
        assert!(UserRole::Business.has_access(Feature::Team));
        assert!(!UserRole::Business.has_access(Feature::Api));
        assert!(UserRole::Enterprise.has_access(Feature::Api));
        assert_eq!(UserRole::Admin.features(), UserRole::Enterprise.features());
    }

    #[test]
    fn parses_role_names() {
        assert_eq!("Pro".parse::<UserRole>(), Ok(UserRole::Pro));
        assert_eq!(" admin ".parse::<UserRole>(), Ok(UserRole::Admin));
        assert!("guest".parse::<UserRole>().is_err());
    }
}
