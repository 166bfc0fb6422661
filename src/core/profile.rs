//! Profile records from the `profiles` table

use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Name of the table holding profiles, keyed by auth user id
pub const PROFILES_TABLE: &str = "profiles";

/// Account tier, used only to pick a badge
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountType {
    #[display("guest")]
    Guest,
    #[default]
    #[display("standard")]
    Standard,
    #[display("premium")]
    Premium,
}

impl AccountType {
    /// Parse a stored value; unknown tiers display as standard
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "guest" => AccountType::Guest,
            "premium" => AccountType::Premium,
            _ => AccountType::Standard,
        }
    }

    pub fn badge_label(&self) -> &'static str {
        match self {
            AccountType::Guest => "Guest",
            AccountType::Standard => "Standard",
            AccountType::Premium => "Premium ⭐",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AccountType::Guest => "bg-gray-100 text-gray-600",
            AccountType::Standard => "bg-emerald-100 text-emerald-700",
            AccountType::Premium => "bg-amber-100 text-amber-700",
        }
    }
}

fn lenient_account_type<'de, D>(deserializer: D) -> Result<AccountType, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.as_deref().map(AccountType::parse).unwrap_or_default())
}

/// Application profile for an auth user
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "lenient_account_type")]
    pub account_type: AccountType,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Profile {
    /// "First Last", skipping missing parts
    pub fn full_name(&self) -> String {
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// Join date as "March 5, 2024", empty when unknown
    pub fn member_since(&self) -> String {
        self.created_at
            .map(|at| at.format("%B %-d, %Y").to_string())
            .unwrap_or_default()
    }

    pub fn belongs_to(&self, user_id: Uuid) -> bool {
        self.id == user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const ROW: &str = r#"{
        "id": "8d3f6c1e-2b4a-4f7e-9c10-5a6b7c8d9e0f",
        "first_name": "Ada",
        "last_name": "Lovelace",
        "nickname": "ada",
        "username": "ada_l",
        "email": "ada@example.com",
        "account_type": "premium",
        "created_at": "2024-03-05T10:20:30.123456+00:00"
    }"#;

    #[test]
    fn test_profile_row_decodes() {
        let profile: Profile = serde_json::from_str(ROW).unwrap();
        assert_eq!(profile.first_name.as_deref(), Some("Ada"));
        assert_eq!(profile.account_type, AccountType::Premium);
        assert_eq!(profile.full_name(), "Ada Lovelace");
        assert_eq!(profile.member_since(), "March 5, 2024");
        assert!(profile.belongs_to("8d3f6c1e-2b4a-4f7e-9c10-5a6b7c8d9e0f".parse().unwrap()));
        assert!(!profile.belongs_to(Uuid::nil()));
    }

    #[test]
    fn test_sparse_row_uses_defaults() {
        let profile: Profile = serde_json::from_str(
            r#"{"id": "8d3f6c1e-2b4a-4f7e-9c10-5a6b7c8d9e0f", "account_type": null, "last_name": "Lovelace"}"#,
        )
        .unwrap();
        assert_eq!(profile.account_type, AccountType::Standard);
        assert_eq!(profile.full_name(), "Lovelace");
        assert_eq!(profile.member_since(), "");
    }

    #[test]
    fn test_unknown_account_type_displays_as_standard() {
        assert_eq!(AccountType::parse("enterprise"), AccountType::Standard);
        assert_eq!(AccountType::parse(" Guest "), AccountType::Guest);
        assert_eq!(AccountType::parse("PREMIUM"), AccountType::Premium);
    }

    #[test]
    fn test_badges() {
        assert_eq!(AccountType::Guest.badge_label(), "Guest");
        assert_eq!(AccountType::Standard.badge_label(), "Standard");
        assert_eq!(AccountType::Premium.badge_label(), "Premium ⭐");
        assert!(AccountType::Premium.badge_class().contains("amber"));
        assert_eq!(AccountType::Premium.to_string(), "premium");
    }

    #[test]
    fn test_member_since_single_digit_day() {
        let profile = Profile {
            id: Uuid::nil(),
            first_name: None,
            last_name: None,
            nickname: None,
            username: None,
            email: None,
            account_type: AccountType::Guest,
            created_at: Some(Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap()),
        };
        assert_eq!(profile.member_since(), "December 1, 2023");
    }
}
