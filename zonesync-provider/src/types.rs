use serde::{Deserialize, Serialize};

// ============ Provider Types ============

/// Identifies which registrar implementation to use.
///
/// Each variant is gated behind its corresponding feature flag.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProviderType {
    /// TransIP (REST API v6). Requires feature `transip`.
    #[cfg(feature = "transip")]
    Transip,
}

impl std::fmt::Display for ProviderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "transip")]
            Self::Transip => write!(f, "transip"),
        }
    }
}

// ============ Zone Entry ============

/// A raw DNS entry as stored by the registrar.
///
/// This mirrors the registrar's wire shape one-to-one; no normalization is
/// applied here. Names are whatever the registrar returns (usually relative to
/// the zone apex, with `@` for the apex itself).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ZoneEntry {
    /// Record name (e.g. `"www"` or `"@"`).
    pub name: String,
    /// Time to live in seconds.
    pub expire: u32,
    /// Record type (e.g. `"A"`, `"MX"`).
    #[serde(rename = "type")]
    pub record_type: String,
    /// Record content (e.g. `"1.2.3.4"` or `"10 mail.example.com."`).
    pub content: String,
}

impl ZoneEntry {
    /// Create a new zone entry.
    pub fn new(
        name: impl Into<String>,
        expire: u32,
        record_type: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            expire,
            record_type: record_type.into(),
            content: content.into(),
        }
    }
}

// ============ Credential Types ============

/// Type-safe credential container for all supported registrars.
///
/// Pass this to [`create_provider()`](crate::create_provider) to instantiate a provider.
///
/// # Serialization
///
/// Serialized as a tagged enum with `"provider"` as the tag and `"credentials"` as the content:
///
/// ```json
/// { "provider": "transip", "credentials": { "login": "...", "access_token": "..." } }
/// ```
#[derive(Clone, Serialize, Deserialize)]
#[serde(tag = "provider", content = "credentials")]
pub enum ProviderCredentials {
    /// TransIP credentials. Requires feature `transip`.
    #[cfg(feature = "transip")]
    #[serde(rename = "transip")]
    Transip {
        /// TransIP account login name.
        login: String,
        /// Access token generated in the TransIP control panel.
        access_token: String,
    },
}

impl ProviderCredentials {
    /// Returns the [`ProviderType`] these credentials belong to.
    pub fn provider_type(&self) -> ProviderType {
        match self {
            #[cfg(feature = "transip")]
            Self::Transip { .. } => ProviderType::Transip,
        }
    }

    /// Whether every credential field carries a non-blank value.
    ///
    /// Incomplete credentials are treated as "not configured" by callers.
    pub fn is_complete(&self) -> bool {
        match self {
            #[cfg(feature = "transip")]
            Self::Transip {
                login,
                access_token,
            } => !login.trim().is_empty() && !access_token.trim().is_empty(),
        }
    }
}

// 凭证不能出现在日志中
impl std::fmt::Debug for ProviderCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            #[cfg(feature = "transip")]
            Self::Transip { login, .. } => f
                .debug_struct("Transip")
                .field("login", login)
                .field("access_token", &"<redacted>")
                .finish(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_entry_uses_registrar_field_names() {
        let entry = ZoneEntry::new("www", 300, "A", "192.0.2.1");
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "name": "www",
                "expire": 300,
                "type": "A",
                "content": "192.0.2.1"
            })
        );
    }

    #[cfg(feature = "transip")]
    #[test]
    fn credentials_completeness() {
        let complete = ProviderCredentials::Transip {
            login: "alice".to_string(),
            access_token: "token".to_string(),
        };
        assert!(complete.is_complete());

        let blank = ProviderCredentials::Transip {
            login: "alice".to_string(),
            access_token: "   ".to_string(),
        };
        assert!(!blank.is_complete());
    }

    #[cfg(feature = "transip")]
    #[test]
    fn credentials_debug_redacts_token() {
        let creds = ProviderCredentials::Transip {
            login: "alice".to_string(),
            access_token: "super-secret".to_string(),
        };
        let rendered = format!("{creds:?}");
        assert!(rendered.contains("alice"));
        assert!(!rendered.contains("super-secret"));
    }

    #[cfg(feature = "transip")]
    #[test]
    fn credentials_tagged_serialization() {
        let json = r#"{"provider":"transip","credentials":{"login":"bob","access_token":"t"}}"#;
        let creds: ProviderCredentials = serde_json::from_str(json).unwrap();
        assert_eq!(creds.provider_type(), ProviderType::Transip);
        assert_eq!(creds.provider_type().to_string(), "transip");
    }
}
