use serde::{Deserialize, Serialize};

/// Stored Mailjet options, as edited from the admin settings endpoint
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailjetOptions {
    #[serde(default)]
    pub mailjet_api_key_field: Option<String>,
    #[serde(default)]
    pub mailjet_private_key_field: Option<String>,
}

impl MailjetOptions {
    /// Copy safe to return from the settings endpoint: the private key is
    /// reduced to its last four characters, or hidden entirely when short.
    pub fn masked(&self) -> Self {
        Self {
            mailjet_api_key_field: self.mailjet_api_key_field.clone(),
            mailjet_private_key_field: self.mailjet_private_key_field.as_deref().map(mask_secret),
        }
    }
}

fn mask_secret(secret: &str) -> String {
    const MASK: &str = "********";

    if secret.is_empty() {
        return String::new();
    }

    let chars: Vec<char> = secret.chars().collect();
    if chars.len() < 12 {
        return MASK.to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}{}", MASK, tail)
}

/// Credentials read once per send
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub private_key: Option<String>,
}

/// Both keys, guaranteed non-empty
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiKeys<'a> {
    pub api_key: &'a str,
    pub private_key: &'a str,
}

impl Credentials {
    pub fn new(api_key: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            private_key: Some(private_key.into()),
        }
    }

    /// `None` unless both keys are set and non-empty.
    pub fn keys(&self) -> Option<ApiKeys<'_>> {
        let api_key = self.api_key.as_deref().filter(|k| !k.is_empty())?;
        let private_key = self.private_key.as_deref().filter(|k| !k.is_empty())?;
        Some(ApiKeys {
            api_key,
            private_key,
        })
    }
}

impl From<MailjetOptions> for Credentials {
    fn from(options: MailjetOptions) -> Self {
        Self {
            api_key: options.mailjet_api_key_field,
            private_key: options.mailjet_private_key_field,
        }
    }
}

/// PUT /api/v1/settings body
#[derive(Debug, Deserialize)]
pub struct UpdateSettingsRequest {
    #[serde(default)]
    pub mailjet_api_key_field: String,
    #[serde(default)]
    pub mailjet_private_key_field: String,
}

#[derive(Debug, Serialize)]
pub struct UpdateSettingsResponse {
    pub message: String,
    pub settings: MailjetOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keys_require_both_values() {
        assert!(Credentials::new("key", "secret").keys().is_some());
        assert!(Credentials::new("", "secret").keys().is_none());
        assert!(Credentials::new("key", "").keys().is_none());
        assert!(Credentials::default().keys().is_none());
    }

    #[test]
    fn test_masked_hides_private_key() {
        let options = MailjetOptions {
            mailjet_api_key_field: Some("public".to_string()),
            mailjet_private_key_field: Some("0123456789abcdef".to_string()),
        };

        let masked = options.masked();
        assert_eq!(masked.mailjet_api_key_field.as_deref(), Some("public"));
        assert_eq!(masked.mailjet_private_key_field.as_deref(), Some("********cdef"));
    }

    #[test]
    fn test_masked_short_or_missing_key() {
        let short = MailjetOptions {
            mailjet_api_key_field: None,
            mailjet_private_key_field: Some("secret".to_string()),
        };
        assert_eq!(
            short.masked().mailjet_private_key_field.as_deref(),
            Some("********")
        );

        assert_eq!(MailjetOptions::default().masked(), MailjetOptions::default());
    }

    #[test]
    fn test_options_convert_to_credentials() {
        let options = MailjetOptions {
            mailjet_api_key_field: Some("key".to_string()),
            mailjet_private_key_field: None,
        };

        let credentials = Credentials::from(options);
        assert_eq!(credentials.api_key.as_deref(), Some("key"));
        assert!(credentials.keys().is_none());
    }
}
