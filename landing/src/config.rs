//! Site configuration.
//!
//! `site.toml` is baked into the bundle with `include_str!` and parsed once at
//! startup. The parsed [`SiteConfig`] is handed to the component tree through
//! Leptos context; components read it with [`SiteConfig::current`].

use leptos::prelude::*;
use serde::Deserialize;

use crate::error::ConfigError;

/// Raw contents of `landing/site.toml`.
pub const SITE_TOML: &str = include_str!("../site.toml");

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    pub business_name: String,
    pub tagline: String,
    pub since: u16,
    pub email: String,
    pub logo_url: String,
    pub hero_image: String,
    pub facility_image: String,
    #[serde(default = "default_base_path")]
    pub base_path: String,
    pub address: Address,
    pub phones: Vec<Phone>,
    pub form: FormSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
}

/// A named phone line, shown as "Jay: (616) 822-5300".
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Phone {
    pub label: String,
    pub display: String,
    /// Digits only, used for the `tel:` link.
    pub dial: String,
}

/// Where and how the contact form is posted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FormSettings {
    pub endpoint: String,
    /// Value of the hidden `form-name` field the backend routes on.
    pub name: String,
    /// Name of the hidden spam trap input.
    pub honeypot: String,
}

fn default_base_path() -> String {
    "/".to_string()
}

impl SiteConfig {
    /// Parse and validate the embedded `site.toml`.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_toml_str(SITE_TOML)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.form.endpoint.trim().is_empty() {
            return Err(ConfigError::Invalid("form.endpoint is empty".into()));
        }
        if self.form.name.trim().is_empty() {
            return Err(ConfigError::Invalid("form.name is empty".into()));
        }
        if self.phones.is_empty() {
            return Err(ConfigError::Invalid(
                "at least one phone line is required".into(),
            ));
        }
        if !self.base_path.starts_with('/') {
            return Err(ConfigError::Invalid(format!(
                "base_path must start with '/', got {:?}",
                self.base_path
            )));
        }
        Ok(())
    }

    /// Config provided by `App`, or the built-in defaults outside of it.
    pub fn current() -> Self {
        use_context::<SiteConfig>().unwrap_or_default()
    }

    pub fn mailto_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

impl Phone {
    pub fn tel_href(&self) -> String {
        format!("tel:{}", self.dial)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Northwest Polishing & Buffing".into(),
            tagline: "Expert polishing and buffing for many types of metal products. \
                      Delivering mirror-quality finishes for machine shops, foundries, \
                      and fabricators throughout West Michigan."
                .into(),
            since: 1965,
            email: "sales@nwpolishandbuff.com".into(),
            logo_url: "https://cdn.wegic.ai/assets/onepage/agent/images/1770907694841_edited.png?imageMogr2/format/webp".into(),
            hero_image: "https://cdn.wegic.ai/assets/onepage/uploads/2021942976312688641/image/2026/02/12/01KH92TY2492FKWNG90KX4ZSRE.jpg?imageMogr2/format/webp".into(),
            facility_image: "https://cdn.wegic.ai/assets/onepage/agent/images/1770907659605_edited.png?imageMogr2/format/webp".into(),
            base_path: default_base_path(),
            address: Address {
                street: "275 Roosevelt St.".into(),
                city: "Conklin, MI 49403".into(),
            },
            phones: vec![
                Phone {
                    label: "Jay".into(),
                    display: "(616) 822-5300".into(),
                    dial: "6168225300".into(),
                },
                Phone {
                    label: "Jason".into(),
                    display: "(616) 890-8901".into(),
                    dial: "6168908901".into(),
                },
            ],
            form: FormSettings {
                endpoint: "/".into(),
                name: "contact".into(),
                honeypot: "bot-field".into(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_config_matches_defaults() {
        let loaded = SiteConfig::load().expect("embedded site.toml must parse");
        assert_eq!(loaded, SiteConfig::default());
    }

    #[test]
    fn rejects_empty_endpoint() {
        let raw = SITE_TOML.replace("endpoint = \"/\"", "endpoint = \"  \"");
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("endpoint")));
    }

    #[test]
    fn rejects_relative_base_path() {
        let raw = SITE_TOML.replace("base_path = \"/\"", "base_path = \"site\"");
        let err = SiteConfig::from_toml_str(&raw).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(msg) if msg.contains("base_path")));
    }

    #[test]
    fn base_path_defaults_to_root() {
        let raw = SITE_TOML.replace("base_path = \"/\"", "");
        let config = SiteConfig::from_toml_str(&raw).unwrap();
        assert_eq!(config.base_path, "/");
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = SiteConfig::from_toml_str("business_name = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn phone_and_mail_links() {
        let config = SiteConfig::default();
        assert_eq!(config.phones[0].tel_href(), "tel:6168225300");
        assert_eq!(config.mailto_href(), "mailto:sales@nwpolishandbuff.com");
    }
}
