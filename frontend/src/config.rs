use std::collections::HashSet;

use serde::Deserialize;
use thiserror::Error;

use crate::catalog::{Provider, Tariff};

pub const BRAND_NAME: &str = "Телепорт";
pub const BRAND_TAGLINE: &str = "Будь здесь и там одновременно";

pub const CONTACT_PHONE_DISPLAY: &str = "8-995-150-88-33";
pub const CONTACT_PHONE_DIGITS: &str = "89951508833";

const MESSENGER_GREETING: &str = "Здравствуйте! Хочу подобрать тариф на интернет и ТВ.";

pub fn phone_link() -> String {
    format!("tel:{}", CONTACT_PHONE_DIGITS)
}

pub fn telegram_link() -> String {
    format!("https://t.me/{}", CONTACT_PHONE_DIGITS)
}

pub fn whatsapp_link() -> String {
    format!(
        "https://wa.me/{}?text={}",
        CONTACT_PHONE_DIGITS,
        urlencoding::encode(MESSENGER_GREETING)
    )
}

/// Which of the embedded page configurations to render.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageVariant {
    Classic,
    Extended,
    Tabs,
}

impl PageVariant {
    pub fn name(self) -> &'static str {
        match self {
            PageVariant::Classic => "classic",
            PageVariant::Extended => "extended",
            PageVariant::Tabs => "tabs",
        }
    }

    fn source(self) -> &'static str {
        match self {
            PageVariant::Classic => include_str!("../catalogs/classic.json"),
            PageVariant::Extended => include_str!("../catalogs/extended.json"),
            PageVariant::Tabs => include_str!("../catalogs/tabs.json"),
        }
    }

    pub fn load(self) -> Result<PageConfig, ConfigError> {
        PageConfig::from_json_str(self.source())
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("page config has no {0}")]
    Empty(&'static str),
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("tariff '{tariff}' references unknown provider '{provider}'")]
    UnknownProvider { tariff: String, provider: String },
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub cta: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq, Default)]
#[serde(default)]
pub struct PageFeatures {
    /// Service-type tabs above the tariff grid.
    pub service_tabs: bool,
    /// Lead form rendered inline in the `#order` section besides the dialog.
    pub inline_order: bool,
    pub comment_field: bool,
    pub close_order_on_submit: bool,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub hero: Hero,
    #[serde(default)]
    pub features: PageFeatures,
    pub providers: Vec<Provider>,
    pub tariffs: Vec<Tariff>,
    #[serde(default)]
    pub faq: Vec<FaqEntry>,
}

impl PageConfig {
    pub fn from_json_str(content: &str) -> Result<Self, ConfigError> {
        let config: PageConfig = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.providers.is_empty() {
            return Err(ConfigError::Empty("providers"));
        }
        if self.tariffs.is_empty() {
            return Err(ConfigError::Empty("tariffs"));
        }

        let mut provider_ids = HashSet::new();
        for provider in &self.providers {
            if !provider_ids.insert(provider.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    kind: "provider",
                    id: provider.id.clone(),
                });
            }
        }

        let mut tariff_ids = HashSet::new();
        for tariff in &self.tariffs {
            if !tariff_ids.insert(tariff.id.as_str()) {
                return Err(ConfigError::DuplicateId {
                    kind: "tariff",
                    id: tariff.id.clone(),
                });
            }
            if !provider_ids.contains(tariff.provider.as_str()) {
                return Err(ConfigError::UnknownProvider {
                    tariff: tariff.id.clone(),
                    provider: tariff.provider.clone(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [PageVariant; 3] = [PageVariant::Classic, PageVariant::Extended, PageVariant::Tabs];
    use crate::catalog::{filter_tariffs, Category, Price};

    const MINIMAL: &str = r#"{
        "hero": { "title": "t", "subtitle": "s", "cta": "c" },
        "providers": [
            { "id": "mts", "name": "МТС", "color": "mts", "logo": "https://cdn.example/mts.png" }
        ],
        "tariffs": [
            { "id": "1", "provider": "mts", "name": "Дом", "speed": "100 Мбит/с",
              "price": 500, "category": "internet" }
        ]
    }"#;

    #[test]
    fn test_all_embedded_configs_load() {
        for variant in VARIANTS {
            let config = variant
                .load()
                .unwrap_or_else(|e| panic!("{} config invalid: {}", variant.name(), e));
            assert_eq!(config.providers.len(), 4, "{}", variant.name());
            assert!((4..=8).contains(&config.tariffs.len()), "{}", variant.name());
            assert!(!config.faq.is_empty());
        }
    }

    #[test]
    fn test_minimal_config_defaults() {
        let config = PageConfig::from_json_str(MINIMAL).unwrap();
        assert_eq!(config.features, PageFeatures::default());
        assert!(config.faq.is_empty());
        let tariff = &config.tariffs[0];
        assert_eq!(tariff.channels, None);
        assert!(tariff.features.is_empty());
        assert!(!tariff.featured);
    }

    #[test]
    fn test_unknown_provider_rejected() {
        let content = MINIMAL.replace("\"provider\": \"mts\"", "\"provider\": \"yota\"");
        match PageConfig::from_json_str(&content) {
            Err(ConfigError::UnknownProvider { tariff, provider }) => {
                assert_eq!(tariff, "1");
                assert_eq!(provider, "yota");
            }
            other => panic!("expected unknown provider error, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_tariff_rejected() {
        let mut config = PageConfig::from_json_str(MINIMAL).unwrap();
        config.tariffs.push(config.tariffs[0].clone());
        assert!(matches!(
            config.validate(),
            Err(ConfigError::DuplicateId { kind: "tariff", .. })
        ));
    }

    #[test]
    fn test_empty_catalog_rejected() {
        let mut config = PageConfig::from_json_str(MINIMAL).unwrap();
        config.tariffs.clear();
        assert!(matches!(config.validate(), Err(ConfigError::Empty("tariffs"))));
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        assert!(matches!(
            PageConfig::from_json_str("{ \"hero\": "),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_classic_mts_has_single_bundle() {
        let config = PageVariant::Classic.load().unwrap();
        let mts = filter_tariffs(&config.tariffs, Some("mts"), None);
        assert_eq!(mts.len(), 1);
        assert_eq!(mts[0].category, Category::Bundle);
        assert!(matches!(mts[0].price, Price::Label(_)));
        assert!(!config.features.service_tabs);
    }

    #[test]
    fn test_tabs_mts_has_internet_and_bundle() {
        let config = PageVariant::Tabs.load().unwrap();
        let mts: Vec<Category> = filter_tariffs(&config.tariffs, Some("mts"), None)
            .iter()
            .map(|t| t.category)
            .collect();
        assert_eq!(mts, vec![Category::Internet, Category::Bundle]);
        assert!(config.features.service_tabs);
        assert_eq!(config.tariffs.len(), 8);
    }

    #[test]
    fn test_extended_collects_comment() {
        let config = PageVariant::Extended.load().unwrap();
        assert!(config.features.comment_field);
        assert!(config.features.inline_order);
        assert!(config.tariffs.iter().all(|t| matches!(t.price, Price::Monthly(_))));
    }

    #[test]
    fn test_contact_links() {
        assert_eq!(phone_link(), "tel:89951508833");
        assert_eq!(telegram_link(), "https://t.me/89951508833");
        let whatsapp = whatsapp_link();
        assert!(whatsapp.starts_with("https://wa.me/89951508833?text="));
        assert!(!whatsapp.contains(' '));
    }
}
