use std::fmt;

use serde::Deserialize;

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Provider {
    pub id: String,
    pub name: String,
    /// Brand color token, used as a css class suffix (`brand-<color>`).
    pub color: String,
    pub logo: String,
}

#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Internet,
    Tv,
    Bundle,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Internet, Category::Tv, Category::Bundle];

    pub fn label(self) -> &'static str {
        match self {
            Category::Internet => "Интернет",
            Category::Tv => "Телевидение",
            Category::Bundle => "Интернет + ТВ",
        }
    }
}

/// Promo variants quote prices as free text, the others as a monthly fee in roubles.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Price {
    Monthly(u32),
    Label(String),
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Price::Monthly(amount) => write!(f, "{}₽/мес", amount),
            Price::Label(label) => f.write_str(label),
        }
    }
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct Tariff {
    pub id: String,
    pub provider: String,
    pub name: String,
    pub speed: String,
    pub price: Price,
    pub category: Category,
    #[serde(default)]
    pub channels: Option<u32>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Service-type tab above the tariff grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ServiceTab {
    #[default]
    All,
    Only(Category),
}

impl ServiceTab {
    pub fn category(self) -> Option<Category> {
        match self {
            ServiceTab::All => None,
            ServiceTab::Only(category) => Some(category),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceTab::All => "Все",
            ServiceTab::Only(category) => category.label(),
        }
    }

    pub fn all() -> impl Iterator<Item = ServiceTab> {
        std::iter::once(ServiceTab::All).chain(Category::ALL.into_iter().map(ServiceTab::Only))
    }
}

/// Tariffs matching every active filter, in catalog order.
pub fn filter_tariffs<'a>(
    tariffs: &'a [Tariff],
    provider: Option<&str>,
    category: Option<Category>,
) -> Vec<&'a Tariff> {
    tariffs
        .iter()
        .filter(|tariff| provider.map_or(true, |p| tariff.provider == p))
        .filter(|tariff| category.map_or(true, |c| tariff.category == c))
        .collect()
}

/// Clicking the selected provider clears the filter, any other provider replaces it.
pub fn toggle_provider(selected: Option<&str>, clicked: &str) -> Option<String> {
    if selected == Some(clicked) {
        None
    } else {
        Some(clicked.to_string())
    }
}

pub fn find_provider<'a>(providers: &'a [Provider], id: &str) -> Option<&'a Provider> {
    providers.iter().find(|provider| provider.id == id)
}

pub fn find_tariff<'a>(tariffs: &'a [Tariff], id: &str) -> Option<&'a Tariff> {
    tariffs.iter().find(|tariff| tariff.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tariff(id: &str, provider: &str, category: Category) -> Tariff {
        Tariff {
            id: id.to_string(),
            provider: provider.to_string(),
            name: format!("Тариф {}", id),
            speed: "500 Мбит/с".to_string(),
            price: Price::Monthly(750),
            category,
            channels: None,
            features: vec![],
            featured: false,
        }
    }

    fn sample() -> Vec<Tariff> {
        vec![
            tariff("1", "mts", Category::Internet),
            tariff("2", "beeline", Category::Bundle),
            tariff("3", "mts", Category::Bundle),
            tariff("4", "rostelecom", Category::Tv),
            tariff("5", "beeline", Category::Internet),
        ]
    }

    fn ids(tariffs: &[&Tariff]) -> Vec<String> {
        tariffs.iter().map(|t| t.id.clone()).collect()
    }

    #[test]
    fn test_no_filter_is_identity() {
        let tariffs = sample();
        let filtered = filter_tariffs(&tariffs, None, None);
        assert_eq!(ids(&filtered), vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_provider_filter_keeps_order() {
        let tariffs = sample();
        assert_eq!(ids(&filter_tariffs(&tariffs, Some("mts"), None)), vec!["1", "3"]);
        assert_eq!(ids(&filter_tariffs(&tariffs, Some("beeline"), None)), vec!["2", "5"]);
    }

    #[test]
    fn test_unknown_provider_yields_empty() {
        let tariffs = sample();
        assert!(filter_tariffs(&tariffs, Some("yota"), None).is_empty());
    }

    #[test]
    fn test_provider_and_category_combine() {
        let tariffs = sample();
        let filtered = filter_tariffs(&tariffs, Some("mts"), Some(Category::Bundle));
        assert_eq!(ids(&filtered), vec!["3"]);

        let filtered = filter_tariffs(&tariffs, None, Some(Category::Internet));
        assert_eq!(ids(&filtered), vec!["1", "5"]);

        assert!(filter_tariffs(&tariffs, Some("rostelecom"), Some(Category::Bundle)).is_empty());
    }

    #[test]
    fn test_toggle_provider() {
        assert_eq!(toggle_provider(None, "mts"), Some("mts".to_string()));
        assert_eq!(toggle_provider(Some("mts"), "mts"), None);
        assert_eq!(toggle_provider(Some("mts"), "megafon"), Some("megafon".to_string()));
    }

    #[test]
    fn test_price_display() {
        assert_eq!(Price::Monthly(650).to_string(), "650₽/мес");
        assert_eq!(Price::Label("750₽/мес".to_string()).to_string(), "750₽/мес");
    }

    #[test]
    fn test_price_deserializes_number_or_text() {
        let monthly: Price = serde_json::from_str("550").unwrap();
        assert_eq!(monthly, Price::Monthly(550));
        let label: Price = serde_json::from_str("\"375₽ первые 2 месяца\"").unwrap();
        assert_eq!(label, Price::Label("375₽ первые 2 месяца".to_string()));
    }

    #[test]
    fn test_service_tabs_order() {
        let tabs: Vec<ServiceTab> = ServiceTab::all().collect();
        assert_eq!(tabs.len(), 4);
        assert_eq!(tabs[0], ServiceTab::All);
        assert_eq!(tabs[0].category(), None);
        assert_eq!(tabs[2].category(), Some(Category::Tv));
    }
}
