use thiserror::Error;

use crate::catalog::{find_tariff, Tariff};

pub const COMPARE_LIMIT: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareChange {
    Added,
    Removed,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("comparison limited to {limit} items simultaneously")]
    LimitReached { limit: usize },
}

/// Ordered tariff ids marked for side-by-side comparison, at most `COMPARE_LIMIT`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompareSet {
    ids: Vec<String>,
}

impl CompareSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes a member, appends a newcomer while below the limit, and
    /// otherwise leaves the set untouched.
    pub fn toggle(&mut self, id: &str) -> Result<CompareChange, CompareError> {
        if let Some(pos) = self.ids.iter().position(|member| member == id) {
            self.ids.remove(pos);
            return Ok(CompareChange::Removed);
        }
        if self.ids.len() >= COMPARE_LIMIT {
            return Err(CompareError::LimitReached { limit: COMPARE_LIMIT });
        }
        self.ids.push(id.to_string());
        Ok(CompareChange::Added)
    }

    pub fn clear(&mut self) {
        self.ids.clear();
    }

    pub fn contains(&self, id: &str) -> bool {
        self.ids.iter().any(|member| member == id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Member tariffs in insertion order; ids missing from the catalog are skipped.
    pub fn resolve<'a>(&self, tariffs: &'a [Tariff]) -> Vec<&'a Tariff> {
        self.ids
            .iter()
            .filter_map(|id| find_tariff(tariffs, id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Category, Price};

    fn filled(ids: &[&str]) -> CompareSet {
        let mut set = CompareSet::new();
        for id in ids {
            set.toggle(id).unwrap();
        }
        set
    }

    #[test]
    fn test_toggle_is_its_own_inverse_below_limit() {
        for start in [&[][..], &["1"][..], &["1", "2"][..]] {
            let original = filled(start);
            let mut set = original.clone();
            assert_eq!(set.toggle("9"), Ok(CompareChange::Added));
            assert!(set.contains("9"));
            assert_eq!(set.toggle("9"), Ok(CompareChange::Removed));
            assert_eq!(set, original);
        }
    }

    #[test]
    fn test_limit_boundary() {
        let mut set = filled(&["a", "b"]);
        assert_eq!(set.toggle("c"), Ok(CompareChange::Added));
        assert_eq!(set.len(), COMPARE_LIMIT);

        let before = set.clone();
        assert_eq!(set.toggle("d"), Err(CompareError::LimitReached { limit: 3 }));
        assert_eq!(set, before);
        assert!(!set.contains("d"));
    }

    #[test]
    fn test_member_can_be_removed_when_full() {
        let mut set = filled(&["a", "b", "c"]);
        assert_eq!(set.toggle("a"), Ok(CompareChange::Removed));
        assert_eq!(set, filled(&["b", "c"]));
    }

    #[test]
    fn test_compare_scenario() {
        let mut set = CompareSet::new();
        for id in ["1", "2", "3"] {
            set.toggle(id).unwrap();
        }
        assert_eq!(set, filled(&["1", "2", "3"]));

        let err = set.toggle("4").unwrap_err();
        assert_eq!(err.to_string(), "comparison limited to 3 items simultaneously");
        assert_eq!(set, filled(&["1", "2", "3"]));

        set.toggle("2").unwrap();
        assert_eq!(set, filled(&["1", "3"]));
    }

    #[test]
    fn test_rejected_toggle_keeps_card_unchecked() {
        let mut set = filled(&["1", "2", "3"]);
        assert!(!set.contains("4"));
        assert!(set.toggle("4").is_err());
        assert!(!set.contains("4"));
        assert_eq!(set.len(), COMPARE_LIMIT);

        set.toggle("1").unwrap();
        set.toggle("4").unwrap();
        assert!(set.contains("4"));
        assert!(!set.contains("1"));
    }

    #[test]
    fn test_clear_from_any_state() {
        for start in [&[][..], &["1"][..], &["1", "2", "3"][..]] {
            let mut set = filled(start);
            set.clear();
            assert!(set.is_empty());
            assert_eq!(set, CompareSet::new());
        }
    }

    #[test]
    fn test_resolve_follows_set_order_and_skips_unknown() {
        let tariff = |id: &str| Tariff {
            id: id.to_string(),
            provider: "mts".to_string(),
            name: id.to_string(),
            speed: "100 Мбит/с".to_string(),
            price: Price::Monthly(500),
            category: Category::Internet,
            channels: None,
            features: vec![],
            featured: false,
        };
        let tariffs = vec![tariff("1"), tariff("2"), tariff("3")];
        let set = filled(&["3", "missing", "1"]);

        let resolved: Vec<&str> = set.resolve(&tariffs).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(resolved, vec!["3", "1"]);
    }
}
