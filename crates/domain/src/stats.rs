//! Point-in-time membership statistics for one workspace.

use serde::{Deserialize, Serialize};

/// Aggregate counts of what a workspace contains.
///
/// Produced on demand by the statistics endpoint, keyed by workspace id.
/// A snapshot is displayed once and never mutated; refreshing means
/// fetching a new one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsOverview {
    pub documents: u64,
    pub parts: u64,
    pub users: u64,
    pub products: u64,
}

impl StatsOverview {
    /// Sum of the four counts.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.documents + self.parts + self.users + self.products
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_all_zero() {
        let stats = StatsOverview::default();
        assert_eq!(stats.total(), 0);
    }

    #[test]
    fn should_sum_all_counts_in_total() {
        let stats = StatsOverview {
            documents: 3,
            parts: 7,
            users: 2,
            products: 0,
        };
        assert_eq!(stats.total(), 12);
    }

    #[test]
    fn should_deserialize_the_wire_field_names() {
        let stats: StatsOverview =
            serde_json::from_str(r#"{"documents":3,"parts":7,"users":2,"products":0}"#).unwrap();
        assert_eq!(stats.documents, 3);
        assert_eq!(stats.parts, 7);
        assert_eq!(stats.users, 2);
        assert_eq!(stats.products, 0);
    }

    #[test]
    fn should_serialize_the_wire_field_names() {
        let json = serde_json::to_value(StatsOverview::default()).unwrap();
        let object = json.as_object().unwrap();
        for field in ["documents", "parts", "users", "products"] {
            assert!(object.contains_key(field), "missing field {field}");
        }
    }
}
