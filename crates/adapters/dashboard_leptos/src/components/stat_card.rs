//! Stat card component for one labelled membership count.

use leptos::prelude::*;
use plmhub_domain::stats::StatsOverview;

/// A card displaying a label and an optional count.
///
/// The value region carries `marker` as an extra css class so the count
/// can be addressed from outside (`.documents-count`, `.parts-count`,
/// `.users-count`, `.products-count`). While the count is [`None`] the
/// region stays empty.
#[component]
pub fn StatCard(
    /// The label shown next to the count.
    #[prop(into)]
    label: String,
    /// Extra css class on the value region.
    marker: &'static str,
    /// The count to display, once known.
    value: Option<u64>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <span class="stat-label">{label}</span>
            <span class=format!("stat-value {marker}")>
                {value.map(|count| count.to_string()).unwrap_or_default()}
            </span>
        </div>
    }
}

/// Project one count out of a statistics fetch: present once the fetch
/// resolved successfully, absent while it is pending or after it failed.
pub(crate) fn region_count<E>(
    fetched: Option<&Result<StatsOverview, E>>,
    pick: fn(&StatsOverview) -> u64,
) -> Option<u64> {
    fetched.and_then(|result| result.as_ref().ok()).map(pick)
}

#[cfg(test)]
mod tests {
    use super::*;

    const STATS: StatsOverview = StatsOverview {
        documents: 3,
        parts: 7,
        users: 2,
        products: 0,
    };

    #[test]
    fn should_stay_empty_while_the_fetch_is_pending() {
        assert_eq!(region_count::<()>(None, |s| s.documents), None);
    }

    #[test]
    fn should_stay_empty_after_a_failed_fetch() {
        let failed: Result<StatsOverview, &str> = Err("boom");
        assert_eq!(region_count(Some(&failed), |s| s.documents), None);
    }

    #[test]
    fn should_project_each_count_once_resolved() {
        let resolved: Result<StatsOverview, ()> = Ok(STATS);
        let fetched = Some(&resolved);
        assert_eq!(region_count(fetched, |s| s.documents), Some(3));
        assert_eq!(region_count(fetched, |s| s.parts), Some(7));
        assert_eq!(region_count(fetched, |s| s.users), Some(2));
        assert_eq!(region_count(fetched, |s| s.products), Some(0));
    }

    #[test]
    fn should_render_a_zero_count_as_the_digit_zero() {
        let resolved: Result<StatsOverview, ()> = Ok(STATS);
        let text = region_count(Some(&resolved), |s| s.products)
            .map(|count| count.to_string())
            .unwrap_or_default();
        assert_eq!(text, "0");
    }
}
