use serde::{Deserialize, Serialize};

/// Flat aggregate rendered by the admin dashboard, replaced wholesale on
/// every fetch. Counts plus KRW totals; the backend owns every
/// computation, this struct never derives anything locally.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetrics {
    pub total_subscriptions: u64,
    pub new_subscriptions_today: u64,
    pub paused_subscriptions: u64,
    pub subs_cancel_all: u64,
    pub subs_cancel_today: u64,
    pub all_reviews: u64,
    pub new_reviews: u64,
    pub total_customers: u64,
    pub new_customers_today: u64,
    pub deleted_customers_today: u64,
    pub monthly_sales: u64,
    pub monthly_refunds: u64,
    pub monthly_total_sales: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_the_full_field_set() {
        let json = r#"{
            "total_subscriptions": 1482,
            "new_subscriptions_today": 36,
            "paused_subscriptions": 12,
            "subs_cancel_all": 217,
            "subs_cancel_today": 4,
            "all_reviews": 958,
            "new_reviews": 17,
            "total_customers": 3125,
            "new_customers_today": 41,
            "deleted_customers_today": 3,
            "monthly_sales": 48200000,
            "monthly_refunds": 1730000,
            "monthly_total_sales": 46470000
        }"#;

        let snapshot: DashboardMetrics = serde_json::from_str(json).expect("valid snapshot");
        assert_eq!(snapshot.total_subscriptions, 1482);
        assert_eq!(snapshot.monthly_total_sales, 46_470_000);
    }
}
