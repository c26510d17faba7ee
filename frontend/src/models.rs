// Re-export the shared data model next to its mock fixtures.
#[cfg_attr(not(feature = "mock"), allow(unused_imports))]
pub use subdesk_shared::{Cancellation, CancellationUser, DashboardMetrics, RefundStatus};

/// One dashboard snapshot for offline development.
#[cfg(feature = "mock")]
pub fn mock_dashboard_metrics() -> DashboardMetrics {
    DashboardMetrics {
        total_subscriptions: 1482,
        new_subscriptions_today: 36,
        paused_subscriptions: 12,
        subs_cancel_all: 217,
        subs_cancel_today: 4,
        all_reviews: 958,
        new_reviews: 17,
        total_customers: 3125,
        new_customers_today: 41,
        deleted_customers_today: 3,
        monthly_sales: 48_200_000,
        monthly_refunds: 1_730_000,
        monthly_total_sales: 46_470_000,
    }
}

/// 23 cancellation records — enough to exercise three table pages, mixed
/// refund states, a couple of accounts without a phone number, and one
/// reason code the translation table does not know.
#[cfg(feature = "mock")]
pub fn mock_cancellations() -> Vec<Cancellation> {
    let names = [
        "김지유", "이서준", "박하은", "최민재", "정수아", "강도윤", "조예린", "윤시우",
    ];
    let reasons = [
        "expensive",
        "quality",
        "slow_communication",
        "hire_full_time",
        "buget_cut",
        "moving_abroad",
    ];

    (1usize..=23)
        .map(|i| {
            let completed = i % 3 == 0;
            let phone = if i % 7 == 0 {
                None // signed up through a channel without phone collection
            } else {
                Some(format!("010-{:04}-{:04}", 1200 + i * 7, 3000 + i * 13))
            };

            Cancellation {
                user: CancellationUser {
                    name: names[(i - 1) % names.len()].to_string(),
                    email: format!("user{:02}@example.com", i),
                    phone,
                },
                cancelled_date: format!("2024-{:02}-{:02}", (i % 6) + 1, (i % 27) + 1),
                cancelled_reason: reasons[(i - 1) % reasons.len()].to_string(),
                refund_status: if completed {
                    RefundStatus::RefundCompleted
                } else {
                    RefundStatus::RefundPending
                },
                refund_date: completed.then(|| format!("2024-{:02}-{:02}", (i % 6) + 1, (i % 27) + 2)),
                refund_amount: completed.then(|| 9_900 + (i as u64 % 4) * 10_000),
            }
        })
        .collect()
}
