use serde::{Deserialize, Serialize};

/// Account holder behind one cancelled subscription.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CancellationUser {
    pub name: String,
    pub email: String,
    pub phone: Option<String>, // not collected by every signup path
}

/// Refund lifecycle of a cancellation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    RefundPending,
    RefundCompleted,
}

impl RefundStatus {
    pub fn is_pending(self) -> bool {
        matches!(self, RefundStatus::RefundPending)
    }
}

/// One subscription cancellation event as served by the admin API.
///
/// `refund_date` and `refund_amount` are set if and only if
/// `refund_status` is [`RefundStatus::RefundCompleted`]. The backend owns
/// that transition; the UI treats each record as an immutable snapshot and
/// only ever asks for a refund through its callback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cancellation {
    pub user: CancellationUser,
    pub cancelled_date: String, // YYYY-MM-DD
    pub cancelled_reason: String,
    pub refund_status: RefundStatus,
    pub refund_date: Option<String>,
    pub refund_amount: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn refund_status_uses_snake_case_wire_literals() {
        let json = r#"{
            "user": {"name": "김지유", "email": "jiyu@example.com", "phone": "010-1234-5678"},
            "cancelled_date": "2024-03-02",
            "cancelled_reason": "expensive",
            "refund_status": "refund_pending",
            "refund_date": null,
            "refund_amount": null
        }"#;

        let parsed: Cancellation = serde_json::from_str(json).expect("valid record");
        assert_eq!(parsed.refund_status, RefundStatus::RefundPending);
        assert!(parsed.refund_status.is_pending());
        assert!(parsed.refund_date.is_none());
        assert!(parsed.refund_amount.is_none());
    }

    #[test]
    fn completed_refund_carries_date_and_amount() {
        let json = r#"{
            "user": {"name": "이서준", "email": "seojun@example.com", "phone": null},
            "cancelled_date": "2024-02-11",
            "cancelled_reason": "buget_cut",
            "refund_status": "refund_completed",
            "refund_date": "2024-02-12",
            "refund_amount": 29900
        }"#;

        let parsed: Cancellation = serde_json::from_str(json).expect("valid record");
        assert_eq!(parsed.refund_status, RefundStatus::RefundCompleted);
        assert!(!parsed.refund_status.is_pending());
        assert_eq!(parsed.refund_date.as_deref(), Some("2024-02-12"));
        assert_eq!(parsed.refund_amount, Some(29_900));
        assert!(parsed.user.phone.is_none());
    }

    #[test]
    fn serialization_round_trips() {
        let record = Cancellation {
            user: CancellationUser {
                name: "박하은".to_string(),
                email: "haeun@example.com".to_string(),
                phone: Some("010-9876-5432".to_string()),
            },
            cancelled_date: "2024-05-20".to_string(),
            cancelled_reason: "quality".to_string(),
            refund_status: RefundStatus::RefundPending,
            refund_date: None,
            refund_amount: None,
        };

        let json = serde_json::to_string(&record).expect("serializable");
        assert!(json.contains("\"refund_pending\""));
        let back: Cancellation = serde_json::from_str(&json).expect("round trip");
        assert_eq!(back, record);
    }
}
