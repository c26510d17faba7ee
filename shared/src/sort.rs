//! Column sorting for the cancellation table.
//!
//! The columns form a closed set, so field resolution is an enum with one
//! named accessor per column instead of any stringly keyed lookup. Values
//! resolve to `Option<&str>` and the comparator places absent values last
//! regardless of direction.

use std::cmp::Ordering;

use crate::cancellation::Cancellation;

/// Sortable columns of the cancellation table.
///
/// `User*` variants read through the nested [`crate::CancellationUser`];
/// `CancelledDate` compares the top-level field. The reason and refund
/// columns are static and deliberately have no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    UserName,
    UserEmail,
    UserPhone,
    CancelledDate,
}

impl SortField {
    /// Comparison value of one record for this column, `None` when absent.
    pub fn key(self, record: &Cancellation) -> Option<&str> {
        match self {
            SortField::UserName => Some(record.user.name.as_str()),
            SortField::UserEmail => Some(record.user.email.as_str()),
            SortField::UserPhone => record.user.phone.as_deref(),
            SortField::CancelledDate => Some(record.cancelled_date.as_str()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

/// Active column sort, cycling none → asc → desc → none per header click.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: Option<SortField>,
    pub order: SortOrder,
}

impl SortState {
    /// Next state after a click on `clicked`'s header.
    #[must_use]
    pub fn toggled(self, clicked: SortField) -> SortState {
        match self {
            SortState {
                field: Some(field),
                order: SortOrder::Ascending,
            } if field == clicked => SortState {
                field: Some(clicked),
                order: SortOrder::Descending,
            },
            SortState {
                field: Some(field),
                order: SortOrder::Descending,
            } if field == clicked => SortState::default(),
            _ => SortState {
                field: Some(clicked),
                order: SortOrder::Ascending,
            },
        }
    }
}

/// Reordered copy of `records` under `state`; the input stays untouched
/// and `field == None` returns it in input order.
///
/// Records whose resolved value is absent land after every present value
/// in BOTH directions — only the present/present comparison inverts for
/// descending. Two absent values keep their relative order (stable sort).
pub fn sorted(records: &[Cancellation], state: SortState) -> Vec<Cancellation> {
    let mut out = records.to_vec();
    let Some(field) = state.field else {
        return out;
    };

    out.sort_by(|a, b| match (field.key(a), field.key(b)) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(x), Some(y)) => match state.order {
            SortOrder::Ascending => x.cmp(y),
            SortOrder::Descending => y.cmp(x),
        },
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cancellation::{CancellationUser, RefundStatus};

    fn record(name: &str, phone: Option<&str>, date: &str) -> Cancellation {
        Cancellation {
            user: CancellationUser {
                name: name.to_string(),
                email: format!("{name}@example.com"),
                phone: phone.map(str::to_string),
            },
            cancelled_date: date.to_string(),
            cancelled_reason: "expensive".to_string(),
            refund_status: RefundStatus::RefundPending,
            refund_date: None,
            refund_amount: None,
        }
    }

    fn names(records: &[Cancellation]) -> Vec<&str> {
        records.iter().map(|r| r.user.name.as_str()).collect()
    }

    #[test]
    fn first_click_sorts_ascending_second_descending() {
        let state = SortState::default().toggled(SortField::UserName);
        assert_eq!(state.field, Some(SortField::UserName));
        assert_eq!(state.order, SortOrder::Ascending);

        let state = state.toggled(SortField::UserName);
        assert_eq!(state.order, SortOrder::Descending);
    }

    #[test]
    fn third_click_clears_back_to_the_default_state() {
        let state = SortState::default()
            .toggled(SortField::CancelledDate)
            .toggled(SortField::CancelledDate)
            .toggled(SortField::CancelledDate);
        assert_eq!(state, SortState::default());
    }

    #[test]
    fn clicking_another_column_restarts_at_ascending() {
        let state = SortState::default()
            .toggled(SortField::UserName)
            .toggled(SortField::UserName)
            .toggled(SortField::UserEmail);
        assert_eq!(state.field, Some(SortField::UserEmail));
        assert_eq!(state.order, SortOrder::Ascending);
    }

    #[test]
    fn no_active_field_keeps_input_order() {
        let input = vec![
            record("c", None, "2024-03-01"),
            record("a", None, "2024-01-01"),
            record("b", None, "2024-02-01"),
        ];
        assert_eq!(names(&sorted(&input, SortState::default())), ["c", "a", "b"]);
    }

    #[test]
    fn dates_sort_chronologically_both_ways() {
        let input = vec![
            record("a", None, "2024-01-01"),
            record("b", None, "2024-03-01"),
            record("c", None, "2024-02-01"),
        ];

        let asc = sorted(&input, SortState {
            field: Some(SortField::CancelledDate),
            order: SortOrder::Ascending,
        });
        let dates: Vec<&str> = asc.iter().map(|r| r.cancelled_date.as_str()).collect();
        assert_eq!(dates, ["2024-01-01", "2024-02-01", "2024-03-01"]);

        let desc = sorted(&input, SortState {
            field: Some(SortField::CancelledDate),
            order: SortOrder::Descending,
        });
        let dates: Vec<&str> = desc.iter().map(|r| r.cancelled_date.as_str()).collect();
        assert_eq!(dates, ["2024-03-01", "2024-02-01", "2024-01-01"]);
    }

    #[test]
    fn nested_user_fields_sort_through_the_user_record() {
        let input = vec![
            record("도윤", None, "2024-01-01"),
            record("가온", None, "2024-01-02"),
            record("나래", None, "2024-01-03"),
        ];
        let by_name = sorted(&input, SortState {
            field: Some(SortField::UserName),
            order: SortOrder::Ascending,
        });
        assert_eq!(names(&by_name), ["가온", "나래", "도윤"]);
    }

    #[test]
    fn absent_phone_sorts_last_in_both_directions() {
        let input = vec![
            record("none", None, "2024-01-01"),
            record("late", Some("010-9000-0000"), "2024-01-02"),
            record("early", Some("010-1000-0000"), "2024-01-03"),
        ];

        let asc = sorted(&input, SortState {
            field: Some(SortField::UserPhone),
            order: SortOrder::Ascending,
        });
        assert_eq!(names(&asc), ["early", "late", "none"]);

        // The absent record stays last even when descending; only the
        // present/present comparison flips.
        let desc = sorted(&input, SortState {
            field: Some(SortField::UserPhone),
            order: SortOrder::Descending,
        });
        assert_eq!(names(&desc), ["late", "early", "none"]);
    }

    #[test]
    fn two_absent_values_keep_relative_order() {
        let input = vec![
            record("first-missing", None, "2024-01-01"),
            record("present", Some("010-2000-0000"), "2024-01-02"),
            record("second-missing", None, "2024-01-03"),
        ];

        for order in [SortOrder::Ascending, SortOrder::Descending] {
            let result = sorted(&input, SortState {
                field: Some(SortField::UserPhone),
                order,
            });
            assert_eq!(names(&result), ["present", "first-missing", "second-missing"]);
        }
    }

    #[test]
    fn input_slice_is_not_mutated() {
        let input = vec![
            record("b", None, "2024-02-01"),
            record("a", None, "2024-01-01"),
        ];
        let _ = sorted(&input, SortState {
            field: Some(SortField::UserName),
            order: SortOrder::Ascending,
        });
        assert_eq!(names(&input), ["b", "a"]);
    }
}
