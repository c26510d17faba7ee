use subdesk_shared::{
    format::format_thousands,
    sort::{self, SortField, SortState},
    Cancellation,
};
use yew::prelude::*;

use crate::{
    components::{pagination::Pagination, sortable_header::SortableHeader},
    hooks::use_pagination,
    i18n::current::{cancellation_table as t, common as common_text},
};

/// Rows shown per table page.
const ITEMS_PER_PAGE: usize = 10;

#[derive(Properties, PartialEq)]
pub struct CancellationTableProps {
    pub cancellations: Vec<Cancellation>,
    pub on_refund: Callback<Cancellation>,
}

/// Display text for a cancellation reason code. Unknown codes pass
/// through verbatim so a new backend code never renders blank.
fn reason_label(code: &str) -> String {
    match code {
        "expensive" => t::REASON_EXPENSIVE.to_string(),
        "quality" => t::REASON_QUALITY.to_string(),
        "slow_communication" => t::REASON_SLOW_COMMUNICATION.to_string(),
        "hire_full_time" => t::REASON_HIRE_FULL_TIME.to_string(),
        // `buget_cut` is the literal wire code the backend sends.
        "buget_cut" => t::REASON_BUDGET_CUT.to_string(),
        other => other.to_string(),
    }
}

#[function_component(CancellationTable)]
pub fn cancellation_table(props: &CancellationTableProps) -> Html {
    let sort_state = use_state(SortState::default);

    // Derived views stay pure: re-sorted only when the records or the
    // sort state change, re-sliced only when the sorted list or the page
    // change.
    let sorted = use_memo(
        (props.cancellations.clone(), *sort_state),
        |(records, state)| sort::sorted(records, *state),
    );

    let (visible, current_page, total_pages, go_to_page) =
        use_pagination((*sorted).clone(), ITEMS_PER_PAGE);

    let handle_sort = {
        let sort_state = sort_state.clone();
        Callback::from(move |field: SortField| {
            sort_state.set(sort_state.toggled(field));
        })
    };

    let sortable_columns = [
        (SortField::UserName, t::COL_NAME),
        (SortField::UserEmail, t::COL_EMAIL),
        (SortField::UserPhone, t::COL_PHONE),
        (SortField::CancelledDate, t::COL_CANCELLED_DATE),
    ];

    let refund_cell = |record: &Cancellation| -> Html {
        if record.refund_status.is_pending() {
            let on_refund = props.on_refund.clone();
            let record = record.clone();
            html! {
                <button
                    type="button"
                    class={classes!("w-[7rem]", "py-2", "border", "border-black", "rounded-[1.2rem]")}
                    onclick={Callback::from(move |_| on_refund.emit(record.clone()))}
                >
                    { t::REFUND_BUTTON }
                </button>
            }
        } else {
            let amount = record.refund_amount.map(format_thousands).unwrap_or_default();
            html! {
                <div class={classes!("flex", "items-center", "justify-center", "gap-2")}>
                    <span>{ record.refund_date.clone().unwrap_or_default() }</span>
                    <span>{ format!("{}{}", amount, common_text::CURRENCY_SUFFIX) }</span>
                </div>
            }
        }
    };

    html! {
        <div class={classes!("overflow-x-auto")}>
            <table class={classes!("w-full", "whitespace-nowrap")}>
                <thead>
                    <tr class={classes!("border-y", "bg-[#F3F3F3]")}>
                        { for sortable_columns.iter().map(|(field, label)| html! {
                            <SortableHeader
                                key={*label}
                                field={*field}
                                label={*label}
                                sort={*sort_state}
                                on_sort={handle_sort.clone()}
                            />
                        }) }
                        <th class={classes!("px-3", "py-4", "text-center")}>{ t::COL_REASON }</th>
                        <th class={classes!("px-3", "py-4", "text-center")}>{ t::COL_REFUND }</th>
                    </tr>
                </thead>
                <tbody>
                    if visible.is_empty() {
                        <tr>
                            <td colspan="6" class={classes!("py-10", "text-center", "text-[#666666]")}>
                                { t::EMPTY }
                            </td>
                        </tr>
                    } else {
                        { for visible.iter().map(|record| html! {
                            <tr key={record.user.email.clone()} class={classes!("border-b")}>
                                <td class={classes!("py-2", "text-center")}>{ record.user.name.clone() }</td>
                                <td class={classes!("py-2", "text-center")}>{ record.user.email.clone() }</td>
                                <td class={classes!("py-2", "text-center")}>
                                    { record.user.phone.clone().unwrap_or_else(|| common_text::EMPTY_VALUE.to_string()) }
                                </td>
                                <td class={classes!("py-2", "text-center")}>{ record.cancelled_date.clone() }</td>
                                <td class={classes!("py-2", "text-center")}>{ reason_label(&record.cancelled_reason) }</td>
                                <td class={classes!("py-2", "text-center")}>{ refund_cell(record) }</td>
                            </tr>
                        }) }
                    }
                </tbody>
            </table>

            if props.cancellations.len() > ITEMS_PER_PAGE {
                <div class={classes!("mt-6", "flex", "justify-center")}>
                    <Pagination
                        current_page={current_page}
                        total_pages={total_pages}
                        on_page_change={go_to_page}
                    />
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::reason_label;
    use crate::i18n::current::cancellation_table as t;

    #[test]
    fn maps_every_known_reason_code() {
        let expectations = [
            ("expensive", t::REASON_EXPENSIVE),
            ("quality", t::REASON_QUALITY),
            ("slow_communication", t::REASON_SLOW_COMMUNICATION),
            ("hire_full_time", t::REASON_HIRE_FULL_TIME),
            ("buget_cut", t::REASON_BUDGET_CUT),
        ];
        for (code, expected) in expectations {
            assert_eq!(reason_label(code), expected);
            assert!(!reason_label(code).is_empty());
        }
    }

    #[test]
    fn unknown_codes_echo_verbatim() {
        assert_eq!(reason_label("moving_abroad"), "moving_abroad");
        // The corrected spelling is NOT a known code on the wire.
        assert_eq!(reason_label("budget_cut"), "budget_cut");
    }
}
