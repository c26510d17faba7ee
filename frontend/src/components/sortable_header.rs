use subdesk_shared::sort::{SortField, SortOrder, SortState};
use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::sortable_header as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct SortableHeaderProps {
    pub field: SortField,
    pub label: AttrValue,
    pub sort: SortState,
    pub on_sort: Callback<SortField>,
}

/// Clickable column header cycling ascending → descending → unsorted.
#[function_component(SortableHeader)]
pub fn sortable_header(props: &SortableHeaderProps) -> Html {
    let field = props.field;
    let onclick = {
        let on_sort = props.on_sort.clone();
        Callback::from(move |_| on_sort.emit(field))
    };

    let active = props.sort.field == Some(field);
    let indicator = if active {
        match props.sort.order {
            SortOrder::Ascending => html! { <Icon name={IconName::ChevronUp} size={14} /> },
            SortOrder::Descending => html! { <Icon name={IconName::ChevronDown} size={14} /> },
        }
    } else {
        html! { <Icon name={IconName::ChevronsUpDown} size={14} class={classes!("opacity-40")} /> }
    };

    let aria_sort = if active {
        match props.sort.order {
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    } else {
        "none"
    };

    html! {
        <th class={classes!("px-3", "py-4", "text-center")} aria-sort={aria_sort}>
            <button
                type="button"
                class={classes!("inline-flex", "items-center", "gap-1", "font-semibold")}
                aria-label={fill_one(t::ARIA_SORT_TEMPLATE, props.label.as_str())}
                onclick={onclick}
            >
                { props.label.clone() }
                { indicator }
            </button>
        </th>
    }
}
