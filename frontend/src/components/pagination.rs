use yew::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::pagination as t, fill_one},
};

#[derive(Properties, PartialEq)]
pub struct PaginationProps {
    pub current_page: usize,
    pub total_pages: usize,
    pub on_page_change: Callback<usize>,
}

enum PageSlot {
    Page(usize),
    Ellipsis(&'static str),
}

#[function_component(Pagination)]
pub fn pagination(props: &PaginationProps) -> Html {
    if props.total_pages <= 1 {
        return Html::default();
    }

    let total_pages = props.total_pages;
    let current_page = props.current_page.clamp(1, total_pages);
    let on_page_change = props.on_page_change.clone();

    let prev_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page > 1 {
                on_page_change.emit(current_page - 1);
            }
        })
    };

    let next_onclick = {
        let on_page_change = on_page_change.clone();
        Callback::from(move |_| {
            if current_page < total_pages {
                on_page_change.emit(current_page + 1);
            }
        })
    };

    let button_classes = classes!(
        "inline-flex",
        "items-center",
        "justify-center",
        "min-w-[2.5rem]",
        "h-10",
        "px-2",
        "rounded-[1.2rem]",
        "border",
        "border-black",
        "text-sm",
        "disabled:opacity-40",
        "disabled:cursor-not-allowed"
    );

    html! {
        <nav class={classes!("flex", "flex-wrap", "items-center", "gap-2")} aria-label={t::ARIA_NAV}>
            <button
                type="button"
                class={button_classes.clone()}
                disabled={current_page <= 1}
                onclick={prev_onclick}
                aria-label={t::ARIA_PREV}
            >
                <Icon name={IconName::ChevronLeft} size={16} />
            </button>
            { for visible_slots(current_page, total_pages).into_iter().map(|slot| match slot {
                PageSlot::Page(page) => {
                    let onclick = {
                        let on_page_change = on_page_change.clone();
                        Callback::from(move |_| on_page_change.emit(page))
                    };
                    let page_classes = classes!(
                        button_classes.clone(),
                        if page == current_page {
                            "bg-black text-white pointer-events-none"
                        } else {
                            ""
                        }
                    );

                    html! {
                        <button
                            key={format!("page-{page}")}
                            type="button"
                            class={page_classes}
                            aria-label={fill_one(t::ARIA_GOTO_PAGE_TEMPLATE, page)}
                            aria-current={(page == current_page).then(|| AttrValue::from("page"))}
                            disabled={page == current_page}
                            onclick={onclick}
                        >
                            { page }
                        </button>
                    }
                }
                PageSlot::Ellipsis(id) => html! {
                    <span
                        key={format!("ellipsis-{id}")}
                        class={classes!("px-2", "select-none")}
                        aria-hidden="true"
                    >
                        { "..." }
                    </span>
                },
            }) }
            <button
                type="button"
                class={button_classes.clone()}
                disabled={current_page >= total_pages}
                onclick={next_onclick}
                aria-label={t::ARIA_NEXT}
            >
                <Icon name={IconName::ChevronRight} size={16} />
            </button>
        </nav>
    }
}

// Windowed page numbers: first and last always visible, two neighbours
// around the current page, ellipsis for the gaps.
fn visible_slots(current: usize, total: usize) -> Vec<PageSlot> {
    if total <= 7 {
        return (1..=total).map(PageSlot::Page).collect();
    }

    let (start, end) = if current <= 3 {
        (2, 5)
    } else if current + 2 >= total {
        (total - 4, total - 1)
    } else {
        (current - 2, current + 2)
    };

    let mut slots = vec![PageSlot::Page(1)];
    if start > 2 {
        slots.push(PageSlot::Ellipsis("left"));
    }
    slots.extend((start..=end).map(PageSlot::Page));
    if end < total - 1 {
        slots.push(PageSlot::Ellipsis("right"));
    }
    slots.push(PageSlot::Page(total));
    slots
}
