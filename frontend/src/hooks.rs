use subdesk_shared::pagination::{clamp_page, paginate, total_pages};
use yew::prelude::*;

/// Drive the shared pagination math from component state.
///
/// Returns the visible slice, the (clamped) current page, the page count,
/// and a callback for the pager. When the item count shrinks below the
/// remembered page, the page is clamped to the new last page rather than
/// reset to 1.
#[hook]
pub fn use_pagination<T>(items: Vec<T>, per_page: usize) -> (Vec<T>, usize, usize, Callback<usize>)
where
    T: Clone + PartialEq + 'static,
{
    let per_page = per_page.max(1);
    let page_count = total_pages(items.len(), per_page);
    let current_page = use_state(|| 1usize);

    {
        let current_page = current_page.clone();
        use_effect_with(page_count, move |total| {
            let safe_page = clamp_page(*current_page, *total);
            if safe_page != *current_page {
                current_page.set(safe_page);
            }
            || ()
        });
    }

    // Recomputed only when the records or the page change.
    let visible = {
        let page_snapshot = *current_page;
        use_memo((items, page_snapshot, per_page), |(items, page, per_page)| {
            let safe_page = clamp_page(*page, total_pages(items.len(), *per_page));
            paginate(items, safe_page, *per_page)
        })
    };

    let visible_page = clamp_page(*current_page, page_count);
    let go_to_page = {
        let current_page = current_page.clone();
        Callback::from(move |page: usize| {
            let next = clamp_page(page, page_count);
            if next != *current_page {
                current_page.set(next);
            }
        })
    };

    ((*visible).clone(), visible_page, page_count, go_to_page)
}
