use std::{cell::Cell, rc::Rc};

use subdesk_shared::Cancellation;
use web_sys::console;
use yew::prelude::*;

use crate::{
    auth,
    components::{
        cancellation_table::CancellationTable,
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
    },
    i18n::current::{errors, subscription_cancel_page as t},
};

#[function_component(SubscriptionCancelPage)]
pub fn subscription_cancel_page() -> Html {
    let cancellations = use_state(Vec::<Cancellation>::new);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);
    // Bumped after a successful refund so the list effect re-runs; the
    // backend owns the pending → completed transition, we only re-read it.
    let reload_tick = use_state(|| 0u32);

    {
        let cancellations = cancellations.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with(*reload_tick, move |_| {
            loading.set(true);
            let cancelled = Rc::new(Cell::new(false));
            let guard = cancelled.clone();

            wasm_bindgen_futures::spawn_local(async move {
                let token_response = auth::get_access_token().await;
                let Some(token) = token_response.access_token else {
                    if !cancelled.get() {
                        error.set(Some(errors::NO_ACCESS_TOKEN.to_string()));
                        loading.set(false);
                    }
                    return;
                };

                match crate::api::fetch_cancellations(&token).await {
                    Ok(data) => {
                        if !cancelled.get() {
                            error.set(None);
                            cancellations.set(data);
                        }
                    },
                    Err(e) => {
                        console::error_1(&format!("Failed to fetch cancellations: {}", e).into());
                        if !cancelled.get() {
                            error.set(Some(errors::CANCELLATION_FETCH_FAILED.to_string()));
                        }
                    },
                }
                if !cancelled.get() {
                    loading.set(false);
                }
            });

            move || guard.set(true)
        });
    }

    let on_refund = {
        let error = error.clone();
        let reload_tick = reload_tick.clone();
        Callback::from(move |record: Cancellation| {
            let error = error.clone();
            let reload_tick = reload_tick.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let token_response = auth::get_access_token().await;
                let Some(token) = token_response.access_token else {
                    error.set(Some(errors::NO_ACCESS_TOKEN.to_string()));
                    return;
                };

                match crate::api::request_refund(&token, &record).await {
                    Ok(()) => reload_tick.set(*reload_tick + 1),
                    Err(e) => {
                        console::error_1(&format!("Refund request failed: {}", e).into());
                        error.set(Some(errors::REFUND_FAILED.to_string()));
                    },
                }
            });
        })
    };

    html! {
        <main class={classes!("container", "mx-auto", "px-6", "pb-16")}>
            <h1 class={classes!("text-2xl", "font-bold", "py-6")}>{ t::TITLE }</h1>
            if let Some(message) = (*error).clone() {
                <div class={classes!("mb-4")}>
                    <ErrorBanner message={message} />
                </div>
            }
            if *loading {
                <div class={classes!("flex", "items-center", "justify-center", "min-h-[300px]")}>
                    <LoadingSpinner size={SpinnerSize::Large} />
                </div>
            } else {
                <CancellationTable
                    cancellations={(*cancellations).clone()}
                    on_refund={on_refund}
                />
            }
        </main>
    }
}
