use std::{cell::Cell, rc::Rc};

use subdesk_shared::{format::format_thousands, DashboardMetrics};
use web_sys::console;
use yew::prelude::*;

use crate::{
    auth,
    components::{
        error_banner::ErrorBanner,
        loading_spinner::{LoadingSpinner, SpinnerSize},
        metric_card::{MetricCard, MetricRow},
    },
    i18n::current::{common as common_text, dashboard as t, errors},
    router::Route,
};

fn won(value: u64) -> String {
    format!("{}{}", format_thousands(value), common_text::CURRENCY_SUFFIX)
}

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let metrics = use_state(|| Option::<DashboardMetrics>::None);
    let loading = use_state(|| true);
    let error = use_state(|| Option::<String>::None);

    {
        let metrics = metrics.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            // The cleanup flips this flag so a response that lands after
            // the view is torn down never writes into it.
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

                match crate::api::fetch_dashboard_metrics(&token).await {
                    Ok(snapshot) => {
                        if !cancelled.get() {
                            metrics.set(Some(snapshot));
                        }
                    },
                    Err(e) => {
                        console::error_1(
                            &format!("Failed to fetch dashboard metrics: {}", e).into(),
                        );
                        if !cancelled.get() {
                            error.set(Some(errors::DASHBOARD_FETCH_FAILED.to_string()));
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

    let body = if *loading {
        html! {
            <div class={classes!("flex", "items-center", "justify-center", "min-h-[400px]")}>
                <LoadingSpinner size={SpinnerSize::Large} />
            </div>
        }
    } else if let Some(message) = (*error).clone() {
        html! { <ErrorBanner message={message} /> }
    } else if let Some(snapshot) = (*metrics).clone() {
        html! {
            <div class={classes!("grid", "grid-cols-1", "md:grid-cols-2", "xl:grid-cols-3", "gap-6")}>
                <MetricCard title={t::SUBSCRIPTIONS_TITLE} route={Route::SubscriptionStatus}>
                    <MetricRow
                        label={t::TOTAL_SUBSCRIPTIONS}
                        value={snapshot.total_subscriptions.to_string()}
                    />
                    <MetricRow
                        label={t::NEW_SUBSCRIPTIONS}
                        value={snapshot.new_subscriptions_today.to_string()}
                    />
                    <MetricRow
                        label={t::PAUSED_TODAY}
                        value={snapshot.paused_subscriptions.to_string()}
                    />
                </MetricCard>

                <MetricCard title={t::CANCELLATIONS_TITLE} route={Route::SubscriptionCancel}>
                    <MetricRow label={t::CANCEL_ALL} value={snapshot.subs_cancel_all.to_string()} />
                    <MetricRow label={t::CANCEL_TODAY} value={snapshot.subs_cancel_today.to_string()} />
                </MetricCard>

                <MetricCard title={t::REVIEWS_TITLE} route={Route::Review}>
                    <MetricRow label={t::ALL_REVIEWS} value={snapshot.all_reviews.to_string()} />
                    <MetricRow label={t::NEW_REVIEWS} value={snapshot.new_reviews.to_string()} />
                </MetricCard>

                <MetricCard title={t::CUSTOMERS_TITLE} route={Route::Customer}>
                    <MetricRow
                        label={t::TOTAL_CUSTOMERS}
                        value={snapshot.total_customers.to_string()}
                        accent={true}
                    />
                    <MetricRow
                        label={t::JOINED_TODAY}
                        value={snapshot.new_customers_today.to_string()}
                        accent={true}
                    />
                    <MetricRow
                        label={t::DELETED_TODAY}
                        value={snapshot.deleted_customers_today.to_string()}
                    />
                </MetricCard>

                <MetricCard title={t::SALES_TITLE} route={Route::Sales}>
                    <MetricRow label={t::MONTHLY_SALES} value={won(snapshot.monthly_sales)} />
                    <MetricRow
                        label={t::MONTHLY_REFUNDS}
                        value={format!("-{}", won(snapshot.monthly_refunds))}
                    />
                    <MetricRow label={t::MONTHLY_TOTAL} value={won(snapshot.monthly_total_sales)} />
                </MetricCard>
            </div>
        }
    } else {
        Html::default()
    };

    html! {
        <main class={classes!("container", "mx-auto", "px-6", "pb-16")}>
            { body }
        </main>
    }
}
