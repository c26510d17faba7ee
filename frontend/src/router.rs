use yew::prelude::*;
use yew_router::prelude::*;

use crate::{components::header::Header, pages};

/// Admin console routes. The four detail routes the dashboard links out
/// to are placeholders until their screens ship.
#[derive(Routable, Clone, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Dashboard,

    #[at("/subscription-status")]
    SubscriptionStatus,

    #[at("/subscription-cancel")]
    SubscriptionCancel,

    #[at("/review")]
    Review,

    #[at("/customer")]
    Customer,

    #[at("/sales")]
    Sales,

    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Dashboard => html! { <pages::dashboard::DashboardPage /> },
        Route::SubscriptionCancel => {
            html! { <pages::subscription_cancel::SubscriptionCancelPage /> }
        },
        Route::SubscriptionStatus => {
            html! { <pages::coming_soon::ComingSoonPage feature="subscription-status" /> }
        },
        Route::Review => html! { <pages::coming_soon::ComingSoonPage feature="review" /> },
        Route::Customer => html! { <pages::coming_soon::ComingSoonPage feature="customer" /> },
        Route::Sales => html! { <pages::coming_soon::ComingSoonPage feature="sales" /> },
        Route::NotFound => html! { <pages::not_found::NotFoundPage /> },
    }
}

#[function_component(AppRouter)]
pub fn app_router() -> Html {
    html! {
        <BrowserRouter>
            <div class={classes!("min-h-screen", "bg-white", "text-black")}>
                <Header />
                <div class={classes!("pt-6")}>
                    <Switch<Route> render={switch} />
                </div>
            </div>
        </BrowserRouter>
    }
}
