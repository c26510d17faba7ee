use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    i18n::current::{common as common_text, header as t},
    router::Route,
};

#[function_component(Header)]
pub fn header() -> Html {
    let route = use_route::<Route>();

    let link_classes = |target: &Route| {
        classes!(
            "px-3",
            "py-2",
            "text-sm",
            "font-semibold",
            "rounded-md",
            if route.as_ref() == Some(target) {
                "bg-[#F3F3F3] text-black"
            } else {
                "text-[#666666]"
            }
        )
    };

    html! {
        <header class={classes!("border-b", "bg-white")}>
            <div class={classes!("flex", "items-center", "gap-8", "px-6", "h-14")}>
                <Link<Route> to={Route::Dashboard} classes={classes!("text-lg", "font-bold")}>
                    { common_text::BRAND_NAME }
                </Link<Route>>
                <nav class={classes!("flex", "items-center", "gap-2")} aria-label={t::NAV_MAIN_ARIA}>
                    <Link<Route> to={Route::Dashboard} classes={link_classes(&Route::Dashboard)}>
                        { t::NAV_DASHBOARD }
                    </Link<Route>>
                    <Link<Route>
                        to={Route::SubscriptionCancel}
                        classes={link_classes(&Route::SubscriptionCancel)}
                    >
                        { t::NAV_SUBSCRIPTION_CANCEL }
                    </Link<Route>>
                </nav>
            </div>
        </header>
    }
}
