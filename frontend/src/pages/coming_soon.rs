use yew::prelude::*;
use yew_router::prelude::*;

use crate::{i18n::current::coming_soon_page as t, router::Route};

#[derive(Properties, Clone, PartialEq)]
pub struct Props {
    pub feature: AttrValue,
}

#[function_component(ComingSoonPage)]
pub fn coming_soon_page(props: &Props) -> Html {
    html! {
        <main class={classes!(
            "container", "mx-auto", "px-6", "py-24",
            "flex", "flex-col", "items-center", "gap-4"
        )}>
            <h1 class={classes!("text-2xl", "font-bold")}>{ t::STATUS }</h1>
            <p class={classes!("text-[#666666]")}>{ t::DESC }</p>
            <code class={classes!("text-sm", "text-[#999999]")}>{ props.feature.clone() }</code>
            <Link<Route>
                to={Route::Dashboard}
                classes={classes!("mt-4", "px-6", "py-2", "border", "border-black", "rounded-[1.2rem]")}
            >
                { t::BTN_DASHBOARD }
            </Link<Route>>
        </main>
    }
}
