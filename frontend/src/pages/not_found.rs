use yew::prelude::*;

use crate::i18n::current::not_found_page as t;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <main class={classes!("container", "mx-auto", "px-6", "py-24", "text-center")}>
            <h2 class={classes!("text-2xl", "font-bold", "mb-2")}>{ t::TITLE }</h2>
            <p class={classes!("text-[#666666]")}>{ t::DESC }</p>
        </main>
    }
}
