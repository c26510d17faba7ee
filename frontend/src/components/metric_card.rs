use yew::prelude::*;
use yew_router::prelude::*;

use crate::{
    components::icons::{Icon, IconName},
    i18n::{current::dashboard as t, fill_one},
    router::Route,
};

#[derive(Properties, PartialEq)]
pub struct MetricCardProps {
    pub title: AttrValue,
    pub route: Route,
    pub children: Children,
}

/// One dashboard category panel: heading, detail-page link, metric rows.
#[function_component(MetricCard)]
pub fn metric_card(props: &MetricCardProps) -> Html {
    html! {
        <section class={classes!("rounded-xl", "border", "bg-white", "px-7", "py-4")}>
            <div class={classes!("flex", "items-center", "justify-between", "pb-6")}>
                <h2 class={classes!("text-lg", "font-bold")}>{ props.title.clone() }</h2>
                <Link<Route>
                    to={props.route.clone()}
                    classes={classes!("text-[#666666]", "hover:text-black")}
                >
                    <span class={classes!("sr-only")}>
                        { fill_one(t::DETAIL_LINK_ARIA_TEMPLATE, props.title.as_str()) }
                    </span>
                    <Icon name={IconName::Plus} size={18} />
                </Link<Route>>
            </div>
            <div class={classes!("space-y-5")}>
                { for props.children.iter() }
            </div>
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct MetricRowProps {
    pub label: AttrValue,
    pub value: String,
    #[prop_or(false)]
    pub accent: bool,
}

/// Label/value line inside a [`MetricCard`].
#[function_component(MetricRow)]
pub fn metric_row(props: &MetricRowProps) -> Html {
    html! {
        <div class={classes!("flex", "justify-between", "items-center")}>
            <span class={classes!("text-sm", "text-[#444444]")}>{ props.label.clone() }</span>
            <span class={classes!("font-bold", if props.accent { "text-[#e90000]" } else { "" })}>
                { props.value.clone() }
            </span>
        </div>
    }
}
