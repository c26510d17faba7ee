use yew::prelude::*;

/// Lucide-style line icons; SVG path data from <https://lucide.dev>.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum IconName {
    ChevronLeft,
    ChevronRight,
    ChevronUp,
    ChevronDown,
    ChevronsUpDown,
    Plus,
}

impl IconName {
    fn path(self) -> &'static str {
        match self {
            IconName::ChevronLeft => "m15 18-6-6 6-6",
            IconName::ChevronRight => "m9 18 6-6-6-6",
            IconName::ChevronUp => "m18 15-6-6-6 6",
            IconName::ChevronDown => "m6 9 6 6 6-6",
            IconName::ChevronsUpDown => "m7 15 5 5 5-5M7 9l5-5 5 5",
            IconName::Plus => "M5 12h14M12 5v14",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub name: IconName,

    #[prop_or(20)]
    pub size: u32,

    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Icon)]
pub fn icon(props: &IconProps) -> Html {
    html! {
        <svg
            class={classes!("inline-flex", "shrink-0", props.class.clone())}
            width={props.size.to_string()}
            height={props.size.to_string()}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            <path d={props.name.path()} />
        </svg>
    }
}
