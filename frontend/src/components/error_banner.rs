use yew::prelude::*;

use crate::i18n::current::error_banner as t;

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub message: String,
    #[prop_or_default]
    pub on_close: Option<Callback<()>>,
}

/// Persistent error strip. Admin errors stay on screen until dismissed;
/// a new message re-opens a previously dismissed banner.
#[function_component(ErrorBanner)]
pub fn error_banner(props: &ErrorBannerProps) -> Html {
    let dismissed = use_state(|| false);

    {
        let dismissed = dismissed.clone();
        use_effect_with(props.message.clone(), move |_| {
            dismissed.set(false);
            || ()
        });
    }

    let close = {
        let dismissed = dismissed.clone();
        let on_close = props.on_close.clone();
        Callback::from(move |_| {
            dismissed.set(true);
            if let Some(cb) = on_close.as_ref() {
                cb.emit(());
            }
        })
    };

    if *dismissed {
        return Html::default();
    }

    html! {
        <div
            class={classes!(
                "flex", "items-start", "justify-between", "gap-4",
                "rounded-lg", "border", "border-[#F0B9B9]", "bg-[#FDF2F2]",
                "px-4", "py-3", "text-[#B42318]"
            )}
            role="alert"
        >
            <div>
                <strong class={classes!("block", "text-sm", "font-semibold")}>{ t::TITLE }</strong>
                <span class={classes!("text-sm")}>{ props.message.clone() }</span>
            </div>
            <button
                type="button"
                class={classes!("text-sm", "font-semibold")}
                aria-label={t::CLOSE_ARIA}
                onclick={close}
            >
                { "×" }
            </button>
        </div>
    }
}
