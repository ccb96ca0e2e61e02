use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::config::NOTICE_LIFETIME_MS;
use crate::contact::form::{Notice, NoticeKind};

#[derive(Properties, PartialEq)]
pub struct NoticeToastProps {
    pub notice: Option<Notice>,
    pub on_dismiss: Callback<()>,
}

/// Banner for form outcomes. Goes away on click or after a few seconds.
#[function_component(NoticeToast)]
pub fn notice_toast(props: &NoticeToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |notice: &Option<Notice>| {
                let timeout = notice.as_ref().map(|_| {
                    Timeout::new(NOTICE_LIFETIME_MS, move || on_dismiss.emit(()))
                });
                move || drop(timeout)
            },
            props.notice.clone(),
        );
    }

    let Some(notice) = props.notice.as_ref() else {
        return html! {};
    };

    let kind_class = match notice.kind {
        NoticeKind::Success => "notice-success",
        NoticeKind::Error => "notice-error",
    };
    let onclick = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };

    html! {
        <div class={classes!("notice-toast", kind_class)} role="alert" {onclick}>
            {notice.text.clone()}
        </div>
    }
}
