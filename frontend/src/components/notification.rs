use yew::prelude::*;

use crate::notify::Notification;

#[derive(PartialEq, Properties, Clone)]
pub struct Props {
    pub notification: Option<Notification>,
}

/// Status region at the top of the page. Hidden unless a notification is
/// current; the auto-hide timer lives in the root model.
#[function_component]
pub fn NotificationBar(props: &Props) -> Html {
    html! {
        if let Some(notification) = &props.notification {
            <div class={notification.severity.panel_class()}>
                <p class={notification.severity.text_class()}>
                    { notification.text.clone() }
                </p>
            </div>
        }
    }
}
