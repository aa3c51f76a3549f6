use common::client::{NotificationLevel, NotificationQueue};
use yew::prelude::*;

use crate::settings;

fn alert_class(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "alert-info",
        NotificationLevel::Success => "alert-success",
        NotificationLevel::Warning => "alert-warning",
        NotificationLevel::Error => "alert-error",
    }
}

fn icon(level: NotificationLevel) -> &'static str {
    match level {
        NotificationLevel::Info => "fas fa-info-circle",
        NotificationLevel::Success => "fas fa-check-circle",
        NotificationLevel::Warning => "fas fa-exclamation-triangle",
        NotificationLevel::Error => "fas fa-exclamation-circle",
    }
}

#[derive(Clone, PartialEq)]
pub struct ToastContext {
    pub add_toast: Callback<(String, NotificationLevel)>,
}

impl ToastContext {
    pub fn show_info(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), NotificationLevel::Info));
    }

    pub fn show_success(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), NotificationLevel::Success));
    }

    pub fn show_warning(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), NotificationLevel::Warning));
    }

    pub fn show_error(&self, message: impl Into<String>) {
        self.add_toast.emit((message.into(), NotificationLevel::Error));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

/// Owns the notification queue and renders it in the top-right corner.
///
/// Every toast is dismissed automatically after the configured duration.
#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let queue = use_mut_ref(NotificationQueue::new);
    let update = use_force_update();

    let remove_toast = {
        let queue = queue.clone();
        let update = update.clone();
        use_callback((), move |id: usize, _| {
            if queue.borrow_mut().dismiss(id) {
                update.force_update();
            }
        })
    };

    let add_toast = {
        let queue = queue.clone();
        let update = update.clone();
        let remove_toast = remove_toast.clone();
        use_callback((), move |(message, level): (String, NotificationLevel), _| {
            log::debug!("Toast [{:?}]: {}", level, message);
            let id = queue.borrow_mut().push(level, message);
            update.force_update();

            let remove_toast = remove_toast.clone();
            let duration = settings::get_settings().toast_duration_ms;
            gloo_timers::callback::Timeout::new(duration, move || remove_toast.emit(id)).forget();
        })
    };

    let context = ToastContext { add_toast };
    let toasts = queue.borrow().items().to_vec();

    html! {
        <ContextProvider<ToastContext> context={context}>
            {props.children.clone()}
            <div class="toast toast-top toast-end z-50">
                {for toasts.iter().map(|toast| {
                    let id = toast.id;
                    let on_close = {
                        let remove_toast = remove_toast.clone();
                        Callback::from(move |_| remove_toast.emit(id))
                    };

                    html! {
                        <div key={id} class={classes!("alert", alert_class(toast.level), "shadow-lg")}>
                            <i class={icon(toast.level)}></i>
                            <span>{&toast.message}</span>
                            <button class="btn btn-sm btn-ghost btn-circle" onclick={on_close}>
                                <i class="fas fa-times"></i>
                            </button>
                        </div>
                    }
                })}
            </div>
        </ContextProvider<ToastContext>>
    }
}
