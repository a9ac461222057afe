//! エラー通知コンポーネント

use leptos::prelude::*;

use crate::state::Notifications;

#[component]
pub fn ErrorNotifications(notifications: Notifications) -> impl IntoView {
    view! {
        <div class="notification-stack">
            <For
                each=move || notifications.items.get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div class="error-notification" role="alert">
                            <div class="error-content">
                                <i class="fas fa-exclamation-circle"></i>
                                <span>{toast.message}</span>
                                <button
                                    aria-label="Dismiss"
                                    on:click=move |_| notifications.dismiss(id)
                                >
                                    <i class="fas fa-times"></i>
                                </button>
                            </div>
                        </div>
                    }
                }
            />
        </div>
    }
}
