use crate::shared::icons::icon;
use contracts::domain::notification::{self, Notification, NotificationKind};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

fn kind_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notification notification--info",
        NotificationKind::Success => "notification notification--success",
        NotificationKind::Warning => "notification notification--warning",
        NotificationKind::Error => "notification notification--error",
    }
}

/// Шторка уведомлений. Прочтение и удаление меняют только список в
/// памяти; после перезагрузки данные возвращаются к исходным.
#[component]
pub fn NotificationCenter(
    notifications: RwSignal<Vec<Notification>>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let navigate = use_navigate();

    view! {
        <div class="notification-center">
            <div class="notification-center__header">
                <h3>"Уведомления"</h3>
                <button class="notification-center__close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <div class="notification-center__list">
                <Show
                    when=move || notifications.with(|items| !items.is_empty())
                    fallback=|| view! { <p class="notification-center__empty">"Нет уведомлений"</p> }
                >
                    {
                        let navigate = navigate.clone();
                        view! {
                    <For
                        each=move || notifications.get()
                        key=|n| (n.id.clone(), n.read)
                        children=move |n: Notification| {
                            let id_read = n.id.clone();
                            let id_remove = n.id.clone();
                            let action_url = n.action_url.clone();
                            let navigate = navigate.clone();
                            let item_class = if n.read {
                                format!("{} notification--read", kind_class(n.kind))
                            } else {
                                kind_class(n.kind).to_string()
                            };
                            let open_action = move |_| {
                                if let Some(url) = action_url.clone() {
                                    on_close.run(());
                                    navigate(&url, Default::default());
                                }
                            };
                            view! {
                                <div class=item_class>
                                    <div class="notification__body" on:click=open_action>
                                        <h4>{n.title.clone()}</h4>
                                        <p>{n.message.clone()}</p>
                                        <span class="notification__time">{n.time.clone()}</span>
                                    </div>
                                    <div class="notification__actions">
                                        <Show when={
                                            let read = n.read;
                                            move || !read
                                        }>
                                            <button
                                                title="Отметить прочитанным"
                                                on:click={
                                                    let id = id_read.clone();
                                                    move |ev: leptos::ev::MouseEvent| {
                                                        ev.stop_propagation();
                                                        notifications
                                                            .update(|items| notification::mark_read(items, &id));
                                                    }
                                                }
                                            >
                                                {icon("check")}
                                            </button>
                                        </Show>
                                        <button
                                            title="Удалить"
                                            on:click={
                                                let id = id_remove.clone();
                                                move |ev: leptos::ev::MouseEvent| {
                                                    ev.stop_propagation();
                                                    notifications
                                                        .update(|items| notification::remove(items, &id));
                                                }
                                            }
                                        >
                                            {icon("x")}
                                        </button>
                                    </div>
                                </div>
                            }
                        }
                    />
                        }
                    }
                </Show>
            </div>
        </div>
    }
}
