use crate::domain::notifications::ui::NotificationCenter;
use crate::shared::icons::icon;
use crate::shared::theme::{use_theme, Theme};
use contracts::domain::notification::unread_count;
use leptos::prelude::*;
use leptos_router::components::A;

/// Шапка: логотип, переключатель темы, колокольчик уведомлений.
///
/// Список уведомлений живёт здесь, чтобы счётчик непрочитанных и шторка
/// работали с одними и теми же данными.
#[component]
pub fn Header() -> impl IntoView {
    let theme = use_theme();
    let drawer_open = RwSignal::new(false);
    let notifications =
        RwSignal::new(contracts::fixtures::notifications().to_vec());

    let unread = Memo::new(move |_| notifications.with(|items| unread_count(items)));

    view! {
        <header class="app-header">
            <A href="/" attr:class="app-header__logo">
                {icon("truck")}
                <span>"VektorExpress"</span>
            </A>
            <div class="app-header__actions">
                <button
                    class="app-header__button"
                    title="Переключить тему"
                    on:click=move |_| theme.toggle_theme()
                >
                    {move || match theme.theme.get() {
                        Theme::Light => icon("moon"),
                        Theme::Dark => icon("sun"),
                    }}
                </button>
                <button
                    class="app-header__button app-header__bell"
                    on:click=move |_| drawer_open.update(|open| *open = !*open)
                >
                    {icon("bell")}
                    <Show when=move || { unread.get() > 0 }>
                        <span class="app-header__bell-count">{move || unread.get()}</span>
                    </Show>
                </button>
            </div>
            <Show when=move || drawer_open.get()>
                <NotificationCenter
                    notifications=notifications
                    on_close=Callback::new(move |_: ()| drawer_open.set(false))
                />
            </Show>
        </header>
    }
}
