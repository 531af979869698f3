use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

/// Страница 404. Единственное место, где ошибка попадает в лог.
#[component]
pub fn NotFound() -> impl IntoView {
    let location = use_location();
    let path = location.pathname.get_untracked();
    log::warn!("маршрут не найден: {path}");

    view! {
        <div class="page page--not-found">
            <h1 class="not-found__code">"404"</h1>
            <p class="not-found__message">"Страница не найдена"</p>
            <A href="/" attr:class="not-found__home">
                "На главную"
            </A>
        </div>
    }
}
