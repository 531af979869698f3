use crate::layout::toast_service::use_toast;
use crate::shared::badge_view::Badge;
use crate::shared::icons::icon;
use contracts::badge::waypoint_status_badge;
use contracts::domain::tracking::{progress_percent, Waypoint, WaypointStatus};
use contracts::fixtures;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wasm_bindgen_futures::spawn_local;

fn waypoint_class(status: WaypointStatus) -> &'static str {
    match status {
        WaypointStatus::Completed => "timeline__point timeline__point--completed",
        WaypointStatus::Current => "timeline__point timeline__point--current",
        WaypointStatus::Pending => "timeline__point timeline__point--pending",
    }
}

/// Страница отслеживания доставки: прогресс-бар, таймлайн маршрута,
/// данные водителя и быстрые действия.
#[component]
pub fn TrackingPage() -> impl IntoView {
    let params = use_params_map();
    let toasts = use_toast();

    let delivery = Memo::new(move |_| {
        let id = params.with(|p| p.get("id").unwrap_or_default());
        fixtures::delivery(&id)
    });

    let refreshing = RwSignal::new(false);

    // Обновление может пережить страницу, поэтому таймер привязан
    // к alive-флагу.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let refresh = move |_| {
        if refreshing.get_untracked() {
            return;
        }
        refreshing.set(true);
        spawn_local(async move {
            TimeoutFuture::new(1000).await;
            if alive.get_value() {
                refreshing.set(false);
                toasts.info("Данные о доставке обновлены");
            }
        });
    };

    let progress = Memo::new(move |_| delivery.with(|d| progress_percent(&d.waypoints)));

    view! {
        <div class="page page--tracking">
            <h1 class="page__title">"Отслеживание заказа"</h1>

            <div class="card tracking-status">
                <div class="tracking-status__header">
                    <span>{move || format!("Заказ №{}", delivery.with(|d| d.tracking_number.clone()))}</span>
                    <button class="tracking-status__refresh" on:click=refresh disabled=move || refreshing.get()>
                        {icon("refresh")}
                        {move || if refreshing.get() { "Обновление..." } else { "Обновить" }}
                    </button>
                </div>
                <div class="progress">
                    <div
                        class="progress__bar"
                        style=move || format!("width: {}%", progress.get())
                    ></div>
                </div>
                <div class="tracking-status__meta">
                    <span>{move || format!("Выполнено {}%", progress.get())}</span>
                    <span>{move || format!("Обновлено: {}", delivery.with(|d| d.last_updated.clone()))}</span>
                </div>
            </div>

            <div class="card timeline">
                <h2 class="card__title">"Маршрут"</h2>
                <For
                    each=move || delivery.with(|d| d.waypoints.clone())
                    key=|point| (point.city.clone(), point.status)
                    children=move |point: Waypoint| {
                        view! {
                            <div class=waypoint_class(point.status)>
                                <span class="timeline__city">{point.city.clone()}</span>
                                <span class="timeline__time">{point.time.clone()}</span>
                                <Badge badge=waypoint_status_badge(point.status.as_str()) />
                            </div>
                        }
                    }
                />
            </div>

            <div class="card tracking-details">
                <h2 class="card__title">"Информация о доставке"</h2>
                <div class="tracking-details__row">
                    <span>"Водитель"</span>
                    <span>{move || delivery.with(|d| d.driver_name.clone())}</span>
                </div>
                <div class="tracking-details__row">
                    <span>"Телефон"</span>
                    <span>{move || delivery.with(|d| d.driver_phone.clone())}</span>
                </div>
                <div class="tracking-details__row">
                    <span>"Транспорт"</span>
                    <span>{move || delivery.with(|d| d.vehicle_info.clone())}</span>
                </div>
                <div class="tracking-details__row">
                    <span>"Ожидаемое прибытие"</span>
                    <span>{move || delivery.with(|d| d.estimated_arrival.clone())}</span>
                </div>
            </div>

            <div class="card tracking-actions">
                <button on:click=move |_| toasts.info("Звонок водителю...")>
                    {icon("phone")}
                    "Позвонить"
                </button>
                <button on:click=move |_| toasts.info("Открываем чат с водителем...")>
                    {icon("message")}
                    "Сообщение"
                </button>
                <button on:click=move |_| toasts.info("Соединяем с поддержкой...")>
                    {icon("headphones")}
                    "Поддержка"
                </button>
            </div>
        </div>
    }
}
