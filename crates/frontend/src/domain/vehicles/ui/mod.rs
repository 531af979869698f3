use crate::layout::toast_service::use_toast;
use crate::shared::badge_view::Badge;
use crate::shared::icons::icon;
use contracts::badge::vehicle_status_badge;
use contracts::fixtures;
use leptos::prelude::*;
use thaw::*;

/// Страница "Мой транспорт": каталог машин пользователя со статусами.
#[component]
pub fn VehiclesPage() -> impl IntoView {
    let toasts = use_toast();
    let vehicles = fixtures::vehicles();

    view! {
        <div class="page page--vehicles">
            <h1 class="page__title">"Мой транспорт"</h1>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| {
                    toasts.info("Функция добавления транспорта будет доступна в следующем обновлении")
                }
            >
                "Добавить транспорт"
            </Button>

            <div class="vehicle-list">
                {vehicles
                    .iter()
                    .map(|vehicle| {
                        view! {
                            <div class="vehicle-card">
                                <span class="vehicle-card__icon">{icon("truck")}</span>
                                <div class="vehicle-card__info">
                                    <span class="vehicle-card__model">{vehicle.model.clone()}</span>
                                    <span class="vehicle-card__specs">
                                        {format!(
                                            "Г/п {} т | {} {} м³ | {}",
                                            vehicle.capacity, vehicle.body_type, vehicle.volume, vehicle.plate,
                                        )}
                                    </span>
                                </div>
                                <Badge badge=vehicle_status_badge(vehicle.status.as_str()) />
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
