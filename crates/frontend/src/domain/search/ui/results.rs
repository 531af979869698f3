use crate::layout::toast_service::use_toast;
use crate::shared::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::highlight_matches;
use contracts::domain::listing::{CargoListing, TransportListing};
use contracts::fixtures;
use contracts::search::filter_list;
use leptos::prelude::*;
use thaw::*;

/// Результаты по каталогу грузов.
#[component]
pub fn CargoResults(query: RwSignal<String>) -> impl IntoView {
    let toasts = use_toast();
    let visible = Memo::new(move |_| {
        query.with(|q| filter_list(fixtures::cargo_listings(), q))
    });

    view! {
        <Show
            when=move || !visible.with(|v| v.is_empty())
            fallback=move || {
                view! {
                    <EmptyState
                        message="По вашему запросу грузов не найдено"
                        on_reset=Callback::new(move |_: ()| query.set(String::new()))
                        reset_label="Очистить поиск"
                    />
                }
            }
        >
            <div class="result-list">
                <For
                    each=move || visible.get()
                    key=|listing| listing.id.clone()
                    children=move |listing: CargoListing| {
                        let route_from = listing.from_city.clone();
                        let route_to = listing.to_city.clone();
                        let cargo = listing.cargo_type.clone();
                        let id = listing.id.clone();
                        let respond_id = listing.id.clone();
                        view! {
                            <div class="result-card">
                                <div class="result-card__header">
                                    <span class="result-card__route">
                                        {move || query.with(|q| highlight_matches(&route_from, q))}
                                        {icon("arrow-right")}
                                        {move || query.with(|q| highlight_matches(&route_to, q))}
                                    </span>
                                    <span class="result-card__price">
                                        {format!("{} ₽", listing.price)}
                                    </span>
                                </div>
                                <div class="result-card__body">
                                    <span>{move || query.with(|q| highlight_matches(&cargo, q))}</span>
                                    <span>{format!("{} т · {} м³", listing.weight, listing.volume)}</span>
                                    <span>{format!("{} км", listing.distance_km)}</span>
                                    <span>{format!("Погрузка {}", listing.loading_date)}</span>
                                </div>
                                <div class="result-card__footer">
                                    <span class="result-card__id">
                                        {move || query.with(|q| highlight_matches(&id, q))}
                                    </span>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            toasts.success(format!("Отклик на груз {} отправлен", respond_id));
                                        }
                                    >
                                        "Откликнуться"
                                    </Button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}

/// Результаты по каталогу свободного транспорта.
#[component]
pub fn TransportResults(query: RwSignal<String>) -> impl IntoView {
    let toasts = use_toast();
    let visible = Memo::new(move |_| {
        query.with(|q| filter_list(fixtures::transport_listings(), q))
    });

    view! {
        <Show
            when=move || !visible.with(|v| v.is_empty())
            fallback=move || {
                view! {
                    <EmptyState
                        message="По вашему запросу транспорта не найдено"
                        on_reset=Callback::new(move |_: ()| query.set(String::new()))
                        reset_label="Очистить поиск"
                    />
                }
            }
        >
            <div class="result-list">
                <For
                    each=move || visible.get()
                    key=|listing| listing.id.clone()
                    children=move |listing: TransportListing| {
                        let model = listing.model.clone();
                        let city = listing.city.clone();
                        let body = listing.body_type.clone();
                        let id = listing.id.clone();
                        let contact_id = listing.id.clone();
                        view! {
                            <div class="result-card">
                                <div class="result-card__header">
                                    <span class="result-card__route">
                                        {icon("truck")}
                                        {move || query.with(|q| highlight_matches(&model, q))}
                                    </span>
                                    <span>{move || query.with(|q| highlight_matches(&city, q))}</span>
                                </div>
                                <div class="result-card__body">
                                    <span>{move || query.with(|q| highlight_matches(&body, q))}</span>
                                    <span>{format!("{} т · {} м³", listing.capacity, listing.volume)}</span>
                                    <span>{format!("Свободен с {}", listing.available_from)}</span>
                                </div>
                                <div class="result-card__footer">
                                    <span class="result-card__id">
                                        {move || query.with(|q| highlight_matches(&id, q))}
                                    </span>
                                    <Button
                                        size=ButtonSize::Small
                                        appearance=ButtonAppearance::Primary
                                        on_click=move |_| {
                                            toasts.success(format!("Запрос перевозчику {} отправлен", contact_id));
                                        }
                                    >
                                        "Связаться"
                                    </Button>
                                </div>
                            </div>
                        }
                    }
                />
            </div>
        </Show>
    }
}
