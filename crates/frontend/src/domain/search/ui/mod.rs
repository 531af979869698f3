mod cargo_filters;
mod location_selector;
mod results;
mod transport_filters;

pub use location_selector::LocationSelector;

use crate::shared::icons::icon;
use cargo_filters::CargoFiltersForm;
use contracts::search::{CargoFilters, TransportFilters};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use results::{CargoResults, TransportResults};
use transport_filters::TransportFiltersForm;
use wasm_bindgen_futures::spawn_local;

#[derive(Clone, Copy, PartialEq, Eq)]
enum SearchTab {
    Cargo,
    Transport,
}

/// Страница поиска: вкладки Грузы/Транспорт, текстовый поиск и шторка
/// структурированных фильтров.
#[component]
pub fn SearchPage() -> impl IntoView {
    let active_tab = RwSignal::new(SearchTab::Cargo);
    let query = RwSignal::new(String::new());
    let drawer_open = RwSignal::new(false);
    let loading = RwSignal::new(false);

    // Применённые фильтры. Применение — целиком замена объекта.
    let cargo_filters = RwSignal::new(CargoFilters::default());
    let transport_filters = RwSignal::new(TransportFilters::default());

    // Имитация сетевой задержки при смене вкладки. Таймер может
    // пережить страницу, поэтому привязан к alive-флагу.
    let alive = StoredValue::new(true);
    on_cleanup(move || alive.set_value(false));

    let switch_tab = move |tab: SearchTab| {
        if active_tab.get_untracked() == tab {
            return;
        }
        active_tab.set(tab);
        loading.set(true);
        spawn_local(async move {
            TimeoutFuture::new(500).await;
            if alive.get_value() {
                loading.set(false);
            }
        });
    };

    let active_count = Memo::new(move |_| match active_tab.get() {
        SearchTab::Cargo => cargo_filters.with(|f| f.active_count()),
        SearchTab::Transport => transport_filters.with(|f| f.active_count()),
    });

    let tab_class = move |tab: SearchTab| {
        if active_tab.get() == tab {
            "search-tabs__tab search-tabs__tab--active"
        } else {
            "search-tabs__tab"
        }
    };

    view! {
        <div class="page page--search">
            <h1 class="page__title">"Поиск"</h1>

            <div class="search-input">
                <span class="search-input__icon">{icon("search")}</span>
                <input
                    type="text"
                    placeholder="Номер заказа, маршрут, груз..."
                    prop:value=query
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <div class="search-tabs">
                <button class=move || tab_class(SearchTab::Cargo) on:click=move |_| switch_tab(SearchTab::Cargo)>
                    {icon("package")}
                    "Грузы"
                </button>
                <button class=move || tab_class(SearchTab::Transport) on:click=move |_| switch_tab(SearchTab::Transport)>
                    {icon("truck")}
                    "Транспорт"
                </button>
                <button class="search-tabs__filters" on:click=move |_| drawer_open.set(true)>
                    {icon("filter")}
                    "Фильтры"
                    <Show when=move || { active_count.get() > 0 }>
                        <span class="search-tabs__filters-count">{move || active_count.get()}</span>
                    </Show>
                </button>
            </div>

            <Show
                when=move || !loading.get()
                fallback=|| {
                    view! {
                        <div class="search-skeleton">
                            <div class="search-skeleton__card"></div>
                            <div class="search-skeleton__card"></div>
                            <div class="search-skeleton__card"></div>
                        </div>
                    }
                }
            >
                {move || match active_tab.get() {
                    SearchTab::Cargo => view! { <CargoResults query=query /> }.into_any(),
                    SearchTab::Transport => {
                        view! { <TransportResults query=query /> }.into_any()
                    }
                }}
            </Show>

            <Show when=move || drawer_open.get()>
                <div class="filter-drawer" on:click=move |_| drawer_open.set(false)>
                    <div class="filter-drawer__panel" on:click=|ev| ev.stop_propagation()>
                        {move || match active_tab.get() {
                            SearchTab::Cargo => {
                                view! {
                                    <CargoFiltersForm
                                        applied=cargo_filters
                                        on_close=Callback::new(move |_: ()| drawer_open.set(false))
                                    />
                                }
                                .into_any()
                            }
                            SearchTab::Transport => {
                                view! {
                                    <TransportFiltersForm
                                        applied=transport_filters
                                        on_close=Callback::new(move |_: ()| drawer_open.set(false))
                                    />
                                }
                                .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </div>
    }
}
