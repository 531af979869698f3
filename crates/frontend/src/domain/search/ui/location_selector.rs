use crate::shared::icons::icon;
use contracts::fixtures::CITIES;
use contracts::search::suggest_cities;
use leptos::prelude::*;

/// Выбор локаций с автодополнением по списку городов.
///
/// Подсказки появляются от двух символов; выбранные города исключаются.
/// Ограничение на количество локаций проверяет владелец через callback.
#[component]
pub fn LocationSelector(
    #[prop(into)] selected: Signal<Vec<String>>,
    #[prop(into)] on_select: Callback<String>,
    #[prop(into)] on_remove: Callback<String>,
) -> impl IntoView {
    let query = RwSignal::new(String::new());

    let suggestions = Memo::new(move |_| {
        let q = query.get();
        let chosen = selected.get();
        suggest_cities(&CITIES, &q, &chosen)
            .into_iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>()
    });

    view! {
        <div class="location-selector">
            <div class="location-selector__input">
                {icon("map-pin")}
                <input
                    type="text"
                    placeholder="Введите город"
                    prop:value=query
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
            </div>

            <Show when=move || !suggestions.get().is_empty()>
                <ul class="location-selector__suggestions">
                    <For
                        each=move || suggestions.get()
                        key=|city| city.clone()
                        children=move |city: String| {
                            let value = city.clone();
                            view! {
                                <li on:click=move |_| {
                                    on_select.run(value.clone());
                                    query.set(String::new());
                                }>
                                    {city.clone()}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>

            <div class="location-selector__chips">
                <For
                    each=move || selected.get()
                    key=|city| city.clone()
                    children=move |city: String| {
                        let value = city.clone();
                        view! {
                            <span class="location-selector__chip">
                                {city.clone()}
                                <button on:click=move |_| on_remove.run(value.clone())>
                                    {icon("x")}
                                </button>
                            </span>
                        }
                    }
                />
            </div>
        </div>
    }
}
