use super::location_selector::LocationSelector;
use crate::layout::toast_service::use_toast;
use chrono::NaiveDate;
use contracts::search::{TransportFilters, VehicleBodyType};
use leptos::prelude::*;
use thaw::*;

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

fn parse_num(value: &str, fallback: f64) -> f64 {
    value.parse().unwrap_or(fallback)
}

/// Форма фильтров транспорта. Тот же контракт, что у фильтров грузов:
/// применение — замена объекта, сброс — значения по умолчанию.
#[component]
pub fn TransportFiltersForm(
    applied: RwSignal<TransportFilters>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let toasts = use_toast();
    let draft = RwSignal::new(applied.get_untracked());

    let add_location = move |city: String| {
        let result = draft
            .try_update(|f| f.add_location(&city))
            .unwrap_or(Ok(()));
        if let Err(err) = result {
            toasts.error(err.to_string());
        }
    };

    let apply = move |_| {
        applied.set(draft.get_untracked());
        on_close.run(());
    };

    let reset = move |_| {
        draft.set(TransportFilters::default());
        applied.set(TransportFilters::default());
    };

    view! {
        <div class="filters-form">
            <h3 class="filters-form__title">"Фильтры транспорта"</h3>

            <label class="filters-form__field">
                <span>"Тип кузова"</span>
                <select
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        draft.update(|f| f.body_type = VehicleBodyType::parse_str(&value));
                    }
                    prop:value=move || {
                        draft.with(|f| f.body_type.map(|t| t.as_str()).unwrap_or("").to_string())
                    }
                >
                    <option value="">"Любой"</option>
                    {VehicleBodyType::all()
                        .into_iter()
                        .map(|t| view! { <option value=t.as_str()>{t.display_name()}</option> })
                        .collect_view()}
                </select>
            </label>

            <div class="filters-form__range">
                <span>"Грузоподъёмность, т"</span>
                <input
                    type="number"
                    prop:value=move || draft.with(|f| f.capacity_range.0.to_string())
                    on:change=move |ev| {
                        let v = parse_num(&event_target_value(&ev), 0.0);
                        draft.update(|f| f.capacity_range.0 = v);
                    }
                />
                <input
                    type="number"
                    prop:value=move || draft.with(|f| f.capacity_range.1.to_string())
                    on:change=move |ev| {
                        let v = parse_num(&event_target_value(&ev), 40.0);
                        draft.update(|f| f.capacity_range.1 = v);
                    }
                />
            </div>

            <div class="filters-form__range">
                <span>"Объём кузова, м³"</span>
                <input
                    type="number"
                    prop:value=move || draft.with(|f| f.volume_range.0.to_string())
                    on:change=move |ev| {
                        let v = parse_num(&event_target_value(&ev), 0.0);
                        draft.update(|f| f.volume_range.0 = v);
                    }
                />
                <input
                    type="number"
                    prop:value=move || draft.with(|f| f.volume_range.1.to_string())
                    on:change=move |ev| {
                        let v = parse_num(&event_target_value(&ev), 100.0);
                        draft.update(|f| f.volume_range.1 = v);
                    }
                />
            </div>

            <div class="filters-form__range">
                <span>"Даты"</span>
                <input
                    type="date"
                    on:change=move |ev| {
                        let date = parse_date(&event_target_value(&ev));
                        draft.update(|f| f.date_range.from = date);
                    }
                />
                <input
                    type="date"
                    on:change=move |ev| {
                        let date = parse_date(&event_target_value(&ev));
                        draft.update(|f| f.date_range.to = date);
                    }
                />
            </div>

            <LocationSelector
                selected=Signal::derive(move || draft.with(|f| f.locations.clone()))
                on_select=Callback::new(add_location)
                on_remove=Callback::new(move |city: String| {
                    draft.update(|f| f.remove_location(&city));
                })
            />

            <div class="filters-form__flags">
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|f| f.gps)
                        on:change=move |ev| {
                            draft.update(|f| f.gps = event_target_checked(&ev));
                        }
                    />
                    "GPS-мониторинг"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|f| f.ramp)
                        on:change=move |ev| {
                            draft.update(|f| f.ramp = event_target_checked(&ev));
                        }
                    />
                    "Аппарель"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|f| f.refrigerator)
                        on:change=move |ev| {
                            draft.update(|f| f.refrigerator = event_target_checked(&ev));
                        }
                    />
                    "Рефрижератор"
                </label>
                <label>
                    <input
                        type="checkbox"
                        prop:checked=move || draft.with(|f| f.hydro_lift)
                        on:change=move |ev| {
                            draft.update(|f| f.hydro_lift = event_target_checked(&ev));
                        }
                    />
                    "Гидролифт"
                </label>
            </div>

            <div class="filters-form__actions">
                <Button appearance=ButtonAppearance::Primary on_click=apply>
                    "Применить"
                </Button>
                <Button appearance=ButtonAppearance::Secondary on_click=reset>
                    "Сбросить"
                </Button>
            </div>
        </div>
    }
}
