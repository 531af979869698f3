use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use contracts::search::{CargoType, VehicleBodyType};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Проверка обязательных полей заявки.
fn validate(from: &str, to: &str, cargo_name: &str) -> Result<(), &'static str> {
    if from.trim().is_empty() || to.trim().is_empty() {
        return Err("Укажите города отправления и назначения");
    }
    if cargo_name.trim().is_empty() {
        return Err("Укажите наименование груза");
    }
    Ok(())
}

/// Форма новой перевозки. Поля не сохраняются: успешная отправка лишь
/// показывает подтверждение и возвращает на главную.
#[component]
pub fn NewCargoPage() -> impl IntoView {
    let toasts = use_toast();
    let navigate = use_navigate();

    let from_city = RwSignal::new(String::new());
    let to_city = RwSignal::new(String::new());
    let cargo_name = RwSignal::new(String::new());
    let weight = RwSignal::new(String::new());
    let volume = RwSignal::new(String::new());
    let body_type = RwSignal::new(None::<VehicleBodyType>);
    let cargo_type = RwSignal::new(None::<CargoType>);

    let submit = move |_| {
        let result = from_city.with_untracked(|f| {
            to_city.with_untracked(|t| cargo_name.with_untracked(|n| validate(f, t, n)))
        });
        match result {
            Ok(()) => {
                toasts.success("Заявка на перевозку успешно создана");
                navigate("/", Default::default());
            }
            Err(message) => toasts.error(message),
        }
    };

    view! {
        <div class="page page--new-cargo">
            <h1 class="page__title">"Новая перевозка"</h1>

            <div class="card form">
                <h2 class="card__title">{icon("map-pin")} "Маршрут"</h2>
                <label class="form__field">
                    <span>"Откуда"</span>
                    <input
                        type="text"
                        placeholder="Город, адрес"
                        prop:value=from_city
                        on:input=move |ev| from_city.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Куда"</span>
                    <input
                        type="text"
                        placeholder="Город, адрес"
                        prop:value=to_city
                        on:input=move |ev| to_city.set(event_target_value(&ev))
                    />
                </label>
            </div>

            <div class="card form">
                <h2 class="card__title">{icon("calendar")} "Даты"</h2>
                <label class="form__field">
                    <span>"Дата загрузки"</span>
                    <input type="date" />
                </label>
                <label class="form__field">
                    <span>"Дата выгрузки"</span>
                    <input type="date" />
                </label>
            </div>

            <div class="card form">
                <h2 class="card__title">{icon("package")} "Информация о грузе"</h2>
                <label class="form__field">
                    <span>"Наименование груза"</span>
                    <input
                        type="text"
                        placeholder="Например: мебель, стройматериалы"
                        prop:value=cargo_name
                        on:input=move |ev| cargo_name.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Тип груза"</span>
                    <select on:change=move |ev| {
                        cargo_type.set(CargoType::parse_str(&event_target_value(&ev)));
                    }>
                        <option value="">"Выберите тип"</option>
                        {CargoType::all()
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.display_name()}</option> })
                            .collect_view()}
                    </select>
                </label>
                <div class="form__row">
                    <label class="form__field">
                        <span>"Вес, т"</span>
                        <input
                            type="number"
                            placeholder="0.00"
                            prop:value=weight
                            on:input=move |ev| weight.set(event_target_value(&ev))
                        />
                    </label>
                    <label class="form__field">
                        <span>"Объём, м³"</span>
                        <input
                            type="number"
                            placeholder="0.00"
                            prop:value=volume
                            on:input=move |ev| volume.set(event_target_value(&ev))
                        />
                    </label>
                </div>
            </div>

            <div class="card form">
                <h2 class="card__title">{icon("truck")} "Требования к транспорту"</h2>
                <label class="form__field">
                    <span>"Тип кузова"</span>
                    <select on:change=move |ev| {
                        body_type.set(VehicleBodyType::parse_str(&event_target_value(&ev)));
                    }>
                        <option value="">"Выберите тип кузова"</option>
                        {VehicleBodyType::all()
                            .into_iter()
                            .map(|t| view! { <option value=t.as_str()>{t.display_name()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </div>

            <Button appearance=ButtonAppearance::Primary on_click=submit>
                "Создать заявку"
            </Button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::validate;

    #[test]
    fn rejects_missing_route() {
        assert!(validate("", "Казань", "Мебель").is_err());
        assert!(validate("Москва", "  ", "Мебель").is_err());
    }

    #[test]
    fn rejects_missing_cargo_name() {
        assert!(validate("Москва", "Казань", "").is_err());
    }

    #[test]
    fn accepts_complete_form() {
        assert!(validate("Москва", "Казань", "Мебель").is_ok());
    }
}
