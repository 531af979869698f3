use super::SubpageHeader;
use crate::layout::toast_service::use_toast;
use leptos::prelude::*;
use thaw::*;

/// Личные данные. Поля редактируются локально, "сохранение" лишь
/// показывает подтверждение.
#[component]
pub fn PersonalDataPage() -> impl IntoView {
    let toasts = use_toast();

    let first_name = RwSignal::new("Иван".to_string());
    let last_name = RwSignal::new("Петров".to_string());
    let phone = RwSignal::new("+7 (900) 123-45-67".to_string());
    let email = RwSignal::new("ivan.petrov@example.com".to_string());
    let company = RwSignal::new("ООО \"ВекторТранс\"".to_string());
    let city = RwSignal::new("Москва".to_string());

    let save = move |_| {
        if first_name.with_untracked(|v| v.trim().is_empty())
            || last_name.with_untracked(|v| v.trim().is_empty())
        {
            toasts.error("Имя и фамилия не могут быть пустыми");
            return;
        }
        toasts.success("Данные успешно сохранены");
    };

    view! {
        <div class="page page--personal-data">
            <SubpageHeader title="Мои данные" />

            <div class="card form">
                <label class="form__field">
                    <span>"Имя"</span>
                    <Input value=first_name />
                </label>
                <label class="form__field">
                    <span>"Фамилия"</span>
                    <Input value=last_name />
                </label>
                <label class="form__field">
                    <span>"Телефон"</span>
                    <Input value=phone />
                </label>
                <label class="form__field">
                    <span>"Email"</span>
                    <Input value=email />
                </label>
                <label class="form__field">
                    <span>"Компания"</span>
                    <Input value=company />
                </label>
                <label class="form__field">
                    <span>"Город"</span>
                    <Input value=city />
                </label>

                <Button appearance=ButtonAppearance::Primary on_click=save>
                    "Сохранить"
                </Button>
            </div>
        </div>
    }
}
