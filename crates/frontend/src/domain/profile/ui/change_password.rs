use super::SubpageHeader;
use crate::layout::toast_service::use_toast;
use contracts::domain::account::validate_password_change;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Смена пароля: валидация локальная, значения полей при ошибке
/// сохраняются для исправления.
#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let toasts = use_toast();
    let navigate = use_navigate();

    let current = RwSignal::new(String::new());
    let new = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());

    let submit = move |_| {
        let result = validate_password_change(
            &current.get_untracked(),
            &new.get_untracked(),
            &confirm.get_untracked(),
        );
        match result {
            Ok(()) => {
                toasts.success("Пароль успешно изменён");
                navigate("/profile", Default::default());
            }
            Err(err) => toasts.error(err.to_string()),
        }
    };

    view! {
        <div class="page page--change-password">
            <SubpageHeader title="Сменить пароль" />

            <div class="card form">
                <label class="form__field">
                    <span>"Текущий пароль"</span>
                    <input
                        type="password"
                        placeholder="Введите текущий пароль"
                        prop:value=current
                        on:input=move |ev| current.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Новый пароль"</span>
                    <input
                        type="password"
                        placeholder="Не менее 8 символов"
                        prop:value=new
                        on:input=move |ev| new.set(event_target_value(&ev))
                    />
                </label>
                <label class="form__field">
                    <span>"Подтверждение пароля"</span>
                    <input
                        type="password"
                        placeholder="Повторите новый пароль"
                        prop:value=confirm
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>

                <Button appearance=ButtonAppearance::Primary on_click=submit>
                    "Изменить пароль"
                </Button>
            </div>
        </div>
    }
}
