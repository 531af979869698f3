mod change_password;
mod login_history;
mod personal_data;
mod roles;

pub use change_password::ChangePasswordPage;
pub use login_history::LoginHistoryPage;
pub use personal_data::PersonalDataPage;
pub use roles::RolesPage;

use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

/// Личный кабинет: карточка пользователя и навигация по разделам
/// профиля.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let toasts = use_toast();

    view! {
        <div class="page page--profile">
            <div class="profile-hero">
                <h1>"Иван Петров"</h1>
                <p>"ivan.petrov@example.com"</p>
            </div>

            <div class="profile-menu">
                <A href="/profile/personal-data" attr:class="profile-menu__item">
                    {icon("user")}
                    <span>"Мои данные"</span>
                    {icon("chevron-right")}
                </A>
                <A href="/profile/roles" attr:class="profile-menu__item">
                    {icon("shield")}
                    <span>"Роли и доступы"</span>
                    {icon("chevron-right")}
                </A>
                <A href="/profile/login-history" attr:class="profile-menu__item">
                    {icon("clock")}
                    <span>"История входов"</span>
                    {icon("chevron-right")}
                </A>
                <A href="/profile/change-password" attr:class="profile-menu__item">
                    {icon("lock")}
                    <span>"Сменить пароль"</span>
                    {icon("chevron-right")}
                </A>
            </div>

            <div class="profile-menu">
                <A href="/rating" attr:class="profile-menu__item">
                    {icon("star")}
                    <span>"Рейтинг"</span>
                    {icon("chevron-right")}
                </A>
                <A href="/profile-level" attr:class="profile-menu__item">
                    {icon("bar-chart")}
                    <span>"Уровень профиля"</span>
                    {icon("chevron-right")}
                </A>
                <A href="/reviews" attr:class="profile-menu__item">
                    {icon("message")}
                    <span>"Отзывы"</span>
                    {icon("chevron-right")}
                </A>
            </div>

            <button
                class="profile-logout"
                on:click=move |_| toasts.success("Вы успешно вышли из системы")
            >
                "Выйти"
            </button>
        </div>
    }
}

/// Шапка подстраницы профиля с кнопкой возврата.
#[component]
pub(super) fn SubpageHeader(#[prop(into)] title: String) -> impl IntoView {
    view! {
        <div class="subpage-header">
            <A href="/profile" attr:class="subpage-header__back">
                {icon("arrow-left")}
            </A>
            <h1>{title}</h1>
        </div>
    }
}
