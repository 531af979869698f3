use crate::shared::badge_view::Badge;
use crate::shared::icons::icon;
use contracts::badge::order_status_badge;
use contracts::domain::order::Order;
use contracts::fixtures;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

/// Карточка заказа на главной: маршрут, статус, цена.
#[component]
fn OrderCard(order: Order) -> impl IntoView {
    let navigate = use_navigate();
    let id = order.id.clone();
    view! {
        <div
            class="order-card"
            on:click=move |_| navigate(&format!("/orders/{id}"), Default::default())
        >
            <div class="order-card__header">
                <span class="order-card__id">{format!("№{}", order.id)}</span>
                <Badge badge=order_status_badge(order.status.as_str()) />
            </div>
            <div class="order-card__route">{order.route()}</div>
            <div class="order-card__footer">
                <span>{order.delivery_date.clone()}</span>
                <span>{order.cargo_type.clone()}</span>
                <span class="order-card__price">{format!("{} ₽", order.price)}</span>
            </div>
        </div>
    }
}

/// Секция истории заказов. Активные и завершённые каталоги раздельные,
/// секция не пытается их объединять.
#[component]
fn OrderHistory(
    #[prop(into)] title: String,
    orders: Vec<Order>,
    #[prop(optional)] max_items: Option<usize>,
) -> impl IntoView {
    let total = orders.len();
    let shown: Vec<Order> = match max_items {
        Some(n) => orders.into_iter().take(n).collect(),
        None => orders,
    };

    view! {
        <section class="home-section">
            <div class="home-section__header">
                <h2>{title}</h2>
                <span class="home-section__count">{format!("{total}")}</span>
            </div>
            {if shown.is_empty() {
                view! { <p class="home-section__empty">"Заказов пока нет"</p> }.into_any()
            } else {
                view! {
                    <div class="home-section__list">
                        {shown
                            .into_iter()
                            .map(|order| view! { <OrderCard order=order /> })
                            .collect_view()}
                    </div>
                }
                .into_any()
            }}
        </section>
    }
}

/// Главная страница: быстрые действия, активные и завершённые заказы,
/// сводная статистика.
#[component]
pub fn HomePage() -> impl IntoView {
    let active = fixtures::active_orders().to_vec();
    let completed = fixtures::completed_orders().to_vec();

    let total_orders = active.len() + completed.len();
    let total_spent: u32 = completed.iter().map(|o| o.price).sum();

    view! {
        <div class="page page--home">
            <section class="home-section quick-actions">
                <h2>"Быстрые действия"</h2>
                <div class="quick-actions__grid">
                    <A href="/new-cargo" attr:class="quick-actions__item">
                        {icon("package")}
                        <span>"Разместить груз"</span>
                    </A>
                    <A href="/search" attr:class="quick-actions__item">
                        {icon("truck")}
                        <span>"Найти груз"</span>
                    </A>
                    <A href="/documents" attr:class="quick-actions__item">
                        {icon("file-text")}
                        <span>"Документы"</span>
                    </A>
                    <A href="/wallet" attr:class="quick-actions__item">
                        {icon("wallet")}
                        <span>"Платежи"</span>
                    </A>
                </div>
            </section>

            <OrderHistory title="Активные заказы" orders=active max_items=3 />
            <OrderHistory title="Завершённые заказы" orders=completed max_items=3 />

            <section class="home-section home-stats">
                <h2>"Статистика"</h2>
                <div class="home-stats__grid">
                    <div class="home-stats__item">
                        <span class="home-stats__value">{total_orders}</span>
                        <span class="home-stats__label">"Всего заказов"</span>
                    </div>
                    <div class="home-stats__item">
                        <span class="home-stats__value">{format!("{total_spent} ₽")}</span>
                        <span class="home-stats__label">"Оборот"</span>
                    </div>
                </div>
            </section>

            <A href="/new-cargo" attr:class="fab">
                {icon("plus")}
            </A>
        </div>
    }
}
