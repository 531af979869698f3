use crate::layout::toast_service::use_toast;
use crate::shared::badge_view::Badge;
use crate::shared::icons::icon;
use contracts::badge::{document_status_badge, document_type_icon, order_status_badge};
use contracts::domain::order::{Order, OrderStatus};
use leptos::prelude::*;
use leptos_router::components::A;

/// Панель деталей заказа. Показывается вместо списка при выбранном id;
/// "назад" возвращает список без изменений каталога.
#[component]
pub fn OrderDetailsPanel(
    order: Order,
    #[prop(into)] on_back: Callback<()>,
    /// Отмена заказа — локальная, не переживает перезагрузку
    #[prop(into)]
    on_cancel: Callback<String>,
) -> impl IntoView {
    let toasts = use_toast();

    let documents: Vec<_> = contracts::fixtures::documents()
        .iter()
        .filter(|d| d.order_id == order.id)
        .cloned()
        .collect();

    let can_cancel = matches!(order.status, OrderStatus::Pending | OrderStatus::InProgress);
    let order_id = order.id.clone();
    let tracking_href = format!("/tracking/{}", order.id);

    let cancel = move |_| {
        on_cancel.run(order_id.clone());
        toasts.success(format!("Заказ #{order_id} отменен"));
    };

    view! {
        <div class="order-details">
            <div class="order-details__header">
                <button class="order-details__back" on:click=move |_| on_back.run(())>
                    {icon("arrow-left")}
                    "К списку"
                </button>
                <h1 class="page__title">{format!("Заказ #{}", order.id)}</h1>
                <Badge badge=order_status_badge(order.status.as_str()) />
            </div>

            <div class="order-details__card">
                <div class="order-details__row">
                    <span>"Маршрут"</span>
                    <span>{order.route()}</span>
                </div>
                <div class="order-details__row">
                    <span>"Создан"</span>
                    <span>{order.created_date.clone()}</span>
                </div>
                <div class="order-details__row">
                    <span>"Доставка до"</span>
                    <span>{order.delivery_date.clone()}</span>
                </div>
                <div class="order-details__row">
                    <span>"Груз"</span>
                    <span>{format!("{}, {} т, {} м³", order.cargo_type, order.weight, order.volume)}</span>
                </div>
                <div class="order-details__row">
                    <span>"Цена"</span>
                    <span>{format!("{} ₽", order.price)}</span>
                </div>
            </div>

            <h2 class="order-details__subtitle">"Документы"</h2>
            <Show
                when={
                    let has_docs = !documents.is_empty();
                    move || has_docs
                }
                fallback=|| view! { <p class="order-details__empty">"Документов пока нет"</p> }
            >
                <div class="order-details__documents">
                    {documents
                        .iter()
                        .map(|doc| {
                            view! {
                                <div class="document-row">
                                    {icon(document_type_icon(doc.doc_type.as_str()))}
                                    <span>{doc.title.clone()}</span>
                                    <Badge badge=document_status_badge(doc.status.as_str()) />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </Show>

            <div class="order-details__actions">
                <A href=tracking_href attr:class="order-details__track">
                    {icon("map-pin")}
                    "Отследить"
                </A>
                <Show when=move || can_cancel>
                    <button class="order-details__cancel" on:click=cancel.clone()>
                        "Отменить заказ"
                    </button>
                </Show>
            </div>
        </div>
    }
}
