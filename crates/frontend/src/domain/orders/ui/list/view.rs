use super::state::create_state;
use crate::domain::orders::ui::details::OrderDetailsPanel;
use crate::shared::badge_view::Badge;
use crate::shared::empty_state::EmptyState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::badge::order_status_badge;
use contracts::domain::order::{Order, OrderStatus};
use contracts::search::filter_list;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

/// Страница заказов: поиск + фильтр по статусу + master-detail.
#[component]
pub fn OrdersPage() -> impl IntoView {
    let state = create_state();

    // /orders/:id открывает страницу сразу в режиме деталей
    let params = use_params_map();
    if let Some(id) = params.with_untracked(|p| p.get("id")) {
        state.update(|s| s.selected_id = Some(id));
    }

    let visible = Memo::new(move |_| {
        state.with(|s| {
            let by_status: Vec<Order> = s
                .items
                .iter()
                .filter(|o| s.status_filter == "all" || o.status.as_str() == s.status_filter)
                .cloned()
                .collect();
            filter_list(&by_status, &s.query)
        })
    });

    let selected_order = Memo::new(move |_| {
        state.with(|s| {
            s.selected_id
                .as_ref()
                .and_then(|id| s.items.iter().find(|o| &o.id == id).cloned())
        })
    });

    let reset = move || {
        state.update(|s| {
            s.query.clear();
            s.status_filter = "all".to_string();
        });
    };

    view! {
        <div class="page page--orders">
            <Show
                when=move || selected_order.get().is_none()
                fallback=move || {
                    // Панель деталей вместо списка; "назад" очищает выбор
                    selected_order
                        .get()
                        .map(|order| {
                            view! {
                                <OrderDetailsPanel
                                    order=order
                                    on_back=Callback::new(move |_: ()| {
                                        state.update(|s| s.selected_id = None);
                                    })
                                    on_cancel=Callback::new(move |id: String| {
                                        state.update(|s| {
                                            if let Some(o) =
                                                s.items.iter_mut().find(|o| o.id == id)
                                            {
                                                o.status = OrderStatus::Cancelled;
                                            }
                                        });
                                    })
                                />
                            }
                        })
                        .into_any()
                }
            >
                <h1 class="page__title">"Мои заказы"</h1>
                <div class="page__toolbar">
                    <SearchInput
                        value=Signal::derive(move || state.with(|s| s.query.clone()))
                        on_change=Callback::new(move |q: String| {
                            state.update(|s| s.query = q);
                        })
                        placeholder="Номер заказа, маршрут, груз..."
                    />
                    <select
                        class="page__status-filter"
                        on:change=move |ev| {
                            state.update(|s| s.status_filter = event_target_value(&ev));
                        }
                        prop:value=move || state.with(|s| s.status_filter.clone())
                    >
                        <option value="all">"Все статусы"</option>
                        {OrderStatus::all()
                            .into_iter()
                            .map(|status| {
                                view! {
                                    <option value=status.as_str()>
                                        {order_status_badge(status.as_str()).label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>

                <Show
                    when=move || !visible.get().is_empty()
                    fallback=move || {
                        view! {
                            <EmptyState
                                message="Нет заказов для отображения"
                                on_reset=Callback::new(move |_: ()| reset())
                            />
                        }
                    }
                >
                    <div class="order-table">
                        <div class="order-table__head">
                            <span>"ID"</span>
                            <span>"Маршрут"</span>
                            <span>"Доставка до"</span>
                            <span>"Статус"</span>
                            <span>"Цена"</span>
                        </div>
                        <For
                            each=move || visible.get()
                            key=|order| (order.id.clone(), order.status)
                            children=move |order: Order| {
                                let id = order.id.clone();
                                let order_id = order.id.clone();
                                let route = order.route();
                                view! {
                                    <div
                                        class="order-table__row"
                                        on:click=move |_| {
                                            state.update(|s| s.selected_id = Some(id.clone()));
                                        }
                                    >
                                        <span class="order-table__id">
                                            {move || {
                                                state.with(|s| highlight_matches(&order_id, &s.query))
                                            }}
                                        </span>
                                        <span>
                                            {move || {
                                                state.with(|s| highlight_matches(&route, &s.query))
                                            }}
                                        </span>
                                        <span>{order.delivery_date.clone()}</span>
                                        <Badge badge=order_status_badge(order.status.as_str()) />
                                        <span>{format!("{} ₽", order.price)}</span>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>
        </div>
    }
}
