use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum OperationKind {
    Income,
    Expense,
}

#[derive(Clone, PartialEq)]
struct Operation {
    title: &'static str,
    date: &'static str,
    amount: u32,
    kind: OperationKind,
}

const OPERATIONS: [Operation; 4] = [
    Operation {
        title: "Оплата заказа №VE456789",
        date: "20.05.2024",
        amount: 28_500,
        kind: OperationKind::Income,
    },
    Operation {
        title: "Комиссия сервиса",
        date: "20.05.2024",
        amount: 1_425,
        kind: OperationKind::Expense,
    },
    Operation {
        title: "Оплата заказа №VE456788",
        date: "14.05.2024",
        amount: 12_000,
        kind: OperationKind::Income,
    },
    Operation {
        title: "Вывод средств",
        date: "10.05.2024",
        amount: 20_000,
        kind: OperationKind::Expense,
    },
];

/// Баланс и платежи: счёт, способы оплаты, история операций с
/// вкладками Все/Поступления/Списания.
#[component]
pub fn WalletPage() -> impl IntoView {
    let toasts = use_toast();
    // None — вкладка "Все"
    let kind_tab = RwSignal::new(None::<OperationKind>);

    let visible = Memo::new(move |_| {
        OPERATIONS
            .iter()
            .filter(|op| kind_tab.get().map_or(true, |tab| op.kind == tab))
            .cloned()
            .collect::<Vec<_>>()
    });

    let tab_class = move |tab: Option<OperationKind>| {
        if kind_tab.get() == tab {
            "wallet-tabs__tab wallet-tabs__tab--active"
        } else {
            "wallet-tabs__tab"
        }
    };

    view! {
        <div class="page page--wallet">
            <h1 class="page__title">"Баланс и платежи"</h1>

            <div class="card wallet-balance">
                <span class="wallet-balance__label">"Доступно средств"</span>
                <span class="wallet-balance__amount">"25 640 ₽"</span>
                <span class="wallet-balance__pending">"В обработке: 12 500 ₽"</span>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=move |_| {
                        toasts.info("Функция пополнения счёта будет доступна в следующем обновлении")
                    }
                >
                    "Пополнить"
                </Button>
            </div>

            <h2 class="page__subtitle">"Способы оплаты"</h2>
            <div class="card wallet-card">
                {icon("wallet")}
                <div class="wallet-card__info">
                    <span>"**** 5678"</span>
                    <span class="wallet-card__meta">"Сбербанк · 05/25"</span>
                </div>
                <button on:click=move |_| toasts.info("Редактирование карты")>
                    "Изменить"
                </button>
            </div>
            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| toasts.info("Добавление карты")
            >
                "Добавить карту"
            </Button>

            <h2 class="page__subtitle">"История операций"</h2>
            <div class="wallet-tabs">
                <button class=move || tab_class(None) on:click=move |_| kind_tab.set(None)>
                    "Все"
                </button>
                <button
                    class=move || tab_class(Some(OperationKind::Income))
                    on:click=move |_| kind_tab.set(Some(OperationKind::Income))
                >
                    "Поступления"
                </button>
                <button
                    class=move || tab_class(Some(OperationKind::Expense))
                    on:click=move |_| kind_tab.set(Some(OperationKind::Expense))
                >
                    "Списания"
                </button>
            </div>

            <div class="operation-list">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|op| {
                            let (sign, class) = match op.kind {
                                OperationKind::Income => ("+", "operation operation--income"),
                                OperationKind::Expense => ("-", "operation operation--expense"),
                            };
                            view! {
                                <div class=class>
                                    <div class="operation__info">
                                        <span class="operation__title">{op.title}</span>
                                        <span class="operation__date">{op.date}</span>
                                    </div>
                                    <span class="operation__amount">
                                        {format!("{sign}{} ₽", op.amount)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
