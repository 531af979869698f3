use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use contracts::fixtures;
use leptos::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Period {
    Month,
    Quarter,
    Year,
}

impl Period {
    fn label(self) -> &'static str {
        match self {
            Period::Month => "Месяц",
            Period::Quarter => "Квартал",
            Period::Year => "Год",
        }
    }
}

/// Аналитика: сводные показатели за выбранный период. Цифры считаются
/// по каталогу завершённых заказов.
#[component]
pub fn StatsPage() -> impl IntoView {
    let toasts = use_toast();
    let period = RwSignal::new(Period::Month);

    let completed = fixtures::completed_orders();
    let orders_count = completed.len();
    let total_income: u32 = completed.iter().map(|o| o.price).sum();
    let month_distance: u32 = 3_840;

    let period_class = move |p: Period| {
        if period.get() == p {
            "stats-periods__tab stats-periods__tab--active"
        } else {
            "stats-periods__tab"
        }
    };

    view! {
        <div class="page page--stats">
            <h1 class="page__title">{icon("bar-chart")} "Аналитика"</h1>

            <div class="stats-periods">
                {[Period::Month, Period::Quarter, Period::Year]
                    .into_iter()
                    .map(|p| {
                        view! {
                            <button
                                class=move || period_class(p)
                                on:click=move |_| {
                                    period.set(p);
                                    toasts.info(format!("Период: {}", p.label()));
                                }
                            >
                                {p.label()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    class="stats-periods__tab"
                    on:click=move |_| toasts.info("Выбор периода")
                >
                    {icon("calendar")}
                    "Выбрать период"
                </button>
            </div>

            <div class="card stats-grid">
                <div class="stats-grid__item">
                    <span class="stats-grid__value">{orders_count}</span>
                    <span class="stats-grid__label">"Заказов выполнено"</span>
                </div>
                <div class="stats-grid__item">
                    <span class="stats-grid__value">{format!("{total_income} ₽")}</span>
                    <span class="stats-grid__label">"Общий доход"</span>
                </div>
                <div class="stats-grid__item">
                    <span class="stats-grid__value">{month_distance}</span>
                    <span class="stats-grid__label">"Км за месяц"</span>
                </div>
            </div>

            <div class="card stats-progress">
                <div class="stats-progress__label">
                    <span>"Выполнено за период"</span>
                    <span>"80%"</span>
                </div>
                <div class="progress">
                    <div class="progress__bar" style="width: 80%"></div>
                </div>
            </div>
        </div>
    }
}
