use crate::layout::toast_service::use_toast;
use crate::shared::empty_state::EmptyState;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::domain::template::OrderTemplate;
use contracts::fixtures;
use contracts::search::filter_list;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use thaw::*;

/// Шаблоны заказов: поиск по названию/маршруту/грузу, создание заказа
/// на основе шаблона.
#[component]
pub fn TemplatesPage() -> impl IntoView {
    let toasts = use_toast();
    let navigate = use_navigate();
    let query = RwSignal::new(String::new());

    let visible = Memo::new(move |_| {
        query.with(|q| filter_list(fixtures::templates(), q))
    });

    let use_template = move |template: OrderTemplate| {
        toasts.success(format!("Создан заказ на основе шаблона \"{}\"", template.name));
        navigate("/new-cargo", Default::default());
    };

    view! {
        <div class="page page--templates">
            <h1 class="page__title">"Шаблоны заказов"</h1>

            <SearchInput
                value=query
                on_change=Callback::new(move |q: String| query.set(q))
                placeholder="Название, маршрут, груз..."
            />

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=move || {
                    view! {
                        <EmptyState
                            message="Шаблоны не найдены"
                            on_reset=Callback::new(move |_: ()| query.set(String::new()))
                            reset_label="Очистить поиск"
                        />
                    }
                }
            >
                <div class="template-list">
                    <For
                        each=move || visible.get()
                        key=|template| template.id.clone()
                        children={
                            let use_template = use_template.clone();
                            move |template: OrderTemplate| {
                                let name = template.name.clone();
                                let cargo = template.cargo_type.clone();
                                let use_template = use_template.clone();
                                let chosen = template.clone();
                                view! {
                                    <div class="template-card">
                                        <div class="template-card__info">
                                            <span class="template-card__name">
                                                {move || query.with(|q| highlight_matches(&name, q))}
                                            </span>
                                            <span class="template-card__route">{template.route()}</span>
                                            <span class="template-card__meta">
                                                {move || query.with(|q| highlight_matches(&cargo, q))}
                                                {format!(" · {} т · {} м³ · {}", template.weight, template.volume, template.date)}
                                            </span>
                                        </div>
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Primary
                                            on_click=move |_| use_template(chosen.clone())
                                        >
                                            "Использовать"
                                        </Button>
                                    </div>
                                }
                            }
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
