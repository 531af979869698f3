use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

/// Заглушка пустого результата: иконка, сообщение и действие "Сбросить".
#[component]
pub fn EmptyState(
    #[prop(into)] message: String,
    /// Сброс запроса/фильтров
    #[prop(into)]
    on_reset: Callback<()>,
    #[prop(optional, into)] reset_label: String,
) -> impl IntoView {
    let reset_label = if reset_label.is_empty() {
        "Сбросить фильтры".to_string()
    } else {
        reset_label
    };

    view! {
        <div class="empty-state">
            <div class="empty-state__icon">{icon("search")}</div>
            <p class="empty-state__message">{message}</p>
            <Button
                size=ButtonSize::Small
                appearance=ButtonAppearance::Secondary
                on_click=move |_| on_reset.run(())
            >
                {reset_label}
            </Button>
        </div>
    }
}
