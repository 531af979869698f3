use crate::layout::toast_service::use_toast;
use crate::shared::badge_view::Badge;
use crate::shared::empty_state::EmptyState;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::badge::{document_status_badge, document_type_icon};
use contracts::domain::document::{Document, DocumentType};
use contracts::fixtures;
use contracts::search::filter_list;
use leptos::prelude::*;
use thaw::*;

/// Страница документов: вкладки по типу, текстовый поиск по названию
/// и номеру заказа.
#[component]
pub fn DocumentsPage() -> impl IntoView {
    let toasts = use_toast();
    let query = RwSignal::new(String::new());
    // None — вкладка "Все"
    let type_tab = RwSignal::new(None::<DocumentType>);

    let visible = Memo::new(move |_| {
        let base: Vec<Document> = match type_tab.get() {
            None => fixtures::documents().to_vec(),
            Some(tab) => fixtures::documents()
                .iter()
                .filter(|d| d.doc_type == tab)
                .cloned()
                .collect(),
        };
        query.with(|q| filter_list(&base, q))
    });

    let tab_class = move |tab: Option<DocumentType>| {
        if type_tab.get() == tab {
            "doc-tabs__tab doc-tabs__tab--active"
        } else {
            "doc-tabs__tab"
        }
    };

    let reset = Callback::new(move |_: ()| {
        query.set(String::new());
        type_tab.set(None);
    });

    view! {
        <div class="page page--documents">
            <h1 class="page__title">{icon("file-text")} "Документы"</h1>

            <SearchInput
                value=query
                on_change=Callback::new(move |q: String| query.set(q))
                placeholder="Название или номер заказа..."
            />

            <div class="doc-tabs">
                <button class=move || tab_class(None) on:click=move |_| type_tab.set(None)>
                    "Все"
                </button>
                <button
                    class=move || tab_class(Some(DocumentType::Ttn))
                    on:click=move |_| type_tab.set(Some(DocumentType::Ttn))
                >
                    "ТТН"
                </button>
                <button
                    class=move || tab_class(Some(DocumentType::Contract))
                    on:click=move |_| type_tab.set(Some(DocumentType::Contract))
                >
                    "Договоры"
                </button>
                <button
                    class=move || tab_class(Some(DocumentType::Receipt))
                    on:click=move |_| type_tab.set(Some(DocumentType::Receipt))
                >
                    "Квитанции"
                </button>
            </div>

            <Show
                when=move || !visible.with(|v| v.is_empty())
                fallback=move || {
                    view! {
                        <EmptyState
                            message="Документы не найдены"
                            on_reset=reset
                        />
                    }
                }
            >
                <div class="doc-list">
                    <For
                        each=move || visible.get()
                        key=|doc| doc.id.clone()
                        children=move |doc: Document| {
                            let title = doc.title.clone();
                            let order_id = doc.order_id.clone();
                            view! {
                                <div class="doc-card">
                                    <span class="doc-card__icon">
                                        {icon(document_type_icon(doc.doc_type.as_str()))}
                                    </span>
                                    <div class="doc-card__body">
                                        <span class="doc-card__title">
                                            {move || query.with(|q| highlight_matches(&title, q))}
                                        </span>
                                        <span class="doc-card__meta">
                                            {move || query.with(|q| highlight_matches(&order_id, q))}
                                            " · "
                                            {doc.date.clone()}
                                        </span>
                                    </div>
                                    <Badge badge=document_status_badge(doc.status.as_str()) />
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <Button
                appearance=ButtonAppearance::Primary
                on_click=move |_| toasts.info("Создание нового документа")
            >
                "Создать новый документ"
            </Button>
        </div>
    }
}
