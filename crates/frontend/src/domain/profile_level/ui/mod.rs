use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Section {
    Documents,
    Verification,
}

struct ChecklistItem {
    label: &'static str,
    done: bool,
}

const DOCUMENT_ITEMS: [ChecklistItem; 4] = [
    ChecklistItem {
        label: "Паспорт водителя",
        done: true,
    },
    ChecklistItem {
        label: "Водительское удостоверение",
        done: true,
    },
    ChecklistItem {
        label: "Свидетельство о регистрации ТС",
        done: true,
    },
    ChecklistItem {
        label: "Страховой полис",
        done: false,
    },
];

const VERIFICATION_ITEMS: [ChecklistItem; 2] = [
    ChecklistItem {
        label: "Подтверждение телефона",
        done: true,
    },
    ChecklistItem {
        label: "Верификация личности",
        done: false,
    },
];

fn checklist(items: &'static [ChecklistItem]) -> AnyView {
    items
        .iter()
        .map(|item| {
            view! {
                <div class="checklist__item">
                    <input type="checkbox" prop:checked=item.done disabled />
                    <span>{item.label}</span>
                </div>
            }
        })
        .collect_view()
        .into_any()
}

/// Уровень профиля: прогресс, пороги уровней и раскрываемые секции
/// "что улучшить".
#[component]
pub fn ProfileLevelPage() -> impl IntoView {
    let toasts = use_toast();
    // Раскрытая секция, не более одной за раз
    let open_section = RwSignal::new(None::<Section>);

    let toggle = move |section: Section| {
        open_section.update(|open| {
            *open = if *open == Some(section) {
                None
            } else {
                Some(section)
            };
        });
    };

    view! {
        <div class="page page--profile-level">
            <h1 class="page__title">"Уровень профиля"</h1>

            <div class="card level-card">
                <div class="level-card__header">
                    <h2>"Доверенный партнёр"</h2>
                    {icon("shield")}
                </div>
                <div class="level-card__progress-label">
                    <span>"Прогресс профиля"</span>
                    <span>"75%"</span>
                </div>
                <div class="progress">
                    <div class="progress__bar" style="width: 75%"></div>
                </div>
                <p class="level-card__hint">
                    "Чем выше уровень профиля, тем больше доверия к вам у заказчиков и больше преимуществ на платформе."
                </p>
                <div class="level-card__thresholds">
                    <div>
                        <span>"75%"</span>
                        <span>"Текущий"</span>
                    </div>
                    <div>
                        <span>"90%"</span>
                        <span>"Продвинутый"</span>
                    </div>
                    <div>
                        <span>"100%"</span>
                        <span>"Максимальный"</span>
                    </div>
                </div>
            </div>

            <h2 class="page__subtitle">"Что улучшить"</h2>

            <div class="card collapsible">
                <button class="collapsible__trigger" on:click=move |_| toggle(Section::Documents)>
                    <span>"Документы"</span>
                    <span class="collapsible__meta">"75% заполнено"</span>
                </button>
                <Show when=move || open_section.get() == Some(Section::Documents)>
                    <div class="collapsible__content checklist">
                        {checklist(&DOCUMENT_ITEMS)}
                    </div>
                </Show>
            </div>

            <div class="card collapsible">
                <button class="collapsible__trigger" on:click=move |_| toggle(Section::Verification)>
                    <span>"Верификация"</span>
                    <span class="collapsible__meta">"50% пройдено"</span>
                </button>
                <Show when=move || open_section.get() == Some(Section::Verification)>
                    <div class="collapsible__content checklist">
                        {checklist(&VERIFICATION_ITEMS)}
                        <Button
                            size=ButtonSize::Small
                            appearance=ButtonAppearance::Secondary
                            on_click=move |_| {
                                toasts.info("Верификация будет доступна в следующем обновлении")
                            }
                        >
                            "Пройти верификацию"
                        </Button>
                    </div>
                </Show>
            </div>
        </div>
    }
}
