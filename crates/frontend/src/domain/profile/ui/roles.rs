use super::SubpageHeader;
use crate::layout::toast_service::use_toast;
use crate::shared::badge_view::Badge;
use contracts::badge::member_activity_badge;
use contracts::domain::team::{toggle_active, TeamMember};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::*;

/// Роли и доступы команды. Переключение активности меняет только
/// локальную копию каталога.
#[component]
pub fn RolesPage() -> impl IntoView {
    let toasts = use_toast();
    let members = RwSignal::new(fixtures::team_members().to_vec());

    let toggle = move |id: String| {
        let mut name = String::new();
        let mut new_state = None;
        members.update(|list| {
            if let Some(member) = list.iter().find(|m| m.id == id) {
                name = member.name.clone();
            }
            new_state = toggle_active(list, &id);
        });
        if let Some(active) = new_state {
            let state = if active { "активный" } else { "неактивный" };
            toasts.success(format!("Статус {name} изменён на {state}"));
        }
    };

    view! {
        <div class="page page--roles">
            <SubpageHeader title="Роли и доступы" />

            <div class="member-list">
                <For
                    each=move || members.get()
                    key=|member| (member.id.clone(), member.is_active)
                    children=move |member: TeamMember| {
                        let id = member.id.clone();
                        let activity = if member.is_active { "active" } else { "inactive" };
                        view! {
                            <div class="member-card">
                                <div class="member-card__info">
                                    <span class="member-card__name">{member.name.clone()}</span>
                                    <span class="member-card__email">{member.email.clone()}</span>
                                    <span class="member-card__role">{member.role.clone()}</span>
                                    <div class="member-card__permissions">
                                        {member
                                            .permissions
                                            .iter()
                                            .map(|p| view! { <span class="chip">{p.clone()}</span> })
                                            .collect_view()}
                                    </div>
                                </div>
                                <div class="member-card__controls">
                                    <Badge badge=member_activity_badge(activity) />
                                    <input
                                        type="checkbox"
                                        class="member-card__switch"
                                        prop:checked=member.is_active
                                        on:change=move |_| toggle(id.clone())
                                    />
                                </div>
                            </div>
                        }
                    }
                />
            </div>

            <Button
                appearance=ButtonAppearance::Secondary
                on_click=move |_| toasts.info("Открытие формы добавления сотрудника")
            >
                "Добавить сотрудника"
            </Button>
        </div>
    }
}
