use super::SubpageHeader;
use crate::layout::toast_service::use_toast;
use crate::shared::icons::icon;
use contracts::domain::login_session::{DeviceType, LoginSession};
use contracts::fixtures;
use leptos::prelude::*;
use thaw::*;

fn device_icon(device: DeviceType) -> &'static str {
    match device {
        DeviceType::Desktop => "monitor",
        DeviceType::Mobile | DeviceType::Tablet => "smartphone",
    }
}

/// История входов. "Завершить другие сессии" убирает из списка всё,
/// кроме текущей сессии.
#[component]
pub fn LoginHistoryPage() -> impl IntoView {
    let toasts = use_toast();
    let sessions = RwSignal::new(fixtures::login_sessions().to_vec());

    let end_others = move |_| {
        sessions.update(|list| list.retain(|s| s.is_current));
        toasts.success("Все другие сессии завершены");
    };

    view! {
        <div class="page page--login-history">
            <SubpageHeader title="История входов" />

            <div class="session-list">
                <For
                    each=move || sessions.get()
                    key=|session| session.id.clone()
                    children=move |session: LoginSession| {
                        view! {
                            <div class="session-card">
                                <span class="session-card__icon">
                                    {icon(device_icon(session.device_type))}
                                </span>
                                <div class="session-card__info">
                                    <span class="session-card__device">
                                        {session.device_name.clone()}
                                    </span>
                                    <span class="session-card__meta">
                                        {format!("{} · {}", session.location, session.ip)}
                                    </span>
                                    <span class="session-card__date">{session.date.clone()}</span>
                                </div>
                                <Show when={
                                    let current = session.is_current;
                                    move || current
                                }>
                                    <span class="session-card__current">"Текущая сессия"</span>
                                </Show>
                            </div>
                        }
                    }
                />
            </div>

            <Button appearance=ButtonAppearance::Secondary on_click=end_others>
                "Завершить другие сессии"
            </Button>
        </div>
    }
}
