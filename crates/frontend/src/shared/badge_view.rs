use contracts::badge::StatusBadge;
use leptos::prelude::*;

/// Бейдж статуса: подпись + класс из contracts::badge.
#[component]
pub fn Badge(badge: StatusBadge) -> impl IntoView {
    view! { <span class=badge.class>{badge.label}</span> }
}
