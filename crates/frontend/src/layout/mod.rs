pub mod bottom_nav;
pub mod header;
pub mod toast_service;

use bottom_nav::BottomNavigation;
use header::Header;
use leptos::prelude::*;
use toast_service::ToastHost;

/// Каркас приложения.
///
/// ```text
/// +---------------------------+
/// |          Header           |
/// +---------------------------+
/// |         Content           |
/// +---------------------------+
/// |     BottomNavigation      |
/// +---------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">{children()}</main>
            <BottomNavigation />
            <ToastHost />
        </div>
    }
}
