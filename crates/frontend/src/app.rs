use crate::layout::toast_service::ToastService;
use crate::routes::routes::AppRoutes;
use crate::shared::theme::ThemeProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Сервис тостов доступен всем страницам через контекст
    provide_context(ToastService::new());

    view! {
        <ThemeProvider>
            <AppRoutes />
        </ThemeProvider>
    }
}
