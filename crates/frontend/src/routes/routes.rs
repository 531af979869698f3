use crate::domain::documents::ui::DocumentsPage;
use crate::domain::home::ui::HomePage;
use crate::domain::new_cargo::ui::NewCargoPage;
use crate::domain::orders::ui::list::OrdersPage;
use crate::domain::profile::ui::{
    ChangePasswordPage, LoginHistoryPage, PersonalDataPage, ProfilePage, RolesPage,
};
use crate::domain::profile_level::ui::ProfileLevelPage;
use crate::domain::rating::ui::RatingPage;
use crate::domain::reviews::ui::ReviewsPage;
use crate::domain::search::ui::SearchPage;
use crate::domain::stats::ui::StatsPage;
use crate::domain::templates::ui::TemplatesPage;
use crate::domain::tracking::ui::TrackingPage;
use crate::domain::vehicles::ui::VehiclesPage;
use crate::layout::Shell;
use crate::system::pages::not_found::NotFound;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

/// Таблица маршрутов приложения. Каждый путь соответствует ровно одной
/// странице; неизвестный путь попадает в NotFound.
#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/search") view=SearchPage />
                    <Route path=path!("/orders") view=OrdersPage />
                    <Route path=path!("/orders/:id") view=OrdersPage />
                    <Route path=path!("/tracking/:id") view=TrackingPage />
                    <Route path=path!("/documents") view=DocumentsPage />
                    <Route path=path!("/stats") view=StatsPage />
                    <Route path=path!("/vehicles") view=VehiclesPage />
                    <Route path=path!("/wallet") view=crate::domain::wallet::ui::WalletPage />
                    <Route path=path!("/rating") view=RatingPage />
                    <Route path=path!("/profile-level") view=ProfileLevelPage />
                    <Route path=path!("/reviews") view=ReviewsPage />
                    <Route path=path!("/new-cargo") view=NewCargoPage />
                    <Route path=path!("/templates") view=TemplatesPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/profile/personal-data") view=PersonalDataPage />
                    <Route path=path!("/profile/roles") view=RolesPage />
                    <Route path=path!("/profile/login-history") view=LoginHistoryPage />
                    <Route path=path!("/profile/change-password") view=ChangePasswordPage />
                </Routes>
            </Shell>
        </Router>
    }
}
