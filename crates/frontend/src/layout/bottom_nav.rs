use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

const NAV_ITEMS: [(&str, &str, &str); 5] = [
    ("/", "home", "Главная"),
    ("/search", "search", "Поиск"),
    ("/orders", "package", "Заказы"),
    ("/documents", "file-text", "Документы"),
    ("/profile", "user", "Профиль"),
];

/// Активен ли пункт навигации для текущего пути. Корень совпадает
/// только точно, остальные пункты захватывают свои подпути
/// (`/orders/123` подсвечивает "Заказы").
pub fn is_active(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href || current.starts_with(&format!("{href}/"))
}

/// Нижняя навигация с подсветкой активной вкладки.
#[component]
pub fn BottomNavigation() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="bottom-nav">
            {NAV_ITEMS
                .into_iter()
                .map(|(href, icon_name, label)| {
                    view! {
                        <A
                            href=href
                            attr:class=move || {
                                if is_active(&location.pathname.get(), href) {
                                    "bottom-nav__item bottom-nav__item--active"
                                } else {
                                    "bottom-nav__item"
                                }
                            }
                        >
                            {icon(icon_name)}
                            <span>{label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_matches_only_exactly() {
        assert!(is_active("/", "/"));
        assert!(!is_active("/orders", "/"));
    }

    #[test]
    fn section_captures_subpaths() {
        assert!(is_active("/orders", "/orders"));
        assert!(is_active("/orders/123458", "/orders"));
        assert!(is_active("/profile/roles", "/profile"));
        assert!(!is_active("/ordersarchive", "/orders"));
        assert!(!is_active("/search", "/orders"));
    }
}
