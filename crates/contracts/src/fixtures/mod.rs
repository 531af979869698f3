//! Демо-каталоги. Данные генерируются ОДИН раз за сессию из
//! зафиксированного seed, поэтому повторный рендер (и повторное обращение
//! к каталогу) видит те же значения.

use crate::domain::document::{Document, DocumentStatus, DocumentType};
use crate::domain::listing::{CargoListing, TransportListing};
use crate::domain::login_session::{DeviceType, LoginSession};
use crate::domain::notification::{Notification, NotificationKind};
use crate::domain::order::{Order, OrderStatus};
use crate::domain::review::Review;
use crate::domain::team::TeamMember;
use crate::domain::template::OrderTemplate;
use crate::domain::tracking::{Delivery, Waypoint, WaypointStatus};
use crate::domain::vehicle::{Vehicle, VehicleStatus};
use once_cell::sync::Lazy;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// Города для автодополнения локаций.
pub const CITIES: [&str; 15] = [
    "Москва",
    "Санкт-Петербург",
    "Нижний Новгород",
    "Екатеринбург",
    "Новосибирск",
    "Казань",
    "Самара",
    "Омск",
    "Челябинск",
    "Ростов-на-Дону",
    "Уфа",
    "Волгоград",
    "Пермь",
    "Красноярск",
    "Воронеж",
];

const SESSION_SEED: u64 = 0x5645_4b54; // "VEKT"

struct Catalogs {
    orders: Vec<Order>,
    active_orders: Vec<Order>,
    completed_orders: Vec<Order>,
    cargo_listings: Vec<CargoListing>,
    transport_listings: Vec<TransportListing>,
    documents: Vec<Document>,
    notifications: Vec<Notification>,
    team_members: Vec<TeamMember>,
    templates: Vec<OrderTemplate>,
    vehicles: Vec<Vehicle>,
    reviews: Vec<Review>,
    login_sessions: Vec<LoginSession>,
}

static CATALOGS: Lazy<Catalogs> = Lazy::new(|| build(SESSION_SEED));

pub fn orders() -> &'static [Order] {
    &CATALOGS.orders
}

/// Активные заказы дашборда. Отдельный каталог, не срез `orders()`:
/// активные и завершённые заказы — два независимых набора данных.
pub fn active_orders() -> &'static [Order] {
    &CATALOGS.active_orders
}

pub fn completed_orders() -> &'static [Order] {
    &CATALOGS.completed_orders
}

pub fn cargo_listings() -> &'static [CargoListing] {
    &CATALOGS.cargo_listings
}

pub fn transport_listings() -> &'static [TransportListing] {
    &CATALOGS.transport_listings
}

pub fn documents() -> &'static [Document] {
    &CATALOGS.documents
}

pub fn notifications() -> &'static [Notification] {
    &CATALOGS.notifications
}

pub fn team_members() -> &'static [TeamMember] {
    &CATALOGS.team_members
}

pub fn templates() -> &'static [OrderTemplate] {
    &CATALOGS.templates
}

pub fn vehicles() -> &'static [Vehicle] {
    &CATALOGS.vehicles
}

pub fn reviews() -> &'static [Review] {
    &CATALOGS.reviews
}

pub fn login_sessions() -> &'static [LoginSession] {
    &CATALOGS.login_sessions
}

/// Паспорт доставки для страницы отслеживания. Маршрут фиксированный,
/// номер подставляется из запрошенного заказа.
pub fn delivery(tracking_id: &str) -> Delivery {
    Delivery {
        tracking_number: tracking_id.to_string(),
        driver_name: "Сергей Иванов".to_string(),
        driver_phone: "+7 (912) 345-67-89".to_string(),
        vehicle_info: "КамАЗ 5490, А 123 ВС 116".to_string(),
        estimated_arrival: "16.05.2024, 18:00".to_string(),
        last_updated: "10 минут назад".to_string(),
        waypoints: vec![
            Waypoint {
                city: "Москва".to_string(),
                time: "14.05, 08:00".to_string(),
                status: WaypointStatus::Completed,
            },
            Waypoint {
                city: "Владимир".to_string(),
                time: "14.05, 12:30".to_string(),
                status: WaypointStatus::Completed,
            },
            Waypoint {
                city: "Нижний Новгород".to_string(),
                time: "14.05, 18:45".to_string(),
                status: WaypointStatus::Current,
            },
            Waypoint {
                city: "Чебоксары".to_string(),
                time: "15.05, 10:00".to_string(),
                status: WaypointStatus::Pending,
            },
            Waypoint {
                city: "Казань".to_string(),
                time: "16.05, 16:00".to_string(),
                status: WaypointStatus::Pending,
            },
        ],
    }
}

fn order(
    id: &str,
    status: OrderStatus,
    from: &str,
    to: &str,
    created: &str,
    delivery_date: &str,
    cargo: &str,
    rng: &mut SmallRng,
) -> Order {
    Order {
        id: id.to_string(),
        status,
        from_city: from.to_string(),
        to_city: to.to_string(),
        created_date: created.to_string(),
        delivery_date: delivery_date.to_string(),
        cargo_type: cargo.to_string(),
        weight: rng.gen_range(1..=20) as f64,
        volume: rng.gen_range(10..=110) as f64,
        price: rng.gen_range(10..=60) * 1000,
    }
}

fn build(seed: u64) -> Catalogs {
    let mut rng = SmallRng::seed_from_u64(seed);

    let orders = vec![
        order(
            "ORD-1001",
            OrderStatus::InProgress,
            "Москва",
            "Санкт-Петербург",
            "10.05.2024",
            "15.05.2024",
            "Мебель",
            &mut rng,
        ),
        order(
            "ORD-1002",
            OrderStatus::Pending,
            "Екатеринбург",
            "Казань",
            "08.05.2024",
            "16.05.2024",
            "Стройматериалы",
            &mut rng,
        ),
        order(
            "ORD-1003",
            OrderStatus::Completed,
            "Новосибирск",
            "Красноярск",
            "05.05.2024",
            "12.05.2024",
            "Оборудование",
            &mut rng,
        ),
        order(
            "ORD-1004",
            OrderStatus::Cancelled,
            "Ростов-на-Дону",
            "Краснодар",
            "01.05.2024",
            "08.05.2024",
            "Продукты",
            &mut rng,
        ),
        order(
            "123458",
            OrderStatus::InProgress,
            "Москва",
            "Казань",
            "12.05.2024",
            "16.05.2024",
            "Продукты",
            &mut rng,
        ),
    ];

    let active_orders = vec![
        order(
            "ORD-2001",
            OrderStatus::InProgress,
            "Москва",
            "Казань",
            "11.05.2024",
            "17.05.2024",
            "Электроника",
            &mut rng,
        ),
        order(
            "ORD-2002",
            OrderStatus::Pending,
            "Самара",
            "Уфа",
            "12.05.2024",
            "18.05.2024",
            "Стройматериалы",
            &mut rng,
        ),
        order(
            "ORD-2003",
            OrderStatus::InProgress,
            "Пермь",
            "Екатеринбург",
            "12.05.2024",
            "14.05.2024",
            "Мебель",
            &mut rng,
        ),
    ];

    let completed_orders = vec![
        order(
            "ORD-1901",
            OrderStatus::Completed,
            "Москва",
            "Воронеж",
            "20.04.2024",
            "23.04.2024",
            "Продукты",
            &mut rng,
        ),
        order(
            "ORD-1902",
            OrderStatus::Completed,
            "Казань",
            "Челябинск",
            "15.04.2024",
            "19.04.2024",
            "Оборудование",
            &mut rng,
        ),
    ];

    let cargo_destinations = [
        "Санкт-Петербург",
        "Казань",
        "Нижний Новгород",
        "Екатеринбург",
        "Новосибирск",
    ];
    let cargo_types = ["Мебель", "Стройматериалы", "Продукты", "Оборудование", "Общий груз"];
    let cargo_listings = cargo_destinations
        .iter()
        .zip(cargo_types.iter())
        .enumerate()
        .map(|(i, (to, cargo))| CargoListing {
            id: format!("CRG-{}", 3001 + i),
            from_city: "Москва".to_string(),
            to_city: to.to_string(),
            cargo_type: cargo.to_string(),
            weight: rng.gen_range(1..=20) as f64,
            volume: rng.gen_range(10..=110) as f64,
            price: rng.gen_range(10..=60) * 1000,
            distance_km: rng.gen_range(100..=1100),
            loading_date: format!("{}.05.2024", 15 + i),
        })
        .collect();

    let transport_cities = ["Москва", "Санкт-Петербург", "Казань", "Нижний Новгород"];
    let transport_models = [
        "КамАЗ 5490",
        "Mercedes Actros",
        "Volvo FH",
        "MAN TGX",
    ];
    let body_types = ["Тент", "Рефрижератор", "Бортовой", "Фургон"];
    let transport_listings = transport_cities
        .iter()
        .zip(transport_models.iter())
        .zip(body_types.iter())
        .enumerate()
        .map(|(i, ((city, model), body))| TransportListing {
            id: format!("TRN-{}", 4001 + i),
            city: city.to_string(),
            model: model.to_string(),
            body_type: body.to_string(),
            capacity: rng.gen_range(5..=25) as f64,
            volume: rng.gen_range(30..=120) as f64,
            available_from: format!("{}.05.2024", 14 + i),
        })
        .collect();

    let documents = vec![
        Document {
            id: "doc1".to_string(),
            doc_type: DocumentType::Ttn,
            title: "ТТН №45821".to_string(),
            order_id: "ORD-1001".to_string(),
            date: "10.05.2024".to_string(),
            status: DocumentStatus::Signed,
        },
        Document {
            id: "doc2".to_string(),
            doc_type: DocumentType::Contract,
            title: "Договор перевозки №128".to_string(),
            order_id: "ORD-1002".to_string(),
            date: "08.05.2024".to_string(),
            status: DocumentStatus::Pending,
        },
        Document {
            id: "doc3".to_string(),
            doc_type: DocumentType::Receipt,
            title: "Квитанция об оплате".to_string(),
            order_id: "ORD-1003".to_string(),
            date: "12.05.2024".to_string(),
            status: DocumentStatus::Signed,
        },
        Document {
            id: "doc4".to_string(),
            doc_type: DocumentType::Ttn,
            title: "ТТН №45822".to_string(),
            order_id: "123458".to_string(),
            date: "12.05.2024".to_string(),
            status: DocumentStatus::RequiresEdit,
        },
    ];

    let notifications = vec![
        Notification {
            id: "n1".to_string(),
            title: "Заказ подтвержден".to_string(),
            message: "Заказ #123458 подтвержден перевозчиком".to_string(),
            time: "5 мин назад".to_string(),
            read: false,
            kind: NotificationKind::Success,
            action_url: Some("/orders/123458".to_string()),
        },
        Notification {
            id: "n2".to_string(),
            title: "Документ требует правок".to_string(),
            message: "ТТН №45822 возвращена на доработку".to_string(),
            time: "2 часа назад".to_string(),
            read: true,
            kind: NotificationKind::Warning,
            action_url: Some("/documents".to_string()),
        },
        Notification {
            id: "n3".to_string(),
            title: "Груз прибыл в Нижний Новгород".to_string(),
            message: "Доставка по заказу #ORD-1001 идет по графику".to_string(),
            time: "вчера".to_string(),
            read: false,
            kind: NotificationKind::Info,
            action_url: Some("/tracking/ORD-1001".to_string()),
        },
    ];

    let team_members = vec![
        TeamMember {
            id: "tm1".to_string(),
            name: "Иван Петров".to_string(),
            email: "ivan.petrov@vektor.express".to_string(),
            role: "Администратор".to_string(),
            permissions: vec![
                "Просмотр".to_string(),
                "Редактирование".to_string(),
                "Удаление".to_string(),
            ],
            is_active: true,
        },
        TeamMember {
            id: "tm2".to_string(),
            name: "Анна Сидорова".to_string(),
            email: "anna.sidorova@vektor.express".to_string(),
            role: "Менеджер".to_string(),
            permissions: vec!["Просмотр".to_string(), "Редактирование".to_string()],
            is_active: true,
        },
        TeamMember {
            id: "tm3".to_string(),
            name: "Павел Козлов".to_string(),
            email: "pavel.kozlov@vektor.express".to_string(),
            role: "Оператор".to_string(),
            permissions: vec!["Просмотр".to_string()],
            is_active: false,
        },
    ];

    let templates = vec![
        OrderTemplate {
            id: "tpl1".to_string(),
            name: "Доставка мебели СПб".to_string(),
            from_city: "Москва".to_string(),
            to_city: "Санкт-Петербург".to_string(),
            cargo_type: "Мебель".to_string(),
            weight: 5.0,
            volume: 30.0,
            date: "15.04.2025".to_string(),
        },
        OrderTemplate {
            id: "tpl2".to_string(),
            name: "Стройматериалы в Казань".to_string(),
            from_city: "Москва".to_string(),
            to_city: "Казань".to_string(),
            cargo_type: "Стройматериалы".to_string(),
            weight: 15.0,
            volume: 60.0,
            date: "20.04.2025".to_string(),
        },
    ];

    let vehicles = vec![
        Vehicle {
            id: "v1".to_string(),
            model: "Mercedes Actros 2545".to_string(),
            body_type: "Тент".to_string(),
            capacity: 20.0,
            volume: 82.0,
            plate: "А 123 ВС 777".to_string(),
            status: VehicleStatus::Available,
        },
        Vehicle {
            id: "v2".to_string(),
            model: "Volvo FH 460".to_string(),
            body_type: "Рефрижератор".to_string(),
            capacity: 18.0,
            volume: 64.0,
            plate: "В 456 ДЕ 777".to_string(),
            status: VehicleStatus::EnRoute,
        },
        Vehicle {
            id: "v3".to_string(),
            model: "КамАЗ 5490".to_string(),
            body_type: "Бортовой".to_string(),
            capacity: 15.0,
            volume: 40.0,
            plate: "Е 789 КХ 116".to_string(),
            status: VehicleStatus::Maintenance,
        },
    ];

    let reviews = vec![
        Review {
            id: "r1".to_string(),
            author: "ООО \"СтройТорг\"".to_string(),
            order_id: "ORD-1903".to_string(),
            rating: 5,
            text: "Груз доставлен раньше срока, водитель на связи".to_string(),
            date: "25.04.2024".to_string(),
        },
        Review {
            id: "r2".to_string(),
            author: "ИП Смирнов".to_string(),
            order_id: "ORD-1902".to_string(),
            rating: 4,
            text: "Все хорошо, но погрузка задержалась на час".to_string(),
            date: "20.04.2024".to_string(),
        },
        Review {
            id: "r3".to_string(),
            author: "ООО \"МебельПро\"".to_string(),
            order_id: "ORD-1901".to_string(),
            rating: 5,
            text: "Аккуратная перевозка, рекомендуем".to_string(),
            date: "24.04.2024".to_string(),
        },
    ];

    let login_sessions = vec![
        LoginSession {
            id: "ls1".to_string(),
            device_type: DeviceType::Mobile,
            device_name: "iPhone 13 Pro".to_string(),
            location: "Москва, Россия".to_string(),
            ip: "192.168.1.1".to_string(),
            date: "15 мая 2024, 14:30".to_string(),
            is_current: true,
        },
        LoginSession {
            id: "ls2".to_string(),
            device_type: DeviceType::Desktop,
            device_name: "Chrome на Windows".to_string(),
            location: "Санкт-Петербург, Россия".to_string(),
            ip: "192.168.1.2".to_string(),
            date: "14 мая 2024, 10:15".to_string(),
            is_current: false,
        },
        LoginSession {
            id: "ls3".to_string(),
            device_type: DeviceType::Tablet,
            device_name: "iPad Air".to_string(),
            location: "Москва, Россия".to_string(),
            ip: "192.168.1.3".to_string(),
            date: "10 мая 2024, 20:45".to_string(),
            is_current: false,
        },
        LoginSession {
            id: "ls4".to_string(),
            device_type: DeviceType::Desktop,
            device_name: "Firefox на macOS".to_string(),
            location: "Казань, Россия".to_string(),
            ip: "192.168.1.4".to_string(),
            date: "05 мая 2024, 09:20".to_string(),
            is_current: false,
        },
    ];

    Catalogs {
        orders,
        active_orders,
        completed_orders,
        cargo_listings,
        transport_listings,
        documents,
        notifications,
        team_members,
        templates,
        vehicles,
        reviews,
        login_sessions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tracking::{is_well_formed, WaypointStatus};
    use crate::search::filter_list;

    #[test]
    fn catalogs_are_stable_for_fixed_seed() {
        let a = build(SESSION_SEED);
        let b = build(SESSION_SEED);
        let prices_a: Vec<_> = a.orders.iter().map(|o| o.price).collect();
        let prices_b: Vec<_> = b.orders.iter().map(|o| o.price).collect();
        assert_eq!(prices_a, prices_b);
        assert_eq!(a.cargo_listings, b.cargo_listings);
        assert_eq!(a.transport_listings, b.transport_listings);
    }

    #[test]
    fn active_and_completed_catalogs_are_disjoint() {
        let active: Vec<_> = active_orders().iter().map(|o| o.id.as_str()).collect();
        for done in completed_orders() {
            assert!(!active.contains(&done.id.as_str()));
        }
    }

    #[test]
    fn kazan_query_finds_order_123458() {
        let result = filter_list(orders(), "Казан");
        assert!(result.iter().any(|o| o.id == "123458" && o.to_city == "Казань"));
    }

    #[test]
    fn unmatched_query_yields_empty_list() {
        assert!(filter_list(orders(), "zzz").is_empty());
    }

    #[test]
    fn delivery_route_is_well_formed() {
        let d = delivery("ORD-1001");
        assert!(is_well_formed(&d.waypoints));
        let currents = d
            .waypoints
            .iter()
            .filter(|w| w.status == WaypointStatus::Current)
            .count();
        assert_eq!(currents, 1);
    }

    #[test]
    fn notifications_start_with_two_unread() {
        assert_eq!(crate::domain::notification::unread_count(notifications()), 2);
    }
}
