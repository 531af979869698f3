use serde::{Deserialize, Serialize};

/// Статус точки маршрута на таймлайне доставки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaypointStatus {
    Completed,
    Current,
    Pending,
}

impl WaypointStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WaypointStatus::Completed => "completed",
            WaypointStatus::Current => "current",
            WaypointStatus::Pending => "pending",
        }
    }
}

/// Точка маршрута. Список точек упорядочен от отправления к назначению.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub city: String,
    pub time: String,
    pub status: WaypointStatus,
}

/// Паспорт доставки для страницы отслеживания.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub tracking_number: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub vehicle_info: String,
    pub estimated_arrival: String,
    pub last_updated: String,
    pub waypoints: Vec<Waypoint>,
}

/// Процент выполнения маршрута для прогресс-бара.
///
/// Пройденные точки считаются целиком, текущая — наполовину. Пустой
/// маршрут даёт 0.
pub fn progress_percent(waypoints: &[Waypoint]) -> u8 {
    if waypoints.is_empty() {
        return 0;
    }
    let total = waypoints.len() as f64;
    let score: f64 = waypoints
        .iter()
        .map(|w| match w.status {
            WaypointStatus::Completed => 1.0,
            WaypointStatus::Current => 0.5,
            WaypointStatus::Pending => 0.0,
        })
        .sum();
    ((score / total) * 100.0).round() as u8
}

/// Проверяет инвариант маршрута: не больше одной текущей точки, всё до
/// неё пройдено, всё после — ожидается.
pub fn is_well_formed(waypoints: &[Waypoint]) -> bool {
    let current_count = waypoints
        .iter()
        .filter(|w| w.status == WaypointStatus::Current)
        .count();
    if current_count > 1 {
        return false;
    }
    // completed (0+) -> current (0..1) -> pending (0+), без чередования
    let mut phase = WaypointStatus::Completed;
    for w in waypoints {
        match (phase, w.status) {
            (WaypointStatus::Completed, s) => phase = s,
            (WaypointStatus::Current, WaypointStatus::Pending) => phase = WaypointStatus::Pending,
            (WaypointStatus::Current, WaypointStatus::Current)
            | (WaypointStatus::Current, WaypointStatus::Completed) => return false,
            (WaypointStatus::Pending, WaypointStatus::Pending) => {}
            (WaypointStatus::Pending, _) => return false,
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wp(city: &str, status: WaypointStatus) -> Waypoint {
        Waypoint {
            city: city.to_string(),
            time: "14:30".to_string(),
            status,
        }
    }

    #[test]
    fn progress_counts_current_as_half() {
        let route = vec![
            wp("Москва", WaypointStatus::Completed),
            wp("Владимир", WaypointStatus::Completed),
            wp("Нижний Новгород", WaypointStatus::Current),
            wp("Казань", WaypointStatus::Pending),
        ];
        assert_eq!(progress_percent(&route), 63);
    }

    #[test]
    fn progress_of_empty_route_is_zero() {
        assert_eq!(progress_percent(&[]), 0);
    }

    #[test]
    fn progress_of_finished_route_is_full() {
        let route = vec![
            wp("Москва", WaypointStatus::Completed),
            wp("Казань", WaypointStatus::Completed),
        ];
        assert_eq!(progress_percent(&route), 100);
    }

    #[test]
    fn well_formed_accepts_ordered_route() {
        let route = vec![
            wp("Москва", WaypointStatus::Completed),
            wp("Владимир", WaypointStatus::Current),
            wp("Казань", WaypointStatus::Pending),
        ];
        assert!(is_well_formed(&route));
    }

    #[test]
    fn well_formed_rejects_two_currents() {
        let route = vec![
            wp("Москва", WaypointStatus::Current),
            wp("Казань", WaypointStatus::Current),
        ];
        assert!(!is_well_formed(&route));
    }

    #[test]
    fn well_formed_rejects_completed_after_pending() {
        let route = vec![
            wp("Москва", WaypointStatus::Pending),
            wp("Казань", WaypointStatus::Completed),
        ];
        assert!(!is_well_formed(&route));
    }
}
