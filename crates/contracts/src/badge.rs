//! Маппинг статусов на подпись и CSS-класс бейджа.
//!
//! Чистые таблицы соответствия. Неизвестное значение — это данные, а не
//! ошибка: каждый маппер имеет нейтральную fallback-ветку.

/// Подпись и класс бейджа для отображения статуса.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

/// Fallback для нераспознанного статуса в любом из мапперов.
pub const UNKNOWN_BADGE: StatusBadge = StatusBadge {
    label: "В обработке",
    class: "badge badge--neutral",
};

/// Статус заказа → бейдж.
pub fn order_status_badge(status: &str) -> StatusBadge {
    match status {
        "pending" => StatusBadge {
            label: "Ожидает",
            class: "badge badge--pending",
        },
        "in_progress" => StatusBadge {
            label: "В пути",
            class: "badge badge--in-progress",
        },
        "completed" => StatusBadge {
            label: "Завершен",
            class: "badge badge--completed",
        },
        "cancelled" => StatusBadge {
            label: "Отменен",
            class: "badge badge--cancelled",
        },
        _ => UNKNOWN_BADGE,
    }
}

/// Статус документа → бейдж.
pub fn document_status_badge(status: &str) -> StatusBadge {
    match status {
        "signed" => StatusBadge {
            label: "Подписан",
            class: "badge badge--completed",
        },
        "pending" => StatusBadge {
            label: "Ожидает подписания",
            class: "badge badge--pending",
        },
        "requires_edit" => StatusBadge {
            label: "Требует правок",
            class: "badge badge--cancelled",
        },
        _ => UNKNOWN_BADGE,
    }
}

/// Статус точки маршрута → бейдж на таймлайне доставки.
pub fn waypoint_status_badge(status: &str) -> StatusBadge {
    match status {
        "completed" => StatusBadge {
            label: "Пройдена",
            class: "badge badge--completed",
        },
        "current" => StatusBadge {
            label: "Текущая",
            class: "badge badge--in-progress",
        },
        "pending" => StatusBadge {
            label: "Ожидается",
            class: "badge badge--pending",
        },
        _ => UNKNOWN_BADGE,
    }
}

/// Активность участника команды → бейдж.
pub fn member_activity_badge(status: &str) -> StatusBadge {
    match status {
        "active" => StatusBadge {
            label: "Активен",
            class: "badge badge--completed",
        },
        "inactive" => StatusBadge {
            label: "Неактивен",
            class: "badge badge--cancelled",
        },
        _ => UNKNOWN_BADGE,
    }
}

/// Статус транспорта → бейдж на странице "Мой транспорт".
pub fn vehicle_status_badge(status: &str) -> StatusBadge {
    match status {
        "available" => StatusBadge {
            label: "Свободен",
            class: "badge badge--completed",
        },
        "en_route" => StatusBadge {
            label: "В рейсе",
            class: "badge badge--in-progress",
        },
        "maintenance" => StatusBadge {
            label: "На обслуживании",
            class: "badge badge--pending",
        },
        _ => UNKNOWN_BADGE,
    }
}

/// Имя иконки для типа документа (разрешается в `shared::icons` на фронте).
pub fn document_type_icon(doc_type: &str) -> &'static str {
    match doc_type {
        "ttn" => "truck",
        "contract" => "file-text",
        "receipt" => "receipt",
        _ => "file",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_badges_cover_known_values() {
        for status in ["pending", "in_progress", "completed", "cancelled"] {
            let badge = order_status_badge(status);
            assert!(!badge.label.is_empty());
            assert_ne!(badge, UNKNOWN_BADGE, "known status {status} hit fallback");
        }
    }

    #[test]
    fn order_badge_falls_back_on_unknown() {
        assert_eq!(order_status_badge("archived"), UNKNOWN_BADGE);
        assert_eq!(order_status_badge(""), UNKNOWN_BADGE);
    }

    #[test]
    fn document_badges_cover_known_values() {
        for status in ["signed", "pending", "requires_edit"] {
            assert_ne!(document_status_badge(status), UNKNOWN_BADGE);
        }
        assert_eq!(document_status_badge("draft"), UNKNOWN_BADGE);
    }

    #[test]
    fn waypoint_badges_cover_known_values() {
        for status in ["completed", "current", "pending"] {
            assert_ne!(waypoint_status_badge(status), UNKNOWN_BADGE);
        }
        assert_eq!(waypoint_status_badge("skipped"), UNKNOWN_BADGE);
    }

    #[test]
    fn member_badges_cover_known_values() {
        assert_ne!(member_activity_badge("active"), UNKNOWN_BADGE);
        assert_ne!(member_activity_badge("inactive"), UNKNOWN_BADGE);
        assert_eq!(member_activity_badge("suspended"), UNKNOWN_BADGE);
    }

    #[test]
    fn document_icon_has_default() {
        assert_eq!(document_type_icon("ttn"), "truck");
        assert_eq!(document_type_icon("unknown"), "file");
    }
}
