use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationKind::Info => "info",
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// Уведомление в шторке уведомлений. `read` и удаление меняются только
/// локально, список живёт в памяти одной сессии.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub time: String,
    pub read: bool,
    pub kind: NotificationKind,
    pub action_url: Option<String>,
}

/// Количество непрочитанных уведомлений (счётчик на колокольчике).
pub fn unread_count(items: &[Notification]) -> usize {
    items.iter().filter(|n| !n.read).count()
}

/// Помечает уведомление прочитанным, остальные не трогает.
pub fn mark_read(items: &mut [Notification], id: &str) {
    if let Some(n) = items.iter_mut().find(|n| n.id == id) {
        n.read = true;
    }
}

/// Удаляет уведомление из списка (только в памяти).
pub fn remove(items: &mut Vec<Notification>, id: &str) {
    items.retain(|n| n.id != id);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(id: &str, read: bool) -> Notification {
        Notification {
            id: id.to_string(),
            title: "Заказ подтвержден".to_string(),
            message: "Заказ #123456 подтвержден перевозчиком".to_string(),
            time: "5 мин назад".to_string(),
            read,
            kind: NotificationKind::Success,
            action_url: Some("/orders/123456".to_string()),
        }
    }

    #[test]
    fn unread_count_ignores_read() {
        let items = vec![sample("n1", false), sample("n2", true), sample("n3", false)];
        assert_eq!(unread_count(&items), 2);
    }

    #[test]
    fn mark_read_touches_only_target() {
        let mut items = vec![sample("n1", false), sample("n2", false)];
        mark_read(&mut items, "n1");
        assert!(items[0].read);
        assert!(!items[1].read);
    }

    #[test]
    fn remove_drops_exactly_one() {
        let mut items = vec![sample("n1", false), sample("n2", false), sample("n3", false)];
        remove(&mut items, "n2");
        let ids: Vec<_> = items.iter().map(|n| n.id.as_str()).collect();
        assert_eq!(ids, vec!["n1", "n3"]);
    }
}
