use serde::{Deserialize, Serialize};

/// Статус заказа. Закрытое перечисление: неизвестные строковые значения
/// обрабатываются на уровне badge-маппера, а не здесь.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::InProgress => "in_progress",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        match s {
            "pending" => Some(OrderStatus::Pending),
            "in_progress" => Some(OrderStatus::InProgress),
            "completed" => Some(OrderStatus::Completed),
            "cancelled" => Some(OrderStatus::Cancelled),
            _ => None,
        }
    }

    /// Все известные статусы (для селектора фильтра на странице заказов).
    pub fn all() -> [OrderStatus; 4] {
        [
            OrderStatus::Pending,
            OrderStatus::InProgress,
            OrderStatus::Completed,
            OrderStatus::Cancelled,
        ]
    }
}

/// Заказ на перевозку груза.
///
/// Даты хранятся уже отформатированными (dd.mm.yyyy) — записи существуют
/// только внутри сессии и сравниваются/фильтруются как строки.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub status: OrderStatus,
    pub from_city: String,
    pub to_city: String,
    pub created_date: String,
    pub delivery_date: String,
    pub cargo_type: String,
    /// Вес в тоннах
    pub weight: f64,
    /// Объём в кубометрах
    pub volume: f64,
    /// Цена в рублях
    pub price: u32,
}

impl Order {
    pub fn route(&self) -> String {
        format!("{} → {}", self.from_city, self.to_city)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codec_round_trips() {
        for status in OrderStatus::all() {
            assert_eq!(OrderStatus::parse_str(status.as_str()), Some(status));
        }
        assert_eq!(OrderStatus::parse_str("archived"), None);
    }
}
