use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Свободен, готов к загрузке
    Available,
    /// В рейсе
    EnRoute,
    /// На обслуживании
    Maintenance,
}

impl VehicleStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "available",
            VehicleStatus::EnRoute => "en_route",
            VehicleStatus::Maintenance => "maintenance",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleStatus::Available => "Свободен",
            VehicleStatus::EnRoute => "В рейсе",
            VehicleStatus::Maintenance => "На обслуживании",
        }
    }
}

/// Транспортное средство на странице "Мой транспорт".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    pub id: String,
    pub model: String,
    /// Тип кузова: тент, рефрижератор и т.п.
    pub body_type: String,
    /// Грузоподъёмность в тоннах
    pub capacity: f64,
    /// Объём кузова в кубометрах
    pub volume: f64,
    pub plate: String,
    pub status: VehicleStatus,
}
