use serde::{Deserialize, Serialize};

/// Объявление о грузе на вкладке "Грузы" страницы поиска.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoListing {
    pub id: String,
    pub from_city: String,
    pub to_city: String,
    pub cargo_type: String,
    /// Вес в тоннах
    pub weight: f64,
    /// Объём в кубометрах
    pub volume: f64,
    /// Цена в рублях
    pub price: u32,
    pub distance_km: u32,
    pub loading_date: String,
}

/// Объявление о свободном транспорте на вкладке "Транспорт".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportListing {
    pub id: String,
    pub city: String,
    pub model: String,
    pub body_type: String,
    /// Грузоподъёмность в тоннах
    pub capacity: f64,
    /// Объём кузова в кубометрах
    pub volume: f64,
    pub available_from: String,
}
