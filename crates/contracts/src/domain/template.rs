use serde::{Deserialize, Serialize};

/// Шаблон заказа. Используется для предзаполнения формы нового груза.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderTemplate {
    pub id: String,
    pub name: String,
    pub from_city: String,
    pub to_city: String,
    pub cargo_type: String,
    pub weight: f64,
    pub volume: f64,
    pub date: String,
}

impl OrderTemplate {
    pub fn route(&self) -> String {
        format!("{} → {}", self.from_city, self.to_city)
    }
}
