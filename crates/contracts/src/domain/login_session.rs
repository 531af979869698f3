use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceType {
    Desktop,
    Mobile,
    Tablet,
}

impl DeviceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeviceType::Desktop => "desktop",
            DeviceType::Mobile => "mobile",
            DeviceType::Tablet => "tablet",
        }
    }
}

/// Запись истории входов на странице профиля.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginSession {
    pub id: String,
    pub device_type: DeviceType,
    pub device_name: String,
    pub location: String,
    pub ip: String,
    pub date: String,
    /// Текущая сессия помечается отдельно
    pub is_current: bool,
}
