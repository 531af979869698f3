use serde::{Deserialize, Serialize};

/// Тип документа перевозки.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Товарно-транспортная накладная
    Ttn,
    Contract,
    Receipt,
}

impl DocumentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Ttn => "ttn",
            DocumentType::Contract => "contract",
            DocumentType::Receipt => "receipt",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentType::Ttn => "ТТН",
            DocumentType::Contract => "Договор",
            DocumentType::Receipt => "Квитанция",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Signed,
    Pending,
    RequiresEdit,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Signed => "signed",
            DocumentStatus::Pending => "pending",
            DocumentStatus::RequiresEdit => "requires_edit",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub doc_type: DocumentType,
    pub title: String,
    /// Номер связанного заказа
    pub order_id: String,
    pub date: String,
    pub status: DocumentStatus,
}
