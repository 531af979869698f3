use contracts::domain::order::Order;
use leptos::prelude::*;

/// Состояние страницы заказов.
///
/// `selected_id` переключает список и панель деталей (LIST ⇄ DETAIL).
/// Каталог копируется из fixtures в сигнал: отмена заказа — локальная
/// правка, которую нельзя делать в общем каталоге.
#[derive(Clone, Debug)]
pub struct OrdersState {
    pub items: Vec<Order>,
    pub query: String,
    /// "all" либо код статуса
    pub status_filter: String,
    pub selected_id: Option<String>,
}

impl Default for OrdersState {
    fn default() -> Self {
        Self {
            items: contracts::fixtures::orders().to_vec(),
            query: String::new(),
            status_filter: "all".to_string(),
            selected_id: None,
        }
    }
}

pub fn create_state() -> RwSignal<OrdersState> {
    RwSignal::new(OrdersState::default())
}
