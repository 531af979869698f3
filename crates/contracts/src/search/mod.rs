//! Поиск и фильтры: предикаты по каталогам и конфигурация
//! структурированных фильтров поиска грузов/транспорта.

use crate::domain::document::Document;
use crate::domain::listing::{CargoListing, TransportListing};
use crate::domain::order::Order;
use crate::domain::template::OrderTemplate;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Trait для типов данных, поддерживающих текстовый поиск.
pub trait Searchable {
    /// Проверяет, соответствует ли запись поисковому запросу
    fn matches_filter(&self, filter: &str) -> bool;
}

/// Регистронезависимое вхождение подстроки.
fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

impl Searchable for Order {
    /// Заказ ищется по номеру, обоим городам маршрута и типу груза.
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.from_city, filter)
            || contains_ci(&self.to_city, filter)
            || contains_ci(&self.cargo_type, filter)
    }
}

impl Searchable for Document {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.title, filter) || contains_ci(&self.order_id, filter)
    }
}

impl Searchable for CargoListing {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.from_city, filter)
            || contains_ci(&self.to_city, filter)
            || contains_ci(&self.cargo_type, filter)
    }
}

impl Searchable for TransportListing {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.id, filter)
            || contains_ci(&self.city, filter)
            || contains_ci(&self.model, filter)
            || contains_ci(&self.body_type, filter)
    }
}

impl Searchable for OrderTemplate {
    fn matches_filter(&self, filter: &str) -> bool {
        contains_ci(&self.name, filter)
            || contains_ci(&self.from_city, filter)
            || contains_ci(&self.to_city, filter)
            || contains_ci(&self.cargo_type, filter)
    }
}

/// Фильтрует каталог по поисковому запросу.
///
/// Пустой запрос оставляет каталог без изменений. Порядок совпадений
/// равен порядку записей в каталоге, ранжирования нет.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Подсказки городов для автодополнения.
///
/// Запрос короче двух символов не даёт подсказок; уже выбранные города
/// исключаются.
pub fn suggest_cities<'a>(cities: &[&'a str], query: &str, selected: &[String]) -> Vec<&'a str> {
    let query = query.trim();
    if query.chars().count() <= 1 {
        return Vec::new();
    }
    cities
        .iter()
        .filter(|city| contains_ci(city, query) && !selected.iter().any(|s| s == *city))
        .copied()
        .collect()
}

/// Максимум выбранных локаций в фильтре.
pub const MAX_LOCATIONS: usize = 5;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FilterError {
    #[error("Можно добавить не более {MAX_LOCATIONS} локаций")]
    TooManyLocations,
}

/// Тип груза в фильтре грузов.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CargoType {
    General,
    Construction,
    Food,
    Furniture,
    Equipment,
}

impl CargoType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CargoType::General => "general",
            CargoType::Construction => "construction",
            CargoType::Food => "food",
            CargoType::Furniture => "furniture",
            CargoType::Equipment => "equipment",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CargoType::General => "Общий груз",
            CargoType::Construction => "Стройматериалы",
            CargoType::Food => "Продукты",
            CargoType::Furniture => "Мебель",
            CargoType::Equipment => "Оборудование",
        }
    }

    pub fn all() -> [CargoType; 5] {
        [
            CargoType::General,
            CargoType::Construction,
            CargoType::Food,
            CargoType::Furniture,
            CargoType::Equipment,
        ]
    }
}

/// Тип кузова в фильтре транспорта.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleBodyType {
    Tent,
    Refrigerator,
    Flatbed,
    Van,
}

impl VehicleBodyType {
    pub fn as_str(&self) -> &'static str {
        match self {
            VehicleBodyType::Tent => "tent",
            VehicleBodyType::Refrigerator => "refrigerator",
            VehicleBodyType::Flatbed => "flatbed",
            VehicleBodyType::Van => "van",
        }
    }

    pub fn parse_str(s: &str) -> Option<Self> {
        Self::all().into_iter().find(|v| v.as_str() == s)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            VehicleBodyType::Tent => "Тент",
            VehicleBodyType::Refrigerator => "Рефрижератор",
            VehicleBodyType::Flatbed => "Бортовой",
            VehicleBodyType::Van => "Фургон",
        }
    }

    pub fn all() -> [VehicleBodyType; 4] {
        [
            VehicleBodyType::Tent,
            VehicleBodyType::Refrigerator,
            VehicleBodyType::Flatbed,
            VehicleBodyType::Van,
        ]
    }
}

/// Диапазон дат в фильтре. Обе границы опциональны.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

/// Фильтры поиска грузов. Применение фильтров — это целиком замена
/// активного объекта фильтров; сброс возвращает `Default`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CargoFilters {
    pub cargo_type: Option<CargoType>,
    /// Вес в тоннах, [min, max]
    pub weight_range: (f64, f64),
    /// Объём в кубометрах, [min, max]
    pub volume_range: (f64, f64),
    pub date_range: DateRange,
    pub locations: Vec<String>,
    pub hazardous: bool,
    pub perishable: bool,
    pub oversized: bool,
    pub avoid_toll_roads: bool,
}

impl Default for CargoFilters {
    fn default() -> Self {
        Self {
            cargo_type: None,
            weight_range: (0.0, 40.0),
            volume_range: (0.0, 100.0),
            date_range: DateRange::default(),
            locations: Vec::new(),
            hazardous: false,
            perishable: false,
            oversized: false,
            avoid_toll_roads: false,
        }
    }
}

impl CargoFilters {
    /// Добавляет локацию. Шестая и далее отклоняются без изменения
    /// состояния; дубликаты молча игнорируются.
    pub fn add_location(&mut self, location: &str) -> Result<(), FilterError> {
        if self.locations.iter().any(|l| l == location) {
            return Ok(());
        }
        if self.locations.len() >= MAX_LOCATIONS {
            return Err(FilterError::TooManyLocations);
        }
        self.locations.push(location.to_string());
        Ok(())
    }

    pub fn remove_location(&mut self, location: &str) {
        self.locations.retain(|l| l != location);
    }

    /// Количество активных (отличных от дефолта) фильтров — для бейджа
    /// на кнопке фильтров.
    pub fn active_count(&self) -> usize {
        let defaults = CargoFilters::default();
        let mut count = 0;
        if self.cargo_type.is_some() {
            count += 1;
        }
        if self.weight_range != defaults.weight_range {
            count += 1;
        }
        if self.volume_range != defaults.volume_range {
            count += 1;
        }
        if self.date_range != DateRange::default() {
            count += 1;
        }
        if !self.locations.is_empty() {
            count += 1;
        }
        count += [
            self.hazardous,
            self.perishable,
            self.oversized,
            self.avoid_toll_roads,
        ]
        .iter()
        .filter(|f| **f)
        .count();
        count
    }
}

/// Фильтры поиска транспорта.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransportFilters {
    pub body_type: Option<VehicleBodyType>,
    /// Грузоподъёмность в тоннах, [min, max]
    pub capacity_range: (f64, f64),
    /// Объём кузова в кубометрах, [min, max]
    pub volume_range: (f64, f64),
    pub date_range: DateRange,
    pub locations: Vec<String>,
    pub gps: bool,
    pub ramp: bool,
    pub refrigerator: bool,
    pub hydro_lift: bool,
}

impl Default for TransportFilters {
    fn default() -> Self {
        Self {
            body_type: None,
            capacity_range: (0.0, 40.0),
            volume_range: (0.0, 100.0),
            date_range: DateRange::default(),
            locations: Vec::new(),
            gps: false,
            ramp: false,
            refrigerator: false,
            hydro_lift: false,
        }
    }
}

impl TransportFilters {
    pub fn add_location(&mut self, location: &str) -> Result<(), FilterError> {
        if self.locations.iter().any(|l| l == location) {
            return Ok(());
        }
        if self.locations.len() >= MAX_LOCATIONS {
            return Err(FilterError::TooManyLocations);
        }
        self.locations.push(location.to_string());
        Ok(())
    }

    pub fn remove_location(&mut self, location: &str) {
        self.locations.retain(|l| l != location);
    }

    pub fn active_count(&self) -> usize {
        let defaults = TransportFilters::default();
        let mut count = 0;
        if self.body_type.is_some() {
            count += 1;
        }
        if self.capacity_range != defaults.capacity_range {
            count += 1;
        }
        if self.volume_range != defaults.volume_range {
            count += 1;
        }
        if self.date_range != DateRange::default() {
            count += 1;
        }
        if !self.locations.is_empty() {
            count += 1;
        }
        count += [self.gps, self.ramp, self.refrigerator, self.hydro_lift]
            .iter()
            .filter(|f| **f)
            .count();
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::order::OrderStatus;

    fn order(id: &str, from: &str, to: &str, cargo: &str) -> Order {
        Order {
            id: id.to_string(),
            status: OrderStatus::Pending,
            from_city: from.to_string(),
            to_city: to.to_string(),
            created_date: "10.05.2024".to_string(),
            delivery_date: "15.05.2024".to_string(),
            cargo_type: cargo.to_string(),
            weight: 10.0,
            volume: 40.0,
            price: 15_000,
        }
    }

    #[test]
    fn filter_is_case_insensitive_and_stable() {
        let catalog = vec![
            order("ORD-1001", "Москва", "Санкт-Петербург", "Мебель"),
            order("ORD-1002", "Екатеринбург", "Казань", "Стройматериалы"),
            order("123458", "Москва", "Казань", "Продукты"),
        ];
        let result = filter_list(&catalog, "казан");
        let ids: Vec<_> = result.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["ORD-1002", "123458"]);
    }

    #[test]
    fn filter_matches_order_id_and_cargo_type() {
        let catalog = vec![
            order("ORD-1001", "Москва", "Санкт-Петербург", "Мебель"),
            order("ORD-1002", "Екатеринбург", "Казань", "Стройматериалы"),
        ];
        assert_eq!(filter_list(&catalog, "1002").len(), 1);
        assert_eq!(filter_list(&catalog, "мебель").len(), 1);
    }

    #[test]
    fn empty_query_keeps_whole_catalog() {
        let catalog = vec![order("ORD-1001", "Москва", "Казань", "Мебель")];
        assert_eq!(filter_list(&catalog, "").len(), 1);
        assert_eq!(filter_list(&catalog, "   ").len(), 1);
    }

    #[test]
    fn no_matches_yields_empty_list() {
        let catalog = vec![order("ORD-1001", "Москва", "Казань", "Мебель")];
        assert!(filter_list(&catalog, "zzz").is_empty());
    }

    #[test]
    fn suggestions_require_two_characters() {
        let cities = ["Москва", "Казань", "Калуга"];
        assert!(suggest_cities(&cities, "К", &[]).is_empty());
        assert_eq!(suggest_cities(&cities, "Ка", &[]), vec!["Казань", "Калуга"]);
    }

    #[test]
    fn suggestions_exclude_selected() {
        let cities = ["Казань", "Калуга"];
        let selected = vec!["Казань".to_string()];
        assert_eq!(suggest_cities(&cities, "Ка", &selected), vec!["Калуга"]);
    }

    #[test]
    fn sixth_location_is_rejected_without_mutation() {
        let mut filters = CargoFilters::default();
        for city in ["Москва", "Казань", "Самара", "Омск", "Пермь"] {
            assert!(filters.add_location(city).is_ok());
        }
        let before = filters.locations.clone();
        assert_eq!(
            filters.add_location("Уфа"),
            Err(FilterError::TooManyLocations)
        );
        assert_eq!(filters.locations, before);
    }

    #[test]
    fn duplicate_location_is_ignored() {
        let mut filters = CargoFilters::default();
        filters.add_location("Москва").unwrap();
        filters.add_location("Москва").unwrap();
        assert_eq!(filters.locations.len(), 1);
    }

    #[test]
    fn remove_location_preserves_order_of_rest() {
        let mut filters = CargoFilters::default();
        for city in ["Москва", "Казань", "Самара"] {
            filters.add_location(city).unwrap();
        }
        filters.remove_location("Казань");
        assert_eq!(filters.locations, vec!["Москва", "Самара"]);
    }

    #[test]
    fn reset_restores_documented_defaults() {
        let mut filters = CargoFilters::default();
        filters.cargo_type = Some(CargoType::Food);
        filters.weight_range = (5.0, 20.0);
        filters.hazardous = true;
        filters.add_location("Москва").unwrap();

        filters = CargoFilters::default();
        assert_eq!(filters.weight_range, (0.0, 40.0));
        assert_eq!(filters.volume_range, (0.0, 100.0));
        assert_eq!(filters.date_range, DateRange::default());
        assert!(filters.locations.is_empty());
        assert!(!filters.hazardous && !filters.perishable);
        assert!(!filters.oversized && !filters.avoid_toll_roads);
        assert_eq!(filters.active_count(), 0);
    }

    #[test]
    fn active_count_tracks_non_default_fields() {
        let mut filters = TransportFilters::default();
        assert_eq!(filters.active_count(), 0);
        filters.body_type = Some(VehicleBodyType::Refrigerator);
        filters.gps = true;
        filters.add_location("Казань").unwrap();
        assert_eq!(filters.active_count(), 3);
    }
}
