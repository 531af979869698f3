use serde::{Deserialize, Serialize};

/// Отзыв о выполненном заказе.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Review {
    pub id: String,
    pub author: String,
    pub order_id: String,
    /// Оценка от 1 до 5
    pub rating: u8,
    pub text: String,
    pub date: String,
}

/// Средняя оценка по списку отзывов, 0.0 для пустого списка.
pub fn average_rating(reviews: &[Review]) -> f64 {
    if reviews.is_empty() {
        return 0.0;
    }
    let sum: u32 = reviews.iter().map(|r| r.rating as u32).sum();
    sum as f64 / reviews.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn review(rating: u8) -> Review {
        Review {
            id: "r1".to_string(),
            author: "ООО Логистик".to_string(),
            order_id: "ORD-1001".to_string(),
            rating,
            text: "Груз доставлен вовремя".to_string(),
            date: "12.05.2024".to_string(),
        }
    }

    #[test]
    fn average_of_empty_is_zero() {
        assert_eq!(average_rating(&[]), 0.0);
    }

    #[test]
    fn average_is_arithmetic_mean() {
        let reviews = vec![review(5), review(4), review(3)];
        assert!((average_rating(&reviews) - 4.0).abs() < f64::EPSILON);
    }
}
