use crate::shared::icons::icon;
use contracts::domain::review::Review;
use contracts::fixtures;
use leptos::prelude::*;

/// Пять звёзд, заполненных по оценке.
pub(crate) fn stars(rating: u8) -> AnyView {
    (1..=5u8)
        .map(|i| {
            let class = if i <= rating {
                "star star--filled"
            } else {
                "star"
            };
            view! { <span class=class>{icon("star")}</span> }
        })
        .collect_view()
        .into_any()
}

/// Карточка отзыва.
#[component]
pub(crate) fn ReviewCard(review: Review) -> impl IntoView {
    view! {
        <div class="review-card">
            <div class="review-card__header">
                <div class="review-card__author">
                    <span>{review.author.clone()}</span>
                    <span class="review-card__date">{review.date.clone()}</span>
                </div>
                <div class="review-card__stars">{stars(review.rating)}</div>
            </div>
            <p class="review-card__text">{review.text.clone()}</p>
            <span class="review-card__order">{format!("Заказ №{}", review.order_id)}</span>
        </div>
    }
}

/// Страница отзывов: полный каталог.
#[component]
pub fn ReviewsPage() -> impl IntoView {
    let reviews = fixtures::reviews();

    view! {
        <div class="page page--reviews">
            <h1 class="page__title">"Отзывы"</h1>
            <div class="review-list">
                {reviews
                    .iter()
                    .map(|review| view! { <ReviewCard review=review.clone() /> })
                    .collect_view()}
            </div>
        </div>
    }
}
