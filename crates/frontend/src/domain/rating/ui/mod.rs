use crate::domain::reviews::ui::ReviewCard;
use contracts::domain::review::average_rating;
use contracts::fixtures;
use leptos::prelude::*;

struct RatingAspect {
    name: &'static str,
    score: f64,
}

const ASPECTS: [RatingAspect; 3] = [
    RatingAspect {
        name: "Пунктуальность",
        score: 4.9,
    },
    RatingAspect {
        name: "Качество",
        score: 4.6,
    },
    RatingAspect {
        name: "Коммуникация",
        score: 4.5,
    },
];

/// Страница рейтинга: средняя оценка по отзывам, разбивка по аспектам
/// и последние отзывы.
#[component]
pub fn RatingPage() -> impl IntoView {
    let reviews = fixtures::reviews();
    let average = average_rating(reviews);
    let count = reviews.len();

    view! {
        <div class="page page--rating">
            <h1 class="page__title">"Рейтинг и отзывы"</h1>

            <div class="card rating-summary">
                <div class="rating-summary__score">
                    <span class="rating-summary__value">{format!("{average:.1}")}</span>
                    <span class="rating-summary__count">{format!("{count} отзывов")}</span>
                </div>
                <div class="rating-summary__aspects">
                    {ASPECTS
                        .iter()
                        .map(|aspect| {
                            let width = aspect.score / 5.0 * 100.0;
                            view! {
                                <div class="rating-aspect">
                                    <span class="rating-aspect__name">{aspect.name}</span>
                                    <div class="rating-aspect__bar">
                                        <div
                                            class="rating-aspect__fill"
                                            style=format!("width: {width:.0}%")
                                        ></div>
                                    </div>
                                    <span class="rating-aspect__score">
                                        {format!("{:.1}", aspect.score)}
                                    </span>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <h2 class="page__subtitle">"Последние отзывы"</h2>
            <div class="review-list">
                {reviews
                    .iter()
                    .take(2)
                    .map(|review| view! { <ReviewCard review=review.clone() /> })
                    .collect_view()}
            </div>
        </div>
    }
}
