//! Star Rating Component

use leptos::*;

use classscope::display::{star_fill, StarFill};

/// Font Awesome classes for each of the five star glyphs
fn star_icons(fill: StarFill) -> Vec<&'static str> {
    let full = std::iter::repeat("fas fa-star").take(fill.full as usize);
    let half = std::iter::repeat("fas fa-star-half-alt").take(fill.half as usize);
    let empty = std::iter::repeat("far fa-star").take(fill.empty as usize);
    full.chain(half).chain(empty).collect()
}

#[component]
pub fn StarRating(
    #[prop(into)]
    rating: MaybeSignal<f64>,
    #[prop(optional)]
    large: bool,
) -> impl IntoView {
    let class = if large {
        "stars flex gap-1 text-2xl text-amber-400"
    } else {
        "stars flex gap-0.5 text-amber-400"
    };

    view! {
        <div class=class>
            {move || {
                star_icons(star_fill(rating.get()))
                    .into_iter()
                    .map(|icon| view! { <i class=icon /> })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_always_five_glyphs() {
        for rating in [0.0, 1.2, 2.5, 4.5, 5.0, 7.0] {
            assert_eq!(star_icons(star_fill(rating)).len(), 5);
        }
    }

    #[test]
    fn test_half_star_position() {
        let icons = star_icons(star_fill(3.5));
        assert_eq!(
            icons,
            vec![
                "fas fa-star",
                "fas fa-star",
                "fas fa-star",
                "fas fa-star-half-alt",
                "far fa-star",
            ]
        );
    }
}
