//! Per-activity description sentences.

use std::borrow::Cow;

/// Fallback for activity ids without a description.
pub const GENERIC_DESCRIPTION: &str = "Enjoy quality time together with this activity.";

/// Returns the description sentence for an activity.
///
/// Only `dinner` varies by category: romantic outings get a romantic
/// restaurant, everything else a nice one. Unknown ids fall back to
/// [`GENERIC_DESCRIPTION`].
pub fn describe_activity(activity_id: &str, category: &str) -> Cow<'static, str> {
    let text = match activity_id {
        "dinner" => {
            let venue = if category == "romantic" { "romantic" } else { "nice" };
            return Cow::Owned(format!(
                "Enjoy a delicious meal at a {venue} restaurant. Consider making a reservation in advance."
            ));
        }
        "movie" => "Catch the latest film or a classic at your local cinema. Arrive early for good seats!",
        "theater" => "Experience live entertainment with a theater performance or musical.",
        "concert" => "Enjoy live music from your favorite artists or discover new performers.",
        "museum" => "Explore art, history, or science exhibits at a local museum.",
        "park" => "Take a leisurely stroll through a scenic park or garden.",
        "bar" => "Relax with craft cocktails or fine wine in a cozy atmosphere.",
        "coffee" => "Connect over artisan coffee in a charming café setting.",
        "cooking" => "Learn new culinary skills together in a hands-on cooking class.",
        "sports" => "Get active with mini-golf, bowling, or another fun sport activity.",
        "dancing" => "Hit the dance floor or take a beginner dance lesson together.",
        "arcade" => "Compete in classic and modern games at an arcade or game bar.",
        "beach" => "Watch the sunset and enjoy the ocean breeze at the beach.",
        "hiking" => "Explore nature trails and enjoy scenic views on a hike.",
        "shopping" => "Browse boutiques, markets, or unique shops in a fun neighborhood.",
        "spa" => "Relax and unwind with couples massage or spa treatments.",
        _ => GENERIC_DESCRIPTION,
    };
    Cow::Borrowed(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_dinner_varies_for_romantic() {
        let romantic = describe_activity("dinner", "romantic");
        let casual = describe_activity("dinner", "casual");
        assert_ne!(romantic, casual);
        assert!(romantic.contains("at a romantic restaurant"));
        assert!(casual.contains("at a nice restaurant"));
    }

    #[test]
    fn test_other_activities_are_category_invariant() {
        let catalog = Catalog::builtin();
        for activity in catalog.activities().iter().filter(|a| a.id != "dinner") {
            let first = describe_activity(&activity.id, "romantic");
            for category in catalog.categories() {
                assert_eq!(describe_activity(&activity.id, &category.id), first);
            }
            assert_ne!(first, GENERIC_DESCRIPTION, "{} has no description", activity.id);
        }
    }

    #[test]
    fn test_unknown_activity_falls_back() {
        assert_eq!(describe_activity("zzz", "casual"), GENERIC_DESCRIPTION);
    }
}
