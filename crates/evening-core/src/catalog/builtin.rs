//! The embedded activity catalog and category templates.

/// `(id, icon, label)` for every built-in activity, in display order.
pub(crate) const ACTIVITIES: [(&str, &str, &str); 16] = [
    ("dinner", "🍽️", "Dinner"),
    ("movie", "🎬", "Movie"),
    ("theater", "🎭", "Theater"),
    ("concert", "🎵", "Concert"),
    ("museum", "🏛️", "Museum"),
    ("park", "🌳", "Park Walk"),
    ("bar", "🍷", "Wine Bar"),
    ("coffee", "☕", "Coffee Shop"),
    ("cooking", "👨‍🍳", "Cooking Class"),
    ("sports", "⛳", "Sports Activity"),
    ("dancing", "💃", "Dancing"),
    ("arcade", "🎮", "Arcade/Games"),
    ("beach", "🏖️", "Beach"),
    ("hiking", "⛰️", "Hiking"),
    ("shopping", "🛍️", "Shopping"),
    ("spa", "💆", "Spa"),
];

pub(crate) struct BuiltinCategory {
    pub id: &'static str,
    pub suggestions: [&'static str; 4],
    pub tips: [&'static str; 4],
}

pub(crate) const CATEGORIES: [BuiltinCategory; 5] = [
    BuiltinCategory {
        id: "first-date",
        suggestions: ["coffee", "dinner", "park", "museum"],
        tips: [
            "Choose a public, comfortable location",
            "Keep it light and fun - 2-3 hours is ideal",
            "Have conversation topics ready",
            "Pick a spot with easy parking or transit access",
        ],
    },
    BuiltinCategory {
        id: "casual",
        suggestions: ["coffee", "movie", "park", "arcade"],
        tips: [
            "Focus on activities that encourage interaction",
            "Keep it relaxed and low-pressure",
            "Try something new together",
            "Be flexible with timing",
        ],
    },
    BuiltinCategory {
        id: "romantic",
        suggestions: ["dinner", "theater", "bar", "beach"],
        tips: [
            "Choose intimate settings with good ambiance",
            "Make reservations in advance",
            "Consider sunset timing for outdoor activities",
            "Add personal touches like flowers or a handwritten note",
        ],
    },
    BuiltinCategory {
        id: "anniversary",
        suggestions: ["dinner", "theater", "spa", "concert"],
        tips: [
            "Recreate your first date or a special memory",
            "Book special upgrades or VIP experiences",
            "Prepare a thoughtful gift or surprise",
            "Choose meaningful locations",
        ],
    },
    BuiltinCategory {
        id: "adventure",
        suggestions: ["hiking", "sports", "cooking", "dancing"],
        tips: [
            "Try something neither of you have done before",
            "Build in time for spontaneity",
            "Bring a sense of humor",
            "Capture memories with photos",
        ],
    },
];
