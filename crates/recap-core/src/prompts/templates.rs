//! Reflection question pools, one per activity category.

use rand::seq::SliceRandom;

use crate::schedule::ActivityType;

const GYM: &[&str] = &[
    "How did your workout feel today?",
    "What exercise challenged you the most?",
    "Did you hit a new personal record?",
    "What's your energy level after this workout?",
    "Share one thing you're proud of from today's session!",
    "How are you feeling physically after this workout?",
];

const CLASS: &[&str] = &[
    "What was the most interesting thing you learned today?",
    "Share a key takeaway from your class!",
    "What concept are you still thinking about?",
    "Did anything surprise you in today's lesson?",
    "What question do you still have?",
    "How would you explain today's topic to a friend?",
];

const MEETING: &[&str] = &[
    "What was decided in this meeting?",
    "Share the most valuable insight from the discussion!",
    "What action items did you take away?",
    "How productive was this meeting on a scale of 1-10?",
    "What could have made this meeting better?",
];

const STUDY: &[&str] = &[
    "What topic did you cover in your study session?",
    "Share one thing that finally clicked for you!",
    "What's still confusing that you need to review?",
    "How focused were you during this session?",
    "What study technique worked best today?",
];

const OTHER: &[&str] = &[
    "How did this activity go?",
    "What did you take away from this experience?",
    "Share a quick reflection on what just happened!",
    "How are you feeling right now?",
    "What's one word to describe this activity?",
];

/// All questions for a category.
pub fn questions_for(activity_type: ActivityType) -> &'static [&'static str] {
    match activity_type {
        ActivityType::Gym => GYM,
        ActivityType::Class => CLASS,
        ActivityType::Meeting => MEETING,
        ActivityType::Study => STUDY,
        ActivityType::Other => OTHER,
    }
}

/// Pick a random question for a category.
pub fn random_question(activity_type: ActivityType) -> &'static str {
    let pool = questions_for(activity_type);
    // Pools are non-empty by construction.
    pool.choose(&mut rand::thread_rng()).copied().unwrap_or("How did this activity go?")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_category_has_questions() {
        for t in [
            ActivityType::Gym,
            ActivityType::Class,
            ActivityType::Meeting,
            ActivityType::Study,
            ActivityType::Other,
        ] {
            assert!(!questions_for(t).is_empty());
        }
    }

    #[test]
    fn random_question_comes_from_pool() {
        let q = random_question(ActivityType::Study);
        assert!(questions_for(ActivityType::Study).contains(&q));
    }
}
