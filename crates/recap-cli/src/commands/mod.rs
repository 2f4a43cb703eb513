pub mod badges;
pub mod onboard;
pub mod prefs;
pub mod prompts;
pub mod reflect;
pub mod schedule;
pub mod streak;
