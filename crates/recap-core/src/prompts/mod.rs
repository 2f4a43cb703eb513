//! Prompt generation from the weekly schedule.
//!
//! A prompt is a concrete, time-stamped question derived from one
//! activity occurrence. Generation is a pure function of
//! `(schedule, after_minutes, now)`; the stored prompt set is replaced
//! wholesale on every regeneration, and prompt ids are deterministic so
//! an unchanged schedule regenerates identical ids.

mod templates;

pub use templates::{questions_for, random_question};

use chrono::{DateTime, Datelike, Duration, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::schedule::{parse_hhmm, ActivityType, ScheduleActivity};

/// Trigger window around a prompt's scheduled time, in minutes.
/// Symmetric so slightly-early and slightly-late delivery both count.
const DUE_WINDOW_MINUTES: i64 = 5;

/// A pending reflection prompt for one activity occurrence.
///
/// Holds a denormalized copy of the activity title and category so a
/// later schedule edit cannot change an already-generated prompt.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Prompt {
    pub id: String,
    pub activity_id: String,
    pub activity_title: String,
    pub question: String,
    pub scheduled_time: DateTime<Utc>,
    pub completed: bool,
    pub context_type: ActivityType,
}

/// Generate today's pending prompts from the schedule, evaluated at `now`.
///
/// One prompt per activity whose `day_of_week` is today, scheduled at
/// `end_time + after_minutes`. Activities whose prompt time has already
/// passed produce nothing: the generator only looks forward within the
/// current day. Activities with unparseable times are skipped.
pub fn generate_prompts_at(
    schedule: &[ScheduleActivity],
    after_minutes: i64,
    now: DateTime<Local>,
) -> Vec<Prompt> {
    let today = now.date_naive();
    let weekday = now.weekday().num_days_from_sunday() as u8;

    let mut prompts = Vec::new();
    for activity in schedule.iter().filter(|a| a.day_of_week == weekday) {
        let Ok(end) = parse_hhmm(&activity.end_time) else {
            continue;
        };
        let naive = today.and_time(end) + Duration::minutes(after_minutes);
        // Skips the nonexistent/ambiguous wall-clock times around DST.
        let Some(prompt_time) = Local.from_local_datetime(&naive).single() else {
            continue;
        };
        if prompt_time <= now {
            continue;
        }
        prompts.push(Prompt {
            id: prompt_id(&activity.id, prompt_time),
            activity_id: activity.id.clone(),
            activity_title: activity.title.clone(),
            question: random_question(activity.activity_type).to_string(),
            scheduled_time: prompt_time.with_timezone(&Utc),
            completed: false,
            context_type: activity.activity_type,
        });
    }
    prompts
}

/// Generate prompts evaluated at the current instant.
pub fn generate_prompts(schedule: &[ScheduleActivity], after_minutes: i64) -> Vec<Prompt> {
    generate_prompts_at(schedule, after_minutes, Local::now())
}

/// Deterministic prompt id: activity id plus the minute-truncated
/// local prompt time.
fn prompt_id(activity_id: &str, prompt_time: DateTime<Local>) -> String {
    format!("{}-{}", activity_id, prompt_time.format("%Y-%m-%d-%H-%M"))
}

/// Incomplete prompts scheduled after `now`, ascending, truncated to `limit`.
pub fn upcoming_at(prompts: &[Prompt], limit: usize, now: DateTime<Utc>) -> Vec<Prompt> {
    let mut future: Vec<Prompt> = prompts
        .iter()
        .filter(|p| !p.completed && p.scheduled_time > now)
        .cloned()
        .collect();
    future.sort_by_key(|p| p.scheduled_time);
    future.truncate(limit);
    future
}

/// Incomplete prompts scheduled after the current instant.
pub fn upcoming(prompts: &[Prompt], limit: usize) -> Vec<Prompt> {
    upcoming_at(prompts, limit, Utc::now())
}

/// Prompts scheduled on the local calendar day of `now`.
pub fn todays_prompts_at(prompts: &[Prompt], now: DateTime<Local>) -> Vec<Prompt> {
    let today = now.date_naive();
    prompts
        .iter()
        .filter(|p| p.scheduled_time.with_timezone(&Local).date_naive() == today)
        .cloned()
        .collect()
}

/// Whether a prompt is inside its trigger window at `now`.
pub fn due_now_at(prompt: &Prompt, now: DateTime<Utc>) -> bool {
    if prompt.completed {
        return false;
    }
    let offset = prompt.scheduled_time - now;
    offset <= Duration::minutes(DUE_WINDOW_MINUTES)
        && offset >= Duration::minutes(-DUE_WINDOW_MINUTES)
}

/// Whether a prompt is inside its trigger window right now.
pub fn due_now(prompt: &Prompt) -> bool {
    due_now_at(prompt, Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 2026-03-04 is a Wednesday (day_of_week 3).
    fn local(h: u32, m: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 3, 4, h, m, 0).unwrap()
    }

    fn gym_ending_at_1700() -> ScheduleActivity {
        ScheduleActivity {
            id: "gym-1".to_string(),
            title: "Evening lift".to_string(),
            activity_type: ActivityType::Gym,
            day_of_week: 3,
            start_time: "16:00".to_string(),
            end_time: "17:00".to_string(),
        }
    }

    #[test]
    fn future_activity_yields_prompt_after_delay() {
        let prompts = generate_prompts_at(&[gym_ending_at_1700()], 15, local(16, 0));
        assert_eq!(prompts.len(), 1);
        let expected = local(17, 15).with_timezone(&Utc);
        assert_eq!(prompts[0].scheduled_time, expected);
        assert!(!prompts[0].completed);
        assert_eq!(prompts[0].context_type, ActivityType::Gym);
    }

    #[test]
    fn passed_prompt_time_yields_nothing() {
        let prompts = generate_prompts_at(&[gym_ending_at_1700()], 15, local(17, 20));
        assert!(prompts.is_empty());
    }

    #[test]
    fn other_weekday_yields_nothing() {
        let mut activity = gym_ending_at_1700();
        activity.day_of_week = 5;
        let prompts = generate_prompts_at(&[activity], 15, local(16, 0));
        assert!(prompts.is_empty());
    }

    #[test]
    fn regeneration_produces_identical_ids() {
        let schedule = [gym_ending_at_1700()];
        let a = generate_prompts_at(&schedule, 15, local(16, 0));
        let b = generate_prompts_at(&schedule, 15, local(16, 0));
        assert_eq!(a[0].id, b[0].id);
        assert_eq!(a[0].id, "gym-1-2026-03-04-17-15");
    }

    #[test]
    fn unparseable_end_time_is_skipped() {
        let mut activity = gym_ending_at_1700();
        activity.end_time = "5pm".to_string();
        let prompts = generate_prompts_at(&[activity], 15, local(16, 0));
        assert!(prompts.is_empty());
    }

    #[test]
    fn upcoming_filters_sorts_and_truncates() {
        let mut later = generate_prompts_at(&[gym_ending_at_1700()], 60, local(16, 0));
        let mut sooner = generate_prompts_at(&[gym_ending_at_1700()], 15, local(16, 0));
        let mut done = generate_prompts_at(&[gym_ending_at_1700()], 30, local(16, 0));
        done[0].completed = true;

        let mut all = Vec::new();
        all.append(&mut later);
        all.append(&mut done);
        all.append(&mut sooner);

        let now = local(16, 0).with_timezone(&Utc);
        let up = upcoming_at(&all, 5, now);
        assert_eq!(up.len(), 2);
        assert!(up[0].scheduled_time < up[1].scheduled_time);

        let limited = upcoming_at(&all, 1, now);
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, up[0].id);
    }

    #[test]
    fn due_now_window_is_symmetric() {
        let prompt = &generate_prompts_at(&[gym_ending_at_1700()], 15, local(16, 0))[0];
        // Scheduled at 17:15.
        assert!(due_now_at(prompt, local(17, 11).with_timezone(&Utc)));
        assert!(due_now_at(prompt, local(17, 19).with_timezone(&Utc)));
        assert!(!due_now_at(prompt, local(17, 21).with_timezone(&Utc)));
        assert!(!due_now_at(prompt, local(17, 9).with_timezone(&Utc)));

        let mut completed = prompt.clone();
        completed.completed = true;
        assert!(!due_now_at(&completed, local(17, 15).with_timezone(&Utc)));
    }

    #[test]
    fn todays_prompts_filters_by_local_day() {
        let prompts = generate_prompts_at(&[gym_ending_at_1700()], 15, local(16, 0));
        assert_eq!(todays_prompts_at(&prompts, local(20, 0)).len(), 1);
        let tomorrow = Local.with_ymd_and_hms(2026, 3, 5, 10, 0, 0).unwrap();
        assert!(todays_prompts_at(&prompts, tomorrow).is_empty());
    }
}
