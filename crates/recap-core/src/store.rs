//! Application state coordinator.
//!
//! `AppStore` owns the authoritative in-memory snapshot of every
//! aggregate and is the only component with side effects. All mutation
//! funnels through its named operations, which keep the derived state
//! (streak, badges) consistent with the reflection history and hand
//! prompt notifications to the [`Notifier`] backend.
//!
//! Ordering discipline: the reflection history is persisted before any
//! derived state is recomputed, and derived state is persisted before
//! the in-memory view is updated. A failed write is logged and
//! tolerated; memory stays the temporary source of truth until the
//! next successful write.

use tracing::warn;

use crate::badges::{evaluate_badges, newly_unlocked, Badge};
use crate::error::Result;
use crate::notify::{announce_badge, schedule_prompt, Notifier};
use crate::onboarding::OnboardingState;
use crate::preferences::Preferences;
use crate::prompts::{generate_prompts, Prompt};
use crate::reflection::Reflection;
use crate::schedule::ScheduleActivity;
use crate::storage::Database;
use crate::streak::{compute_streak, StreakData};

/// The single app-wide state container.
pub struct AppStore {
    db: Database,
    notifier: Box<dyn Notifier>,
    onboarding: Option<OnboardingState>,
    schedule: Vec<ScheduleActivity>,
    prompts: Vec<Prompt>,
    reflections: Vec<Reflection>,
    streak: StreakData,
    badges: Vec<Badge>,
    preferences: Preferences,
}

impl AppStore {
    /// Create a store over an opened database and notification backend.
    /// Call [`AppStore::initialize`] before use.
    pub fn new(db: Database, notifier: Box<dyn Notifier>) -> Self {
        Self {
            db,
            notifier,
            onboarding: None,
            schedule: Vec::new(),
            prompts: Vec::new(),
            reflections: Vec::new(),
            streak: StreakData::default(),
            badges: Vec::new(),
            preferences: Preferences::default(),
        }
    }

    /// Load every persisted aggregate and rebuild the derived state.
    ///
    /// The persisted streak snapshot is never trusted: the streak is
    /// always rederived from the loaded reflection history, and badges
    /// are evaluated once more to cover unlocks that should have
    /// happened from historical data.
    pub fn initialize(&mut self) -> Result<()> {
        self.onboarding = self.db.load_onboarding();
        self.schedule = self.db.load_schedule();
        self.reflections = self.db.load_reflections();
        self.prompts = self.db.load_prompts();
        self.preferences = self.db.load_preferences();

        let streak = compute_streak(&self.reflections);
        let badges = evaluate_badges(&self.reflections, &streak, &self.db.load_badges());

        self.persist_streak(&streak);
        self.persist_badges(&badges);
        self.streak = streak;
        self.badges = badges;
        Ok(())
    }

    /// Record a reflection: append to history, rebuild streak and
    /// badges, mark the originating prompt completed, and announce any
    /// newly unlocked badges. Returns the newly unlocked set.
    ///
    /// A reflection with a non-positive duration is rejected as a no-op
    /// (validation proper happens at the capture boundary).
    pub fn record_reflection(&mut self, reflection: Reflection) -> Result<Vec<Badge>> {
        if reflection.duration_secs == 0 {
            warn!(id = %reflection.id, "dropping reflection with zero duration");
            return Ok(Vec::new());
        }

        // History first, derived state after.
        if let Err(e) = self.db.append_reflection(&reflection) {
            warn!(error = %e, "failed to persist reflection, keeping in memory");
        }
        self.reflections.push(reflection.clone());

        let streak = compute_streak(&self.reflections);
        let badges = evaluate_badges(&self.reflections, &streak, &self.badges);
        let fresh = newly_unlocked(&self.badges, &badges);

        let mut prompts = self.prompts.clone();
        if let Some(prompt) = prompts.iter_mut().find(|p| p.id == reflection.prompt_id) {
            prompt.completed = true;
        }

        self.persist_streak(&streak);
        self.persist_badges(&badges);
        if let Err(e) = self.db.save_prompts(&prompts) {
            warn!(error = %e, "failed to persist prompts");
        }
        self.streak = streak;
        self.badges = badges;
        self.prompts = prompts;

        for badge in &fresh {
            if let Err(e) = announce_badge(self.notifier.as_mut(), badge) {
                warn!(badge = %badge.id, error = %e, "badge notification failed");
            }
        }
        Ok(fresh)
    }

    /// Replace the whole schedule and regenerate prompts.
    pub fn update_schedule(&mut self, schedule: Vec<ScheduleActivity>) -> Result<()> {
        if let Err(e) = self.db.save_schedule(&schedule) {
            warn!(error = %e, "failed to persist schedule");
        }
        self.schedule = schedule;
        self.refresh_prompts()
    }

    /// Add one validated activity to the schedule.
    pub fn add_activity(&mut self, activity: ScheduleActivity) -> Result<()> {
        activity.validate()?;
        let mut schedule = self.schedule.clone();
        schedule.push(activity);
        self.update_schedule(schedule)
    }

    /// Remove an activity by id. Unknown ids are a no-op.
    pub fn remove_activity(&mut self, activity_id: &str) -> Result<()> {
        let schedule: Vec<ScheduleActivity> = self
            .schedule
            .iter()
            .filter(|a| a.id != activity_id)
            .cloned()
            .collect();
        self.update_schedule(schedule)
    }

    /// Replace preferences. A notification-timing change triggers the
    /// regenerate-and-reschedule path.
    pub fn update_preferences(&mut self, preferences: Preferences) -> Result<()> {
        let timing_changed = self.preferences.timing_changed(&preferences);
        if let Err(e) = self.db.save_preferences(&preferences) {
            warn!(error = %e, "failed to persist preferences");
        }
        self.preferences = preferences;
        if timing_changed {
            self.refresh_prompts()?;
        }
        Ok(())
    }

    /// Finish onboarding: persist the state and schedule, then generate
    /// the first prompt set.
    pub fn complete_onboarding(
        &mut self,
        schedule: Vec<ScheduleActivity>,
        user_name: impl Into<String>,
    ) -> Result<()> {
        let state = OnboardingState::completed_with(schedule.clone(), user_name);
        if let Err(e) = self.db.save_onboarding(&state) {
            warn!(error = %e, "failed to persist onboarding state");
        }
        self.onboarding = Some(state);
        self.update_schedule(schedule)
    }

    /// Regenerate today's prompts from the schedule and re-register
    /// every incomplete one with the notification backend.
    pub fn refresh_prompts(&mut self) -> Result<()> {
        let prompts = generate_prompts(
            &self.schedule,
            self.preferences.notifications.prompt_after_minutes,
        );
        if let Err(e) = self.db.save_prompts(&prompts) {
            warn!(error = %e, "failed to persist prompts");
        }
        self.prompts = prompts;

        if let Err(e) = self.notifier.cancel_all() {
            warn!(error = %e, "failed to cancel scheduled notifications");
        }
        if self.preferences.notifications.enabled {
            for prompt in self.prompts.iter().filter(|p| !p.completed) {
                if let Err(e) = schedule_prompt(self.notifier.as_mut(), prompt) {
                    warn!(prompt = %prompt.id, error = %e, "failed to schedule notification");
                }
            }
        }
        Ok(())
    }

    fn persist_streak(&self, streak: &StreakData) {
        if let Err(e) = self.db.save_streak(streak) {
            warn!(error = %e, "failed to persist streak");
        }
    }

    fn persist_badges(&self, badges: &[Badge]) {
        if let Err(e) = self.db.save_badges(badges) {
            warn!(error = %e, "failed to persist badges");
        }
    }

    pub fn onboarding(&self) -> Option<&OnboardingState> {
        self.onboarding.as_ref()
    }

    pub fn schedule(&self) -> &[ScheduleActivity] {
        &self.schedule
    }

    pub fn prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    pub fn reflections(&self) -> &[Reflection] {
        &self.reflections
    }

    pub fn streak(&self) -> &StreakData {
        &self.streak
    }

    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    /// The underlying database, for read-only inspection.
    pub fn database(&self) -> &Database {
        &self.db
    }
}
