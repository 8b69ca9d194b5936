//! The progression engine.
//!
//! Owns the profile and every mutation of it: XP awards and level
//! derivation, daily decay, habit streaks, time multipliers, penalty
//! distribution, milestone completion, and daily scoring. Each mutating
//! operation persists the full document before returning; persistence
//! failure is the only condition that aborts an operation.
//!
//! Operations return typed outcomes instead of printing. The CLI renders
//! them; the dashboard reads its own profile snapshot.

use crate::achievements;
use crate::areas::AreaName;
use crate::error::RpgError;
use crate::habits::PushupRecord;
use crate::profile::Profile;
use crate::scoring::{self, DailyScoreRecord};
use crate::settings::Settings;
use crate::store::ProfileStore;
use crate::tasks::{self, Project, Todo};
use chrono::{Local, NaiveDate};
use tracing::{debug, info};

// ============================================================================
// Operation outcomes
// ============================================================================

/// Result of an XP award to one area.
#[derive(Debug, Clone)]
pub struct XpAward {
    pub area: AreaName,
    pub amount: i64,
    pub reason: String,
    pub new_level: i64,
    pub leveled_up: bool,
    /// Achievement entry unlocked by this award, if the landed-on level hit
    /// a tier threshold.
    pub achievement: Option<String>,
}

/// Decay applied at load after days away.
#[derive(Debug, Clone, Copy)]
pub struct DecayReport {
    pub days: i64,
    pub loss_per_area: i64,
}

/// An across-the-board XP reduction.
#[derive(Debug, Clone, Copy)]
pub struct PenaltyReport {
    pub total: i64,
    /// Integer share each area lost; the division remainder is dropped.
    pub per_area: i64,
}

#[derive(Debug, Clone)]
pub enum PushupOutcome {
    /// Requirement missed: no XP, but the streak and history were still
    /// recorded.
    BelowRequirement {
        count: u32,
        requirement: u32,
        streak: u32,
    },
    Earned {
        streak: u32,
        excess_bonus: i64,
        consistency_bonus: i64,
        award: XpAward,
    },
}

#[derive(Debug, Clone)]
pub struct ShowerOutcome {
    pub streak: u32,
    pub award: XpAward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SleepQuality {
    Optimal,
    Decent,
    Short,
}

impl SleepQuality {
    pub fn label(&self) -> &'static str {
        match self {
            SleepQuality::Optimal => "Optimal sleep",
            SleepQuality::Decent => "Decent sleep",
            SleepQuality::Short => "Need more sleep",
        }
    }
}

#[derive(Debug, Clone)]
pub struct SleepOutcome {
    pub quality: SleepQuality,
    pub award: XpAward,
}

#[derive(Debug, Clone)]
pub enum ScreenTimeOutcome {
    WithinLimit { hours: f64, limit: f64 },
    OverLimit {
        hours: f64,
        limit: f64,
        penalty: PenaltyReport,
    },
}

#[derive(Debug, Clone)]
pub enum SocialOutcome {
    WithinLimit {
        count: u32,
        limit: u32,
        award: XpAward,
    },
    OverLimit {
        count: u32,
        limit: u32,
        penalty: PenaltyReport,
    },
}

#[derive(Debug, Clone)]
pub struct ProjectCompletion {
    pub id: u64,
    pub name: String,
    pub value: i64,
    pub multiplier: f64,
    pub xp_per_area: i64,
    pub awards: Vec<XpAward>,
    pub earnings: i64,
    pub goal: i64,
}

#[derive(Debug, Clone)]
pub struct TodoCompletion {
    pub id: u64,
    pub task: String,
    pub multiplier: f64,
    pub award: XpAward,
}

#[derive(Debug, Clone)]
pub struct MilestoneCompletion {
    pub key: String,
    pub description: String,
    pub xp_reward: i64,
    pub xp_per_area: i64,
    pub awards: Vec<XpAward>,
}

#[derive(Debug, Clone)]
pub struct DailySummary {
    pub date: NaiveDate,
    pub score: u8,
    pub grade: &'static str,
}

// ============================================================================
// Engine
// ============================================================================

pub struct Engine {
    profile: Profile,
    store: ProfileStore,
    settings: Settings,
    today: NaiveDate,
    decay: Option<DecayReport>,
}

impl Engine {
    /// Load (or create) the profile and apply pending daily decay.
    pub fn load(store: ProfileStore, settings: Settings) -> Result<Self, RpgError> {
        Self::load_at(store, settings, Local::now().date_naive())
    }

    /// Like [`Engine::load`] with an explicit date. The date is fixed for
    /// the engine's lifetime; a session is expected to span a single day.
    pub fn load_at(
        store: ProfileStore,
        settings: Settings,
        today: NaiveDate,
    ) -> Result<Self, RpgError> {
        let profile = store.load_or_create(today)?;
        let mut engine = Self {
            profile,
            store,
            settings,
            today,
            decay: None,
        };
        engine.decay = engine.run_decay()?;
        Ok(engine)
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Decay applied during this load, if any.
    pub fn decay_report(&self) -> Option<DecayReport> {
        self.decay
    }

    /// Today's score and grade, derived from current state.
    pub fn daily_score(&self) -> (u8, &'static str) {
        scoring::daily_score(&self.profile, &self.settings, self.today)
    }

    fn save(&self) -> Result<(), RpgError> {
        self.store.save(&self.profile)
    }

    /// Subtract flat decay for each full calendar day since the last login.
    /// No-op when the last login is today (or, if the clock moved backwards,
    /// in the future).
    fn run_decay(&mut self) -> Result<Option<DecayReport>, RpgError> {
        if self.profile.last_login == self.today {
            return Ok(None);
        }
        let days = (self.today - self.profile.last_login).num_days();
        if days <= 0 {
            return Ok(None);
        }

        let loss = self.settings.daily_decay * days;
        for stats in self.profile.life_areas.values_mut() {
            stats.xp = (stats.xp - loss).max(0);
            stats.rederive_level();
        }
        self.profile.last_login = self.today;
        self.save()?;

        info!("{} day(s) away: -{} XP decay per area", days, loss);
        Ok(Some(DecayReport {
            days,
            loss_per_area: loss,
        }))
    }

    /// Core XP mutation: update xp and last-active, re-derive the level,
    /// and on a level increase check the landed-on level for an achievement
    /// tier. Does not persist; operations save once when done.
    fn award(&mut self, area: &AreaName, amount: i64, reason: &str) -> Result<XpAward, RpgError> {
        let today = self.today;
        let stats = self
            .profile
            .area_mut(area)
            .ok_or_else(|| RpgError::AreaNotFound(area.to_string()))?;

        let old_level = stats.level;
        stats.xp += amount;
        stats.last_active = today;
        stats.rederive_level();
        let new_level = stats.level;

        let leveled_up = new_level > old_level;
        let achievement = if leveled_up {
            info!("Level up: {} is now level {}", area, new_level);
            achievements::unlock_for_level(
                &mut self.profile.achievements,
                &area.to_string(),
                new_level,
            )
        } else {
            None
        };

        debug!("+{} XP -> {} ({})", amount, area, reason);
        Ok(XpAward {
            area: area.clone(),
            amount,
            reason: reason.to_string(),
            new_level,
            leveled_up,
            achievement,
        })
    }

    /// Reduce every area by `total / area_count` XP (integer division,
    /// remainder dropped), flooring each area at 0.
    fn apply_global_penalty(&mut self, total: i64) -> PenaltyReport {
        let count = self.profile.life_areas.len() as i64;
        let per_area = if count > 0 { total.div_euclid(count) } else { 0 };

        for stats in self.profile.life_areas.values_mut() {
            stats.xp = (stats.xp - per_area).max(0);
            stats.rederive_level();
        }

        info!("Penalty: -{} XP total, -{} per area", total, per_area);
        PenaltyReport { total, per_area }
    }

    // ========================================================================
    // Public operations
    // ========================================================================

    /// Add XP to an area (manual adjustments, learning sessions). Negative
    /// amounts are accepted and propagate arithmetically.
    pub fn add_xp(
        &mut self,
        area: &AreaName,
        amount: i64,
        reason: &str,
    ) -> Result<XpAward, RpgError> {
        let award = self.award(area, amount, reason)?;
        self.save()?;
        Ok(award)
    }

    /// Log a pushup workout. The streak and history update regardless of
    /// whether the requirement was met; XP only flows at or above it.
    pub fn track_pushups(&mut self, count: u32) -> Result<PushupOutcome, RpgError> {
        self.profile.habits.workout.record.advance(self.today);
        self.profile.habits.workout.pushup_history.push(PushupRecord {
            date: self.today,
            count,
        });
        let streak = self.profile.habits.workout.record.streak;

        let requirement = self.settings.pushup_requirement;
        if count < requirement {
            self.save()?;
            return Ok(PushupOutcome::BelowRequirement {
                count,
                requirement,
                streak,
            });
        }

        let mut xp = self.settings.daily_decay;
        let excess_bonus = if count > requirement {
            (((count - requirement) / 10) as i64).min(10)
        } else {
            0
        };
        xp += excess_bonus;

        let consistency_bonus = if streak >= 7 {
            (streak / 7) as i64 * 5
        } else {
            0
        };
        xp += consistency_bonus;

        let award = self.award(&AreaName::exercise(), xp, &format!("{} push-ups", count))?;
        self.save()?;
        Ok(PushupOutcome::Earned {
            streak,
            excess_bonus,
            consistency_bonus,
            award,
        })
    }

    /// Log the daily shower. Rejects a second log on the same date.
    pub fn check_shower(&mut self) -> Result<ShowerOutcome, RpgError> {
        if self.profile.habits.shower.done_on(self.today) {
            return Err(RpgError::AlreadyLoggedToday("shower".to_string()));
        }

        self.profile.habits.shower.advance(self.today);
        let streak = self.profile.habits.shower.streak;
        let award = self.award(&AreaName::hygiene(), 10, "Daily shower")?;
        self.save()?;
        Ok(ShowerOutcome { streak, award })
    }

    /// Log sleep hours. 7-8h is optimal (20 XP); otherwise 6h and up earns
    /// 10 XP (oversleeping included); anything shorter earns 5 XP.
    pub fn log_sleep(&mut self, hours: f64) -> Result<SleepOutcome, RpgError> {
        let (xp, quality) = if (7.0..=8.0).contains(&hours) {
            (20, SleepQuality::Optimal)
        } else if hours >= 6.0 {
            (10, SleepQuality::Decent)
        } else {
            (5, SleepQuality::Short)
        };

        let reason = format!("{}h - {}", hours, quality.label());
        let award = self.award(&AreaName::sleep(), xp, &reason)?;
        self.save()?;
        Ok(SleepOutcome { quality, award })
    }

    /// Log today's screen time (overwriting any earlier entry). Hours over
    /// the limit cost `floor(excess * 10)` XP spread across every area.
    pub fn track_screen_time(&mut self, hours: f64) -> Result<ScreenTimeOutcome, RpgError> {
        self.profile.screen_time.log(self.today, hours);

        let limit = self.settings.screen_time_limit_hours;
        let outcome = if hours > limit {
            let total = ((hours - limit) * 10.0).floor() as i64;
            let penalty = self.apply_global_penalty(total);
            ScreenTimeOutcome::OverLimit {
                hours,
                limit,
                penalty,
            }
        } else {
            ScreenTimeOutcome::WithinLimit { hours, limit }
        };

        self.save()?;
        Ok(outcome)
    }

    /// Log a social interaction against the weekly allowance. Within the
    /// limit it earns balance XP; beyond it, each extra interaction costs
    /// 20 XP spread across every area.
    pub fn log_social_interaction(&mut self) -> Result<SocialOutcome, RpgError> {
        self.profile.social_interactions.roll_week(self.today);
        self.profile.social_interactions.weekly_count += 1;

        let count = self.profile.social_interactions.weekly_count;
        let limit = self.settings.social_weekly_limit;
        let outcome = if count > limit {
            let total = (count - limit) as i64 * 20;
            let penalty = self.apply_global_penalty(total);
            SocialOutcome::OverLimit {
                count,
                limit,
                penalty,
            }
        } else {
            let award = self.award(&AreaName::social_balance(), 5, "Balanced interaction")?;
            SocialOutcome::WithinLimit {
                count,
                limit,
                award,
            }
        };

        self.save()?;
        Ok(outcome)
    }

    pub fn add_project(
        &mut self,
        name: &str,
        value: i64,
        deadline: NaiveDate,
    ) -> Result<Project, RpgError> {
        let project = Project {
            id: self.profile.next_project_id(),
            name: name.to_string(),
            value,
            deadline,
            completed: false,
            completion_date: None,
            created: self.today,
        };
        self.profile.projects.push(project.clone());
        self.save()?;
        Ok(project)
    }

    /// Complete a pending project: record earnings and distribute
    /// deadline-scaled XP evenly across the Work Skills areas.
    pub fn complete_project(&mut self, id: u64) -> Result<ProjectCompletion, RpgError> {
        let (name, value, deadline) = {
            let project = self
                .profile
                .projects
                .iter_mut()
                .find(|p| p.id == id)
                .ok_or(RpgError::ProjectNotFound(id))?;
            if project.completed {
                return Err(RpgError::AlreadyCompleted(format!("Project {}", id)));
            }
            project.completed = true;
            project.completion_date = Some(self.today);
            (project.name.clone(), project.value, project.deadline)
        };

        self.profile.income.add_earnings(value);

        let multiplier = tasks::calculate_time_multiplier(deadline, self.today);
        let xp = tasks::scaled_xp(value.div_euclid(10), multiplier);

        let work_areas = self.profile.work_skill_areas();
        let xp_per_area = if work_areas.is_empty() {
            0
        } else {
            xp.div_euclid(work_areas.len() as i64)
        };

        let mut awards = Vec::with_capacity(work_areas.len());
        let reason = format!("Project: {}", name);
        for area in &work_areas {
            awards.push(self.award(area, xp_per_area, &reason)?);
        }

        self.save()?;
        Ok(ProjectCompletion {
            id,
            name,
            value,
            multiplier,
            xp_per_area,
            awards,
            earnings: self.profile.income.current_month_earnings,
            goal: self.profile.income.monthly_goal,
        })
    }

    pub fn add_todo(
        &mut self,
        task: &str,
        area: AreaName,
        base_xp: i64,
        deadline: NaiveDate,
    ) -> Result<Todo, RpgError> {
        let todo = Todo {
            id: self.profile.next_todo_id(),
            task: task.to_string(),
            area,
            base_xp,
            deadline,
            completed: false,
            completion_date: None,
            created: self.today,
        };
        self.profile.todos.push(todo.clone());
        self.save()?;
        Ok(todo)
    }

    /// Complete a pending todo: deadline-scaled XP to its single area.
    pub fn complete_todo(&mut self, id: u64) -> Result<TodoCompletion, RpgError> {
        let (task, area, base_xp, deadline) = {
            let todo = self
                .profile
                .todos
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or(RpgError::TodoNotFound(id))?;
            if todo.completed {
                return Err(RpgError::AlreadyCompleted(format!("Todo {}", id)));
            }
            todo.completed = true;
            todo.completion_date = Some(self.today);
            (
                todo.task.clone(),
                todo.area.clone(),
                todo.base_xp,
                todo.deadline,
            )
        };

        let multiplier = tasks::calculate_time_multiplier(deadline, self.today);
        let xp = tasks::scaled_xp(base_xp, multiplier);
        let award = self.award(&area, xp, &format!("Task: {}", task))?;

        self.save()?;
        Ok(TodoCompletion {
            id,
            task,
            multiplier,
            award,
        })
    }

    /// Complete an epic milestone once, distributing its reward evenly
    /// across every life area.
    pub fn complete_epic_milestone(&mut self, key: &str) -> Result<MilestoneCompletion, RpgError> {
        let (description, xp_reward) = {
            let milestone = self
                .profile
                .epic_milestones
                .get_mut(key)
                .ok_or_else(|| RpgError::MilestoneNotFound(key.to_string()))?;
            if milestone.completed {
                return Err(RpgError::AlreadyCompleted(format!("Milestone '{}'", key)));
            }
            milestone.completed = true;
            (milestone.description.clone(), milestone.xp_reward)
        };

        let count = self.profile.life_areas.len() as i64;
        let xp_per_area = if count > 0 {
            xp_reward.div_euclid(count)
        } else {
            0
        };

        let area_names: Vec<AreaName> = self.profile.life_areas.keys().cloned().collect();
        let mut awards = Vec::with_capacity(area_names.len());
        for area in &area_names {
            awards.push(self.award(area, xp_per_area, "Epic milestone")?);
        }

        self.save()?;
        Ok(MilestoneCompletion {
            key: key.to_string(),
            description,
            xp_reward,
            xp_per_area,
            awards,
        })
    }

    /// Log a learning session: 20 XP per hour to the chosen area.
    pub fn log_learning(
        &mut self,
        area: &AreaName,
        hours: f64,
        topic: &str,
    ) -> Result<XpAward, RpgError> {
        let xp = (hours * 20.0) as i64;
        let award = self.award(area, xp, &format!("{}h on {}", hours, topic))?;
        self.save()?;
        Ok(award)
    }

    /// Log memory practice: 1 XP per 5 minutes to Memory Techniques.
    pub fn log_memory_practice(
        &mut self,
        minutes: u32,
        technique: &str,
    ) -> Result<XpAward, RpgError> {
        let xp = (minutes / 5) as i64;
        let reason = format!("{}min - {}", minutes, technique);
        let award = self.award(&AreaName::memory_techniques(), xp, &reason)?;
        self.save()?;
        Ok(award)
    }

    /// Manual earnings correction for the income tracker.
    pub fn set_income_earnings(&mut self, amount: i64) -> Result<(), RpgError> {
        self.profile.income.set_earnings(amount);
        self.save()
    }

    /// Compute today's score and append it to the record. A second summary
    /// on the same day appends a second record; deduplication is up to the
    /// reader.
    pub fn daily_summary(&mut self) -> Result<DailySummary, RpgError> {
        let (score, grade) = self.daily_score();
        self.profile.daily_scores.push(DailyScoreRecord {
            date: self.today,
            score,
            grade: grade.to_string(),
        });
        self.save()?;
        Ok(DailySummary {
            date: self.today,
            score,
            grade,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
