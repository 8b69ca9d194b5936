//! Terminal rendering of engine outcomes and profile views.
//!
//! All formatting lives here; command handlers stay thin. Level and score
//! figures come straight from the core's formulas, never re-derived.

use chrono::NaiveDate;
use liferpg_common::engine::{
    DailySummary, DecayReport, MilestoneCompletion, ProjectCompletion, PushupOutcome,
    ScreenTimeOutcome, ShowerOutcome, SleepOutcome, SocialOutcome, TodoCompletion, XpAward,
};
use liferpg_common::income::IncomeTracker;
use liferpg_common::levels;
use liferpg_common::profile::Profile;
use liferpg_common::tasks::{Project, Todo};
use owo_colors::OwoColorize;

const HR: &str = "----------------------------------------------------------------------";

/// Ten-segment progress bar through the current level band.
fn level_bar(xp: i64) -> String {
    let filled = (levels::xp_into_level(xp) / 15) as usize;
    format!("{}{}", "#".repeat(filled), ".".repeat(10 - filled))
}

/// Fifty-segment bar for a 0-100 percentage.
fn percent_bar(percent: f64) -> String {
    let filled = ((percent / 2.0) as usize).min(50);
    format!("{}{}", "#".repeat(filled), ".".repeat(50 - filled))
}

pub fn print_notice(message: &str) {
    println!("{}", message.yellow());
}

pub fn print_decay(report: &DecayReport) {
    println!(
        "{}",
        format!(
            "{} day(s) away: -{} XP decay applied to every area",
            report.days, report.loss_per_area
        )
        .yellow()
    );
}

pub fn print_award(award: &XpAward) {
    let sign = if award.amount >= 0 { "+" } else { "" };
    println!(
        "{}{} XP -> {} ({})",
        sign,
        award.amount.to_string().green(),
        award.area,
        award.reason
    );
    if award.leveled_up {
        println!(
            "{}",
            format!("LEVEL UP! {} is now level {}", award.area, award.new_level)
                .bright_cyan()
                .bold()
        );
    }
    if let Some(achievement) = &award.achievement {
        println!(
            "{}",
            format!("Achievement unlocked: {}", achievement).magenta()
        );
    }
}

pub fn print_pushups(outcome: &PushupOutcome) {
    match outcome {
        PushupOutcome::BelowRequirement {
            count,
            requirement,
            streak,
        } => {
            println!(
                "{}",
                format!(
                    "Only {}/{} push-ups. Keep pushing! (streak still counts: {} days)",
                    count, requirement, streak
                )
                .yellow()
            );
        }
        PushupOutcome::Earned {
            streak,
            excess_bonus,
            consistency_bonus,
            award,
        } => {
            if *excess_bonus > 0 {
                println!("Exceeded requirement! +{} bonus XP", excess_bonus);
            }
            if *consistency_bonus > 0 {
                println!(
                    "{} day streak! +{} consistency XP",
                    streak, consistency_bonus
                );
            }
            print_award(award);
        }
    }
}

pub fn print_shower(outcome: &ShowerOutcome) {
    print_award(&outcome.award);
    if outcome.streak >= 7 {
        println!("{}", format!("{} day shower streak!", outcome.streak).cyan());
    }
}

pub fn print_sleep(outcome: &SleepOutcome) {
    print_award(&outcome.award);
}

pub fn print_screen_time(outcome: &ScreenTimeOutcome) {
    match outcome {
        ScreenTimeOutcome::WithinLimit { hours, limit } => {
            println!(
                "{}",
                format!("Screen time under control: {}h/{}h", hours, limit).green()
            );
        }
        ScreenTimeOutcome::OverLimit {
            hours,
            limit,
            penalty,
        } => {
            println!(
                "{}",
                format!(
                    "Screen time over limit ({}h/{}h): -{} XP penalty, -{} per area",
                    hours, limit, penalty.total, penalty.per_area
                )
                .red()
            );
        }
    }
}

pub fn print_social(outcome: &SocialOutcome) {
    match outcome {
        SocialOutcome::WithinLimit {
            count,
            limit,
            award,
        } => {
            println!(
                "{}",
                format!("Social balance maintained: {}/{} this week", count, limit).green()
            );
            print_award(award);
        }
        SocialOutcome::OverLimit {
            count,
            limit,
            penalty,
        } => {
            println!(
                "{}",
                format!(
                    "Social limit exceeded ({}/{}): -{} XP, -{} per area",
                    count, limit, penalty.total, penalty.per_area
                )
                .red()
            );
        }
    }
}

pub fn print_project_added(project: &Project) {
    println!(
        "Project added: {} ({} value, due {})",
        project.name.bold(),
        project.value,
        project.deadline
    );
}

pub fn print_project_list(profile: &Profile) {
    let pending: Vec<&Project> = profile.pending_projects().collect();
    if pending.is_empty() {
        println!("No active projects.");
        return;
    }
    println!("{}", "ACTIVE PROJECTS".bold());
    for p in pending {
        println!("[{}] {} - {} (due {})", p.id, p.name, p.value, p.deadline);
    }
}

pub fn print_project_completion(completion: &ProjectCompletion) {
    println!(
        "{}",
        format!(
            "Project completed: {} (+{} earnings, {:.1}x time multiplier)",
            completion.name, completion.value, completion.multiplier
        )
        .green()
        .bold()
    );
    for award in &completion.awards {
        print_award(award);
    }
    println!(
        "Monthly progress: {}/{}",
        completion.earnings, completion.goal
    );
}

pub fn print_todo_added(todo: &Todo) {
    let best_case = (todo.base_xp as f64 * 1.5) as i64;
    println!(
        "Todo added: {} (up to {} XP if early)",
        todo.task.bold(),
        best_case
    );
}

pub fn print_todo_list(profile: &Profile) {
    let pending: Vec<&Todo> = profile.pending_todos().collect();
    if pending.is_empty() {
        println!("No pending tasks.");
        return;
    }
    println!("{}", "PENDING TASKS".bold());
    for t in pending {
        println!("[{}] {} - {} (due {})", t.id, t.task, t.area, t.deadline);
    }
}

pub fn print_todo_completion(completion: &TodoCompletion) {
    println!(
        "{}",
        format!(
            "Todo completed: {} ({:.1}x time multiplier)",
            completion.task, completion.multiplier
        )
        .green()
    );
    print_award(&completion.award);
}

pub fn print_milestone_list(profile: &Profile) {
    println!("{}", "EPIC MILESTONES".bold());
    println!("{}", HR);
    for (key, milestone) in &profile.epic_milestones {
        let status = if milestone.completed {
            "COMPLETED".green().to_string()
        } else {
            "in progress".dimmed().to_string()
        };
        println!(
            "{:20} {:45} | {}",
            key, milestone.description, status
        );
    }
}

pub fn print_milestone_completion(completion: &MilestoneCompletion) {
    println!(
        "{}",
        format!("EPIC MILESTONE COMPLETED: {}", completion.description)
            .magenta()
            .bold()
    );
    println!(
        "+{} total XP, +{} to each area",
        completion.xp_reward, completion.xp_per_area
    );
    for award in &completion.awards {
        if award.leveled_up || award.achievement.is_some() {
            print_award(award);
        }
    }
}

pub fn print_summary(summary: &DailySummary) {
    println!("{}", "DAILY PERFORMANCE REPORT".bold());
    println!("{}", HR);
    println!("Date:  {}", summary.date);
    println!("Score: {}/100", summary.score);
    println!("Grade: {}", summary.grade.bold());
    println!("{}", HR);
}

pub fn print_income(income: &IncomeTracker) {
    let percent = income.progress_percent();
    println!("{}", "INCOME PROGRESS".bold());
    println!("{}", HR);
    println!("[{}] {:.1}%", percent_bar(percent), percent);
    println!(
        "{} / {} (target month {})",
        income.current_month_earnings, income.monthly_goal, income.target_month
    );
    if let Some(manual) = income.manual_override {
        println!("{}", format!("manually corrected to {}", manual).dimmed());
    }
}

/// Full character stats view: areas grouped by category, habits, income,
/// and milestones.
pub fn print_stats(profile: &Profile) {
    println!("{}", "YOUR CHARACTER STATS".bold());
    println!("{}", HR);
    println!(
        "Average level: {:.1} | Total XP: {}",
        profile.average_level(),
        profile.total_xp()
    );

    for (category, areas) in profile.areas_by_category() {
        println!();
        println!("{}", category.to_uppercase().cyan().bold());
        for (name, stats) in areas {
            println!(
                "  {:24} | Lv {:3} | [{}] {:3} XP to next",
                name.short(),
                stats.level,
                level_bar(stats.xp),
                levels::xp_to_next_level(stats.xp)
            );
        }
    }

    println!();
    println!("{}", "HABIT STREAKS".bold());
    println!("{}", HR);
    println!(
        "{:15} | {} day streak",
        "Shower", profile.habits.shower.streak
    );
    println!(
        "{:15} | {} day streak",
        "Workout", profile.habits.workout.record.streak
    );

    println!();
    print_income(&profile.income);

    println!();
    print_milestone_list(profile);

    if !profile.achievements.is_empty() {
        println!();
        println!("{}", "ACHIEVEMENTS".bold());
        println!("{}", HR);
        for achievement in &profile.achievements {
            println!("  {}", achievement.magenta());
        }
    }
}

/// Today's agenda: urgent and upcoming tasks plus the daily habit checklist.
pub fn print_agenda(profile: &Profile, today: NaiveDate) {
    println!("{}", "TODAY'S AGENDA".bold());
    println!("{}", HR);

    let urgent: Vec<&Todo> = profile
        .pending_todos()
        .filter(|t| t.deadline <= today)
        .collect();
    if !urgent.is_empty() {
        println!("{}", "URGENT (due today or overdue)".red().bold());
        for t in &urgent {
            println!("  * {} ({})", t.task, t.area);
        }
    }

    let mut upcoming: Vec<&Todo> = profile
        .pending_todos()
        .filter(|t| t.deadline > today)
        .collect();
    upcoming.sort_by_key(|t| t.deadline);
    if !upcoming.is_empty() {
        println!("{}", "UPCOMING".bold());
        for t in upcoming.iter().take(5) {
            println!("  * {} (due {})", t.task, t.deadline);
        }
    }

    println!("{}", "DAILY HABITS".bold());
    let mark = |done: bool| if done { "[x]" } else { "[ ]" };
    println!(
        "  {} Shower",
        mark(profile.habits.shower.done_on(today))
    );
    println!(
        "  {} Workout",
        mark(profile.habits.workout.record.done_on(today))
    );
    println!("{}", HR);
}
