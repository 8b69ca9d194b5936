//! Command-line argument parsing.
//!
//! Defines the CLI structure using clap. Keeps argument parsing separate
//! from execution logic.

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Life RPG CLI
#[derive(Parser)]
#[command(name = "liferpgctl")]
#[command(about = "Life RPG - turn daily life into XP and levels", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the profile file (overrides $LIFERPG_PROFILE and defaults)
    #[arg(long, global = true)]
    pub profile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show character stats and progress
    Stats,

    /// Log a pushup workout
    Pushups {
        /// Pushups completed
        count: u32,
    },

    /// Log the daily shower
    Shower,

    /// Log last night's sleep
    Sleep {
        /// Hours slept
        hours: f64,
    },

    /// Log today's screen time
    Screen {
        /// Hours of screen time
        hours: f64,
    },

    /// Log a social interaction against the weekly allowance
    Social,

    /// Log a learning session (20 XP per hour)
    Learn {
        /// Target area, e.g. "University - Databases"
        area: String,
        /// Hours spent
        hours: f64,
        /// What was studied
        topic: String,
    },

    /// Log memory practice (1 XP per 5 minutes)
    Memory {
        /// Minutes practiced
        minutes: u32,
        /// Technique used, e.g. "palace"
        technique: String,
    },

    /// Manage paid projects
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Manage todos
    Todo {
        #[command(subcommand)]
        action: TodoCommands,
    },

    /// Epic milestones
    Milestone {
        #[command(subcommand)]
        action: MilestoneCommands,
    },

    /// Show today's agenda: urgent and upcoming tasks, habit checklist
    Agenda,

    /// Show income progress, or correct the month's earnings
    Income {
        /// Set current month earnings to this amount
        #[arg(long)]
        set: Option<i64>,
    },

    /// End-of-day summary: compute and record today's score
    Summary,

    /// Manual XP adjustment (negative to subtract)
    Xp {
        /// Target area, e.g. "Health - Exercise"
        area: String,
        /// XP amount
        amount: i64,
        /// Reason for the adjustment
        #[arg(default_value = "Manual adjustment")]
        reason: String,
    },

    /// Launch the read-only terminal dashboard
    Dashboard,
}

#[derive(Subcommand)]
pub enum ProjectCommands {
    /// Add a project
    Add {
        name: String,
        /// Monetary value
        value: i64,
        /// Deadline (YYYY-MM-DD)
        deadline: NaiveDate,
    },
    /// List pending projects
    List,
    /// Complete a project by id
    Complete { id: u64 },
}

#[derive(Subcommand)]
pub enum TodoCommands {
    /// Add a todo
    Add {
        task: String,
        /// Target area, e.g. "University - Databases"
        area: String,
        /// Base XP (scaled by completion time)
        xp: i64,
        /// Deadline (YYYY-MM-DD)
        deadline: NaiveDate,
    },
    /// List pending todos
    List,
    /// Complete a todo by id
    Complete { id: u64 },
}

#[derive(Subcommand)]
pub enum MilestoneCommands {
    /// List milestones and their status
    List,
    /// Complete a milestone by key
    Complete { key: String },
}
