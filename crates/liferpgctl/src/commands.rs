//! Command handlers: parse-level types in, engine calls, rendered output.
//!
//! Unknown references and already-terminal states are reported and leave
//! the session usable; only persistence failures propagate.

use crate::cli::{Commands, MilestoneCommands, ProjectCommands, TodoCommands};
use crate::output;
use anyhow::Result;
use liferpg_common::areas::AreaName;
use liferpg_common::{Engine, RpgError};

/// Run an engine operation, rendering the outcome on success and printing
/// a notice for the reported-no-op error taxonomy.
fn report<T>(result: Result<T, RpgError>, render: impl FnOnce(&T)) -> Result<()> {
    match result {
        Ok(outcome) => {
            render(&outcome);
            Ok(())
        }
        Err(e) if e.is_recoverable() => {
            output::print_notice(&e.to_string());
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub fn dispatch(engine: &mut Engine, command: Commands) -> Result<()> {
    match command {
        Commands::Stats => {
            output::print_stats(engine.profile());
            Ok(())
        }

        Commands::Pushups { count } => {
            report(engine.track_pushups(count), output::print_pushups)
        }

        Commands::Shower => report(engine.check_shower(), output::print_shower),

        Commands::Sleep { hours } => report(engine.log_sleep(hours), output::print_sleep),

        Commands::Screen { hours } => {
            report(engine.track_screen_time(hours), output::print_screen_time)
        }

        Commands::Social => report(engine.log_social_interaction(), output::print_social),

        Commands::Learn { area, hours, topic } => {
            let area = AreaName::parse_display(&area);
            report(engine.log_learning(&area, hours, &topic), output::print_award)
        }

        Commands::Memory { minutes, technique } => report(
            engine.log_memory_practice(minutes, &technique),
            output::print_award,
        ),

        Commands::Project { action } => match action {
            ProjectCommands::Add {
                name,
                value,
                deadline,
            } => report(
                engine.add_project(&name, value, deadline),
                output::print_project_added,
            ),
            ProjectCommands::List => {
                output::print_project_list(engine.profile());
                Ok(())
            }
            ProjectCommands::Complete { id } => report(
                engine.complete_project(id),
                output::print_project_completion,
            ),
        },

        Commands::Todo { action } => match action {
            TodoCommands::Add {
                task,
                area,
                xp,
                deadline,
            } => {
                let area = AreaName::parse_display(&area);
                report(
                    engine.add_todo(&task, area, xp, deadline),
                    output::print_todo_added,
                )
            }
            TodoCommands::List => {
                output::print_todo_list(engine.profile());
                Ok(())
            }
            TodoCommands::Complete { id } => {
                report(engine.complete_todo(id), output::print_todo_completion)
            }
        },

        Commands::Milestone { action } => match action {
            MilestoneCommands::List => {
                output::print_milestone_list(engine.profile());
                Ok(())
            }
            MilestoneCommands::Complete { key } => report(
                engine.complete_epic_milestone(&key),
                output::print_milestone_completion,
            ),
        },

        Commands::Agenda => {
            output::print_agenda(engine.profile(), engine.today());
            Ok(())
        }

        Commands::Income { set } => {
            if let Some(amount) = set {
                engine.set_income_earnings(amount)?;
                output::print_notice("Income updated");
            }
            output::print_income(&engine.profile().income);
            Ok(())
        }

        Commands::Summary => report(engine.daily_summary(), output::print_summary),

        Commands::Xp {
            area,
            amount,
            reason,
        } => {
            let area = AreaName::parse_display(&area);
            report(engine.add_xp(&area, amount, &reason), output::print_award)
        }

        // Handled in main before the engine is constructed.
        Commands::Dashboard => unreachable!("dashboard runs without an engine"),
    }
}
