use std::error::Error;
use std::path::Path;

use chrono::NaiveDate;

use crate::cli::commands::{Cli, Commands, EventsArgs, OpenArgs, WeekArgs};
use crate::cli::output::*;
use crate::engine::{
    Column, calculate_work_order, is_promoted, open_todos_up_to_current_week, tasks_for_week,
};
use crate::model::task::Task;
use crate::model::week::{Week, WeekPosition};
use crate::store::{Snapshot, TaskSource};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn Error>> {
    let json = cli.json;
    let today = resolve_today(cli.today.as_deref())?;
    let snapshot = Snapshot::load(Path::new(&cli.file))?;

    match cli.command {
        Commands::Week(args) => cmd_week(&snapshot, args, today, json),
        Commands::Open(args) => cmd_open(&snapshot, args, today, json),
        Commands::Order => cmd_order(&snapshot, json),
        Commands::Events(args) => cmd_events(&snapshot, args, today, json),
    }
}

/// The reference clock lives here, at the outermost boundary. Everything
/// below takes `today` as a parameter.
fn resolve_today(arg: Option<&str>) -> Result<NaiveDate, Box<dyn Error>> {
    match arg {
        Some(s) => parse_date("--today", s),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

fn parse_date(what: &str, s: &str) -> Result<NaiveDate, Box<dyn Error>> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| format!("invalid {} '{}': {}", what, s, e).into())
}

fn resolve_week(arg: Option<&str>, today: NaiveDate) -> Result<Week, Box<dyn Error>> {
    match arg {
        Some(s) => Ok(Week::containing(parse_date("date", s)?)),
        None => Ok(Week::containing(today)),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

fn cmd_week(
    snapshot: &Snapshot,
    args: WeekArgs,
    today: NaiveDate,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let week = resolve_week(args.date.as_deref(), today)?;
    let tasks = snapshot.list_tasks();
    let columns: Vec<Column> = match args.column {
        Some(c) => vec![c.into()],
        None => vec![Column::Deadline, Column::FinishBy, Column::Todo],
    };
    let show_ghosts = args.ghosts && week.position(today) == WeekPosition::Past;

    if json {
        let out = WeekJson {
            start: week.start().format("%Y-%m-%d").to_string(),
            end: week.end().format("%Y-%m-%d").to_string(),
            position: position_label(week.position(today)),
            columns: columns
                .iter()
                .map(|&column| ColumnJson {
                    column: column.label(),
                    tasks: column_rows(tasks, week, today, column, show_ghosts)
                        .into_iter()
                        .map(|(task, ghost)| task_to_json(task, today, ghost))
                        .collect(),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", week_header(week, today));
    for column in columns {
        println!("\n{}", column.label());
        let rows = column_rows(tasks, week, today, column, show_ghosts);
        if rows.is_empty() {
            println!("  (none)");
            continue;
        }
        for (task, _) in rows {
            println!("  {}", task_line(task, column, week, today));
        }
    }
    Ok(())
}

/// Live column members plus, on request, the ghosts whose original home this
/// past week was. The bool marks ghosts.
fn column_rows<'a>(
    tasks: &'a [Task],
    week: Week,
    today: NaiveDate,
    column: Column,
    show_ghosts: bool,
) -> Vec<(&'a Task, bool)> {
    let mut rows: Vec<(&Task, bool)> = tasks_for_week(tasks, week, today, column)
        .into_iter()
        .map(|t| (t, false))
        .collect();
    if show_ghosts {
        rows.extend(
            tasks
                .iter()
                .filter(|t| is_promoted(t, column, week, today))
                .map(|t| (t, true)),
        );
    }
    rows
}

fn cmd_open(
    snapshot: &Snapshot,
    args: OpenArgs,
    today: NaiveDate,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let week = resolve_week(args.date.as_deref(), today)?;
    let tasks = open_todos_up_to_current_week(snapshot.list_tasks(), week, today);

    if json {
        let out = OpenJson {
            start: week.start().format("%Y-%m-%d").to_string(),
            end: week.end().format("%Y-%m-%d").to_string(),
            tasks: tasks
                .iter()
                .map(|t| task_to_json(t, today, false))
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", week_header(week, today));
    if tasks.is_empty() {
        println!("  (nothing open)");
    }
    for task in tasks {
        println!("{}", open_task_line(task, today));
    }
    Ok(())
}

fn cmd_order(snapshot: &Snapshot, json: bool) -> Result<(), Box<dyn Error>> {
    let tasks = snapshot.list_tasks();
    let order = calculate_work_order(tasks);

    // The map iterates in rank order; join titles back on for display
    let entries: Vec<OrderEntryJson> = order
        .iter()
        .filter_map(|(id, &rank)| {
            let task = tasks.iter().find(|t| &t.id == id)?;
            Some(OrderEntryJson {
                rank,
                id: id.clone(),
                title: task.title.clone(),
                priority: task.priority,
                deadline: task.deadline.as_date().map(|d| d.format("%Y-%m-%d").to_string()),
            })
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No open tasks with deadlines.");
    }
    for e in &entries {
        println!(
            "{:>3}. {:?} {} {} (due {})",
            e.rank,
            e.priority,
            e.id,
            e.title,
            e.deadline.as_deref().unwrap_or("-")
        );
    }
    Ok(())
}

fn cmd_events(
    snapshot: &Snapshot,
    args: EventsArgs,
    today: NaiveDate,
    json: bool,
) -> Result<(), Box<dyn Error>> {
    let week = resolve_week(args.date.as_deref(), today)?;
    // An event belongs to the week when its span touches it
    let events: Vec<_> = snapshot
        .list_week_events()
        .iter()
        .filter(|e| {
            let start = e.start_date.as_date();
            let end = e.end_date.as_date().or(start);
            match (start, end) {
                (Some(a), Some(b)) => a <= week.end() && b >= week.start(),
                _ => false,
            }
        })
        .collect();

    if json {
        let out: Vec<EventJson> = events.iter().map(|e| event_to_json(e)).collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }

    println!("{}", week_header(week, today));
    if events.is_empty() {
        println!("  (no events)");
    }
    for event in events {
        println!("{}", event_line(event));
    }
    Ok(())
}
