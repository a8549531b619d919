use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::shifts::reconstruct;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::event::ClockEvent;
use crate::models::shift::Shift;
use crate::utils::formatting::format_duration;
use crate::utils::table::{Column, Table};
use chrono::Local;

/// Handle the `shifts` command: reconstructed shift history, most recent
/// first; `--events` dumps the raw ledger instead.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Shifts {
        limit,
        events: events_only,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut ledger = Ledger::new(&mut pool, &cfg.worker.id);
        let all = ledger.read_all()?;

        if *events_only {
            print_events(&all);
            return Ok(());
        }

        let shifts = reconstruct(&all);

        if shifts.is_empty() {
            println!("No shifts recorded yet. Clock in to start your first shift.");
            return Ok(());
        }

        let shown: &[Shift] = match limit {
            Some(n) => &shifts[..(*n).min(shifts.len())],
            None => &shifts,
        };

        print_shifts(shown);

        if shown.len() < shifts.len() {
            println!("({} of {} shifts shown)", shown.len(), shifts.len());
        }
    }

    Ok(())
}

fn print_events(events: &[ClockEvent]) {
    if events.is_empty() {
        println!("The ledger is empty.");
        return;
    }

    println!("EVENTS:");
    for ev in events {
        println!(
            "- {} | {:>3} | {} | {}",
            ev.timestamp_str(),
            ev.kind.to_db_str(),
            ev.location.display(),
            ev.note.as_deref().unwrap_or("-"),
        );
    }
}

fn print_shifts(shifts: &[Shift]) {
    let now = Local::now();

    let mut table = Table::new(vec![
        Column::new("DATE", 10),
        Column::new("CLOCK IN", 8),
        Column::new("CLOCK OUT", 9),
        Column::new("DURATION", 9),
        Column::new("STATUS", 11),
        Column::new("LOCATION", 23),
        Column::new("NOTE", 20),
    ]);

    for shift in shifts {
        table.add_row(vec![
            shift.clock_in.date_str(),
            shift.clock_in.time_str(),
            shift
                .clock_out
                .as_ref()
                .map(|e| e.time_str())
                .unwrap_or_else(|| "--".to_string()),
            format_duration(shift.duration(now), false),
            if shift.is_open() {
                "In progress".to_string()
            } else {
                "Completed".to_string()
            },
            shift.clock_in.location.display(),
            shift.clock_in.note.clone().unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
}
