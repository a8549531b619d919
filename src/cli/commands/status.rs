use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::session::ClockSession;
use crate::core::shifts::reconstruct;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::location;
use crate::ui::messages::{header, location as location_line, warning};
use crate::utils::formatting::format_duration;
use chrono::Local;

/// Handle the `status` command: session state, open-shift duration and,
/// when a fix is available, a live gate preview.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Status { lat, lon } = cmd {
        let perimeter = cfg.perimeter()?;
        let sample = location::resolve(*lat, *lon, cfg.fix_file.as_deref())?;

        let mut pool = DbPool::new(&cfg.database)?;
        let mut ledger = Ledger::new(&mut pool, &cfg.worker.id);
        let events = ledger.read_all()?;

        let mut session = ClockSession::from_ledger(&events);
        session.observe(&sample, &perimeter);
        let state = session.snapshot();

        header("geoclock status");

        println!(
            "Worker:    {} ({}, {})",
            cfg.worker.name,
            cfg.worker.id,
            cfg.worker.role.as_str()
        );
        println!(
            "Work zone: center {:.6}, {:.6} — radius {} km",
            perimeter.center.latitude, perimeter.center.longitude, perimeter.radius_km
        );
        println!(
            "Status:    {}",
            if state.is_clocked_in {
                "clocked IN"
            } else {
                "clocked OUT"
            }
        );

        // Live open-shift card
        if state.is_clocked_in {
            let now = Local::now();
            if let Some(open) = reconstruct(&events).into_iter().find(|s| s.is_open()) {
                println!(
                    "Shift:     started {} — elapsed {}",
                    open.clock_in.time_str(),
                    format_duration(open.duration(now), true)
                );
            }
        }

        // Gate preview for the current sample
        match &sample {
            Ok(pos) => {
                location_line(format!("Position: {}", pos.display()));
                let decision = session.decision();
                match (decision.within_perimeter, &decision.reason) {
                    (true, _) => {
                        let d = decision.distance_km.unwrap_or(0.0);
                        println!("Gate:      inside the work zone ({:.3} km from center)", d);
                    }
                    (false, Some(reason)) => {
                        warning(format!("Gate: clock-in blocked — {}", reason));
                    }
                    (false, None) => {
                        warning("Gate: clock-in blocked");
                    }
                }
            }
            Err(e) => {
                warning(format!("No position fix: {}", e));
            }
        }
    }

    Ok(())
}
