use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::session::ClockSession;
use crate::db::log::gclog;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::location;
use crate::ui::messages::success;
use chrono::Local;

/// Handle the `out` command: end the open shift. A position fix is
/// required; perimeter containment is not.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Out { lat, lon, note } = cmd {
        let perimeter = cfg.perimeter()?;
        let sample = location::resolve(*lat, *lon, cfg.fix_file.as_deref())?;

        let mut pool = DbPool::new(&cfg.database)?;

        let result = {
            let mut ledger = Ledger::new(&mut pool, &cfg.worker.id);
            let events = ledger.read_all()?;
            let mut session = ClockSession::from_ledger(&events);
            session.observe(&sample, &perimeter);
            session.clock_out(&mut ledger, note.clone(), Local::now())
        };

        match result {
            Ok(ev) => {
                gclog(
                    &pool.conn,
                    "clock_out",
                    &cfg.worker.id,
                    &format!("clocked out at {}", ev.location.display()),
                )?;
                success(format!(
                    "Clocked out at {} ({})",
                    ev.time_str(),
                    ev.location.display()
                ));
            }
            Err(e) => {
                gclog(&pool.conn, "clock_out_denied", &cfg.worker.id, &e.to_string())?;
                return Err(e);
            }
        }
    }

    Ok(())
}
