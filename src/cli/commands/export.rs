use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ledger::Ledger;
use crate::core::shifts::reconstruct;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::export_shifts;
use chrono::Local;

/// Handle the `export` command: reconstructed shifts to CSV or JSON.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export { format, output } = cmd {
        let mut pool = DbPool::new(&cfg.database)?;
        let mut ledger = Ledger::new(&mut pool, &cfg.worker.id);
        let events = ledger.read_all()?;

        let shifts = reconstruct(&events);
        export_shifts(format, &shifts, Local::now(), output.as_deref())?;
    }

    Ok(())
}
