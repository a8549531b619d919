use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::load_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;

/// Handle the `log` command: dump the internal audit log.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let mut pool = DbPool::new(&cfg.database)?;
        let rows = load_log(&mut pool)?;

        if rows.is_empty() {
            println!("The audit log is empty.");
            return Ok(());
        }

        for (date, operation, target, message) in rows {
            println!("{} | {:<16} | {:<8} | {}", date, operation, target, message);
        }
    }

    Ok(())
}
