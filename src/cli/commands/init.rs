use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (with the default work zone)
///  - the SQLite database (prod or test mode)
///  - all pending DB migrations
pub fn handle(cli: &Cli) -> AppResult<()> {
    let db_path = Config::init_all(cli.db.clone(), cli.test)?;
    let db_path = db_path.to_string_lossy().to_string();

    let cfg_path = Config::config_file();
    let cfg = Config::load()?;

    println!("⚙️  Initializing geoclock…");
    println!("📄 Config file : {}", cfg_path.display());
    println!("🗄️  Database   : {}", &db_path);
    println!(
        "📍 Work zone   : center {:.6}, {:.6} — radius {} km",
        cfg.perimeter.latitude, cfg.perimeter.longitude, cfg.perimeter.radius_km
    );

    let conn = Connection::open(&db_path)?;
    init_db(&conn)?;

    println!("✅ Database initialized at {}", &db_path);

    // Internal audit log (non-blocking)
    if let Err(e) = log::gclog(
        &conn,
        "init",
        &cfg.worker.id,
        &format!("Database initialized at {}", &db_path),
    ) {
        eprintln!("⚠️ Failed to write internal log: {}", e);
    }

    println!("🎉 geoclock initialization completed!");
    Ok(())
}
