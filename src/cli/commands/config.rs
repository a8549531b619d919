use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::gclog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::position::Position;
use crate::ui::messages::success;

/// Handle the `config` subcommand: view/check the configuration and apply
/// manager edits to the work zone and worker identity.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        check,
        set_center,
        set_radius,
        worker_id,
        worker_name,
    } = cmd
    {
        // ---- EDITS ----
        // Edits are read-modify-write against the on-disk file, not the
        // effective config, so a --db override never leaks into the file.
        let wants_edit = set_center.is_some()
            || set_radius.is_some()
            || worker_id.is_some()
            || worker_name.is_some();

        if wants_edit {
            let mut disk_cfg = Config::load()?;
            let mut zone_changed = false;

            if let Some(center) = set_center {
                let pos = Position::checked(center[0], center[1])?;
                disk_cfg.perimeter.latitude = pos.latitude;
                disk_cfg.perimeter.longitude = pos.longitude;
                zone_changed = true;
            }

            if let Some(radius) = set_radius {
                if !radius.is_finite() || *radius <= 0.0 {
                    return Err(AppError::InvalidRadius(format!(
                        "radius must be a positive number of kilometers, got {}",
                        radius
                    )));
                }
                disk_cfg.perimeter.radius_km = *radius;
                zone_changed = true;
            }

            if let Some(id) = worker_id {
                disk_cfg.worker.id = id.clone();
            }
            if let Some(name) = worker_name {
                disk_cfg.worker.name = name.clone();
            }

            disk_cfg.save()?;

            if zone_changed {
                success(format!(
                    "Work zone updated: center {:.6}, {:.6} — radius {} km",
                    disk_cfg.perimeter.latitude,
                    disk_cfg.perimeter.longitude,
                    disk_cfg.perimeter.radius_km
                ));

                // Audit, when a database is already initialized.
                if let Ok(pool) = DbPool::new(&cfg.database) {
                    let msg = format!(
                        "perimeter set to {:.6}, {:.6} r={} km",
                        disk_cfg.perimeter.latitude,
                        disk_cfg.perimeter.longitude,
                        disk_cfg.perimeter.radius_km
                    );
                    if let Err(e) = gclog(&pool.conn, "perimeter_update", &disk_cfg.worker.id, &msg) {
                        eprintln!("⚠️ Failed to write internal log: {}", e);
                    }
                }
            } else {
                success("Configuration updated.");
            }
        }

        // ---- PRINT CONFIG ----
        if *print_config {
            let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
            println!("📄 Current configuration:\n");
            println!("{}", yaml);
        }

        // ---- CHECK CONFIG ----
        if *check {
            cfg.perimeter()?;
            if cfg.worker.id.trim().is_empty() {
                return Err(AppError::Config("worker id must not be empty".to_string()));
            }
            success("Configuration OK.");
        }
    }

    Ok(())
}
