use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::Store;
use crate::store::audit::ttlog;
use crate::ui::messages::{success, warning};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file (skipped in test mode)
///  - an empty work log, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.store.clone(), cli.test)?;
    let path = cfg.store_path();

    println!("⚙️  Initializing rWorklogger…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Work log    : {}", path.display());

    if path.exists() {
        success(format!("Work log already present at {}", path.display()));
    } else {
        Store::default().save(&path)?;
        success(format!("Work log initialized at {}", path.display()));

        if let Err(e) = ttlog(&path, "init", "", &format!("Work log initialized at {}", path.display())) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }

    println!("🎉 rWorklogger initialization completed!");
    Ok(())
}
