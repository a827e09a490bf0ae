use serde::Serialize;
use std::path::{Path, PathBuf};
use supplydesk_store::Database;

use crate::catalog::LocalCatalog;
use crate::config::Config;
use crate::desk::SupplierDesk;
use crate::{Error, Result};

const DB_FILE: &str = "supplydesk.db";
const CONFIG_FILE: &str = "config.toml";

/// Outcome of `Workspace::init`
#[derive(Debug, Clone, Serialize)]
pub struct InitResult {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub config_path: PathBuf,
    /// False when an existing config.toml was kept
    pub config_created: bool,
    pub supplier_count: usize,
}

/// A data directory holding the supplier database and its config
pub struct Workspace {
    data_dir: PathBuf,
    config: Config,
}

impl Workspace {
    /// Create the data directory, config and database. Safe to repeat:
    /// existing files are kept and the schema is only rebuilt on a version change.
    pub fn init(data_dir: &Path) -> Result<InitResult> {
        std::fs::create_dir_all(data_dir)?;

        let config_path = data_dir.join(CONFIG_FILE);
        let config_created = !config_path.exists();
        if config_created {
            Config::default().save_to(&config_path)?;
        }

        let db_path = data_dir.join(DB_FILE);
        let db = Database::open(&db_path)?;
        let supplier_count = db.count_suppliers()?;

        tracing::info!(path = %data_dir.display(), supplier_count, "workspace ready");

        Ok(InitResult {
            data_dir: data_dir.to_path_buf(),
            db_path,
            config_path,
            config_created,
            supplier_count,
        })
    }

    /// Open an initialized workspace.
    pub fn open(data_dir: &Path) -> Result<Self> {
        let db_path = data_dir.join(DB_FILE);
        if !db_path.exists() {
            return Err(Error::NotInitialized(format!(
                "no supplier database at {}",
                db_path.display()
            )));
        }

        let config = Config::load_from(&data_dir.join(CONFIG_FILE))?;

        Ok(Self {
            data_dir: data_dir.to_path_buf(),
            config,
        })
    }

    /// Connect to the database and fetch the current supplier snapshot.
    pub fn desk(&self) -> Result<SupplierDesk<LocalCatalog>> {
        let db = Database::open(&self.db_path())?;
        SupplierDesk::load(LocalCatalog::new(db), self.config.desk.operator.clone())
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE)
    }
}
