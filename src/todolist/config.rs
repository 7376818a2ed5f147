use crate::error::{Result, TodoError};
use crate::model::validate_deadline_format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DEADLINE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Settings for a task list, stored as `config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaskListConfig {
    /// strftime pattern for deadlines in printed lines
    #[serde(default = "default_deadline_format")]
    pub deadline_format: String,

    /// Reject tasks whose deadline is earlier than the current local time
    #[serde(default)]
    pub reject_past_deadlines: bool,
}

fn default_deadline_format() -> String {
    DEFAULT_DEADLINE_FORMAT.to_string()
}

impl Default for TaskListConfig {
    fn default() -> Self {
        Self {
            deadline_format: default_deadline_format(),
            reject_past_deadlines: false,
        }
    }
}

impl TaskListConfig {
    /// Load config from the given directory, or return defaults if not found.
    ///
    /// Fails with `InvalidArgument` when `deadline_format` is not a valid strftime pattern.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            log::debug!("no config at {}, using defaults", config_path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TaskListConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        validate_deadline_format(&config.deadline_format)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(TodoError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(TodoError::Serialization)?;
        fs::write(config_path, content).map_err(TodoError::Io)?;
        Ok(())
    }
}
