use anyhow::{Context, Result};
use serde::Deserialize;
use serde_saphyr as saphyr;
use std::fs;
use std::path::Path;

/// Hosting configuration for the REST binding. Engine behavior is not
/// configurable; these settings never reach the allotment pipeline.
#[derive(Debug, Deserialize)]
pub struct ServiceConfig {
  pub rest_port: Option<u16>,
  pub bind_host: Option<String>,
}

impl ServiceConfig {
  pub fn rest_port(&self) -> u16 {
    self.rest_port.unwrap_or(8080)
  }

  pub fn bind_host(&self) -> String {
    self
      .bind_host
      .clone()
      .unwrap_or_else(|| "0.0.0.0".to_string())
  }
}

pub fn read_config(path: &Path) -> Result<ServiceConfig> {
  let contents = fs::read_to_string(path)
    .with_context(|| format!("failed to read config file at {}", path.display()))?;
  saphyr::from_str(&contents)
    .with_context(|| format!("failed to parse service config at {}", path.display()))
}

#[cfg(test)]
mod tests {
  use super::read_config;
  use std::env;
  use std::fs;
  use std::path::PathBuf;
  use std::time::{SystemTime, UNIX_EPOCH};

  fn write_temp_config(contents: &str) -> PathBuf {
    let nanos = SystemTime::now()
      .duration_since(UNIX_EPOCH)
      .expect("clock went backwards")
      .as_nanos();
    let path = env::temp_dir().join(format!("allotment-config-{}.yaml", nanos));
    fs::write(&path, contents).expect("write temp yaml");
    path
  }

  #[test]
  fn missing_fields_fall_back_to_defaults() {
    let path = write_temp_config("{}\n");
    let result = read_config(&path);
    fs::remove_file(&path).expect("cleanup temp yaml");

    let config = result.expect("read config");
    assert_eq!(config.rest_port(), 8080);
    assert_eq!(config.bind_host(), "0.0.0.0");
  }

  #[test]
  fn explicit_fields_win() {
    let path = write_temp_config("rest_port: 9000\nbind_host: \"127.0.0.1\"\n");
    let result = read_config(&path);
    fs::remove_file(&path).expect("cleanup temp yaml");

    let config = result.expect("read config");
    assert_eq!(config.rest_port(), 9000);
    assert_eq!(config.bind_host(), "127.0.0.1");
  }
}
