use anyhow::{Result, anyhow};
use std::path::PathBuf;

pub fn get_clipbtn_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| anyhow!("Could not find home directory"))?;
    Ok(home.join(".clipbtn"))
}

pub fn get_config_path() -> Result<PathBuf> {
    let clipbtn_dir = get_clipbtn_dir()?;
    Ok(clipbtn_dir.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_clipbtn_dir() {
        let dir = get_clipbtn_dir().unwrap();
        assert!(dir.to_string_lossy().contains(".clipbtn"));
    }

    #[test]
    fn test_get_config_path() {
        let path = get_config_path().unwrap();
        assert!(path.to_string_lossy().contains(".clipbtn"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }
}
