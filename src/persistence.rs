//! File helpers for the ~/.scamper/ data directory.
//!
//! Holds the score ledger (`scores.txt`) and the optional tuning override
//! file (`tuning.json`).

use std::fs;
use std::io;
use std::path::PathBuf;

/// Get the ~/.scamper/ directory path, creating it if needed.
pub fn data_dir() -> io::Result<PathBuf> {
    let home_dir = dirs::home_dir().ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::NotFound,
            "Could not determine home directory",
        )
    })?;
    let dir = home_dir.join(".scamper");
    fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Get the full path for a file in ~/.scamper/.
pub fn data_path(filename: &str) -> io::Result<PathBuf> {
    Ok(data_dir()?.join(filename))
}

/// Load a JSON file from ~/.scamper/, returning `T::default()` if missing or invalid.
pub fn load_json_or_default<T: Default + serde::de::DeserializeOwned>(filename: &str) -> T {
    let path = match data_path(filename) {
        Ok(p) => p,
        Err(_) => return T::default(),
    };
    match fs::read_to_string(&path) {
        Ok(json) => serde_json::from_str(&json).unwrap_or_default(),
        Err(_) => T::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_data_dir_exists() {
        let dir = data_dir().expect("data_dir should succeed");
        assert!(dir.exists());
        assert!(dir.ends_with(".scamper"));
    }

    #[test]
    fn test_data_path_format() {
        let path = data_path("scores.txt").expect("data_path should succeed");
        assert!(path.to_string_lossy().ends_with(".scamper/scores.txt"));
    }

    #[test]
    fn test_load_missing_returns_default() {
        let val: Vec<String> = load_json_or_default("nonexistent_test_file_98431.json");
        assert!(val.is_empty());
    }
}
