// Ambient configuration. The board directory (first CLI arg, else cwd) holds
// the default sound assets and receives exports; `<board_dir>/padboard.json`
// can redirect either directory. A missing or malformed file just means
// defaults.

use std::path::{Path, PathBuf};

use serde::Deserialize;

const CONFIG_FILE: &str = "padboard.json";
const DEFAULT_SOUNDS_DIR: &str = "sound";
const DEFAULT_EXPORT_DIR: &str = "export";

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    sounds_dir: Option<PathBuf>,
    export_dir: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct Config {
    pub sounds_dir: PathBuf,
    pub export_dir: PathBuf,
}

pub fn load(board_dir: &Path) -> Config {
    let raw = read_config_file(board_dir).unwrap_or_default();
    let resolve = |p: PathBuf| {
        if p.is_absolute() {
            p
        } else {
            board_dir.join(p)
        }
    };
    Config {
        sounds_dir: resolve(raw.sounds_dir.unwrap_or(DEFAULT_SOUNDS_DIR.into())),
        export_dir: resolve(raw.export_dir.unwrap_or(DEFAULT_EXPORT_DIR.into())),
    }
}

fn read_config_file(board_dir: &Path) -> Option<ConfigFile> {
    let path = board_dir.join(CONFIG_FILE);
    let data = std::fs::read_to_string(&path).ok()?;
    match serde_json::from_str(&data) {
        Ok(cfg) => Some(cfg),
        Err(e) => {
            eprintln!(
                "padboard: ignoring malformed {}: {e}",
                path.display()
            );
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_a_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = load(dir.path());
        assert_eq!(cfg.sounds_dir, dir.path().join("sound"));
        assert_eq!(cfg.export_dir, dir.path().join("export"));
    }

    #[test]
    fn config_file_overrides_relative_to_board_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("padboard.json"),
            r#"{ "sounds_dir": "clips", "export_dir": "/tmp/out" }"#,
        )
        .unwrap();
        let cfg = load(dir.path());
        assert_eq!(cfg.sounds_dir, dir.path().join("clips"));
        assert_eq!(cfg.export_dir, PathBuf::from("/tmp/out"));
    }

    #[test]
    fn malformed_config_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("padboard.json"), "{ not json").unwrap();
        let cfg = load(dir.path());
        assert_eq!(cfg.sounds_dir, dir.path().join("sound"));
    }
}
