// Persistent configuration: CPU, clock, SD card directory, display.
// Stored as JSON in <config_dir>/cerberus/config.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::machine::state::{ArchMode, ClockSpeed};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// CPU selected at power-on.
    pub arch: ArchMode,
    pub speed: ClockSpeed,
    /// Host directory standing in for the SD card.
    /// None = <config_dir>/cerberus/sd.
    pub storage_dir: Option<PathBuf>,
    /// Draw each glyph row twice (320x480).
    pub scanline_doubling: bool,
    /// Raw binary loaded at 0x0205 and run on start.
    pub autoload: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arch: ArchMode::Mos6502,
            speed: ClockSpeed::Fast,
            storage_dir: None,
            scanline_doubling: true,
            autoload: None,
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        config_dir().map(|d| d.join("config.json"))
    }

    /// Load config from disk, or return defaults if not found / invalid.
    pub fn load() -> Self {
        let path = match Self::config_path() {
            Some(p) => p,
            None => return Self::default(),
        };

        if !path.exists() {
            return Self::default();
        }

        match std::fs::read_to_string(&path) {
            Ok(content) => Self::parse_json(&content),
            Err(e) => {
                log::warn!("Cannot read config: {e}");
                Self::default()
            }
        }
    }

    /// Save config to disk.
    pub fn save(&self) {
        let path = match Self::config_path() {
            Some(p) => p,
            None => return,
        };

        if let Some(parent) = path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }

        let json = match serde_json::to_string_pretty(self) {
            Ok(j) => j,
            Err(e) => {
                log::warn!("Cannot encode config: {e}");
                return;
            }
        };
        if let Err(e) = std::fs::write(&path, json + "\n") {
            log::warn!("Cannot save config: {e}");
        } else {
            log::info!("Config saved to {}", path.display());
        }
    }

    /// Unknown fields are ignored, missing ones get defaults. Anything
    /// unparseable falls back to defaults entirely.
    fn parse_json(s: &str) -> Self {
        match serde_json::from_str(s) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Ignoring malformed config: {e}");
                Self::default()
            }
        }
    }

    /// SD card directory, explicit or default.
    pub fn storage_dir(&self) -> Option<PathBuf> {
        self.storage_dir
            .clone()
            .or_else(|| config_dir().map(|d| d.join("sd")))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
//  Command line
// ─────────────────────────────────────────────────────────────────────────────

pub const USAGE: &str = "\
usage: cerberus [options] [program.bin]

  -6502            start with the 6502 selected
  -z80             start with the Z80 selected
  --fast           8 MHz clock
  --slow           4 MHz clock
  --sd DIR         directory used as the SD card
  --no-double      320x240 raster without scanline doubling
  --save-config    write the resulting settings to the config file
  program.bin      load at 0x0205 and run";

/// What the command line asked for. Everything optional so it can be
/// laid over the stored config.
#[derive(Debug, Default, PartialEq)]
pub struct Args {
    pub arch: Option<ArchMode>,
    pub speed: Option<ClockSpeed>,
    pub storage_dir: Option<PathBuf>,
    pub no_double: bool,
    pub autoload: Option<PathBuf>,
    pub save_config: bool,
    pub help: bool,
}

impl Args {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self, String> {
        let mut out = Self::default();
        let mut it = args.into_iter();
        while let Some(arg) = it.next() {
            match arg.as_str() {
                "-6502" => out.arch = Some(ArchMode::Mos6502),
                "-z80" => out.arch = Some(ArchMode::Z80),
                "--fast" => out.speed = Some(ClockSpeed::Fast),
                "--slow" => out.speed = Some(ClockSpeed::Slow),
                "--no-double" => out.no_double = true,
                "--save-config" => out.save_config = true,
                "-h" | "--help" => out.help = true,
                "--sd" => {
                    let dir = it.next().ok_or("--sd needs a directory")?;
                    out.storage_dir = Some(PathBuf::from(dir));
                }
                s if s.starts_with('-') => return Err(format!("unknown option {s}")),
                _ => out.autoload = Some(PathBuf::from(arg)),
            }
        }
        Ok(out)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(a) = self.arch {
            config.arch = a;
        }
        if let Some(s) = self.speed {
            config.speed = s;
        }
        if let Some(d) = &self.storage_dir {
            config.storage_dir = Some(d.clone());
        }
        if self.no_double {
            config.scanline_doubling = false;
        }
        if let Some(p) = &self.autoload {
            config.autoload = Some(p.clone());
        }
    }
}

/// Get the application config directory.
fn config_dir() -> Option<PathBuf> {
    // macOS:   ~/Library/Application Support/cerberus/
    // Linux:   ~/.config/cerberus/
    // Windows: %APPDATA%/cerberus/

    #[cfg(target_os = "macos")]
    {
        let home = std::env::var("HOME").ok()?;
        Some(
            PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("cerberus"),
        )
    }

    #[cfg(target_os = "windows")]
    {
        let appdata = std::env::var("APPDATA").ok()?;
        Some(PathBuf::from(appdata).join("cerberus"))
    }

    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    {
        let home = std::env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".config").join("cerberus"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn missing_fields_get_defaults() {
        let c = Config::parse_json(r#"{ "arch": "z80", "bogus": 1 }"#);
        assert_eq!(c.arch, ArchMode::Z80);
        assert_eq!(c.speed, ClockSpeed::Fast);
        assert!(c.scanline_doubling);
        assert_eq!(c.storage_dir, None);
    }

    #[test]
    fn malformed_json_is_ignored() {
        assert_eq!(Config::parse_json("{ not json"), Config::default());
        assert_eq!(Config::parse_json(r#"{ "arch": "8080" }"#), Config::default());
    }

    #[test]
    fn json_roundtrip() {
        let c = Config {
            arch: ArchMode::Z80,
            speed: ClockSpeed::Slow,
            storage_dir: Some(PathBuf::from("/tmp/sd")),
            scanline_doubling: false,
            autoload: None,
        };
        let json = serde_json::to_string(&c).unwrap();
        assert!(json.contains(r#""arch":"z80""#));
        assert_eq!(Config::parse_json(&json), c);
    }

    #[test]
    fn command_line_overrides() {
        let a = args(&["-z80", "--slow", "--sd", "cards/a", "--no-double", "game.bin"]).unwrap();
        let mut c = Config::default();
        a.apply(&mut c);
        assert_eq!(c.arch, ArchMode::Z80);
        assert_eq!(c.speed, ClockSpeed::Slow);
        assert_eq!(c.storage_dir, Some(PathBuf::from("cards/a")));
        assert!(!c.scanline_doubling);
        assert_eq!(c.autoload, Some(PathBuf::from("game.bin")));
    }

    #[test]
    fn empty_command_line_changes_nothing() {
        let mut c = Config::default();
        args(&[]).unwrap().apply(&mut c);
        assert_eq!(c, Config::default());
    }

    #[test]
    fn bad_options() {
        assert!(args(&["--sd"]).is_err());
        assert!(args(&["--turbo"]).is_err());
        assert!(args(&["--help"]).unwrap().help);
    }
}
