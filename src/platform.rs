// Wed Oct 14 2026 - Alex

use ahash::AHashMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

#[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
compile_error!("Unsupported platform: gamedata can only be resolved on Windows, Linux or macOS");

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
compile_error!("Unsupported pointer width: expected a 32-bit or 64-bit target");

#[cfg(not(any(feature = "csgo", feature = "dota")))]
compile_error!("Unknown engine type: enable the `csgo` or `dota` feature");

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows32,
    Windows64,
    Linux32,
    Linux64,
    Mac32,
    Mac64,
}

#[cfg(all(target_os = "windows", target_pointer_width = "32"))]
const CURRENT_PLATFORM: Platform = Platform::Windows32;
#[cfg(all(target_os = "windows", target_pointer_width = "64"))]
const CURRENT_PLATFORM: Platform = Platform::Windows64;
#[cfg(all(target_os = "linux", target_pointer_width = "32"))]
const CURRENT_PLATFORM: Platform = Platform::Linux32;
#[cfg(all(target_os = "linux", target_pointer_width = "64"))]
const CURRENT_PLATFORM: Platform = Platform::Linux64;
#[cfg(all(target_os = "macos", target_pointer_width = "32"))]
const CURRENT_PLATFORM: Platform = Platform::Mac32;
#[cfg(all(target_os = "macos", target_pointer_width = "64"))]
const CURRENT_PLATFORM: Platform = Platform::Mac64;

/// Selector vocabulary used by a given revision of the gamedata format.
///
/// The member names written by config authors changed over time, so the
/// scheme is versioned together with the documents it reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeyScheme {
    /// `windows`, `windows64`, `linux`, `linux64`, `mac`, `mac64`
    Legacy,
    /// `win32`, `win64`, `linuxsteamrt32`, `linuxsteamrt64`, `osx32`, `osx64`
    #[default]
    SteamRuntime,
}

static LEGACY_KEYS: Lazy<AHashMap<&'static str, Platform>> =
    Lazy::new(|| build_key_index(KeyScheme::Legacy));

static STEAM_RUNTIME_KEYS: Lazy<AHashMap<&'static str, Platform>> =
    Lazy::new(|| build_key_index(KeyScheme::SteamRuntime));

fn build_key_index(scheme: KeyScheme) -> AHashMap<&'static str, Platform> {
    Platform::ALL
        .iter()
        .map(|&platform| (platform.key(scheme), platform))
        .collect()
}

impl Platform {
    pub const ALL: [Platform; 6] = [
        Platform::Windows32,
        Platform::Windows64,
        Platform::Linux32,
        Platform::Linux64,
        Platform::Mac32,
        Platform::Mac64,
    ];

    pub const fn current() -> Self {
        CURRENT_PLATFORM
    }

    pub const fn key(self, scheme: KeyScheme) -> &'static str {
        match scheme {
            KeyScheme::Legacy => match self {
                Platform::Windows32 => "windows",
                Platform::Windows64 => "windows64",
                Platform::Linux32 => "linux",
                Platform::Linux64 => "linux64",
                Platform::Mac32 => "mac",
                Platform::Mac64 => "mac64",
            },
            KeyScheme::SteamRuntime => match self {
                Platform::Windows32 => "win32",
                Platform::Windows64 => "win64",
                Platform::Linux32 => "linuxsteamrt32",
                Platform::Linux64 => "linuxsteamrt64",
                Platform::Mac32 => "osx32",
                Platform::Mac64 => "osx64",
            },
        }
    }

    pub fn from_key(key: &str, scheme: KeyScheme) -> Option<Self> {
        let index = match scheme {
            KeyScheme::Legacy => &*LEGACY_KEYS,
            KeyScheme::SteamRuntime => &*STEAM_RUNTIME_KEYS,
        };
        index.get(key).copied()
    }

    pub const fn pointer_size(self) -> usize {
        match self {
            Platform::Windows32 | Platform::Linux32 | Platform::Mac32 => 4,
            Platform::Windows64 | Platform::Linux64 | Platform::Mac64 => 8,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows32 => "Windows (x86)",
            Platform::Windows64 => "Windows (x64)",
            Platform::Linux32 => "Linux (x86)",
            Platform::Linux64 => "Linux (x64)",
            Platform::Mac32 => "macOS (x86)",
            Platform::Mac64 => "macOS (x64)",
        };
        write!(f, "{}", name)
    }
}

#[cfg(feature = "csgo")]
const CURRENT_ENGINE: Engine = Engine::Csgo;
// `csgo` wins when both features are enabled, cargo features are additive.
#[cfg(all(feature = "dota", not(feature = "csgo")))]
const CURRENT_ENGINE: Engine = Engine::Dota;

/// Product whose gamedata section is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Engine {
    Csgo,
    Dota,
}

impl Engine {
    pub const ALL: [Engine; 2] = [Engine::Csgo, Engine::Dota];

    pub const fn current() -> Self {
        CURRENT_ENGINE
    }

    pub const fn key(self) -> &'static str {
        match self {
            Engine::Csgo => "csgo",
            Engine::Dota => "dota",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|engine| engine.key() == key)
    }
}

impl fmt::Display for Engine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}
