//! Snapshot of the Windows volume to WSL mount point mappings.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::{ROOTFS_PATH_VAR, UNC_PATH_VAR, VOLUME_PATH_SUFFIX};
use crate::grammar::has_unc_prefix;
use crate::types::Format;

/// A UNC share mounted inside WSL.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UncMount {
    /// Cleaned Windows prefix, e.g. `\\server\share`.
    pub prefix: String,
    /// Cleaned absolute Unix mount point.
    pub mount_point: String,
}

/// Windows volume matched for a Unix path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowsVolume<'a> {
    Drive(char),
    Unc(&'a str),
}

/// Immutable mapping table consulted by the translator.
///
/// Built once from the environment (or a JSON file) and shared read-only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MountTable {
    /// Uppercase drive letter to absolute Unix mount point.
    #[serde(default)]
    pub volumes: BTreeMap<String, String>,
    #[serde(default)]
    pub unc: Vec<UncMount>,
    /// Windows path of the WSL rootfs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rootfs: Option<String>,
}

static DRIVE_VARIABLE: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(&format!("^([A-Z]){}$", regex::escape(VOLUME_PATH_SUFFIX))).ok()
});

/// Drive letter named by a `<LETTER>_VOLUME_PATH` variable.
fn drive_letter_of(name: &str) -> Option<char> {
    let re = DRIVE_VARIABLE.as_ref()?;
    re.captures(name)?.get(1)?.as_str().chars().next()
}

/// Rest of `path` after `mount`, if `mount` is a prefix ending on an element boundary.
///
/// The returned rest starts with `sep` unless it is empty.
fn strip_mount<'a>(path: &'a str, mount: &str, sep: char, ignore_case: bool) -> Option<&'a str> {
    let head = path.get(..mount.len())?;
    let matched = if ignore_case {
        head.eq_ignore_ascii_case(mount)
    } else {
        head == mount
    };
    if !matched {
        return None;
    }
    if mount.ends_with(sep) {
        return Some(&path[mount.len() - sep.len_utf8()..]);
    }
    let rest = &path[mount.len()..];
    (rest.is_empty() || rest.starts_with(sep)).then_some(rest)
}

fn clean_mount_point(name: &str, value: &str) -> Option<String> {
    let mount_point = Format::Unix.clean(value.trim());
    if !mount_point.starts_with('/') {
        log::warn!("Ignoring {}: mount point {:?} is not absolute.", name, value);
        return None;
    }
    Some(mount_point)
}

impl MountTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    pub fn from_env() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build a table from `(name, value)` pairs shaped like environment variables.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut table = Self::new();
        for (name, value) in vars {
            let (name, value) = (name.as_ref(), value.as_ref());
            if let Some(letter) = drive_letter_of(name) {
                if let Some(mount_point) = clean_mount_point(name, value) {
                    table.volumes.insert(letter.to_string(), mount_point);
                }
            } else if name == UNC_PATH_VAR {
                table.unc = parse_unc_list(value);
            } else if name == ROOTFS_PATH_VAR && !value.is_empty() {
                table.rootfs = Some(Format::Windows.clean(value));
            }
        }
        log::debug!(
            "Loaded {} drive mount(s), {} UNC mount(s), rootfs: {:?}",
            table.volumes.len(),
            table.unc.len(),
            table.rootfs
        );
        table
    }

    pub fn with_volume(mut self, letter: char, mount_point: &str) -> Self {
        let name = format!("{}{}", letter.to_ascii_uppercase(), VOLUME_PATH_SUFFIX);
        if let Some(mount_point) = clean_mount_point(&name, mount_point) {
            self.volumes
                .insert(letter.to_ascii_uppercase().to_string(), mount_point);
        }
        self
    }

    pub fn with_unc(mut self, prefix: &str, mount_point: &str) -> Self {
        self.unc.extend(parse_unc_list(&format!("{prefix}={mount_point}")));
        self
    }

    pub fn with_rootfs(mut self, rootfs: &str) -> Self {
        self.rootfs = Some(Format::Windows.clean(rootfs));
        self
    }

    /// Re-apply the cleaning rules, dropping invalid entries. Used on tables
    /// read from files.
    pub fn normalized(self) -> Self {
        let mut table = Self::new();
        for (key, mount_point) in &self.volumes {
            match key.chars().next() {
                Some(letter) if key.len() == 1 && letter.is_ascii_alphabetic() => {
                    table = table.with_volume(letter, mount_point);
                }
                _ => log::warn!("Ignoring volume {:?}: not a drive letter.", key),
            }
        }
        for entry in &self.unc {
            table = table.with_unc(&entry.prefix, &entry.mount_point);
        }
        table.rootfs = self.rootfs.as_deref().map(|r| Format::Windows.clean(r));
        table
    }

    /// Mount point of a drive letter, in either case.
    pub fn volume(&self, letter: char) -> Option<&str> {
        self.volumes
            .get(&letter.to_ascii_uppercase().to_string())
            .map(String::as_str)
    }

    /// Longest UNC entry prefixing a cleaned Windows path, with the rest of the path.
    pub fn unc_for_windows<'a>(&self, path: &'a str) -> Option<(&UncMount, &'a str)> {
        self.unc
            .iter()
            .filter_map(|entry| strip_mount(path, &entry.prefix, '\\', true).map(|rest| (entry, rest)))
            .max_by_key(|(entry, _)| entry.prefix.len())
    }

    /// Longest mount point, drive or UNC, prefixing a cleaned absolute Unix path.
    pub fn volume_for_unix<'a>(&'a self, path: &'a str) -> Option<(WindowsVolume<'a>, &'a str)> {
        let drives = self.volumes.iter().filter_map(|(key, mount_point)| {
            let letter = key.chars().next()?;
            let rest = strip_mount(path, mount_point, '/', false)?;
            Some((mount_point.len(), WindowsVolume::Drive(letter), rest))
        });
        let shares = self.unc.iter().filter_map(|entry| {
            let rest = strip_mount(path, &entry.mount_point, '/', false)?;
            Some((entry.mount_point.len(), WindowsVolume::Unc(&entry.prefix), rest))
        });
        drives
            .chain(shares)
            .max_by_key(|(len, _, _)| *len)
            .map(|(_, volume, rest)| (volume, rest))
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Parse `\\h1\v1=/lp1;\\h2\v2=/lp2`.
fn parse_unc_list(value: &str) -> Vec<UncMount> {
    value
        .split(';')
        .filter(|pair| !pair.trim().is_empty())
        .filter_map(|pair| {
            let Some((prefix, mount_point)) = pair.split_once('=') else {
                log::warn!("Ignoring {} entry {:?}: expected PREFIX=MOUNT.", UNC_PATH_VAR, pair);
                return None;
            };
            let prefix = Format::Windows
                .clean(prefix.trim())
                .trim_end_matches('\\')
                .to_string();
            if !has_unc_prefix(&prefix) {
                log::warn!("Ignoring {} entry {:?}: not a UNC prefix.", UNC_PATH_VAR, pair);
                return None;
            }
            let mount_point = clean_mount_point(UNC_PATH_VAR, mount_point)?;
            Some(UncMount {
                prefix,
                mount_point,
            })
        })
        .collect()
}
