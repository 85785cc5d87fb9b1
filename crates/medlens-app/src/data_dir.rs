// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Where MedLens keeps its config on disk.

use std::ffi::OsString;
use std::path::PathBuf;

const APP_DIR: &str = "medlens";
const CONFIG_FILE: &str = "config.json";

/// The MedLens data directory. Nothing is created on disk; `AppConfig::save`
/// creates it on first write.
pub fn data_dir() -> PathBuf {
    resolve(
        std::env::var_os("XDG_DATA_HOME"),
        std::env::var_os("HOME"),
    )
}

/// Default location of the persisted `AppConfig`.
pub fn config_path() -> PathBuf {
    data_dir().join(CONFIG_FILE)
}

/// `$XDG_DATA_HOME/medlens`, else `$HOME/.local/share/medlens`, else a
/// directory under the system temp dir. Empty variables count as unset.
fn resolve(xdg_data_home: Option<OsString>, home: Option<OsString>) -> PathBuf {
    let non_empty = |v: Option<OsString>| v.filter(|s| !s.is_empty()).map(PathBuf::from);

    let base = match (non_empty(xdg_data_home), non_empty(home)) {
        (Some(xdg), _) => xdg,
        (None, Some(home)) => home.join(".local").join("share"),
        (None, None) => std::env::temp_dir(),
    };
    base.join(APP_DIR)
}
