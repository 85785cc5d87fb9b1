// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

use std::io::Write;
use std::path::Path;

use medlens_core::AppConfig;
use medlens_core::error::Result;

use crate::cli::ConfigAction;

pub fn run(config_path: &Path, action: ConfigAction, out: &mut dyn Write) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = AppConfig::load_or_default(config_path);
            writeln!(out, "{}", serde_json::to_string_pretty(&config)?)?;
        }
        ConfigAction::Path => {
            writeln!(out, "{}", config_path.display())?;
        }
        ConfigAction::Reset => {
            AppConfig::default().save(config_path)?;
            writeln!(out, "config reset: {}", config_path.display())?;
        }
    }
    Ok(())
}
