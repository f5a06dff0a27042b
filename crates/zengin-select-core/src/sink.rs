//! JSON output

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{Result, ZenginError};

/// Serialize to JSON (compact unless `pretty`)
pub fn to_json<T: Serialize>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}

/// Serialize and write to `path`, creating parent directories
pub fn write_json<T: Serialize>(path: &Path, value: &T, pretty: bool) -> Result<()> {
    let json = to_json(value, pretty)?;

    let sink_error = |e: std::io::Error| ZenginError::SinkWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(sink_error)?;
    }
    fs::write(path, json).map_err(sink_error)?;

    Ok(())
}
