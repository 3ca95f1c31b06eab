//! Configuration loading and resolution.

use std::path::{Path, PathBuf};

use call_center::{CallCenterDesk, DeskResult};

pub const DATA_ENV: &str = "CALL_CENTER_DATA";
pub const MAX_LINE_BYTES_ENV: &str = "CALL_CENTER_MAX_LINE_BYTES";

/// Default upper bound on one protocol frame.
pub const DEFAULT_MAX_LINE_BYTES: usize = 1024 * 1024;

const LOCAL_DATA_FILE: &str = ".call-center/desk.json";

/// Resolve the desk fixture path.
///
/// `None` means no fixture was configured and the built-in data is used.
pub fn resolve_data_path(explicit: Option<&str>) -> Option<PathBuf> {
    data_path_from(
        explicit,
        std::env::var(DATA_ENV).ok().as_deref(),
        Path::new(LOCAL_DATA_FILE),
    )
}

fn data_path_from(explicit: Option<&str>, env: Option<&str>, local: &Path) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(PathBuf::from(path));
    }

    if let Some(path) = env.filter(|p| !p.trim().is_empty()) {
        return Some(PathBuf::from(path));
    }

    if local.exists() {
        return Some(local.to_path_buf());
    }

    None
}

/// Open the desk every CLI command serves: the resolved fixture, or the
/// built-in data when none is configured.
pub fn open_desk(explicit: Option<&str>) -> DeskResult<CallCenterDesk> {
    match resolve_data_path(explicit) {
        Some(path) => CallCenterDesk::open(&path),
        None => {
            tracing::info!("No desk fixture configured, using built-in data");
            Ok(CallCenterDesk::default())
        }
    }
}

/// Resolve the maximum frame size in bytes.
pub fn resolve_max_line_bytes(explicit: Option<usize>) -> usize {
    max_line_bytes_from(explicit, std::env::var(MAX_LINE_BYTES_ENV).ok().as_deref())
}

fn max_line_bytes_from(explicit: Option<usize>, env: Option<&str>) -> usize {
    if let Some(n) = explicit.filter(|n| *n > 0) {
        return n;
    }

    match env.map(|v| v.trim().parse::<usize>()) {
        Some(Ok(n)) if n > 0 => n,
        Some(_) => {
            tracing::warn!(
                "Ignoring invalid {MAX_LINE_BYTES_ENV}, using {DEFAULT_MAX_LINE_BYTES} bytes"
            );
            DEFAULT_MAX_LINE_BYTES
        }
        None => DEFAULT_MAX_LINE_BYTES,
    }
}
