//! Best-effort launching of the platform image viewer.

use std::path::Path;
use std::process::Command;

use log::{debug, warn};

#[cfg(target_os = "macos")]
const OPEN_COMMAND: &[&str] = &["open"];

#[cfg(target_os = "windows")]
const OPEN_COMMAND: &[&str] = &["cmd", "/C", "start", ""];

#[cfg(not(any(target_os = "macos", target_os = "windows")))]
const OPEN_COMMAND: &[&str] = &["xdg-open"];

/// Opens `path` with the platform's default opener.
///
/// Display is a convenience step, not part of the report contract: in a
/// headless environment the spawn fails or the opener exits unhappily, and
/// either way the run has already produced its chart. Failures are therefore
/// logged at `warn` level and swallowed.
pub fn open(path: &Path) {
    let (program, args) = match OPEN_COMMAND.split_first() {
        Some(parts) => parts,
        None => return,
    };

    match Command::new(program).args(args).arg(path).spawn() {
        Ok(_) => debug!("Opened {} with {}", path.display(), program),
        Err(err) => warn!(
            "Could not open {} in an image viewer: {}",
            path.display(),
            err
        ),
    }
}
