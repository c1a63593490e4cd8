// SPDX-License-Identifier: MPL-2.0
//! The page's single outbound action: the consultation chat link.

use crate::error::{Error, Result};
use std::process::Command;

/// Open chat room taking consultation requests.
pub const CONSULTATION_URL: &str = "https://open.kakao.com/o/sFIMBROW";

/// Opens [`CONSULTATION_URL`] in the default browser.
///
/// Fire-and-forget: the opener process is spawned and never awaited.
pub fn open_consultation() -> Result<()> {
    open_url(CONSULTATION_URL)
}

fn open_url(url: &str) -> Result<()> {
    let mut command = opener_command(url);
    command
        .spawn()
        .map(drop)
        .map_err(|err| Error::Launch(format!("failed to open {url}: {err}")))
}

#[cfg(target_os = "windows")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("cmd");
    command.args(["/C", "start", "", url]);
    command
}

#[cfg(target_os = "macos")]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("open");
    command.arg(url);
    command
}

#[cfg(all(unix, not(target_os = "macos")))]
fn opener_command(url: &str) -> Command {
    let mut command = Command::new("xdg-open");
    command.arg(url);
    command
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consultation_url_is_https() {
        assert!(CONSULTATION_URL.starts_with("https://"));
    }

    #[test]
    fn opener_receives_the_url_as_last_argument() {
        let command = opener_command(CONSULTATION_URL);
        let last = command.get_args().last().map(|arg| arg.to_string_lossy().into_owned());
        assert_eq!(last.as_deref(), Some(CONSULTATION_URL));
    }
}
