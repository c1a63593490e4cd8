// SPDX-License-Identifier: MPL-2.0
use crate::rotation::MountToken;

/// Identity of one binding of the playback surface to one clip.
///
/// Every decoder signal carries the session it was produced for. A signal is
/// acted upon only if its session is the sequencer's current binding, so
/// anything emitted by a replaced clip or a previous mount is inert.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PlaybackSession {
    mount: MountToken,
    serial: u64,
}

impl PlaybackSession {
    pub(crate) fn new(mount: MountToken, serial: u64) -> Self {
        Self { mount, serial }
    }

    #[must_use]
    pub fn mount(self) -> MountToken {
        self.mount
    }

    #[must_use]
    pub fn serial(self) -> u64 {
        self.serial
    }
}
