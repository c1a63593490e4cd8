// SPDX-License-Identifier: MPL-2.0
//! Mount-scoped cancellation tokens.
//!
//! A component mints a [`MountToken`] when it mounts and hands it to whatever
//! will call back into it later (a timer subscription, a decoder session).
//! Every callback presents the token again and the component checks it with
//! [`Lifecycle::is_current`] before touching its state. Unmounting bumps the
//! generation, so tokens minted before the unmount never match again, not even
//! after a later remount.

/// Opaque token identifying one mount of one component instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MountToken(u64);

/// Mount/unmount bookkeeping for a single component instance.
#[derive(Debug, Default)]
pub struct Lifecycle {
    generation: u64,
    mounted: bool,
}

impl Lifecycle {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the component as mounted and returns the token for this mount.
    ///
    /// Mounting an already mounted component starts a fresh mount: the
    /// previous token is invalidated.
    pub fn mount(&mut self) -> MountToken {
        self.generation = self.generation.wrapping_add(1);
        self.mounted = true;
        MountToken(self.generation)
    }

    /// Marks the component as unmounted. Returns whether it was mounted.
    pub fn unmount(&mut self) -> bool {
        let was_mounted = self.mounted;
        self.mounted = false;
        self.generation = self.generation.wrapping_add(1);
        was_mounted
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Returns true if `token` belongs to the current, still active mount.
    #[must_use]
    pub fn is_current(&self, token: MountToken) -> bool {
        self.mounted && token.0 == self.generation
    }

    /// Token of the active mount, if any.
    #[must_use]
    pub fn token(&self) -> Option<MountToken> {
        self.mounted.then_some(MountToken(self.generation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_lifecycle_is_unmounted() {
        let lifecycle = Lifecycle::new();
        assert!(!lifecycle.is_mounted());
        assert_eq!(lifecycle.token(), None);
    }

    #[test]
    fn mount_token_is_current_until_unmount() {
        let mut lifecycle = Lifecycle::new();
        let token = lifecycle.mount();
        assert!(lifecycle.is_current(token));
        assert_eq!(lifecycle.token(), Some(token));

        assert!(lifecycle.unmount());
        assert!(!lifecycle.is_current(token));
    }

    #[test]
    fn remount_does_not_revive_old_token() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.mount();
        lifecycle.unmount();
        let second = lifecycle.mount();

        assert_ne!(first, second);
        assert!(!lifecycle.is_current(first));
        assert!(lifecycle.is_current(second));
    }

    #[test]
    fn mounting_twice_invalidates_previous_token() {
        let mut lifecycle = Lifecycle::new();
        let first = lifecycle.mount();
        let second = lifecycle.mount();
        assert!(!lifecycle.is_current(first));
        assert!(lifecycle.is_current(second));
    }

    #[test]
    fn unmount_when_not_mounted_reports_false() {
        let mut lifecycle = Lifecycle::new();
        assert!(!lifecycle.unmount());
    }
}
