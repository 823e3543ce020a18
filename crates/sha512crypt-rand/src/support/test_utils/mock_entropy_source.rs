// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

/// What [`MockEntropySource::fill_bytes`] does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Real OS entropy.
    Passthrough,
    /// Every call fails with [`EntropyError::EntropyNotAvailable`].
    FailAlways,
    /// Every byte is set to the given value, so salts are predictable.
    Fixed(u8),
}

/// Entropy source with scripted output, counting how often it is asked.
pub struct MockEntropySource {
    behaviour: MockEntropySourceBehaviour,
    calls: Cell<usize>,
}

impl MockEntropySource {
    /// New mock in `behaviour` mode.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            behaviour,
            calls: Cell::new(0),
        }
    }

    /// Switch mode; the call count is kept.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Number of `fill_bytes` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.calls.get()
    }
}

impl EntropySource for MockEntropySource {
    fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), EntropyError> {
        self.calls.set(self.calls.get() + 1);

        match self.behaviour {
            MockEntropySourceBehaviour::Passthrough => SystemEntropySource {}.fill_bytes(dest),
            MockEntropySourceBehaviour::FailAlways => Err(EntropyError::EntropyNotAvailable),
            MockEntropySourceBehaviour::Fixed(byte) => {
                dest.fill(byte);
                Ok(())
            }
        }
    }
}
