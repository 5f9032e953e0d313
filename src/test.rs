// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

use std::hash::Hasher;

/// A terrible hasher which squashes everything into three bits, so
/// bucket chains get long and collisions are the common case.
#[derive(Default, Clone, Copy)]
pub(crate) struct LolHasher {
    state: u64,
}

impl Hasher for LolHasher {
    fn write(&mut self, bytes: &[u8]) {
        for byte in bytes {
            self.state = self.state.wrapping_add(*byte as u64);
        }
    }

    fn finish(&self) -> u64 {
        self.state & 7
    }
}
