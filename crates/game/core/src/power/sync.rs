//! Sync hashing for desync detection.
//!
//! Every participant runs the same managers from the same ordered command
//! stream, so after any tick their power state must hash identically.

use sha2::{Digest, Sha256};

use super::SupportPowerManager;

impl SupportPowerManager {
    /// SHA-256 over the owner and every instance's timer and latch state.
    ///
    /// Instances are hashed in key order. Member identity is reduced to host
    /// ids, which are the only part of it every participant agrees on.
    pub fn sync_hash(&self) -> [u8; 32] {
        let mut hasher = Sha256::new();
        hasher.update(self.owner().0.to_le_bytes());

        for instance in self.powers() {
            let key = instance.key().as_str().as_bytes();
            hasher.update((key.len() as u32).to_le_bytes());
            hasher.update(key);
            hasher.update(instance.remaining_ticks().to_le_bytes());
            hasher.update(instance.total_ticks().to_le_bytes());
            hasher.update([
                instance.is_active() as u8,
                instance.is_disabled_forever() as u8,
                instance.notified_charging() as u8,
                instance.notified_ready() as u8,
            ]);
            hasher.update((instance.members().len() as u32).to_le_bytes());
            for member in instance.members() {
                hasher.update(member.host.0.to_le_bytes());
            }
        }

        hasher.finalize().into()
    }
}
