//! Stable digest of a pool's schedule, emitted with pool edits so monitors can
//! spot retroactive changes without replaying history.

use bytemuck::{Pod, Zeroable};

use crate::state::VestingPool;

const DOMAIN: &[u8] = b"pool-vesting/schedule/v1";

#[derive(Clone, Copy, Pod, Zeroable)]
#[repr(C)]
struct ScheduleWords {
    pool_id: u64,
    cliff: i64,
    start: i64,
    duration: u64,
    initial_unlock_ratio: u64,
    revocable: u64,
}

/// blake3 over the schedule fields. The display name is excluded.
pub fn schedule_fingerprint(pool: &VestingPool) -> [u8; 32] {
    let words = ScheduleWords {
        pool_id: pool.pool_id,
        cliff: pool.cliff,
        start: pool.start,
        duration: pool.duration,
        initial_unlock_ratio: pool.initial_unlock_ratio as u64,
        revocable: pool.revocable as u64,
    };
    let mut hasher = blake3::Hasher::new();
    hasher.update(DOMAIN);
    hasher.update(bytemuck::bytes_of(&words));
    *hasher.finalize().as_bytes()
}
