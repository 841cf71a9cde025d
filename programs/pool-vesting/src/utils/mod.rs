pub mod fingerprint;
pub mod schedule;
