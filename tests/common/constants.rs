//! Shared constants for end-to-end tests
//!
//! When fixture data changes, update only this file and `fixtures.rs`.

// ============================================================================
// Fixture songs
// ============================================================================

/// Number of songs in the default fixture catalog
pub const FIXTURE_SONG_COUNT: usize = 12;

/// "Grievous Lady" Future 11.3
pub const GRIEVOUS_LADY_ID: i64 = 101;

/// "Lilly" Past 3.5
pub const LILLY_ID: i64 = 104;

/// "Tempestissimo" Beyond 11.5, the highest constant in the fixtures
pub const TEMPESTISSIMO_ID: i64 = 105;

/// Not present in any fixture
pub const MISSING_SONG_ID: i64 = 9999;

// ============================================================================
// Fake data service
// ============================================================================

pub const FAKE_ANON_KEY: &str = "test-anon-key";

// ============================================================================
// Timeouts
// ============================================================================

/// Per-request timeout of the test client
pub const REQUEST_TIMEOUT_SECS: u64 = 10;

/// How long to wait for a spawned server to answer
pub const SERVER_READY_TIMEOUT_MS: u64 = 5000;

/// Delay between readiness polls
pub const SERVER_READY_POLL_INTERVAL_MS: u64 = 20;
