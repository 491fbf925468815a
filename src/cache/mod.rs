//! Small caching primitives shared by the song store and the video lookup.

mod clock;
mod expiring_cache;
mod storage;

pub use clock::{Clock, ManualClock, SystemClock};
pub use expiring_cache::{is_fresh, ExpiringCache};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
