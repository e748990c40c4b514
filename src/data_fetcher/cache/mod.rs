pub mod eviction;
pub mod file_store;

pub use eviction::{
    EvictionReport, evict_older_than, evict_older_than_at, is_cache_temp_file,
    is_dated_cache_file,
};
pub use file_store::{CacheKey, CacheStore, FileCacheStore};
