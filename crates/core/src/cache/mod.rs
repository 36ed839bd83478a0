mod error;
mod keys;
mod manager;
mod serialization;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{all_key, id_key};
pub use manager::{EntityCacheManager, DEFAULT_TTL};
pub use serialization::{deserialize_value, serialize_value, SerializationError};
pub use traits::CacheBackend;
