//! # sovran-collection
//!
//! An insertion-ordered collection where several keys can point at the same value.
//!
//! `sovran-collection` behaves much like a map, except that one value can be
//! stored under many keys at once. It is meant for memoization and fast lookups
//! where a single computed result is reachable through several equivalent keys.
//!
//! ## Key Features
//!
//! - **Key aliasing**: `set(["a", "b"], value)` binds both keys to one slot
//! - **Ordered**: values and keys come back in insertion order
//! - **Fallback lookups**: `get` tries a list of candidate keys and falls back to a default
//! - **Explicit lifecycle**: `clear`, `clone`, `copy` and a fail-fast `destroy`
//! - **Normalized keys**: `"42"` and `42` are the same key
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_collection::{Collection, CollectionError};
//!
//! fn main() -> Result<(), CollectionError> {
//!     let mut collection = Collection::new();
//!
//!     // One slot per call, however many keys it binds
//!     collection.set("keyA", "value a".to_string())?;
//!     collection.set(["keyB", "keyB2"], "value b".to_string())?;
//!
//!     assert_eq!(collection.size()?, 2);
//!     assert_eq!(collection.keys()?.len(), 3);
//!     assert_eq!(collection.get("keyB2")?.map(String::as_str), Some("value b"));
//!     assert!(!collection.has("keyX")?);
//!
//!     for key in collection.keys()? {
//!         println!("{} -> {:?}", key, collection.get(&key)?);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Memoizing Under Several Keys
//!
//! ```rust
//! use sovran_collection::{Collection, CollectionError};
//!
//! fn area(cache: &mut Collection<f64>, width: u32, height: u32) -> Result<f64, CollectionError> {
//!     let keys = [format!("{}x{}", width, height), format!("{}x{}", height, width)];
//!     if let Some(value) = cache.get(&keys[..])? {
//!         return Ok(*value);
//!     }
//!     let value = f64::from(width) * f64::from(height);
//!     cache.set(keys, value)?;
//!     Ok(value)
//! }
//!
//! fn main() -> Result<(), CollectionError> {
//!     let mut cache = Collection::new();
//!     assert_eq!(area(&mut cache, 3, 4)?, 12.0);
//!     assert_eq!(area(&mut cache, 4, 3)?, 12.0);
//!     assert_eq!(cache.size()?, 1);
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_collection::{Collection, CollectionError, Key};
//!
//! let mut collection: Collection<i32> = Collection::with_default(0);
//! collection.destroy();
//!
//! match collection.size() {
//!     Ok(size) => println!("Size: {}", size),
//!     Err(CollectionError::Destroyed) => println!("Collection is gone"),
//!     Err(e) => println!("Other error: {}", e),
//! }
//!
//! // Floats are only keys when they hold an integer
//! match Key::try_from(2.5f64) {
//!     Ok(key) => println!("Key: {}", key),
//!     Err(CollectionError::InvalidKey(reason)) => println!("Not a key: {}", reason),
//!     Err(e) => println!("Other error: {}", e),
//! }
//! ```

mod clock;
mod collection;
mod error;
mod key;
mod truthy;

pub use clock::{now, Clock, MonotonicClock, WallClock};
pub use collection::Collection;
pub use error::CollectionError;
pub use key::{IntoKeys, Key};
pub use truthy::Truthy;
