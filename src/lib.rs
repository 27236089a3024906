//! A string-keyed hash table with separate chaining and load-factor driven
//! growth.
//!
//! ```
//! use chain_table::HashTable;
//!
//! let mut table = HashTable::create(5, 0.75)?;
//! table.assign("abc", "value1")?;
//! table.assign("bca", "value2")?;
//!
//! // both keys land in bucket 4
//! assert_eq!(table.hash("abc"), table.hash("bca"));
//! assert_eq!(table.retrieve("abc"), Some(&"value1"));
//! assert_eq!(table.retrieve("missing"), None);
//! # Ok::<(), chain_table::TableError>(())
//! ```

pub mod chain;
pub mod config;
pub mod error;
mod table;

pub use chain::{Chain, Entry, Placement};
pub use config::{TableConfig, DEFAULT_CAPACITY, DEFAULT_LOAD_FACTOR};
pub use error::{Result, TableError};
pub use table::{bucket_index, Dump, HashTable};
