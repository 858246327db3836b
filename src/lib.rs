//! A key/value pair where either element may be absent.
//!
//! `Pair<K, V>` holds an optional key and an optional value and is totally ordered across all
//! four presence states: present keys sort before absent keys, ties are broken by value, and the
//! empty pair sorts last.
//!
//! # Examples
//!
//! ```
//! use pair::Pair;
//!
//! let mut pairs = vec![
//!     Pair::of_nullable(None, Some(1)),
//!     Pair::of_nullable(Some('b'), None),
//!     Pair::new('b', 2),
//!     Pair::of_nullable(None, None),
//!     Pair::new('a', 3),
//! ];
//! pairs.sort();
//!
//! let text: Vec<String> = pairs.iter().map(|pair| pair.to_string()).collect();
//! assert_eq!(
//!     text,
//!     vec![
//!         "Pair{key=a, value=3}",
//!         "Pair{key=b, value=2}",
//!         "Pair{key=b, value=null}",
//!         "Pair{key=null, value=1}",
//!         "Pair{key=null, value=null}",
//!     ],
//! );
//! ```

extern crate bincode;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;

mod entry;
mod error;
mod pair;

pub use crate::entry::MapEntry;
pub use crate::error::{Error, Result};
pub use crate::pair::Pair;
