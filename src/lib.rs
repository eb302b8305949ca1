//! A fixed-capacity ring buffer of timestamped byte messages, with
//! producer/consumer semantics and flat-file persistence.
//!
//! # Ring Buffer
//!
//! ```
//! use msg_ring::MsgRing;
//! use time::macros::datetime;
//!
//! let mut ring: MsgRing<4> = MsgRing::new();
//!
//! ring.produce(7, datetime!(2024-06-01 12:00:00 UTC));
//! ring.produce(8, datetime!(2024-06-01 12:00:01 UTC));
//!
//! assert_eq!(ring.consume().map(|m| m.payload()), Some(7));
//! ```
//!
//! Producing into a full ring overwrites the oldest message and hands it
//! back as the overflow warning:
//!
//! ```
//! use msg_ring::MsgRing;
//! use time::macros::datetime;
//!
//! let now = datetime!(2024-06-01 12:00:00 UTC);
//! let mut ring: MsgRing<2> = MsgRing::new();
//!
//! assert!(ring.produce(1, now).is_none());
//! assert!(ring.produce(2, now).is_none());
//! let evicted = ring.produce(3, now); // overwrites 1
//! assert_eq!(evicted.map(|m| m.payload()), Some(1));
//! ```
//!
//! # Persistence
//!
//! [`save`] writes one decimal payload per line, oldest to newest; [`load`]
//! reads them back, stamping each record with the load instant. Payloads
//! round-trip, timestamps do not.

#![warn(missing_docs)]

mod message;
mod persist;
mod ring;


pub use message::{Message, ParseLineError};
pub use persist::{PersistError, load, save};
pub use ring::{DEFAULT_CAPACITY, Iter, MsgRing};
