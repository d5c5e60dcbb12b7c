//! Port implementations.
//!
//! - `live`: real clock and disk.
//! - `loopback`: an in-process stand-in for the remote specification service.

pub mod live;
pub mod loopback;
