//! Port traits defining external boundaries.
//!
//! Each trait represents a boundary between the contract core and
//! something outside it (time, files, the remote service). Implementations
//! live in `src/adapters/`.

pub mod clock;
pub mod filesystem;
pub mod transport;

pub use clock::Clock;
pub use filesystem::FileSystem;
pub use transport::{Method, Transport, TransportFuture, TransportRequest, TransportResponse};
