//! Scan engine: the public entry points and the caller-owned scan session.
//!
//! - `clock.rs`: injectable report timestamps
//! - `scanner.rs`: scan / reclassify / resolve over the loaded registry
//! - `session.rs`: debounce, unchanged-text skip, and rescan coalescing

pub mod clock;
pub mod scanner;
pub mod session;

pub use clock::{Clock, FixedClock, SystemClock};
pub use scanner::Scanner;
pub use session::{EditOutcome, ScanCompletion, ScanSession, ScanTicket, SessionStats};
