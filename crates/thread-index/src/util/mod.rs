//! Utility modules for the conversation-index codec.

pub mod filetime;

pub use filetime::{ticks_to_unix_nanos, unix_nanos_to_ticks, Filetime};
