//! Background display refresh loop.

mod scheduler;


pub use scheduler::{sleep_until_boundary, RefreshScheduler};
