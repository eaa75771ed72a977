//! Device control boundary.
//!
//! Fixed-layout parameter blocks and request codes for the wscons device
//! family, plus safe wrappers around the raw ioctl calls.

pub mod ioctl;
pub mod wsio;
