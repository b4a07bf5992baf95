//! wd-pointer - WebDriver Pointer Action Encoder
//!
//! This library records a gesture for one simulated pointer (mouse, pen
//! or touch) as a sequence of primitive actions and encodes it into the
//! W3C WebDriver "Actions" wire envelope for a remote automation
//! endpoint. Transporting the payload and locating elements are left to
//! the embedding system.

pub mod device;
pub mod error;
pub mod protocol;

// Re-export commonly used types
pub use protocol::{
    DEFAULT_MOVE_DURATION_MS, DeviceSequence, ELEMENT_KEY, ElementHandle, ExtraFields, Origin,
    POINTER, PointerAction, PointerKind, PointerParameters, wire_key,
};

pub use device::PointerDevice;
pub use error::{Error, Result};
