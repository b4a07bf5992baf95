use tracing::{debug, trace};

use crate::error::Result;
use crate::protocol::*;

/// One simulated pointer and its recorded action sequence
///
/// This struct provides a high-level API for recording a pointer gesture
/// as the ordered list of primitive actions the remote endpoint expects.
/// Actions are normalized as they are appended; [`encode`](Self::encode)
/// wraps the log in the device envelope without further transformation.
///
/// A device is owned by one gesture-recording context at a time; for
/// multiple simultaneous pointers, create one device per pointer.
#[derive(Debug)]
pub struct PointerDevice {
    kind: PointerKind,
    name: String,
    actions: Vec<PointerAction>,
}
impl PointerDevice {
    /// Create a device from a wire-level kind string
    ///
    /// The kind must be one of `"mouse"`, `"pen"` or `"touch"`; anything
    /// else fails with [`Error::InvalidArgument`](crate::Error) carrying
    /// the offending value. This is the only fallible operation on the
    /// device.
    pub fn new(kind: &str, name: impl Into<String>) -> Result<Self> {
        let kind: PointerKind = kind.parse()?;
        Ok(Self::named(kind, name))
    }

    /// Create a device for a known kind, with a generated unique name
    pub fn with_kind(kind: PointerKind) -> Self {
        Self::named(kind, ulid::Ulid::new().to_string())
    }

    /// Create a device for a known kind and name
    pub fn named(kind: PointerKind, name: impl Into<String>) -> Self {
        let name = name.into();
        debug!("Created {} pointer device '{}'", kind, name);
        Self {
            kind,
            name,
            actions: Vec::new(),
        }
    }

    /// The pointer's physical category
    pub fn kind(&self) -> PointerKind {
        self.kind
    }

    /// The device id used in the wire envelope
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The recorded actions, in append order
    pub fn actions(&self) -> &[PointerAction] {
        &self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Record a pointer move
    ///
    /// Coordinates are truncated to whole wire integers. When `origin` is
    /// `None` the field is omitted and the remote endpoint applies its
    /// viewport default. Extra fields are normalized: snake_case keys are
    /// renamed to the wire's camelCase form and null values are dropped.
    pub fn pointer_move(
        &mut self,
        duration_ms: u64,
        x: f64,
        y: f64,
        origin: Option<Origin>,
        extra: ExtraFields,
    ) {
        self.push(PointerAction::Move {
            duration: duration_ms,
            x: x as i64,
            y: y as i64,
            origin,
            extra: normalize_extra(extra),
        });
    }

    /// Convenience method to move to viewport coordinates with the
    /// default duration
    pub fn move_to(&mut self, x: f64, y: f64) {
        self.pointer_move(DEFAULT_MOVE_DURATION_MS, x, y, None, ExtraFields::new());
    }

    /// Convenience method to move onto an element with the default
    /// duration
    pub fn move_to_element(&mut self, handle: &ElementHandle) {
        self.pointer_move(
            DEFAULT_MOVE_DURATION_MS,
            0.0,
            0.0,
            Some(Origin::element(handle)),
            ExtraFields::new(),
        );
    }

    /// Record a button press
    ///
    /// Duration is fixed at 0. The button code and any device-specific
    /// fields (pen pressure, tilt) travel in `extra`, normalized the same
    /// way as move extras.
    pub fn pointer_down(&mut self, extra: ExtraFields) {
        self.push(PointerAction::Down {
            duration: 0,
            extra: normalize_extra(extra),
        });
    }

    /// Convenience method to press a plain button
    pub fn press(&mut self, button: u64) {
        let mut extra = ExtraFields::new();
        extra.insert("button".to_string(), button.into());
        self.pointer_down(extra);
    }

    /// Record a button release; duration is fixed at 0
    pub fn pointer_up(&mut self, button: u64) {
        self.push(PointerAction::Up {
            duration: 0,
            button,
        });
    }

    /// Record a cancellation of the in-flight pointer interaction
    pub fn pointer_cancel(&mut self) {
        self.push(PointerAction::Cancel);
    }

    /// Record a pause of the given duration in seconds
    ///
    /// The wire carries whole milliseconds; fractional milliseconds are
    /// truncated, not rounded, so `pause(0.0016)` records 1 ms.
    pub fn pause(&mut self, seconds: f64) {
        self.push(PointerAction::Pause {
            duration: (seconds * 1000.0) as u64,
        });
    }

    /// Encode the device and its action log into the wire envelope
    ///
    /// Pure read: calling this repeatedly without intervening appends
    /// yields structurally identical envelopes.
    pub fn encode(&self) -> DeviceSequence {
        DeviceSequence {
            device_type: POINTER,
            parameters: PointerParameters {
                pointer_type: self.kind,
            },
            id: self.name.clone(),
            actions: self.actions.clone(),
        }
    }

    fn push(&mut self, action: PointerAction) {
        trace!("Device '{}' queued {:?}", self.name, action);
        self.actions.push(action);
    }
}
