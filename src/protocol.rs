use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::error::Error;

/// Outer device-type tag distinguishing pointer devices from key devices
pub const POINTER: &str = "pointer";

/// Protocol-mandated key wrapping an element reference in an origin object
pub const ELEMENT_KEY: &str = "element-6066-11e4-a52e-4f735466cecf";

/// Default duration of a pointer move, in milliseconds
pub const DEFAULT_MOVE_DURATION_MS: u64 = 250;

/// Extra wire fields attached to an action (e.g. `button`, pen pressure)
///
/// Keys are normalized with [`wire_key`] and null values dropped before
/// the map is stored, so the stored form is always wire-ready.
pub type ExtraFields = serde_json::Map<String, serde_json::Value>;

/// Physical category of a simulated pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PointerKind {
    Mouse,
    Pen,
    Touch,
}
impl PointerKind {
    /// Wire name of this kind ("mouse", "pen" or "touch")
    pub fn as_str(&self) -> &'static str {
        match self {
            PointerKind::Mouse => "mouse",
            PointerKind::Pen => "pen",
            PointerKind::Touch => "touch",
        }
    }
}
impl fmt::Display for PointerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
impl FromStr for PointerKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "mouse" => Ok(PointerKind::Mouse),
            "pen" => Ok(PointerKind::Pen),
            "touch" => Ok(PointerKind::Touch),
            other => Err(Error::InvalidArgument(other.to_string())),
        }
    }
}

/// Opaque reference to a remote DOM element
///
/// The reference id is handed out by an element-location collaborator;
/// this crate only threads it through into move origins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ElementHandle {
    id: String,
}
impl ElementHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// The stable reference id string
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Reference frame for a pointer move's coordinates
///
/// Serializes to the protocol's origin vocabulary: the `"viewport"` and
/// `"pointer"` sentinels, or the element-reference envelope
/// `{ "element-6066-11e4-a52e-4f735466cecf": "<id>" }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// Absolute viewport coordinates (the remote endpoint's default)
    Viewport,
    /// Relative to the pointer's current position
    Pointer,
    /// Relative to the given element's in-view center point
    Element(String),
}
impl Origin {
    pub fn element(handle: &ElementHandle) -> Self {
        Origin::Element(handle.id().to_string())
    }
}
impl From<&ElementHandle> for Origin {
    fn from(handle: &ElementHandle) -> Self {
        Origin::element(handle)
    }
}
impl From<ElementHandle> for Origin {
    fn from(handle: ElementHandle) -> Self {
        Origin::Element(handle.id)
    }
}
impl Serialize for Origin {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Origin::Viewport => serializer.serialize_str("viewport"),
            Origin::Pointer => serializer.serialize_str("pointer"),
            Origin::Element(id) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(ELEMENT_KEY, id)?;
                map.end()
            }
        }
    }
}

/// One primitive timed event in a pointer gesture
///
/// Each variant carries only the fields valid for its kind, already in
/// wire form: integer coordinates and millisecond durations, extra-field
/// keys renamed to the protocol's camelCase vocabulary.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum PointerAction {
    #[serde(rename = "pointerMove")]
    Move {
        duration: u64,
        x: i64,
        y: i64,
        #[serde(skip_serializing_if = "Option::is_none")]
        origin: Option<Origin>,
        #[serde(flatten)]
        extra: ExtraFields,
    },
    #[serde(rename = "pointerDown")]
    Down {
        duration: u64,
        #[serde(flatten)]
        extra: ExtraFields,
    },
    #[serde(rename = "pointerUp")]
    Up { duration: u64, button: u64 },
    #[serde(rename = "pointerCancel")]
    Cancel,
    #[serde(rename = "pause")]
    Pause { duration: u64 },
}

/// `parameters` object of the device envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PointerParameters {
    #[serde(rename = "pointerType")]
    pub pointer_type: PointerKind,
}

/// Wire envelope for one device's full action sequence
///
/// Field order matches the protocol examples; the transport collaborator
/// embeds this as one entry of the request body's `actions` array.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DeviceSequence {
    #[serde(rename = "type")]
    pub device_type: &'static str,
    pub parameters: PointerParameters,
    pub id: String,
    pub actions: Vec<PointerAction>,
}

/// Rewrite a snake_case field name to the wire protocol's camelCase form
///
/// The first segment is kept verbatim, every later segment is
/// title-cased: `pointer_type` becomes `pointerType`. Names without an
/// underscore pass through unchanged. Total and lossless on well-formed
/// snake_case input.
pub fn wire_key(key: &str) -> String {
    let mut segments = key.split('_');
    let mut out = String::with_capacity(key.len());
    if let Some(first) = segments.next() {
        out.push_str(first);
    }
    for segment in segments {
        let mut chars = segment.chars();
        if let Some(head) = chars.next() {
            out.extend(head.to_uppercase());
            out.extend(chars.flat_map(|c| c.to_lowercase()));
        }
    }
    out
}

/// Normalize caller-supplied extras into wire form: drop null values,
/// rename keys with [`wire_key`]
pub(crate) fn normalize_extra(extra: ExtraFields) -> ExtraFields {
    extra
        .into_iter()
        .filter(|(_, value)| !value.is_null())
        .map(|(key, value)| (wire_key(&key), value))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn wire_key_joins_underscored_segments() {
        assert_eq!(wire_key("foo_bar"), "fooBar");
        assert_eq!(wire_key("pointer_type"), "pointerType");
        assert_eq!(wire_key("alt_shift_meta"), "altShiftMeta");
    }

    #[test]
    fn wire_key_leaves_plain_names_alone() {
        assert_eq!(wire_key("button"), "button");
        assert_eq!(wire_key("tiltX"), "tiltX");
        assert_eq!(wire_key(""), "");
    }

    #[test]
    fn normalize_extra_drops_null_values() {
        let mut extra = ExtraFields::new();
        extra.insert("pressure".to_string(), json!(0.5));
        extra.insert("twist".to_string(), Value::Null);
        let normalized = normalize_extra(extra);
        assert_eq!(normalized.len(), 1);
        assert_eq!(normalized["pressure"], json!(0.5));
    }

    #[test]
    fn origin_sentinels_serialize_as_strings() {
        assert_eq!(
            serde_json::to_value(Origin::Viewport).unwrap(),
            json!("viewport")
        );
        assert_eq!(
            serde_json::to_value(Origin::Pointer).unwrap(),
            json!("pointer")
        );
    }

    #[test]
    fn element_origin_serializes_as_reference_envelope() {
        let handle = ElementHandle::new("E1");
        let value = serde_json::to_value(Origin::element(&handle)).unwrap();
        assert_eq!(value, json!({ ELEMENT_KEY: "E1" }));
    }

    #[test]
    fn actions_carry_their_wire_tags() {
        let cancel = serde_json::to_value(PointerAction::Cancel).unwrap();
        assert_eq!(cancel, json!({ "type": "pointerCancel" }));

        let pause = serde_json::to_value(PointerAction::Pause { duration: 250 }).unwrap();
        assert_eq!(pause, json!({ "type": "pause", "duration": 250 }));

        let up = serde_json::to_value(PointerAction::Up {
            duration: 0,
            button: 2,
        })
        .unwrap();
        assert_eq!(up, json!({ "type": "pointerUp", "duration": 0, "button": 2 }));
    }

    #[test]
    fn move_extras_flatten_into_the_action_object() {
        let mut extra = ExtraFields::new();
        extra.insert("tiltX".to_string(), json!(15));
        let action = PointerAction::Move {
            duration: 250,
            x: 10,
            y: 20,
            origin: None,
            extra,
        };
        let value = serde_json::to_value(action).unwrap();
        assert_eq!(
            value,
            json!({ "type": "pointerMove", "duration": 250, "x": 10, "y": 20, "tiltX": 15 })
        );
    }

    #[test]
    fn pointer_kind_parses_wire_names_only() {
        assert_eq!("mouse".parse::<PointerKind>().unwrap(), PointerKind::Mouse);
        assert_eq!("pen".parse::<PointerKind>().unwrap(), PointerKind::Pen);
        assert_eq!("touch".parse::<PointerKind>().unwrap(), PointerKind::Touch);
        assert!("trackball".parse::<PointerKind>().is_err());
        assert!("Mouse".parse::<PointerKind>().is_err());
    }
}
