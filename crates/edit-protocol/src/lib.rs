//! Value objects for the JSON editor tooling protocol.
//!
//! Each type in this crate models one record of the protocol: a widget
//! property value ([`PropertyValue`], with its nested enum-item record
//! [`PropertyValueEnumItem`]) and a suggested replacement value for a
//! linked-edit region ([`EditSuggestion`]). All of them are immutable after
//! construction, compare by value, and convert losslessly to and from a
//! `serde_json::Value` object through the [`JsonCodec`] trait.
//!
//! The transport framing around these objects (request/response dispatch,
//! sessions) lives elsewhere; this crate is only the payload layer.

pub mod codec;
pub mod error;
pub mod types;

pub use codec::json::{decode_array, decode_object, encode_array, JsonCodec};
pub use error::ProtocolError;
pub use types::{EditSuggestion, PropertyValue, PropertyValueEnumItem};
