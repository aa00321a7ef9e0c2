//! Record types of the editor tooling protocol.
//!
//! All types here are plain immutable data holders: public fields, value
//! equality, and a hash consistent with equality. JSON conversion lives in
//! [`crate::codec::json`].

use std::hash::{Hash, Hasher};

/// A value of a property of a UI widget.
///
/// The schema models this as six independently optional fields rather than a
/// tagged union, and does not guarantee mutual exclusivity: any subset of
/// fields may be present at once. That looseness is part of the wire
/// contract, so no constructor here rejects multi-field values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PropertyValue {
    pub bool_value: Option<bool>,
    pub double_value: Option<f64>,
    pub int_value: Option<i32>,
    pub string_value: Option<String>,
    pub enum_value: Option<PropertyValueEnumItem>,
    /// A free-form expression, used as the value as is.
    pub expression: Option<String>,
}

impl PropertyValue {
    /// Builds a value from all fields positionally.
    pub fn new(
        bool_value: Option<bool>,
        double_value: Option<f64>,
        int_value: Option<i32>,
        string_value: Option<String>,
        enum_value: Option<PropertyValueEnumItem>,
        expression: Option<String>,
    ) -> Self {
        PropertyValue {
            bool_value,
            double_value,
            int_value,
            string_value,
            enum_value,
            expression,
        }
    }

    pub fn bool_value(value: bool) -> Self {
        PropertyValue {
            bool_value: Some(value),
            ..Default::default()
        }
    }

    pub fn double_value(value: f64) -> Self {
        PropertyValue {
            double_value: Some(value),
            ..Default::default()
        }
    }

    pub fn int_value(value: i32) -> Self {
        PropertyValue {
            int_value: Some(value),
            ..Default::default()
        }
    }

    pub fn string_value(value: impl Into<String>) -> Self {
        PropertyValue {
            string_value: Some(value.into()),
            ..Default::default()
        }
    }

    pub fn enum_value(item: PropertyValueEnumItem) -> Self {
        PropertyValue {
            enum_value: Some(item),
            ..Default::default()
        }
    }

    pub fn expression(expression: impl Into<String>) -> Self {
        PropertyValue {
            expression: Some(expression.into()),
            ..Default::default()
        }
    }
}

// Manual impl because of the f64 field: hash the bit pattern, with -0.0
// normalised to 0.0 so that equal values always hash alike. NaN is never
// equal to anything, so it cannot break consistency.
impl Hash for PropertyValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bool_value.hash(state);
        self.double_value.map(canonical_f64_bits).hash(state);
        self.int_value.hash(state);
        self.string_value.hash(state);
        self.enum_value.hash(state);
        self.expression.hash(state);
    }
}

fn canonical_f64_bits(value: f64) -> u64 {
    if value == 0.0 {
        0.0f64.to_bits()
    } else {
        value.to_bits()
    }
}

/// One item of an enumeration that a [`PropertyValue`] may reference.
///
/// Owned exclusively by the holding value; never shared between instances.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PropertyValueEnumItem {
    /// URI of the library defining the enumeration.
    pub library_uri: String,
    /// Name of the class or enum declaring the item.
    pub class_name: String,
    /// Name of the item itself.
    pub name: String,
    /// Documentation to show to the user, if any.
    pub documentation: Option<String>,
}

impl PropertyValueEnumItem {
    pub fn new(
        library_uri: impl Into<String>,
        class_name: impl Into<String>,
        name: impl Into<String>,
        documentation: Option<String>,
    ) -> Self {
        PropertyValueEnumItem {
            library_uri: library_uri.into(),
            class_name: class_name.into(),
            name: name.into(),
            documentation,
        }
    }
}

/// A suggestion of a value that could replace all of the regions in a
/// linked-edit group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EditSuggestion {
    /// The replacement value.
    pub value: String,
    /// The kind of value being proposed.
    pub kind: String,
}

impl EditSuggestion {
    pub fn new(value: impl Into<String>, kind: impl Into<String>) -> Self {
        EditSuggestion {
            value: value.into(),
            kind: kind.into(),
        }
    }
}
