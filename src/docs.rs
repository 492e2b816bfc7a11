//! Schema metadata for documentation generators
//!
//! Every public data type describes itself: a summary, one entry per wire
//! field, and a canonical example document.

use serde::Serialize;
use serde_json::Value;

/// Description of a single wire field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FieldDoc {
    /// Wire (camelCase) field name
    pub name: &'static str,
    /// Whether the field must be present
    pub required: bool,
    pub description: &'static str,
}

impl FieldDoc {
    pub const fn required(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: true,
            description,
        }
    }

    pub const fn optional(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            required: false,
            description,
        }
    }
}

/// Schema metadata attached to a data type.
pub trait Documented {
    /// Type name as published in the API definition
    const NAME: &'static str;

    fn description() -> &'static str;

    /// Field descriptions. Scalar wrappers have none.
    fn fields() -> &'static [FieldDoc] {
        &[]
    }

    /// A valid example in canonical JSON form
    fn example() -> Value;
}

/// Serializable rendering of a type's metadata.
#[derive(Debug, Clone, Serialize)]
pub struct TypeDoc {
    pub name: &'static str,
    pub description: &'static str,
    pub fields: &'static [FieldDoc],
    pub example: Value,
}

impl TypeDoc {
    pub fn of<T: Documented>() -> Self {
        Self {
            name: T::NAME,
            description: T::description(),
            fields: T::fields(),
            example: T::example(),
        }
    }
}
