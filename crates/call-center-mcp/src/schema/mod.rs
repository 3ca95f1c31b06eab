//! JSON-Schema-like descriptors for tool inputs, and their validator.

pub mod node;
pub mod validate;

pub use node::{SchemaNode, SchemaType};
pub use validate::{validate, ValidationError};
