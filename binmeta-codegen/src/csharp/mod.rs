//! C# code generation modules.

pub mod classes;
pub mod properties;
pub mod types;

pub use classes::ClassEmitter;
pub use properties::{Annotation, EmittedProperty, PropertyEmitter, to_identifier};
pub use types::TypeResolver;
