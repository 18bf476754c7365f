mod field_value;
pub mod table_ops;

pub use field_value::FieldValue;
