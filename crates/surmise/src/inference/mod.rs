//! Schema inference engine: type predicates, column classification and
//! schema building over a bounded row sample.

mod engine;
mod predicates;

pub use engine::{SAMPLE_SIZE, SchemaInference, classify_column, infer_schema};
pub use predicates::{
    BOOLEAN_LITERALS, DATE_FORMATS, is_boolean_literal, is_date, is_integer, is_number,
};
