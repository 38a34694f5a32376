//! DBML document emission

mod type_map;
mod writer;

pub use type_map::map_type_to_dbml;
pub use writer::render_document;
