//! Cell coordinates and values

mod address;
mod value;

pub use address::{cell_reference, column_to_letters, letters_to_column, CellRef};
pub use value::{is_xml_char, CellValue, ValueKind};
