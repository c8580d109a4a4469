//! # sheetstream-xlsx
//!
//! Forward-only XLSX worksheet writer.
//!
//! Rows and cells go straight to an [`ElementSink`] as they are added; nothing
//! but the pending merge declarations is kept in memory. [`SheetWriter`] is the
//! row/cell state machine, generic over the sink, and [`StreamingWorkbook`]
//! wraps it in a complete single-sheet package.

pub mod error;
pub mod options;
pub mod package;
pub mod registry;
pub mod sink;
pub mod styles;
pub mod writer;

pub use error::{XlsxError, XlsxResult};
pub use options::WriterOptions;
pub use package::{PackageSheetWriter, StreamingWorkbook};
pub use registry::MergeRegistry;
pub use sink::{ElementSink, XmlSink};
pub use styles::PaletteStylesheet;
pub use writer::{SheetWriter, WriterState};
