//! Prelude module - common imports for sheetstream users
//!
//! ```rust
//! use sheetstream::prelude::*;
//! ```

pub use crate::{
    CellRef,
    // Cell types
    CellValue,
    // Sink types
    ElementSink,
    MergeRange,

    // Style types
    PaletteStyle,
    SheetWriter,
    StreamingWorkbook,
    StyleId,
    StylePalette,

    // Configuration
    WriterOptions,
    WriterState,
    // Error types
    XlsxError,
    XlsxResult,
    XmlSink,
};
