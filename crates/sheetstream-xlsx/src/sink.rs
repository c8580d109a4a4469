//! Structured element sink
//!
//! The writer only ever talks to an [`ElementSink`]: open an element, write a
//! leaf, close the innermost open element. Elements must be closed in exact
//! reverse order of opening; the sink does not buffer or reorder anything.

use std::fmt;
use std::io::Write;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{XlsxError, XlsxResult};

/// Sink for nested, attributed elements written under strict stack discipline
pub trait ElementSink {
    /// Open an element. `namespaces` are `(prefix, uri)` pairs; an empty prefix
    /// declares the default namespace.
    fn open_element(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        namespaces: &[(&str, &str)],
    ) -> XlsxResult<()>;

    /// Write a complete element containing only text
    fn write_leaf(&mut self, tag: &str, attributes: &[(&str, &str)], content: &str)
        -> XlsxResult<()>;

    /// Write an element with no content
    fn write_empty(&mut self, tag: &str, attributes: &[(&str, &str)]) -> XlsxResult<()> {
        self.open_element(tag, attributes, &[])?;
        self.close_element()
    }

    /// Close the innermost open element
    fn close_element(&mut self) -> XlsxResult<()>;

    /// Number of currently open elements
    fn depth(&self) -> usize;
}

impl<S: ElementSink + ?Sized> ElementSink for &mut S {
    fn open_element(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        namespaces: &[(&str, &str)],
    ) -> XlsxResult<()> {
        (**self).open_element(tag, attributes, namespaces)
    }

    fn write_leaf(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        content: &str,
    ) -> XlsxResult<()> {
        (**self).write_leaf(tag, attributes, content)
    }

    fn write_empty(&mut self, tag: &str, attributes: &[(&str, &str)]) -> XlsxResult<()> {
        (**self).write_empty(tag, attributes)
    }

    fn close_element(&mut self) -> XlsxResult<()> {
        (**self).close_element()
    }

    fn depth(&self) -> usize {
        (**self).depth()
    }
}

/// [`ElementSink`] that serializes XML through `quick_xml`
///
/// Text and attribute values are escaped. The XML declaration is written on
/// creation.
pub struct XmlSink<W: Write> {
    writer: Writer<W>,
    open: Vec<String>,
}

impl<W: Write> fmt::Debug for XmlSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("XmlSink")
            .field("depth", &self.open.len())
            .field("open", &self.open)
            .finish_non_exhaustive()
    }
}

impl<W: Write> XmlSink<W> {
    /// Create a sink and write the XML declaration
    pub fn new(inner: W) -> XlsxResult<Self> {
        let mut writer = Writer::new(inner);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), Some("yes"))))?;
        Ok(Self {
            writer,
            open: Vec::new(),
        })
    }

    /// Get a reference to the underlying writer
    pub fn get_ref(&self) -> &W {
        self.writer.get_ref()
    }

    /// Release the underlying writer
    ///
    /// Fails if any element is still open, since the document would be cut off.
    pub fn into_inner(self) -> XlsxResult<W> {
        if !self.open.is_empty() {
            return Err(XlsxError::UnclosedElements(self.open.len()));
        }
        Ok(self.writer.into_inner())
    }

    fn start<'a>(
        tag: &'a str,
        attributes: &[(&str, &str)],
        namespaces: &[(&str, &str)],
    ) -> BytesStart<'a> {
        let mut start = BytesStart::new(tag);
        for (prefix, uri) in namespaces {
            if prefix.is_empty() {
                start.push_attribute(("xmlns", *uri));
            } else {
                let key = format!("xmlns:{}", prefix);
                start.push_attribute((key.as_str(), *uri));
            }
        }
        for &attribute in attributes {
            start.push_attribute(attribute);
        }
        start
    }
}

impl<W: Write> ElementSink for XmlSink<W> {
    fn open_element(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        namespaces: &[(&str, &str)],
    ) -> XlsxResult<()> {
        let start = Self::start(tag, attributes, namespaces);
        self.writer.write_event(Event::Start(start))?;
        self.open.push(tag.to_string());
        Ok(())
    }

    fn write_leaf(
        &mut self,
        tag: &str,
        attributes: &[(&str, &str)],
        content: &str,
    ) -> XlsxResult<()> {
        let start = Self::start(tag, attributes, &[]);
        self.writer.write_event(Event::Start(start))?;
        if !content.is_empty() {
            self.writer.write_event(Event::Text(BytesText::new(content)))?;
        }
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    fn write_empty(&mut self, tag: &str, attributes: &[(&str, &str)]) -> XlsxResult<()> {
        let start = Self::start(tag, attributes, &[]);
        self.writer.write_event(Event::Empty(start))?;
        Ok(())
    }

    fn close_element(&mut self) -> XlsxResult<()> {
        let tag = self.open.pop().ok_or(XlsxError::SinkUnderflow)?;
        self.writer.write_event(Event::End(BytesEnd::new(tag)))?;
        Ok(())
    }

    fn depth(&self) -> usize {
        self.open.len()
    }
}
