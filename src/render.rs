//! HTML output writer.
//!
//! A thin growable buffer with tag helpers. The dialect trusts its own
//! inline output, so nothing written here is escaped.

/// HTML output writer with a pre-allocated buffer.
///
/// # Example
/// ```
/// use sitemark::HtmlWriter;
///
/// let mut writer = HtmlWriter::with_capacity_for(16);
/// writer.open_tag("p");
/// writer.write_str("Hello");
/// writer.close_tag("p");
///
/// assert_eq!(writer.into_string(), "<p>Hello</p>");
/// ```
#[derive(Debug, Default)]
pub struct HtmlWriter {
    out: String,
}

impl HtmlWriter {
    /// Create a new writer with default capacity.
    #[inline]
    pub fn new() -> Self {
        Self {
            out: String::with_capacity(1024),
        }
    }

    /// Create with pre-allocated capacity based on expected input size.
    ///
    /// Output is usually a bit larger than the source; reserve a quarter extra.
    #[inline]
    pub fn with_capacity_for(input_len: usize) -> Self {
        Self {
            out: String::with_capacity(input_len + input_len / 4),
        }
    }

    /// Write a string verbatim.
    #[inline]
    pub fn write_str(&mut self, s: &str) {
        self.out.push_str(s);
    }

    /// Write `<tag>`.
    #[inline]
    pub fn open_tag(&mut self, tag: &str) {
        self.out.push('<');
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write `<tag attrs>`.
    #[inline]
    pub fn open_tag_with<K, V>(&mut self, tag: &str, attributes: &[(K, V)])
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_attributes(attributes);
        self.out.push('>');
    }

    /// Write `<tag attrs />`.
    #[inline]
    pub fn void_tag<K, V>(&mut self, tag: &str, attributes: &[(K, V)])
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        self.out.push('<');
        self.out.push_str(tag);
        self.write_attributes(attributes);
        self.out.push_str(" />");
    }

    /// Write `</tag>`.
    #[inline]
    pub fn close_tag(&mut self, tag: &str) {
        self.out.push_str("</");
        self.out.push_str(tag);
        self.out.push('>');
    }

    /// Write ` key="value"` for each pair, in order.
    pub fn write_attributes<K, V>(&mut self, attributes: &[(K, V)])
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        for (key, value) in attributes {
            self.out.push(' ');
            self.out.push_str(key.as_ref());
            self.out.push_str("=\"");
            self.out.push_str(value.as_ref());
            self.out.push('"');
        }
    }

    /// Consume the writer and return the output.
    #[inline]
    pub fn into_string(self) -> String {
        self.out
    }
}
