/// Byte sink that tracks its own length as chunks are appended, so every
/// recorded offset is the exact position of the next byte written.
#[derive(Debug, Default)]
pub(crate) struct ByteAccumulator {
    buf: Vec<u8>,
}

impl ByteAccumulator {
    pub(crate) fn offset(&self) -> usize {
        self.buf.len()
    }

    pub(crate) fn push_bytes(&mut self, bytes: &[u8]) {
        self.buf.extend_from_slice(bytes);
    }

    pub(crate) fn push_str(&mut self, text: &str) {
        self.push_bytes(text.as_bytes());
    }

    /// Appends `text` followed by a single `\n`.
    pub(crate) fn push_line(&mut self, text: &str) {
        self.push_str(text);
        self.push_bytes(b"\n");
    }

    pub(crate) fn into_bytes(self) -> Vec<u8> {
        self.buf
    }
}

/// Sequential indirect-object writer with a cross-reference table.
#[derive(Debug, Default)]
pub(crate) struct ObjectWriter {
    out: ByteAccumulator,
    // offsets[i] belongs to object id i + 1
    offsets: Vec<usize>,
}

impl ObjectWriter {
    pub(crate) fn new(header: &str) -> Self {
        let mut out = ByteAccumulator::default();
        out.push_line(header);
        Self {
            out,
            offsets: Vec::new(),
        }
    }

    fn begin_object(&mut self) -> usize {
        self.offsets.push(self.out.offset());
        let id = self.offsets.len();
        self.out.push_line(&format!("{id} 0 obj"));
        id
    }

    /// Writes a dictionary object and returns its id.
    pub(crate) fn write_dict(&mut self, dict: &str) -> usize {
        let id = self.begin_object();
        self.out.push_line(dict);
        self.out.push_line("endobj");
        id
    }

    /// Writes a stream object whose `/Length` is taken from the body bytes
    /// themselves. Returns the id and the declared length.
    pub(crate) fn write_stream(&mut self, body: &[u8]) -> (usize, usize) {
        let id = self.begin_object();
        let length = body.len();
        self.out.push_line(&format!("<< /Length {length} >>"));
        self.out.push_line("stream");
        self.out.push_bytes(body);
        self.out.push_bytes(b"\n");
        self.out.push_line("endstream");
        self.out.push_line("endobj");
        (id, length)
    }

    /// Appends xref table and trailer, returning the bytes, the per-object
    /// offsets and the xref offset.
    pub(crate) fn finish(mut self, root_id: usize) -> (Vec<u8>, Vec<usize>, usize) {
        let xref_offset = self.out.offset();
        let size = self.offsets.len() + 1;
        self.out.push_line("xref");
        self.out.push_line(&format!("0 {size}"));
        self.out.push_line("0000000000 65535 f ");
        for offset in &self.offsets {
            self.out.push_line(&format!("{offset:010} 00000 n "));
        }
        self.out.push_line("trailer");
        self.out
            .push_line(&format!("<< /Size {size} /Root {root_id} 0 R >>"));
        self.out.push_line("startxref");
        self.out.push_line(&xref_offset.to_string());
        self.out.push_line("%%EOF");
        (self.out.into_bytes(), self.offsets, xref_offset)
    }
}
