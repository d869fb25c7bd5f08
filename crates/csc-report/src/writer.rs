//! CSV record writer

use csv_core::{Terminator, WriteResult, Writer, WriterBuilder};

/// Buffers CSV records, quoting fields only when needed
pub struct CsvWriter {
    writer: Writer,
    buf: [u8; 1024],
    out: Vec<u8>,
}

impl CsvWriter {
    pub fn new() -> Self {
        Self {
            writer: WriterBuilder::new()
                .terminator(Terminator::Any(b'\n'))
                .build(),
            buf: [0; 1024],
            out: Vec::new(),
        }
    }

    /// Append one record
    pub fn write_record<I, F>(&mut self, fields: I)
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        for (position, field) in fields.into_iter().enumerate() {
            if position > 0 {
                self.delimiter();
            }
            self.field(field.as_ref());
        }
        self.terminator();
    }

    fn field(&mut self, mut data: &[u8]) {
        loop {
            let (result, nin, nout) = self.writer.field(data, &mut self.buf);
            self.out.extend_from_slice(&self.buf[..nout]);
            data = &data[nin..];
            if result == WriteResult::InputEmpty {
                break;
            }
        }
    }

    fn delimiter(&mut self) {
        loop {
            let (result, nout) = self.writer.delimiter(&mut self.buf);
            self.out.extend_from_slice(&self.buf[..nout]);
            if result == WriteResult::InputEmpty {
                break;
            }
        }
    }

    fn terminator(&mut self) {
        loop {
            let (result, nout) = self.writer.terminator(&mut self.buf);
            self.out.extend_from_slice(&self.buf[..nout]);
            if result == WriteResult::InputEmpty {
                break;
            }
        }
    }

    /// Written records as text
    pub fn into_string(self) -> String {
        match String::from_utf8(self.out) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}

impl Default for CsvWriter {
    fn default() -> Self {
        Self::new()
    }
}
