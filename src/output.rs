//! Line sinks that receive generated documents.

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;
use tracing::debug;

/// Ordered destination for generated lines
pub trait LineSink {
    fn write_line(&mut self, line: &str) -> io::Result<()>;

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl LineSink for Vec<String> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.push(line.to_string());
        Ok(())
    }
}

/// Writes `\n`-terminated lines to any [`Write`] implementation
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> LineSink for WriterSink<W> {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.writer.write_all(line.as_bytes())?;
        self.writer.write_all(b"\n")
    }

    fn flush(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}

/// Opens the sink that receives one config's document
pub trait SinkProvider {
    fn open(&mut self, path: &Path) -> io::Result<Box<dyn LineSink>>;
}

/// Creates output files, making parent directories as needed
#[derive(Debug, Default)]
pub struct FileSinkProvider;

impl SinkProvider for FileSinkProvider {
    fn open(&mut self, path: &Path) -> io::Result<Box<dyn LineSink>> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        debug!(path = %path.display(), "opening output file");
        let file = File::create(path)?;
        Ok(Box::new(WriterSink::new(BufWriter::new(file))))
    }
}

type SharedDocuments = Rc<RefCell<Vec<(PathBuf, Vec<String>)>>>;

/// Collects every opened document in memory, keyed by path
#[derive(Debug, Default)]
pub struct MemorySinkProvider {
    documents: SharedDocuments,
}

struct MemorySink {
    documents: SharedDocuments,
    index: usize,
}

impl LineSink for MemorySink {
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.documents.borrow_mut()[self.index].1.push(line.to_string());
        Ok(())
    }
}

impl MemorySinkProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn document(&self, path: &Path) -> Option<Vec<String>> {
        self.documents
            .borrow()
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, lines)| lines.clone())
    }

    pub fn paths(&self) -> Vec<PathBuf> {
        self.documents.borrow().iter().map(|(p, _)| p.clone()).collect()
    }
}

impl SinkProvider for MemorySinkProvider {
    fn open(&mut self, path: &Path) -> io::Result<Box<dyn LineSink>> {
        let mut documents = self.documents.borrow_mut();
        documents.push((path.to_path_buf(), Vec::new()));
        Ok(Box::new(MemorySink {
            documents: self.documents.clone(),
            index: documents.len() - 1,
        }))
    }
}
