use miette::Diagnostic;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum FileOperation {
    #[error("reading a file")]
    Read,
    #[error("creating a directory")]
    Mkdir,
    #[error("touching a file")]
    Touch,
}
impl FileOperation {
    fn hint(&self) -> &'static str {
        match self {
            Self::Read => "Make sure the input file exists and is readable.",
            Self::Mkdir | Self::Touch => {
                "Check file permissions, disk space, and that every parent of the path is a directory."
            }
        }
    }
}
#[derive(Debug, Error, Diagnostic)]
#[error("I/O error: {operation} on path '{path}'")]
#[diagnostic(code(cotree::io))]
pub struct IoError {
    pub operation: FileOperation,
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
    #[help]
    pub help: Option<String>,
}
impl IoError {
    pub fn new(operation: FileOperation, path: PathBuf, error: std::io::Error) -> Self {
        let help = Some(operation.hint().to_string());

        Self {
            operation,
            path,
            source: error,
            help,
        }
    }
    /// Points the help text at the input line that produced the failing entry.
    pub fn at_line(mut self, line: usize) -> Self {
        self.help = Some(format!("{} (input line {})", self.operation.hint(), line));
        self
    }
}
