use thiserror::Error;

#[derive(Error, Debug)]
pub enum IngestError {
    #[error("The uploaded file is empty")]
    EmptyUpload,

    #[error("Failed to read the uploaded file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Line {line} has {found} fields but the header has {expected}")]
    TooManyFields {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("Line {line} opens a quoted field that is never closed")]
    UnterminatedQuote { line: u64 },

    #[error("The upload is missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),
}
