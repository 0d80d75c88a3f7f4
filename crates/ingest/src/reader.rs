use crate::coerce::NumericCell;
use crate::error::IngestError;
use core_types::{SalesRecord, columns};
use csv::StringRecord;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// The parsed content of one upload.
#[derive(Debug, Clone, Default)]
pub struct UploadedTable {
    pub records: Vec<SalesRecord>,
    /// Non-empty numeric cells that failed to parse and were dropped.
    pub coerced_cells: usize,
}

impl UploadedTable {
    /// Distinct owners in the order they first appear in the file.
    pub fn owners(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.records
            .iter()
            .filter_map(SalesRecord::owner)
            .filter(|owner| seen.insert(*owner))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Header positions of the required columns.
struct ColumnIndex {
    owner: usize,
    product: usize,
    amount: usize,
    client_type: usize,
    meetings: usize,
    activation: usize,
    specific_task: usize,
}

impl ColumnIndex {
    fn resolve(headers: &StringRecord) -> Result<Self, IngestError> {
        let positions = columns::REQUIRED
            .map(|name| headers.iter().position(|header| header == name));

        match positions {
            [
                Some(owner),
                Some(product),
                Some(amount),
                Some(client_type),
                Some(meetings),
                Some(activation),
                Some(specific_task),
            ] => Ok(Self {
                owner,
                product,
                amount,
                client_type,
                meetings,
                activation,
                specific_task,
            }),
            _ => Err(IngestError::MissingColumns(
                columns::REQUIRED
                    .iter()
                    .zip(positions)
                    .filter(|(_, position)| position.is_none())
                    .map(|(name, _)| name.to_string())
                    .collect(),
            )),
        }
    }
}

/// Parses an activity export with a header row.
///
/// Header names are trimmed before they are matched. Rows may be shorter than the
/// header; missing trailing cells read as empty. Rows longer than the header and a
/// quoted field left open at the end of the input are rejected.
pub fn load_records<R: Read>(mut reader: R) -> Result<UploadedTable, IngestError> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    load_from_bytes(&bytes)
}

/// Parses an in-memory upload, stripping a leading UTF-8 byte order mark.
pub fn load_from_bytes(bytes: &[u8]) -> Result<UploadedTable, IngestError> {
    let bytes = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(IngestError::EmptyUpload);
    }
    parse(bytes)
}

/// Reads and parses an export from disk.
pub fn load_from_path(path: &Path) -> Result<UploadedTable, IngestError> {
    let bytes = std::fs::read(path)?;
    load_from_bytes(&bytes)
}

fn parse(bytes: &[u8]) -> Result<UploadedTable, IngestError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(bytes);

    let headers = csv_reader.headers()?.clone();
    tracing::debug!(headers = ?headers.iter().collect::<Vec<_>>(), "Read upload headers.");
    let index = ColumnIndex::resolve(&headers)?;

    let mut table = UploadedTable::default();
    let mut last_start = None;
    for result in csv_reader.records() {
        let row = result?;
        let (line, start) = row
            .position()
            .map_or((0, 0), |position| (position.line(), position.byte()));
        if row.len() > headers.len() {
            return Err(IngestError::TooManyFields {
                line,
                expected: headers.len(),
                found: row.len(),
            });
        }
        last_start = Some((line, start));

        let mut numeric = |position: usize| match NumericCell::parse(row.get(position).unwrap_or("")) {
            NumericCell::Invalid => {
                table.coerced_cells += 1;
                None
            }
            cell => cell.value(),
        };

        let record = SalesRecord {
            amount: numeric(index.amount),
            client_type: numeric(index.client_type),
            meetings: numeric(index.meetings),
            activation: numeric(index.activation),
            specific_task: numeric(index.specific_task),
            owner: text(&row, index.owner),
            product: text(&row, index.product),
        };
        table.records.push(record);
    }

    // An unclosed quote swallows the rest of the input, so it can only be in the last record.
    if let Some((line, start)) = last_start {
        let tail = usize::try_from(start)
            .ok()
            .and_then(|start| bytes.get(start..))
            .unwrap_or_default();
        if ends_inside_quotes(tail) {
            return Err(IngestError::UnterminatedQuote { line });
        }
    }

    if table.coerced_cells > 0 {
        tracing::debug!(
            cells = table.coerced_cells,
            "Non-numeric values were treated as missing."
        );
    }
    tracing::info!(rows = table.len(), "Parsed upload.");
    Ok(table)
}

/// Scans raw CSV text the way the reader does: a quote opens a quoted field only at
/// the start of a field, and `""` inside one is an escaped quote.
fn ends_inside_quotes(raw: &[u8]) -> bool {
    let mut in_quotes = false;
    let mut field_start = true;
    let mut bytes = raw.iter().peekable();
    while let Some(&byte) = bytes.next() {
        if in_quotes {
            if byte == b'"' {
                if bytes.peek() == Some(&&b'"') {
                    bytes.next();
                } else {
                    in_quotes = false;
                }
            }
            continue;
        }
        match byte {
            b'"' if field_start => {
                in_quotes = true;
                field_start = false;
            }
            b',' | b'\n' | b'\r' => field_start = true,
            _ => field_start = false,
        }
    }
    in_quotes
}

/// A text cell, or `None` when it is empty. Whitespace-only cells are kept as they are.
fn text(row: &StringRecord, position: usize) -> Option<String> {
    row.get(position)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
