use crate::errors::{LoadError, MalformedRecord};
use crate::invoice::InvoiceRecord;
use csv::{ReaderBuilder, StringRecord, Trim};
use std::io;
use std::path::Path;
use tracing::{error, info, warn};

/// Columns every record needs a value for.
const REQUIRED_COLUMNS: [&str; 2] = ["invoiced_amount", "paid_amount"];

/// Columns that identify a record. Records without them are still loaded.
const IDENTITY_COLUMNS: [&str; 2] = ["client_id", "invoice_id"];

/// Loads the invoices in the CSV file at `path`.
///
/// This never fails: a missing or unreadable file, or one whose header lacks
/// the amount columns, is logged and yields no records. Rows whose amounts
/// can't be parsed are logged and skipped.
pub fn load_invoices(path: &Path) -> Vec<InvoiceRecord> {
    match try_load_invoices(path) {
        Ok(invoices) => invoices,
        Err(err) => {
            error!("{}", err);
            Vec::new()
        }
    }
}

/// Like [`load_invoices`], but reports source-level failures to the caller.
/// Malformed rows are still skipped rather than returned as errors.
pub fn try_load_invoices(path: &Path) -> Result<Vec<InvoiceRecord>, LoadError> {
    let reader = reader_builder()
        .from_path(path)
        .map_err(|source| LoadError::SourceUnavailable {
            path: path.to_path_buf(),
            source,
        })?;

    let invoices = read_records(reader)?;
    info!(
        "Loaded {} invoice records from {}",
        invoices.len(),
        path.display()
    );

    Ok(invoices)
}

/// Parses invoice records from CSV data with a header row.
pub fn read_invoices<R: io::Read>(rdr: R) -> Result<Vec<InvoiceRecord>, LoadError> {
    read_records(reader_builder().from_reader(rdr))
}

fn reader_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.flexible(true).has_headers(true).trim(Trim::All);
    builder
}

fn read_records<R: io::Read>(mut rdr: csv::Reader<R>) -> Result<Vec<InvoiceRecord>, LoadError> {
    let headers = rdr.headers().map_err(LoadError::Header)?.clone();
    // A zero-byte source has no header row and nothing to load.
    if headers.is_empty() {
        return Ok(Vec::new());
    }
    check_headers(&headers)?;

    let mut invoices = Vec::new();
    let mut record = StringRecord::new();
    loop {
        match rdr.read_record(&mut record) {
            Ok(true) => match record.deserialize::<InvoiceRecord>(Some(&headers)) {
                Ok(invoice) => invoices.push(invoice),
                Err(err) => report_malformed(&record, err),
            },
            Ok(false) => break,
            // The reader can't make further progress after an I/O failure,
            // so keep what was read and stop.
            Err(err) if err.is_io_error() => {
                error!("Stopped reading invoice data early: {}", err);
                break;
            }
            Err(err) => report_malformed(&record, err),
        }
    }

    Ok(invoices)
}

fn check_headers(headers: &StringRecord) -> Result<(), LoadError> {
    let has = |name: &str| headers.iter().any(|header| header == name);

    if let Some(missing) = REQUIRED_COLUMNS.into_iter().find(|name| !has(*name)) {
        return Err(LoadError::MissingColumn(missing));
    }

    for name in IDENTITY_COLUMNS.into_iter().filter(|name| !has(*name)) {
        warn!("Header row has no `{}` column", name);
    }

    Ok(())
}

fn report_malformed(record: &StringRecord, err: csv::Error) {
    let row = record.iter().map(str::to_string).collect();
    error!("{}", MalformedRecord::new(row, err));
}
