use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use crate::error::{AprioriError, Result};
use crate::types::RawTransaction;

/// Reads transactions from a delimited file.
///
/// The first row is a header and is discarded, as is the first column of
/// every other row (the transaction id). All remaining non-empty fields of a
/// row are the items of one transaction.
pub fn load_transactions(path: impl AsRef<Path>, delimiter: u8) -> Result<Vec<RawTransaction>> {
    let path = path.as_ref();
    let not_found = || AprioriError::InputNotFound {
        path: path.to_path_buf(),
    };

    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Err(not_found()),
        Err(source) => {
            return Err(AprioriError::Io {
                path: path.to_path_buf(),
                source,
            })
        }
    };
    let metadata = file.metadata().map_err(|source| AprioriError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    let transactions =
        load_transactions_from_reader(file, delimiter).map_err(|source| AprioriError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    debug!(path = %path.display(), transactions = transactions.len(), "Loaded transactions");

    Ok(transactions)
}

/// Same as [`load_transactions`] for any reader.
///
/// Every row after the header is a transaction, whatever its id field holds.
/// Fields are taken verbatim, so `" B"` and `"B"` are different items; only
/// empty fields are dropped. A row holding only an id is an empty transaction.
pub fn load_transactions_from_reader<R: Read>(
    reader: R,
    delimiter: u8,
) -> std::result::Result<Vec<RawTransaction>, csv::Error> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .delimiter(delimiter)
        .from_reader(reader);

    let mut transactions = Vec::new();
    for record in reader.records() {
        let record = record?;
        let items: RawTransaction = record
            .iter()
            .skip(1)
            .filter(|field| !field.is_empty())
            .map(String::from)
            .collect();
        transactions.push(items);
    }

    Ok(transactions)
}
