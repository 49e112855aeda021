use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use thiserror::Error;

use crate::results::{ParseResultTypeError, ResultType, ScanResult, ScanResultBuilderError, ScanResultList};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0:?}")]
    IO(#[from] std::io::Error),
    #[error("Line {line}: {source}")]
    UnknownType {
        line: usize,
        #[source]
        source: ParseResultTypeError,
    },
    #[error("Line {0}: address is missing")]
    MissingAddress(usize),
    #[error("Incomplete result: {0}")]
    Incomplete(#[from] ScanResultBuilderError),
}

/// Reads results from a tab separated file into `list`. Returns number of loaded results.
///
/// Each non-blank line that does not start with `#` has the form
/// `<type>\t<address>[\t<value>...]`.
pub fn load_file<P: AsRef<Path>>(path: P, list: &mut ScanResultList) -> Result<usize, LoadError> {
    let path = path.as_ref();
    log::info!("Loading results from {:?}", path);
    let reader = BufReader::new(File::open(path)?);
    load(reader, list)
}

pub fn load<R: BufRead>(reader: R, list: &mut ScanResultList) -> Result<usize, LoadError> {
    let mut loaded = 0;
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if let Some(result) = parse_line(&line, i + 1)? {
            list.add(result);
            loaded += 1;
        }
    }
    log::info!("{} results loaded", loaded);
    Ok(loaded)
}

fn parse_line(line: &str, line_no: usize) -> Result<Option<ScanResult>, LoadError> {
    if line.trim().is_empty() || line.trim_start().starts_with('#') {
        return Ok(None);
    }
    let mut fields = line.split('\t');
    let result_type = fields.next()
        .unwrap_or_default()
        .parse::<ResultType>()
        .map_err(|source| LoadError::UnknownType { line: line_no, source })?;
    let address = fields.next()
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .ok_or(LoadError::MissingAddress(line_no))?;
    let result = fields
        .fold(ScanResult::builder().address(address).result_type(result_type), |b, v| b.value(v))
        .build()?;
    Ok(Some(result))
}
