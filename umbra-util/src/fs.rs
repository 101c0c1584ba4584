use std::{
    fs::File,
    io::{self, BufReader},
    path::Path,
};

use thiserror::Error;

/// Error returned when a file cannot be opened for reading.
///
/// The message carries both the offending path and the platform's I/O error
/// text, so it can be surfaced to users as-is.
#[derive(Debug, Error)]
#[error("failed to open file '{path}': {source}")]
pub struct OpenError {
    /// The path as given by the caller.
    pub path: String,
    #[source]
    pub source: io::Error,
}

/// Opens the named file for buffered reading.
///
/// # Errors
///
/// Returns an [`OpenError`] naming the path and the underlying I/O failure.
pub fn open_file(path: impl AsRef<Path>) -> Result<BufReader<File>, OpenError> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(source) => Err(OpenError {
            path: path.display().to_string(),
            source,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::io::BufRead;

    use super::*;

    #[test]
    fn opens_an_existing_file() {
        let mut reader = open_file(concat!(env!("CARGO_MANIFEST_DIR"), "/Cargo.toml")).unwrap();
        let mut first_line = String::new();
        reader.read_line(&mut first_line).unwrap();
        assert_eq!(first_line.trim_end(), "[package]");
    }

    #[test]
    fn missing_file_error_names_the_path() {
        let error = open_file("no/such/file.txt").expect_err("file does not exist");
        let message = error.to_string();
        assert!(message.contains("no/such/file.txt"));
        assert!(
            message.len() > "failed to open file 'no/such/file.txt': ".len(),
            "the OS error text is embedded in the message"
        );
    }
}
