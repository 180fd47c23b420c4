use thiserror::Error;

#[derive(Error, Debug)]
/// Errors that can be returned
pub enum Error {
    /// A candidate line or tile literal contains a character that is neither a letter nor a blank.
    /// This is fatal for the whole run.
    #[error("Unknown tile '{tile}' in \"{line}\"")]
    UnknownTile { tile: char, line: String },

    /// Error reading a candidate line
    #[error("Candidate line could not be read")]
    ReadError { source: std::io::Error },

    /// Error writing a passing line
    #[error("Output could not be written")]
    WriteError { source: std::io::Error },
}
