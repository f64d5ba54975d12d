use std::path::Path;

use fractic_server_error::ServerError;

use crate::errors::ReadError;

/// Reads a company import file as text. Parsing and validation happen in the
/// use case.
pub(crate) async fn read_import_file(path: &Path) -> Result<String, ServerError> {
    log::debug!("Reading import file {}", path.display());
    tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ReadError::with_debug(&e))
}
