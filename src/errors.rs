use fractic_server_error::{define_client_error, define_internal_error};

// IO-related.
define_client_error!(ReadError, "Error reading file.");

// Parsing-related.
define_client_error!(
    InvalidTrendDirection,
    "Invalid trend direction: '{value}'. Expected one of Up, Down, Equal.",
    { value: &str }
);
define_client_error!(
    InvalidViewMode,
    "Invalid view mode: '{value}'. Expected Actual or Previous.",
    { value: &str }
);
define_client_error!(UnknownFormField, "Unknown form field: '{field}'.", { field: &str });

// Validation-related.
define_client_error!(ValidationError, "Validation failed: {details}.", { details: &str });

// Store-related.
define_client_error!(NotFound, "Company document '{id}' not found.", { id: &str });
define_internal_error!(
    OperationFailed,
    "Document store operation failed: {message}.",
    { message: &str }
);
define_internal_error!(
    UnexpectedStoreResponse,
    "Unexpected document store response: {details}.",
    { details: &str }
);

// Configuration-related.
define_client_error!(
    MissingConfig,
    "Missing configuration: environment variable '{key}' is not set.",
    { key: &str }
);
