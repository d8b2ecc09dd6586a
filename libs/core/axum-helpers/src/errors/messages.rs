//! Standard error messages for consistent error responses.

pub const INTERNAL_ERROR: &str = "something went wrong";
pub const NOT_FOUND_RESOURCE: &str = "The requested resource was not found";
pub const METHOD_NOT_ALLOWED: &str = "The HTTP method is not allowed for this resource";
