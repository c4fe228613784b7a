//! Response envelope returned to callers.

/// Pairing of the HTTP status code with the deserialized, typed body.
///
/// Created only after the response has been fully read and classified as
/// parseable — a 2xx, or a 404 on the endpoints that model "not found" as
/// a structured response rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse<T> {
    /// The HTTP status the vendor returned.
    pub status: u16,
    /// The deserialized payload, already unwrapped from its root element.
    pub body: T,
}
