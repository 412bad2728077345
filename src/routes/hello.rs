//! Greeting page handler.

/// Greeting handler.
///
/// Returns the fixed greeting as plain text. The body depends on nothing but
/// the route itself, so concurrent requests never observe each other.
pub async fn hello() -> &'static str {
    "Hello, World!"
}
