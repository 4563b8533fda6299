/*
 * Responsibility
 * - GET /hello: the smallest possible responder, kept as a smoke test for
 *   the serving setup
 */
pub async fn hello() -> &'static str {
    "Hello, the demo server is running locally!"
}
