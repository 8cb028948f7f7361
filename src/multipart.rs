//! Single-part `multipart/form-data` encoding for receipt uploads.
//!
//! The backend accepts exactly one JPEG part named `file` with the fixed
//! filename `receipt.jpg`. The body layout is assembled from constant byte
//! templates around the payload; the whole thing is buffered and sent as
//! one request body. No chunking, no streaming.

use uuid::Uuid;

/// Part headers between the opening boundary line and the payload.
const PART_HEADERS: &[u8] = b"Content-Disposition: form-data; name=\"file\"; filename=\"receipt.jpg\"\r\nContent-Type: image/jpeg\r\n\r\n";

/// Fresh boundary token for one upload.
pub fn boundary() -> String {
    Uuid::new_v4().to_string()
}

/// Value for the outer request's `Content-Type` header.
pub fn content_type(boundary: &str) -> String {
    format!("multipart/form-data; boundary={boundary}")
}

/// Assemble the exact request body for one payload and boundary:
///
/// ```text
/// --T\r\n
/// Content-Disposition: form-data; name="file"; filename="receipt.jpg"\r\n
/// Content-Type: image/jpeg\r\n
/// \r\n
/// <payload>
/// \r\n--T--\r\n
/// ```
pub fn encode(payload: &[u8], boundary: &str) -> Vec<u8> {
    let mut body =
        Vec::with_capacity(payload.len() + PART_HEADERS.len() + boundary.len() * 2 + 12);
    body.extend_from_slice(b"--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(b"\r\n");
    body.extend_from_slice(PART_HEADERS);
    body.extend_from_slice(payload);
    body.extend_from_slice(b"\r\n--");
    body.extend_from_slice(boundary.as_bytes());
    body.extend_from_slice(b"--\r\n");
    body
}
