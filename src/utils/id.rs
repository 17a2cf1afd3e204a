/// Length of the identifiers produced by [`request_id`]
pub const REQUEST_ID_LENGTH: usize = 21;

/// Generates a correlation identifier for an outgoing request.
///
/// The identifier is made of uppercase letters and digits using the `nanoid`
/// crate. It is sent in the `X-Request-ID` header and recorded on every log
/// line of the request, so the original call, the refresh and the resend of a
/// single operation can be followed together.
///
/// # Examples
/// ```
/// use ats_client::utils::id::request_id;
/// let id = request_id();
/// assert_eq!(id.len(), 21);
/// ```
pub fn request_id() -> String {
    let alphabet: Vec<char> = "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789".chars().collect();
    nanoid::nanoid!(REQUEST_ID_LENGTH, &alphabet)
}
