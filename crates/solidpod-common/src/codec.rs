//! Newline-delimited record codec.
//!
//! A record sequence is stored as the text of each record followed by `\n`.
//! Decoding splits on `\n` literally and drops the single empty segment left
//! behind by the final terminator, so `decode(encode(x)) == x` as long as no
//! record contains a newline. Records always come back as text.

use std::fmt::Display;

use smol_str::{SmolStr, ToSmolStr};

/// Separator written after every record.
pub const RECORD_TERMINATOR: char = '\n';

/// Encode a slice of records.
///
/// ```
/// use solidpod_common::codec::encode;
///
/// assert_eq!(encode(&[1, 2, 3]), "1\n2\n3\n");
/// assert_eq!(encode(&["one", "2", "true"]), "one\n2\ntrue\n");
/// ```
pub fn encode<T: Display>(records: &[T]) -> String {
    encode_iter(records)
}

/// Encode any sequence of displayable records.
pub fn encode_iter<I>(records: I) -> String
where
    I: IntoIterator,
    I::Item: Display,
{
    let mut out = String::new();
    for record in records {
        out.push_str(&record.to_smolstr());
        out.push(RECORD_TERMINATOR);
    }
    out
}

/// Decode a text blob into its records.
///
/// Empty text is an empty sequence. A missing final terminator is tolerated.
pub fn decode(text: &str) -> Vec<SmolStr> {
    if text.is_empty() {
        return Vec::new();
    }
    let body = text.strip_suffix(RECORD_TERMINATOR).unwrap_or(text);
    body.split(RECORD_TERMINATOR).map(SmolStr::new).collect()
}
