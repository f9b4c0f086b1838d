//! Text decoding for CSV input
//!
//! `ascii` and `latin-1` (ISO-8859-1) are decoded exactly: ASCII rejects any
//! byte above 0x7F and Latin-1 maps every byte to the code point of the same
//! value. Every other label goes through the WHATWG table of `encoding_rs`,
//! so `cp1252`, `utf-8`, `shift_jis` and friends resolve there.

use encoding_rs::{DecoderResult, Encoding, UTF_8};

use crate::core::error::LoaderError;

/// Default encoding label for dataset files
pub const DEFAULT_ENCODING: &str = "latin-1";

/// Encoding resolved from a label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Ascii,
    Latin1,
    Whatwg(&'static Encoding),
}

impl TextEncoding {
    pub fn name(&self) -> &'static str {
        match self {
            TextEncoding::Ascii => "ascii",
            TextEncoding::Latin1 => "latin-1",
            TextEncoding::Whatwg(encoding) => encoding.name(),
        }
    }
}

/// Resolve an encoding label
pub fn lookup(label: &str) -> Result<TextEncoding, LoaderError> {
    let normalized = label.trim().to_ascii_lowercase().replace('_', "-");

    // WHATWG folds these into windows-1252, which accepts bytes they must not
    match normalized.as_str() {
        "ascii" | "us-ascii" | "646" | "ansi-x3.4-1968" | "iso646-us" => {
            return Ok(TextEncoding::Ascii)
        }
        "latin-1" | "latin1" | "l1" | "iso-8859-1" | "iso8859-1" | "iso88591" | "8859"
        | "cp819" | "ibm819" | "iso-ir-100" | "csisolatin1" => return Ok(TextEncoding::Latin1),
        _ => {}
    }

    [normalized.clone(), normalized.replace('-', "")]
        .iter()
        .find_map(|c| Encoding::for_label(c.as_bytes()))
        .map(TextEncoding::Whatwg)
        .ok_or_else(|| LoaderError::UnknownEncoding(label.to_string()))
}

/// Decode raw bytes strictly; malformed input is an error, never replaced.
pub fn decode(bytes: &[u8], label: &str) -> Result<String, LoaderError> {
    let encoding = lookup(label)?;

    let text = match encoding {
        TextEncoding::Ascii => match bytes.iter().position(|b| !b.is_ascii()) {
            Some(position) => {
                return Err(LoaderError::Encoding {
                    encoding: label.to_string(),
                    byte: bytes[position],
                    position,
                })
            }
            None => bytes.iter().map(|&b| char::from(b)).collect(),
        },
        TextEncoding::Latin1 => encoding_rs::mem::decode_latin1(bytes).into_owned(),
        TextEncoding::Whatwg(encoding) => decode_whatwg(bytes, encoding, label)?,
    };

    tracing::debug!(encoding = encoding.name(), bytes = bytes.len(), "decoded input");
    Ok(text)
}

fn decode_whatwg(
    bytes: &[u8],
    encoding: &'static Encoding,
    label: &str,
) -> Result<String, LoaderError> {
    let bytes = if encoding == UTF_8 {
        bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(bytes)
    } else {
        bytes
    };

    let mut decoder = encoding.new_decoder_without_bom_handling();
    let capacity = decoder
        .max_utf8_buffer_length_without_replacement(bytes.len())
        .unwrap_or(bytes.len() * 3);
    let mut output = String::with_capacity(capacity);

    let mut consumed = 0;
    loop {
        let (result, read) =
            decoder.decode_to_string_without_replacement(&bytes[consumed..], &mut output, true);
        consumed += read;
        match result {
            DecoderResult::InputEmpty => break,
            DecoderResult::OutputFull => output.reserve(bytes.len() - consumed + 16),
            DecoderResult::Malformed(bad, after) => {
                let position = consumed.saturating_sub(bad as usize + after as usize);
                return Err(LoaderError::Encoding {
                    encoding: label.to_string(),
                    byte: bytes.get(position).copied().unwrap_or_default(),
                    position,
                });
            }
        }
    }

    Ok(output)
}
