//! Encoding of graphs and trees as structured text (JSON) or compact binary
//! (MessagePack, optionally gzip-compressed).
//!
//! Both encodings wrap the value in an envelope carrying a format version and
//! a [`DocumentKind`], so a decoder can refuse data it does not understand
//! instead of misreading it. The binary form starts with a fixed header:
//!
//! ```text
//! b"SGRF" | version: u8 | flags: u8 | body
//! ```
//!
//! Bit 0 of `flags` marks a gzip-compressed body.

use std::io::{Read, Write};

use flate2::{Compression, bufread::GzDecoder, write::GzEncoder};
use serde::{Deserialize, Serialize, de::DeserializeOwned, de::IgnoredAny};

use crate::{
    Result,
    error::Error,
    synthetic::{SyntheticGraph, SyntheticTree},
    tictactoe::{GameGraph, GameTree},
};

pub const FORMAT_VERSION: u8 = 1;

const MAGIC: &[u8; 4] = b"SGRF";
const HEADER_LEN: usize = MAGIC.len() + 2;
const FLAG_GZIP: u8 = 0b0000_0001;

/// What a serialized document contains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DocumentKind {
    GameGraph,
    GameTree,
    SyntheticGraph,
    SyntheticTree,
}

/// A value the codec knows how to frame.
pub trait Document: Serialize + DeserializeOwned {
    const KIND: DocumentKind;
}

impl Document for GameGraph {
    const KIND: DocumentKind = DocumentKind::GameGraph;
}

impl Document for GameTree {
    const KIND: DocumentKind = DocumentKind::GameTree;
}

impl Document for SyntheticGraph {
    const KIND: DocumentKind = DocumentKind::SyntheticGraph;
}

impl Document for SyntheticTree {
    const KIND: DocumentKind = DocumentKind::SyntheticTree;
}

/// On-disk representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Encoding {
    Text,
    Binary { compressed: bool },
}

/// Envelope metadata read without decoding the body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentInfo {
    pub encoding: Encoding,
    pub kind: DocumentKind,
    pub version: u8,
}

#[derive(Serialize)]
struct EnvelopeRef<'a, T> {
    version: u8,
    kind: DocumentKind,
    body: &'a T,
}

#[derive(Deserialize)]
struct Envelope<T> {
    version: u8,
    kind: DocumentKind,
    body: T,
}

#[derive(Deserialize)]
struct EnvelopeHeader {
    version: u8,
    kind: DocumentKind,
    #[allow(dead_code)]
    body: IgnoredAny,
}

fn envelope<D: Document>(doc: &D) -> EnvelopeRef<'_, D> {
    EnvelopeRef {
        version: FORMAT_VERSION,
        kind: D::KIND,
        body: doc,
    }
}

fn check_header<D: Document>(version: u8, kind: DocumentKind) -> Result<()> {
    if version != FORMAT_VERSION {
        return Err(Error::format(format!(
            "unsupported format version {version} (expected {FORMAT_VERSION})"
        )));
    }
    if kind != D::KIND {
        return Err(Error::format(format!(
            "document holds a {kind:?}, expected a {:?}",
            D::KIND
        )));
    }
    Ok(())
}

/// Encode as pretty-printed JSON.
pub fn encode_text<D: Document>(doc: &D) -> Result<String> {
    serde_json::to_string_pretty(&envelope(doc)).map_err(|e| Error::SerializationContext {
        operation: "serialize document to JSON".to_string(),
        message: e.to_string(),
    })
}

/// Decode a JSON document produced by [`encode_text`].
pub fn decode_text<D: Document>(text: &str) -> Result<D> {
    let header: EnvelopeHeader = serde_json::from_str(text)
        .map_err(|e| Error::format(format!("invalid JSON document: {e}")))?;
    check_header::<D>(header.version, header.kind)?;

    let envelope: Envelope<D> = serde_json::from_str(text)
        .map_err(|e| Error::format(format!("invalid JSON document body: {e}")))?;
    Ok(envelope.body)
}

/// Encode as MessagePack behind the binary header, gzip-compressing the body
/// when `compress` is set.
pub fn encode_binary<D: Document>(doc: &D, compress: bool) -> Result<Vec<u8>> {
    let encode_error = |e: rmp_serde::encode::Error| Error::SerializationContext {
        operation: "serialize document to MessagePack".to_string(),
        message: e.to_string(),
    };
    let io_error = |source| Error::Io {
        operation: "compress document".to_string(),
        source,
    };

    let mut out = Vec::new();
    out.extend_from_slice(MAGIC);
    out.push(FORMAT_VERSION);
    out.push(if compress { FLAG_GZIP } else { 0 });

    if compress {
        let mut encoder = GzEncoder::new(out, Compression::default());
        rmp_serde::encode::write(&mut encoder, &envelope(doc)).map_err(encode_error)?;
        encoder.flush().map_err(io_error)?;
        out = encoder.finish().map_err(io_error)?;
    } else {
        rmp_serde::encode::write(&mut out, &envelope(doc)).map_err(encode_error)?;
    }

    log::debug!(
        "encoded {:?} as {} binary bytes (compressed: {compress})",
        D::KIND,
        out.len()
    );
    Ok(out)
}

/// Split the binary header from the body, decompressing the body if needed.
fn binary_body(bytes: &[u8]) -> Result<(bool, Vec<u8>)> {
    if bytes.len() < HEADER_LEN {
        return Err(Error::format(format!(
            "binary document truncated: {} bytes is shorter than the header",
            bytes.len()
        )));
    }
    if &bytes[..MAGIC.len()] != MAGIC {
        return Err(Error::format("missing binary document magic"));
    }

    let version = bytes[MAGIC.len()];
    if version != FORMAT_VERSION {
        return Err(Error::format(format!(
            "unsupported binary format version {version} (expected {FORMAT_VERSION})"
        )));
    }

    let flags = bytes[MAGIC.len() + 1];
    if flags & !FLAG_GZIP != 0 {
        return Err(Error::format(format!("unknown header flags {flags:#010b}")));
    }

    let body = &bytes[HEADER_LEN..];
    if flags & FLAG_GZIP == 0 {
        return Ok((false, body.to_vec()));
    }

    let mut decoder = GzDecoder::new(body);
    let mut inflated = Vec::new();
    decoder
        .read_to_end(&mut inflated)
        .map_err(|e| Error::format(format!("corrupt compressed body: {e}")))?;
    if !decoder.into_inner().is_empty() {
        return Err(Error::format("trailing bytes after compressed body"));
    }
    Ok((true, inflated))
}

fn decode_msgpack<T: DeserializeOwned>(body: &[u8], what: &str) -> Result<(T, usize)> {
    let mut rest = body;
    let value = rmp_serde::decode::from_read(&mut rest)
        .map_err(|e| Error::format(format!("invalid MessagePack {what}: {e}")))?;
    Ok((value, rest.len()))
}

/// Decode a binary document produced by [`encode_binary`], compressed or not.
pub fn decode_binary<D: Document>(bytes: &[u8]) -> Result<D> {
    let (_, body) = binary_body(bytes)?;

    let (header, _) = decode_msgpack::<EnvelopeHeader>(&body, "document")?;
    check_header::<D>(header.version, header.kind)?;

    let (envelope, trailing) = decode_msgpack::<Envelope<D>>(&body, "document body")?;
    if trailing != 0 {
        return Err(Error::format(format!(
            "{trailing} trailing bytes after document"
        )));
    }
    Ok(envelope.body)
}

/// Work out how `bytes` were encoded.
pub fn detect_encoding(bytes: &[u8]) -> Result<Encoding> {
    if bytes.starts_with(MAGIC) {
        let flags = *bytes
            .get(MAGIC.len() + 1)
            .ok_or_else(|| Error::format("binary document truncated inside the header"))?;
        return Ok(Encoding::Binary {
            compressed: flags & FLAG_GZIP != 0,
        });
    }

    match bytes.iter().find(|b| !b.is_ascii_whitespace()) {
        Some(b'{') => Ok(Encoding::Text),
        Some(_) => Err(Error::format("unrecognized document encoding")),
        None => Err(Error::format("empty document")),
    }
}

/// Encode in the requested representation.
pub fn encode<D: Document>(doc: &D, encoding: Encoding) -> Result<Vec<u8>> {
    match encoding {
        Encoding::Text => encode_text(doc).map(String::into_bytes),
        Encoding::Binary { compressed } => encode_binary(doc, compressed),
    }
}

/// Decode any representation, detecting which one was used.
pub fn decode<D: Document>(bytes: &[u8]) -> Result<D> {
    match detect_encoding(bytes)? {
        Encoding::Text => {
            let text = std::str::from_utf8(bytes)
                .map_err(|e| Error::format(format!("JSON document is not UTF-8: {e}")))?;
            decode_text(text)
        }
        Encoding::Binary { .. } => decode_binary(bytes),
    }
}

/// Read the envelope of any document without decoding its body.
pub fn peek(bytes: &[u8]) -> Result<DocumentInfo> {
    let encoding = detect_encoding(bytes)?;
    let header: EnvelopeHeader = match encoding {
        Encoding::Text => serde_json::from_slice(bytes)
            .map_err(|e| Error::format(format!("invalid JSON document: {e}")))?,
        Encoding::Binary { .. } => {
            let (_, body) = binary_body(bytes)?;
            decode_msgpack::<EnvelopeHeader>(&body, "document")?.0
        }
    };

    Ok(DocumentInfo {
        encoding,
        kind: header.kind,
        version: header.version,
    })
}
