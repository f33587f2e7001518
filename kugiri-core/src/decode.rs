//! Scalar-value decoding from encoded byte buffers
//!
//! The decoder walks a source buffer one scalar at a time, reporting the
//! source span each scalar was decoded from. Malformed sequences are either
//! replaced with U+FFFD (one replacement per maximal invalid subsequence)
//! or surfaced as [`Error::Decode`], depending on policy. Decoding can be
//! resumed from any recorded source offset; the resume point snaps back to
//! the nearest safe unit boundary.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::offset_map::OffsetMap;

/// Source encodings accepted by [`Decoder`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextEncoding {
    /// UTF-8 (the default)
    #[default]
    Utf8,
    /// UTF-16, little-endian units
    Utf16Le,
    /// UTF-16, big-endian units
    Utf16Be,
}

impl TextEncoding {
    /// Width of one code unit in bytes.
    pub fn unit_len(self) -> usize {
        match self {
            TextEncoding::Utf8 => 1,
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => 2,
        }
    }
}

/// How malformed sequences are handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodePolicy {
    /// Substitute U+FFFD for each maximal invalid subsequence and continue.
    #[default]
    Replace,
    /// Abort with [`Error::Decode`] at the first invalid sequence.
    Strict,
}

/// One decoded scalar and the source bytes it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedScalar {
    /// The scalar value. U+FFFD when a malformed sequence was replaced.
    pub value: char,
    /// Byte span of the originating units in the source buffer.
    pub source: Range<usize>,
}

/// Incremental decoder over an encoded buffer.
///
/// Yields `Result<DecodedScalar>`; under [`DecodePolicy::Strict`] the first
/// malformed sequence yields an error and ends iteration.
#[derive(Debug, Clone)]
pub struct Decoder<'a> {
    bytes: &'a [u8],
    encoding: TextEncoding,
    policy: DecodePolicy,
    pos: usize,
    failed: bool,
}

impl<'a> Decoder<'a> {
    /// Decoder positioned at the start of the buffer.
    pub fn new(bytes: &'a [u8], encoding: TextEncoding, policy: DecodePolicy) -> Self {
        Decoder {
            bytes,
            encoding,
            policy,
            pos: 0,
            failed: false,
        }
    }

    /// Decoder resumed at `offset`, snapped back to a safe unit boundary.
    ///
    /// For UTF-8 the offset moves back over continuation bytes to the
    /// nearest lead byte; for UTF-16 it rounds down to an even offset and
    /// then back over a trailing surrogate unit.
    pub fn resume_at(
        bytes: &'a [u8],
        encoding: TextEncoding,
        policy: DecodePolicy,
        offset: usize,
    ) -> Self {
        let mut decoder = Decoder::new(bytes, encoding, policy);
        decoder.pos = snap_to_boundary(bytes, encoding, offset);
        decoder
    }

    /// Current source offset, in bytes.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn read_unit(&self, at: usize) -> Option<u16> {
        let hi_lo = self.bytes.get(at..at + 2)?;
        Some(match self.encoding {
            TextEncoding::Utf16Le => u16::from_le_bytes([hi_lo[0], hi_lo[1]]),
            TextEncoding::Utf16Be => u16::from_be_bytes([hi_lo[0], hi_lo[1]]),
            TextEncoding::Utf8 => unreachable!("unit reads are UTF-16 only"),
        })
    }

    /// Decode the scalar at `self.pos`, or describe the invalid span there.
    fn decode_next(&self) -> std::result::Result<(char, usize), usize> {
        match self.encoding {
            TextEncoding::Utf8 => decode_utf8(self.bytes, self.pos),
            TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
                let u0 = match self.read_unit(self.pos) {
                    Some(u) => u,
                    // Odd trailing byte
                    None => return Err(self.bytes.len() - self.pos),
                };
                match u0 {
                    0xD800..=0xDBFF => {
                        let Some(u1) = self.read_unit(self.pos + 2) else {
                            return Err(2);
                        };
                        if !(0xDC00..=0xDFFF).contains(&u1) {
                            return Err(2);
                        }
                        let cp = 0x10000
                            + ((u32::from(u0) - 0xD800) << 10)
                            + (u32::from(u1) - 0xDC00);
                        // Pairs always land in the supplementary planes
                        Ok((char::from_u32(cp).ok_or(2usize)?, 4))
                    }
                    0xDC00..=0xDFFF => Err(2),
                    _ => Ok((char::from_u32(u32::from(u0)).ok_or(2usize)?, 2)),
                }
            }
        }
    }
}

impl Iterator for Decoder<'_> {
    type Item = Result<DecodedScalar>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.bytes.len() {
            return None;
        }
        let start = self.pos;
        match self.decode_next() {
            Ok((value, len)) => {
                self.pos += len;
                Some(Ok(DecodedScalar {
                    value,
                    source: start..self.pos,
                }))
            }
            Err(bad_len) => match self.policy {
                DecodePolicy::Replace => {
                    self.pos += bad_len;
                    Some(Ok(DecodedScalar {
                        value: char::REPLACEMENT_CHARACTER,
                        source: start..self.pos,
                    }))
                }
                DecodePolicy::Strict => {
                    self.failed = true;
                    Some(Err(Error::Decode {
                        position: start,
                        byte_len: bad_len,
                    }))
                }
            },
        }
    }
}

/// Snap `offset` back to the nearest decode-safe boundary.
pub(crate) fn snap_to_boundary(bytes: &[u8], encoding: TextEncoding, offset: usize) -> usize {
    let mut at = offset.min(bytes.len());
    match encoding {
        TextEncoding::Utf8 => {
            while at > 0 && at < bytes.len() && bytes[at] & 0xC0 == 0x80 {
                at -= 1;
            }
        }
        TextEncoding::Utf16Le | TextEncoding::Utf16Be => {
            at &= !1;
            if at >= 2 && at + 1 < bytes.len() {
                let unit = |i: usize| -> u16 {
                    match encoding {
                        TextEncoding::Utf16Le => u16::from_le_bytes([bytes[i], bytes[i + 1]]),
                        _ => u16::from_be_bytes([bytes[i], bytes[i + 1]]),
                    }
                };
                if (0xDC00..=0xDFFF).contains(&unit(at))
                    && (0xD800..=0xDBFF).contains(&unit(at - 2))
                {
                    at -= 2;
                }
            }
        }
    }
    at
}

/// Decode one UTF-8 scalar at `pos`, or the length of the maximal invalid
/// subsequence there.
fn decode_utf8(bytes: &[u8], pos: usize) -> std::result::Result<(char, usize), usize> {
    let b0 = bytes[pos];
    if b0 < 0x80 {
        return Ok((b0 as char, 1));
    }
    // (required continuations, first-continuation range)
    let (need, first) = match b0 {
        0xC2..=0xDF => (1, 0x80..=0xBF),
        0xE0 => (2, 0xA0..=0xBF),
        0xE1..=0xEC | 0xEE..=0xEF => (2, 0x80..=0xBF),
        // Excludes surrogate encodings
        0xED => (2, 0x80..=0x9F),
        0xF0 => (3, 0x90..=0xBF),
        0xF1..=0xF3 => (3, 0x80..=0xBF),
        0xF4 => (3, 0x80..=0x8F),
        // Stray continuation or out-of-range lead
        _ => return Err(1),
    };
    let mut cp = u32::from(b0) & (0x7F >> need);
    for i in 1..=need {
        let Some(&b) = bytes.get(pos + i) else {
            // Truncated at end of input; the valid prefix is the subpart
            return Err(i);
        };
        let ok = if i == 1 {
            first.contains(&b)
        } else {
            (0x80..=0xBF).contains(&b)
        };
        if !ok {
            return Err(i);
        }
        cp = (cp << 6) | (u32::from(b) & 0x3F);
    }
    match char::from_u32(cp) {
        Some(c) => Ok((c, need + 1)),
        None => Err(need + 1),
    }
}

/// Drive a decoder to completion, producing content and its offset map.
pub(crate) fn decode_full(
    bytes: &[u8],
    encoding: TextEncoding,
    policy: DecodePolicy,
) -> Result<(String, OffsetMap)> {
    let mut content = String::with_capacity(bytes.len());
    let mut map = OffsetMap::with_capacity(bytes.len() / encoding.unit_len());
    for scalar in Decoder::new(bytes, encoding, policy) {
        let scalar = scalar?;
        map.push(content.len(), scalar.source.start);
        content.push(scalar.value);
    }
    map.finish(content.len(), bytes.len());
    Ok((content, map))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(bytes: &[u8], encoding: TextEncoding) -> String {
        Decoder::new(bytes, encoding, DecodePolicy::Replace)
            .map(|s| s.unwrap().value)
            .collect()
    }

    #[test]
    fn test_utf8_clean() {
        assert_eq!(collect("héllo".as_bytes(), TextEncoding::Utf8), "héllo");
    }

    #[test]
    fn test_utf8_stray_continuation_replaced() {
        assert_eq!(collect(&[0x61, 0x80, 0x62], TextEncoding::Utf8), "a\u{FFFD}b");
    }

    #[test]
    fn test_utf8_stray_continuation_strict() {
        let mut decoder = Decoder::new(&[0x61, 0x80, 0x62], TextEncoding::Utf8, DecodePolicy::Strict);
        assert_eq!(
            decoder.next().unwrap().unwrap(),
            DecodedScalar {
                value: 'a',
                source: 0..1
            }
        );
        match decoder.next().unwrap() {
            Err(Error::Decode { position, byte_len }) => {
                assert_eq!(position, 1);
                assert_eq!(byte_len, 1);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
        // Strict failure ends iteration
        assert!(decoder.next().is_none());
    }

    #[test]
    fn test_utf8_maximal_subpart() {
        // E1 80 is a valid prefix; the 41 terminates it early. One
        // replacement covers the two-byte subpart.
        assert_eq!(collect(&[0xE1, 0x80, 0x41], TextEncoding::Utf8), "\u{FFFD}A");
        // F0 80: the 80 is not a valid first continuation for F0, so the
        // subpart is the lead byte alone.
        assert_eq!(
            collect(&[0xF0, 0x80, 0x41], TextEncoding::Utf8),
            "\u{FFFD}\u{FFFD}A"
        );
    }

    #[test]
    fn test_utf8_truncated_tail() {
        // Truncated three-byte sequence at end of input: one replacement
        assert_eq!(collect(&[0x61, 0xE2, 0x82], TextEncoding::Utf8), "a\u{FFFD}");
    }

    #[test]
    fn test_utf8_surrogate_encoding_rejected() {
        // ED A0 80 would encode U+D800
        assert_eq!(
            collect(&[0xED, 0xA0, 0x80], TextEncoding::Utf8),
            "\u{FFFD}\u{FFFD}\u{FFFD}"
        );
    }

    #[test]
    fn test_utf16le_basic() {
        let bytes = [0x48, 0x00, 0x69, 0x00]; // "Hi"
        assert_eq!(collect(&bytes, TextEncoding::Utf16Le), "Hi");
    }

    #[test]
    fn test_utf16_surrogate_pair() {
        // U+1F600 = D83D DE00
        let le = [0x3D, 0xD8, 0x00, 0xDE];
        assert_eq!(collect(&le, TextEncoding::Utf16Le), "\u{1F600}");
        let be = [0xD8, 0x3D, 0xDE, 0x00];
        assert_eq!(collect(&be, TextEncoding::Utf16Be), "\u{1F600}");
    }

    #[test]
    fn test_utf16_unpaired_surrogate() {
        // Lone high surrogate followed by a normal unit
        let bytes = [0x3D, 0xD8, 0x41, 0x00];
        assert_eq!(collect(&bytes, TextEncoding::Utf16Le), "\u{FFFD}A");
        let mut strict = Decoder::new(&bytes, TextEncoding::Utf16Le, DecodePolicy::Strict);
        match strict.next().unwrap() {
            Err(Error::Decode { position, byte_len }) => {
                assert_eq!(position, 0);
                assert_eq!(byte_len, 2);
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[test]
    fn test_utf16_odd_trailing_byte() {
        let bytes = [0x41, 0x00, 0x42];
        assert_eq!(collect(&bytes, TextEncoding::Utf16Le), "A\u{FFFD}");
    }

    #[test]
    fn test_source_spans() {
        let scalars: Vec<_> = Decoder::new("a€".as_bytes(), TextEncoding::Utf8, DecodePolicy::Replace)
            .map(|s| s.unwrap())
            .collect();
        assert_eq!(scalars[0].source, 0..1);
        assert_eq!(scalars[1].source, 1..4);
    }

    #[test]
    fn test_resume_snaps_utf8() {
        let bytes = "a€b".as_bytes(); // € at 1..4
        for offset in 1..=3 {
            let decoder = Decoder::resume_at(bytes, TextEncoding::Utf8, DecodePolicy::Replace, offset);
            assert_eq!(decoder.position(), 1, "offset {offset}");
        }
        let decoder = Decoder::resume_at(bytes, TextEncoding::Utf8, DecodePolicy::Replace, 4);
        assert_eq!(decoder.position(), 4);
    }

    #[test]
    fn test_resume_snaps_utf16() {
        // "a" + U+1F600: units 0061, D83D, DE00
        let bytes = [0x61, 0x00, 0x3D, 0xD8, 0x00, 0xDE];
        // Odd offset rounds down
        assert_eq!(
            Decoder::resume_at(&bytes, TextEncoding::Utf16Le, DecodePolicy::Replace, 3).position(),
            2
        );
        // Landing on the low surrogate steps back over the pair
        assert_eq!(
            Decoder::resume_at(&bytes, TextEncoding::Utf16Le, DecodePolicy::Replace, 4).position(),
            2
        );
    }

    #[test]
    fn test_decode_full_offsets() {
        let (content, map) = decode_full(&[0x61, 0x80, 0x62], TextEncoding::Utf8, DecodePolicy::Replace)
            .unwrap();
        assert_eq!(content, "a\u{FFFD}b");
        assert_eq!(map.scalar_count(), 3);
        assert_eq!(map.source_offset(1), Some(1));
        assert_eq!(map.source_offset(2), Some(2));
        // Content offsets account for the three-byte replacement char
        assert_eq!(map.content_offset(2), 4);
    }
}
