//! Operations over whole encoded byte sequences.
//!
//! Strings here are plain `&[u8]` slices; the end of the slice is the end of
//! the string and a zero byte is ordinary data. Each operation walks the
//! slice symbol by symbol via [`symbol_len`], checking every declared width
//! against the remaining input before trusting it.

use core::cmp::Ordering;
use core::iter::FusedIterator;

use crate::codec::{decode_codepoint, encode_codepoint, symbol_len, symbol_valid};
use crate::error::Utf8Error;

/// Number of codepoints encoded in `s`.
///
/// Counts one per symbol regardless of width. Only leading bytes are
/// inspected; continuation bytes are skipped, not validated (use
/// [`string_valid`] for that).
///
/// # Errors
///
/// [`Utf8Error::InvalidSymbol`] on the first malformed leading byte or on a
/// final symbol truncated by the end of the slice.
pub fn string_length(s: &[u8]) -> Result<usize, Utf8Error> {
    let mut count = 0;
    let mut at = 0;
    while at < s.len() {
        let width = symbol_len(s[at])?;
        if width > s.len() - at {
            return Err(Utf8Error::InvalidSymbol);
        }
        at += width;
        count += 1;
    }
    Ok(count)
}

/// Compares two encoded strings symbol by symbol.
///
/// Ordering contract, preserved from the reference behavior: at each step
/// the symbol *widths* are compared first and the wider-encoded symbol sorts
/// greater regardless of codepoint magnitude; only symbols of equal width
/// are decoded and compared by value. This is not plain codepoint
/// lexicographic order (overlong encodings sort after their canonical
/// forms). A string that ends while the other continues is the lesser.
///
/// Identity-equal slices (same address, same length) short-circuit to
/// `Equal` without scanning — and therefore without validity diagnostics.
///
/// # Errors
///
/// [`Utf8Error::InvalidSymbol`] if either string holds a malformed or
/// truncated symbol at the current position.
pub fn compare(xs: &[u8], ys: &[u8]) -> Result<Ordering, Utf8Error> {
    if core::ptr::eq(xs, ys) {
        return Ok(Ordering::Equal);
    }

    let mut xi = 0;
    let mut yi = 0;
    while xi < xs.len() && yi < ys.len() {
        let x_width = symbol_len(xs[xi])?;
        let y_width = symbol_len(ys[yi])?;
        if x_width > xs.len() - xi || y_width > ys.len() - yi {
            return Err(Utf8Error::InvalidSymbol);
        }
        match x_width.cmp(&y_width) {
            Ordering::Equal => {
                let (x_cp, _) = decode_codepoint(&xs[xi..])?;
                let (y_cp, _) = decode_codepoint(&ys[yi..])?;
                match x_cp.cmp(&y_cp) {
                    Ordering::Equal => {}
                    unequal => return Ok(unequal),
                }
            }
            unequal => return Ok(unequal),
        }
        xi += x_width;
        yi += y_width;
    }
    Ok((xs.len() - xi).cmp(&(ys.len() - yi)))
}

/// Byte offset of the first symbol in `s` encoding `codepoint`.
///
/// The target is encoded once up front; the scan then matches raw bytes
/// against symbols of the same width instead of decoding each one. A match
/// is returned immediately, even if bytes after it are malformed; a
/// malformed symbol *before* any match aborts the search.
///
/// ```
/// use utf8sym::find_codepoint;
///
/// assert_eq!(find_codepoint(b"Yeah", u32::from('a')), Ok(Some(2)));
/// assert_eq!(find_codepoint(b"Yeah", u32::from('Z')), Ok(None));
/// ```
///
/// # Errors
///
/// [`Utf8Error::InvalidCodepoint`] if the target itself is out of range
/// (fail fast, nothing scanned); [`Utf8Error::InvalidSymbol`] if the scan
/// hits a malformed symbol first.
pub fn find_codepoint(s: &[u8], codepoint: u32) -> Result<Option<usize>, Utf8Error> {
    let target = encode_codepoint(codepoint)?;
    let mut at = 0;
    while at < s.len() {
        let width = symbol_len(s[at])?;
        if width > s.len() - at {
            return Err(Utf8Error::InvalidSymbol);
        }
        if width == target.width() && s[at..at + width] == target[..] {
            return Ok(Some(at));
        }
        at += width;
    }
    Ok(None)
}

/// Whether `s` consists entirely of well-formed symbols.
///
/// Pure predicate: runs the width detector and [`symbol_valid`] at each
/// symbol boundary, reporting nothing. False at the first malformed or
/// truncated symbol, true when the end of the slice is reached cleanly.
#[must_use]
pub fn string_valid(s: &[u8]) -> bool {
    let mut at = 0;
    while at < s.len() {
        let Ok(width) = symbol_len(s[at]) else {
            return false;
        };
        if !symbol_valid(&s[at..]) {
            return false;
        }
        at += width;
    }
    true
}

/// Iterates the codepoints of `s` with their byte offsets.
///
/// ```
/// use utf8sym::codepoints;
///
/// let decoded: Result<Vec<_>, _> = codepoints("a†".as_bytes()).collect();
/// assert_eq!(decoded.unwrap(), [(0, 0x61), (1, 0x2020)]);
/// ```
pub fn codepoints(s: &[u8]) -> Codepoints<'_> {
    Codepoints {
        rest: s,
        offset: 0,
        failed: false,
    }
}

/// Strict decoding iterator over an encoded byte sequence.
///
/// Yields `(byte_offset, codepoint)` per symbol; the first malformed symbol
/// yields its error and fuses the iterator.
#[derive(Debug, Clone)]
pub struct Codepoints<'a> {
    rest: &'a [u8],
    offset: usize,
    failed: bool,
}

impl Iterator for Codepoints<'_> {
    type Item = Result<(usize, u32), Utf8Error>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.rest.is_empty() {
            return None;
        }
        match decode_codepoint(self.rest) {
            Ok((codepoint, width)) => {
                let at = self.offset;
                self.offset += width;
                self.rest = &self.rest[width..];
                Some(Ok((at, codepoint)))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

impl FusedIterator for Codepoints<'_> {}
