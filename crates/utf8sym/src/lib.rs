//! Byte-level UTF-8 symbol codec.
//!
//! Operates on borrowed `&[u8]` byte sequences and `u32` codepoints:
//! encoding single codepoints into 1–4 byte symbols, decoding symbols back,
//! checking validity, and counting, comparing and searching encoded strings.
//! Validity is purely structural (leading-byte width tags and `10xxxxxx`
//! continuation bytes); the crate deliberately knows nothing about
//! normalization, grapheme clusters or locales.
//!
//! All operations are pure functions over caller-supplied slices. Malformed
//! input is reported through [`Utf8Error`] and never panics, hangs or reads
//! out of bounds. The codec itself never allocates; callers that need a
//! dynamically sized destination can assemble output in a [`ByteBuf`].

#![no_std]
#![allow(missing_docs)]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod bytebuf;
mod codec;
mod error;
mod string;


pub use bytebuf::ByteBuf;
pub use codec::{
    MAX_CODEPOINT, MAX_SYMBOL_LEN, Symbol, codepoint_len, decode_codepoint, encode_codepoint,
    encode_many, symbol_len, symbol_valid,
};
pub use error::Utf8Error;
pub use string::{Codepoints, codepoints, compare, find_codepoint, string_length, string_valid};
