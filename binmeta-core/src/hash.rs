//! Case-insensitive 32-bit FNV-1a hashing.
//!
//! Every class and field in the binary property format is identified only by
//! this digest of its lower-cased name, so the function must match the
//! runtime bit-for-bit. Characters are folded to lower case and then fed to
//! the hash as UTF-16 code units, one unit per round.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 0x811C_9DC5;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hashes `text` case-insensitively.
///
/// The empty string hashes to [`FNV_OFFSET_BASIS`].
///
/// # Example
/// ```
/// use binmeta_core::hash::fnv1a_32;
///
/// assert_eq!(fnv1a_32("Foo"), fnv1a_32("foo"));
/// assert_eq!(fnv1a_32(""), 2_166_136_261);
/// ```
#[must_use]
pub fn fnv1a_32(text: &str) -> u32 {
    fnv1a_32_raw(&text.to_lowercase())
}

/// Hashes `text` exactly as given, without case folding.
#[must_use]
pub fn fnv1a_32_raw(text: &str) -> u32 {
    text.encode_utf16().fold(FNV_OFFSET_BASIS, |hash, unit| {
        (hash ^ u32::from(unit)).wrapping_mul(FNV_PRIME)
    })
}
