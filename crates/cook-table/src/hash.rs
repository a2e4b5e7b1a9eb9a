//! 32-bit FNV-1a hashing for mapping byte strings into the key space.

/// FNV-1a 32-bit offset basis.
pub const FNV_OFFSET_BASIS: u32 = 2_166_136_261;

/// FNV-1a 32-bit prime.
pub const FNV_PRIME: u32 = 16_777_619;

/// Hash `bytes` with 32-bit FNV-1a.
///
/// Each byte is XORed into the running hash, which is then multiplied by
/// [`FNV_PRIME`] (wrapping). The result may be `0`, which
/// [`ProbeTable`](crate::ProbeTable) rejects as a key; callers must pick
/// a substitute for that case.
pub fn fnv1a(bytes: &[u8]) -> u32 {
    bytes.iter().fold(FNV_OFFSET_BASIS, |hash, &byte| {
        (hash ^ u32::from(byte)).wrapping_mul(FNV_PRIME)
    })
}

/// Hash the UTF-8 bytes of `s` with [`fnv1a`].
pub fn fnv1a_str(s: &str) -> u32 {
    fnv1a(s.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(fnv1a(&[]), 0x811c_9dc5);
    }

    #[test]
    fn published_vectors() {
        assert_eq!(fnv1a_str("a"), 0xe40c_292c);
        assert_eq!(fnv1a_str("foobar"), 0xbf9c_f968);
    }

    #[test]
    fn order_matters() {
        assert_ne!(fnv1a(b"ab"), fnv1a(b"ba"));
    }
}
