//! FNV-1a string hashing used for stable voxel type ids.

const FNV64_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV64_PRIME: u64 = 0x0000_0100_0000_01b3;
const FNV32_OFFSET: u32 = 0x811c_9dc5;
const FNV32_PRIME: u32 = 0x0100_0193;

/// 64-bit FNV-1a over the UTF-8 bytes of `s`.
#[inline]
pub const fn fnv1a64(s: &str) -> u64 {
    let bytes = s.as_bytes();
    let mut h = FNV64_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        h ^= bytes[i] as u64;
        h = h.wrapping_mul(FNV64_PRIME);
        i += 1;
    }
    h
}

/// 32-bit FNV-1a over the UTF-8 bytes of `s`.
#[inline]
pub const fn fnv1a32(s: &str) -> u32 {
    let bytes = s.as_bytes();
    let mut h = FNV32_OFFSET;
    let mut i = 0;
    while i < bytes.len() {
        h ^= bytes[i] as u32;
        h = h.wrapping_mul(FNV32_PRIME);
        i += 1;
    }
    h
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_vectors_64() {
        assert_eq!(fnv1a64(""), 0xcbf29ce484222325);
        assert_eq!(fnv1a64("a"), 0xaf63dc4c8601ec8c);
        assert_eq!(fnv1a64("foobar"), 0x85944171f73967e8);
    }

    #[test]
    fn known_vectors_32() {
        assert_eq!(fnv1a32(""), 0x811c9dc5);
        assert_eq!(fnv1a32("a"), 0xe40c292c);
        assert_eq!(fnv1a32("foobar"), 0xbf9cf968);
    }

    #[test]
    fn usable_in_const_context() {
        const STONE: u64 = fnv1a64("stone");
        assert_eq!(STONE, fnv1a64("stone"));
        assert_ne!(STONE, fnv1a64("stones"));
    }
}
