//! MD5 helpers for the salt-and-counter puzzles

use md5::{Context, Digest};

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex of the MD5 digest of `data`.
pub fn md5_hex(data: &[u8]) -> String {
    format!("{:x}", md5::compute(data))
}

/// Write the lowercase hex of `digest` into a 32-byte buffer.
pub fn hex_into(digest: &Digest, out: &mut [u8; 32]) {
    for (i, byte) in digest.0.iter().enumerate() {
        out[2 * i] = HEX[(byte >> 4) as usize];
        out[2 * i + 1] = HEX[(byte & 0x0f) as usize];
    }
}

/// Hash `input` once, then re-hash the lowercase hex `rounds` more times.
pub fn stretched_md5_hex(input: &str, rounds: usize) -> String {
    let mut buf = [0u8; 32];
    hex_into(&md5::compute(input.as_bytes()), &mut buf);
    for _ in 0..rounds {
        let digest = md5::compute(buf);
        hex_into(&digest, &mut buf);
    }
    String::from_utf8_lossy(&buf).into_owned()
}

/// Whether the hex form of `digest` starts with `zeros` zero nibbles.
pub fn leading_zero_nibbles(digest: &Digest, zeros: usize) -> bool {
    (0..zeros).all(|i| {
        let byte = digest.0[i / 2];
        let nibble = if i % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        nibble == 0
    })
}

/// Hashes `prefix` followed by a decimal counter without re-hashing the prefix.
#[derive(Clone)]
pub struct SaltedHasher {
    prefix: Context,
}

impl SaltedHasher {
    pub fn new(salt: &str) -> Self {
        let mut prefix = Context::new();
        prefix.consume(salt.as_bytes());
        Self { prefix }
    }

    pub fn digest(&self, counter: u64) -> Digest {
        let mut ctx = self.prefix.clone();
        ctx.consume(counter.to_string().as_bytes());
        ctx.compute()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_md5_hex() {
        assert_eq!(md5_hex(b""), "d41d8cd98f00b204e9800998ecf8427e");
        assert_eq!(md5_hex(b"abc18"), md5_hex("abc18".as_bytes()));
    }

    #[test]
    fn test_salted_matches_plain() {
        let hasher = SaltedHasher::new("abcdef");
        let digest = hasher.digest(609043);
        assert_eq!(format!("{:x}", digest), md5_hex(b"abcdef609043"));
        assert!(leading_zero_nibbles(&digest, 5));
        assert!(!leading_zero_nibbles(&hasher.digest(609042), 5));
    }

    #[test]
    fn test_stretched() {
        assert_eq!(stretched_md5_hex("abc0", 0), md5_hex(b"abc0"));
        assert_eq!(
            stretched_md5_hex("abc0", 2016),
            "a107ff634856bb300138cac6568c0f24"
        );
    }
}
