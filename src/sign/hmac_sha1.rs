//! HMAC-SHA1 signer used by the Gengo API.

use hmac::{Hmac, Mac};
use sha1::Sha1;
use std::fmt;

use crate::sign::Signer;

type HmacSha1 = Hmac<Sha1>;

/// Signs with HMAC-SHA1 keyed by the account's private key.
///
/// The keyed state is built once; every call clones it, so each signature
/// is computed on its own hasher.
#[derive(Clone)]
pub struct HmacSigner {
    keyed: HmacSha1,
}

impl HmacSigner {
    /// Create a signer for the given private key.
    pub fn new(private_key: impl AsRef<[u8]>) -> Self {
        Self {
            keyed: <HmacSha1 as Mac>::new_from_slice(private_key.as_ref())
                .unwrap_or_else(|_| unreachable!("HMAC accepts keys of any length")),
        }
    }
}

impl Signer for HmacSigner {
    fn sign(&self, data: &str) -> String {
        let mut mac = self.keyed.clone();
        mac.update(data.as_bytes());
        hex::encode(mac.finalize().into_bytes())
    }
}

impl fmt::Debug for HmacSigner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HmacSigner").field("key", &"<redacted>").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::sync::Arc;

    #[test]
    fn test_rfc2202_vector() {
        // RFC 2202 test case 2
        let signer = HmacSigner::new("Jefe");
        assert_eq!(
            signer.sign("what do ya want for nothing?"),
            "effcdf6ae5eb2fa2d27416d5f184df9c259a7c79"
        );
    }

    #[test]
    fn test_deterministic_and_lowercase_hex() {
        let signer = HmacSigner::new("private-key");
        let a = signer.sign("1388534400");
        let b = signer.sign("1388534400");
        assert_eq!(a, b);
        assert_eq!(a.len(), 40);
        assert!(a.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
        assert_ne!(a, signer.sign("1388534401"));
    }

    #[test]
    fn test_key_changes_signature() {
        let ts = "1388534400";
        assert_ne!(HmacSigner::new("one").sign(ts), HmacSigner::new("two").sign(ts));
    }

    #[tokio::test]
    async fn test_concurrent_signing() {
        let signer = Arc::new(HmacSigner::new("shared-secret"));
        let mut handles = Vec::new();
        for i in 0..100u64 {
            let signer = signer.clone();
            handles.push(tokio::spawn(async move {
                let ts = (1_400_000_000 + i).to_string();
                (ts.clone(), signer.sign(&ts))
            }));
        }

        let reference = HmacSigner::new("shared-secret");
        let mut seen = HashSet::new();
        for handle in handles {
            let (ts, sig) = handle.await.unwrap();
            assert_eq!(sig, reference.sign(&ts));
            seen.insert(sig);
        }
        assert_eq!(seen.len(), 100);
    }
}
