//! Password-based encryption algorithm identifiers, as found in PKCS#8
//! `EncryptedPrivateKeyInfo` and PKCS#12 containers.
//!
//! Three generations of encoding are in use: the compositional PBES2 scheme
//! (RFC 8018), the fixed PBES1 combinations and the PKCS#12 (RFC 7292)
//! combinations. [`EncryptionAlgorithm`] normalizes all of them into the
//! parameter set needed to run the key derivation and the cipher: see
//! [`EncryptionAlgorithm::kdf`] and its siblings.
//!
//! ```
//! use {der::Decode, pbe_algorithms::EncryptionAlgorithm};
//!
//! // pbeWithSHAAnd40BitRC2-CBC, salt 0001020304050607, 2048 iterations
//! let der = [
//!     0x30, 0x1c, 0x06, 0x0a, 0x2a, 0x86, 0x48, 0x86, 0xf7, 0x0d, 0x01, 0x0c, 0x01, 0x06, 0x30,
//!     0x0e, 0x04, 0x08, 0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x02, 0x02, 0x08, 0x00,
//! ];
//! let algorithm = EncryptionAlgorithm::from_der(&der)?;
//! assert_eq!(algorithm.kdf()?, "pkcs12_kdf");
//! assert_eq!(algorithm.cipher()?, "rc2");
//! assert_eq!(algorithm.key_length()?, 5);
//! assert_eq!(algorithm.iv()?, None);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod asn1;
mod error;
pub mod oids;
mod resolve;

pub use self::{
    asn1::{
        AlgorithmIdentifier, DigestAlgorithm, EncryptionAlgorithm, HmacAlgorithm, KdfAlgorithm,
        MacAlgorithm, SignedDigestAlgorithm,
    },
    error::{Error, Result},
    oids::{OidCategory, OidSymbol},
};

/// Like `anyhow::ensure!`, but returns the given error value.
#[macro_export]
macro_rules! ensure_err {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            return Err($err.into());
        }
    };
}
