//! Resolution of an [`EncryptionAlgorithm`] into the parameters needed to
//! derive a key and run the cipher.
//!
//! Three encodings are normalized:
//!
//! * PBES2 (RFC 8018 6.2): the KDF and the cipher are themselves algorithm
//!   identifiers, and most properties are read from them.
//! * PBES1 (RFC 8018 6.1) and PKCS#12 (RFC 7292 C): the symbol fixes the KDF,
//!   the digest and the cipher; only salt and iteration count are encoded.
//! * Bare ciphers, as found nested in PBES2.
//!
//! Every property is computed on demand and fails independently.

use {
    crate::{
        asn1::{EncryptionAlgorithm, EncryptionParameters, Pbes1Params, Pbes2Params, Pbkdf2Params},
        ensure_err, Error, OidSymbol, Result,
    },
    tracing::warn,
};

/// Cipher, key length and block size of the fixed schemes. The block size of
/// RC4 is zero, it is a stream cipher.
const LEGACY_SCHEMES: [(&str, &str, u64, u64); 12] = [
    ("pbes1_md2_des", "des", 8, 8),
    ("pbes1_md5_des", "des", 8, 8),
    ("pbes1_md2_rc2", "rc2", 8, 8),
    ("pbes1_md5_rc2", "rc2", 8, 8),
    ("pbes1_sha1_des", "des", 8, 8),
    ("pbes1_sha1_rc2", "rc2", 8, 8),
    ("pkcs12_sha1_rc4_128", "rc4", 16, 0),
    ("pkcs12_sha1_rc4_40", "rc4", 5, 0),
    ("pkcs12_sha1_tripledes_3key", "tripledes", 24, 8),
    ("pkcs12_sha1_tripledes_2key", "tripledes", 16, 8),
    ("pkcs12_sha1_rc2_128", "rc2", 16, 8),
    ("pkcs12_sha1_rc2_40", "rc2", 5, 8),
];

enum Scheme<'a> {
    Pbes2(&'a Pbes2Params),
    Legacy(Legacy),
    Cipher(Cipher),
}

/// A fixed PBES1 or PKCS#12 combination, `<family>_<digest>_<cipher>`.
struct Legacy {
    kdf:        &'static str,
    digest:     &'static str,
    cipher:     &'static str,
    key_length: u64,
    block_size: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Cipher {
    Des,
    TripleDes3Key,
    Rc2,
    Rc5,
    Aes128,
    Aes192,
    Aes256,
}

impl EncryptionAlgorithm {
    /// Name of the key derivation function: `pbkdf1`, `pbkdf2` or
    /// `pkcs12_kdf`. For PBES2 this is the symbol of the nested KDF, which is
    /// the raw OID if it is not registered.
    pub fn kdf(&self) -> Result<OidSymbol> {
        match self.scheme()? {
            Scheme::Pbes2(params) => Ok(params.key_derivation_func.symbol()),
            Scheme::Legacy(legacy) => Ok(OidSymbol::Known(legacy.kdf)),
            Scheme::Cipher(cipher) => Err(cipher.missing_kdf()),
        }
    }

    /// The HMAC (PBKDF2 pseudorandom function) or digest used by the KDF.
    pub fn kdf_hmac(&self) -> Result<OidSymbol> {
        match self.scheme()? {
            Scheme::Pbes2(params) => Ok(pbkdf2(params)?.prf.symbol()),
            Scheme::Legacy(legacy) => Ok(OidSymbol::Known(legacy.digest)),
            Scheme::Cipher(cipher) => Err(cipher.missing_kdf()),
        }
    }

    pub fn kdf_salt(&self) -> Result<&[u8]> {
        match self.scheme()? {
            Scheme::Pbes2(params) => pbkdf2(params)?.salt.specified().ok_or(Error::UnusableSalt),
            Scheme::Legacy(_) => Ok(self.pbes1_params()?.salt.as_bytes()),
            Scheme::Cipher(cipher) => Err(cipher.missing_kdf()),
        }
    }

    pub fn kdf_iterations(&self) -> Result<u64> {
        match self.scheme()? {
            Scheme::Pbes2(params) => Ok(pbkdf2(params)?.iteration_count),
            Scheme::Legacy(_) => Ok(self.pbes1_params()?.iterations),
            Scheme::Cipher(cipher) => Err(cipher.missing_kdf()),
        }
    }

    /// Key length in bytes. For PBES2 the explicit PBKDF2 `keyLength` wins,
    /// otherwise it is taken from the nested cipher.
    pub fn key_length(&self) -> Result<u64> {
        match self.scheme()? {
            Scheme::Pbes2(params) => match pbkdf2(params)?.key_length {
                Some(key_length) => Ok(key_length),
                None => params.encryption_scheme.key_length(),
            },
            Scheme::Legacy(legacy) => Ok(legacy.key_length),
            Scheme::Cipher(Cipher::Rc2) => {
                let params = self.cipher_params(|params| match params {
                    EncryptionParameters::Rc2(params) => Some(params),
                    _ => None,
                })?;
                rc2_key_length(params.rc2_parameter_version)
            }
            Scheme::Cipher(cipher) => cipher.key_length(),
        }
    }

    /// Cipher family: `des`, `tripledes`, `rc2`, `rc4`, `rc5` or `aes`. The
    /// variant follows from [`Self::key_length`].
    pub fn cipher(&self) -> Result<&'static str> {
        match self.scheme()? {
            Scheme::Pbes2(params) => params.encryption_scheme.cipher(),
            Scheme::Legacy(legacy) => Ok(legacy.cipher),
            Scheme::Cipher(cipher) => Ok(cipher.family()),
        }
    }

    /// Block size in bytes, zero for a stream cipher.
    ///
    /// The RC5 block size is encoded in bits and is expected to be a multiple
    /// of 8; other values are divided down and logged.
    pub fn block_size(&self) -> Result<u64> {
        match self.scheme()? {
            Scheme::Pbes2(params) => params.encryption_scheme.block_size(),
            Scheme::Legacy(legacy) => Ok(legacy.block_size),
            Scheme::Cipher(Cipher::Rc5) => {
                let params = self.cipher_params(|params| match params {
                    EncryptionParameters::Rc5(params) => Some(params),
                    _ => None,
                })?;
                let bits = params.block_size_in_bits;
                if bits % 8 != 0 {
                    warn!(bits, "RC5 block size is not a whole number of bytes");
                }
                Ok(bits / 8)
            }
            Scheme::Cipher(cipher) => Ok(cipher.block_size()),
        }
    }

    /// The initialization vector. `None` for PBES1 and PKCS#12, where the IV
    /// is derived from the password, and for ciphers encoded without one.
    pub fn iv(&self) -> Result<Option<&[u8]>> {
        match self.scheme()? {
            Scheme::Pbes2(params) => params.encryption_scheme.iv(),
            Scheme::Legacy(_) => Ok(None),
            Scheme::Cipher(Cipher::Rc2) => Ok(Some(
                self.cipher_params(|params| match params {
                    EncryptionParameters::Rc2(params) => Some(&params.iv),
                    _ => None,
                })?
                .as_bytes(),
            )),
            Scheme::Cipher(Cipher::Rc5) => Ok(self
                .cipher_params(|params| match params {
                    EncryptionParameters::Rc5(params) => Some(params),
                    _ => None,
                })?
                .iv
                .as_ref()
                .map(|iv| iv.as_bytes())),
            Scheme::Cipher(_) => Ok(match self.typed_parameters() {
                Some(EncryptionParameters::Iv(iv)) => Some(iv.as_bytes()),
                _ => None,
            }),
        }
    }

    fn scheme(&self) -> Result<Scheme<'_>> {
        let symbol = match self.symbol() {
            OidSymbol::Known(symbol) => symbol,
            OidSymbol::Unknown(oid) => {
                return Err(Error::UnrecognizedAlgorithm {
                    algorithm: oid.to_string(),
                })
            }
        };
        if symbol == "pbes2" {
            return match self.typed_parameters() {
                Some(EncryptionParameters::Pbes2(params)) => Ok(Scheme::Pbes2(params)),
                _ => Err(self.missing_parameters()),
            };
        }
        if let Some(cipher) = Cipher::from_symbol(symbol) {
            return Ok(Scheme::Cipher(cipher));
        }
        Legacy::from_symbol(symbol)
            .map(Scheme::Legacy)
            .ok_or_else(|| Error::UnrecognizedAlgorithm {
                algorithm: symbol.to_owned(),
            })
    }

    fn pbes1_params(&self) -> Result<&Pbes1Params> {
        self.cipher_params(|params| match params {
            EncryptionParameters::Pbes1(params) => Some(params),
            _ => None,
        })
    }

    fn cipher_params<'a, T>(
        &'a self,
        select: impl FnOnce(&'a EncryptionParameters) -> Option<&'a T>,
    ) -> Result<&'a T> {
        self.typed_parameters()
            .and_then(select)
            .ok_or_else(|| self.missing_parameters())
    }

    fn missing_parameters(&self) -> Error {
        Error::MissingParameters {
            algorithm: self.symbol().to_string(),
        }
    }
}

/// PBES2 properties other than `kdf` are only defined for PBKDF2.
fn pbkdf2(params: &Pbes2Params) -> Result<&Pbkdf2Params> {
    let kdf = &params.key_derivation_func;
    kdf.pbkdf2().ok_or_else(|| match kdf.symbol() {
        OidSymbol::Known("pbkdf2") => Error::MissingParameters {
            algorithm: "pbkdf2".to_owned(),
        },
        symbol => Error::UnsupportedKdf {
            algorithm: symbol.to_string(),
        },
    })
}

/// RFC 8018 B.2.3: `rc2ParameterVersion` encodes the effective key size. The
/// values 160, 120 and 58 stand for 40, 64 and 128 bits; 256 and above are
/// taken as is; absent means 32 bits.
fn rc2_key_length(version: Option<u64>) -> Result<u64> {
    match version {
        None => Ok(4),
        Some(160) => Ok(5),
        Some(120) => Ok(8),
        Some(58) => Ok(16),
        Some(value) => {
            ensure_err!(
                value >= 256,
                Error::InvalidParameter {
                    algorithm: "rc2",
                    field: "rc2ParameterVersion",
                    value,
                }
            );
            Ok(value)
        }
    }
}

impl Legacy {
    fn from_symbol(symbol: &'static str) -> Option<Self> {
        let &(_, cipher, key_length, block_size) =
            LEGACY_SCHEMES.iter().find(|(name, ..)| *name == symbol)?;
        let (family, rest) = symbol.split_once('_')?;
        let (digest, _) = rest.split_once('_')?;
        let kdf = match family {
            "pbes1" => "pbkdf1",
            "pkcs12" => "pkcs12_kdf",
            _ => return None,
        };
        Some(Self {
            kdf,
            digest,
            cipher,
            key_length,
            block_size,
        })
    }
}

impl Cipher {
    fn from_symbol(symbol: &str) -> Option<Self> {
        Some(match symbol {
            "des" => Self::Des,
            "tripledes_3key" => Self::TripleDes3Key,
            "rc2" => Self::Rc2,
            "rc5" => Self::Rc5,
            "aes128" => Self::Aes128,
            "aes192" => Self::Aes192,
            "aes256" => Self::Aes256,
            _ => return None,
        })
    }

    const fn symbol(self) -> &'static str {
        match self {
            Self::Des => "des",
            Self::TripleDes3Key => "tripledes_3key",
            Self::Rc2 => "rc2",
            Self::Rc5 => "rc5",
            Self::Aes128 => "aes128",
            Self::Aes192 => "aes192",
            Self::Aes256 => "aes256",
        }
    }

    const fn family(self) -> &'static str {
        match self {
            Self::Des => "des",
            Self::TripleDes3Key => "tripledes",
            Self::Rc2 => "rc2",
            Self::Rc5 => "rc5",
            Self::Aes128 | Self::Aes192 | Self::Aes256 => "aes",
        }
    }

    /// Fixed key lengths. RC2 reads its own from the parameters.
    fn key_length(self) -> Result<u64> {
        match self {
            Self::Des => Ok(8),
            Self::TripleDes3Key | Self::Aes192 => Ok(24),
            Self::Aes128 => Ok(16),
            Self::Aes256 => Ok(32),
            Self::Rc2 | Self::Rc5 => Err(Error::UnknownKeyLength {
                algorithm: self.symbol(),
            }),
        }
    }

    /// Fixed block sizes. RC5 reads its own from the parameters.
    const fn block_size(self) -> u64 {
        match self {
            Self::Des | Self::TripleDes3Key | Self::Rc2 | Self::Rc5 => 8,
            Self::Aes128 | Self::Aes192 | Self::Aes256 => 16,
        }
    }

    const fn missing_kdf(self) -> Error {
        Error::MissingKdf {
            algorithm: self.symbol(),
        }
    }
}

#[cfg(test)]
mod tests {
    use {
        super::*,
        crate::{
            asn1::{
                HmacAlgorithm, KdfAlgorithm, KdfParameters, Pbkdf2Salt, Rc2Params, Rc5Params,
            },
            oids::{self, OidCategory, ID_PBES2, ID_PBKDF2},
        },
        der::asn1::{ObjectIdentifier as Oid, OctetString},
        hex_literal::hex,
    };

    const SALT: [u8; 8] = hex!("0001020304050607");
    const IV8: [u8; 8] = hex!("1011121314151617");
    const IV16: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");

    fn encryption_oid(name: &str) -> Oid {
        oids::find(OidCategory::Encryption, name).unwrap()
    }

    fn octets(bytes: &[u8]) -> OctetString {
        OctetString::new(bytes).unwrap()
    }

    fn with_parameters(name: &str, parameters: &EncryptionParameters) -> EncryptionAlgorithm {
        EncryptionAlgorithm::from_parameters(encryption_oid(name), parameters).unwrap()
    }

    fn rc2(version: Option<u64>) -> EncryptionAlgorithm {
        let params = Rc2Params {
            rc2_parameter_version: version,
            iv:                    octets(&IV8),
        };
        with_parameters("rc2", &EncryptionParameters::Rc2(params))
    }

    fn rc5(block_size_in_bits: u64, iv: Option<&[u8]>) -> EncryptionAlgorithm {
        let params = Rc5Params {
            version: 16,
            rounds: 12,
            block_size_in_bits,
            iv: iv.map(octets),
        };
        with_parameters("rc5", &EncryptionParameters::Rc5(params))
    }

    fn legacy(name: &str) -> EncryptionAlgorithm {
        let params = Pbes1Params {
            salt:       octets(&SALT),
            iterations: 2048,
        };
        with_parameters(name, &EncryptionParameters::Pbes1(params))
    }

    fn pbes2_with_kdf(kdf: KdfAlgorithm, scheme: EncryptionAlgorithm) -> EncryptionAlgorithm {
        let params = Pbes2Params {
            key_derivation_func: kdf,
            encryption_scheme:   scheme,
        };
        EncryptionAlgorithm::from_parameters(ID_PBES2, &EncryptionParameters::Pbes2(Box::new(params)))
            .unwrap()
    }

    fn pbes2(key_length: Option<u64>, prf: Option<&str>, scheme: EncryptionAlgorithm) -> EncryptionAlgorithm {
        let prf = prf.map(|name| {
            HmacAlgorithm::without_parameters(oids::find(OidCategory::Hmac, name).unwrap())
        });
        let params = Pbkdf2Params::new(
            Pbkdf2Salt::Specified(octets(&SALT)),
            2048,
            key_length,
            prf,
        );
        let kdf = KdfAlgorithm::from_parameters(ID_PBKDF2, &KdfParameters::Pbkdf2(params)).unwrap();
        pbes2_with_kdf(kdf, scheme)
    }

    fn aes256() -> EncryptionAlgorithm {
        with_parameters("aes256", &EncryptionParameters::Iv(octets(&IV16)))
    }

    #[test]
    fn test_fixed_key_lengths() {
        for (name, key_length) in [
            ("des", 8),
            ("tripledes_3key", 24),
            ("aes128", 16),
            ("aes192", 24),
            ("aes256", 32),
        ] {
            let with_iv = with_parameters(name, &EncryptionParameters::Iv(octets(&IV8)));
            let without = EncryptionAlgorithm::without_parameters(encryption_oid(name));
            assert_eq!(with_iv.key_length(), Ok(key_length), "{name}");
            assert_eq!(without.key_length(), Ok(key_length), "{name}");
        }
    }

    #[test]
    fn test_bare_cipher_properties() {
        for (name, cipher, block_size) in [
            ("des", "des", 8),
            ("tripledes_3key", "tripledes", 8),
            ("aes128", "aes", 16),
            ("aes192", "aes", 16),
            ("aes256", "aes", 16),
        ] {
            let algorithm = with_parameters(name, &EncryptionParameters::Iv(octets(&IV16)));
            assert_eq!(algorithm.cipher(), Ok(cipher));
            assert_eq!(algorithm.block_size(), Ok(block_size));
            assert_eq!(algorithm.iv(), Ok(Some(&IV16[..])));
        }
        let no_iv = EncryptionAlgorithm::without_parameters(encryption_oid("aes128"));
        assert_eq!(no_iv.iv(), Ok(None));
    }

    #[test]
    fn test_bare_cipher_has_no_kdf() {
        let ciphers = [
            with_parameters("des", &EncryptionParameters::Iv(octets(&IV8))),
            with_parameters("tripledes_3key", &EncryptionParameters::Iv(octets(&IV8))),
            aes256(),
            rc2(Some(58)),
            rc5(64, None),
        ];
        for algorithm in &ciphers {
            let expected = match algorithm.symbol() {
                OidSymbol::Known(name) => Error::MissingKdf { algorithm: name },
                OidSymbol::Unknown(_) => unreachable!(),
            };
            assert_eq!(algorithm.kdf(), Err(expected.clone()));
            assert_eq!(algorithm.kdf_hmac(), Err(expected.clone()));
            assert_eq!(algorithm.kdf_salt(), Err(expected.clone()));
            assert_eq!(algorithm.kdf_iterations(), Err(expected));
        }
    }

    #[test]
    fn test_rc2_key_length() {
        assert_eq!(rc2(Some(160)).key_length(), Ok(5));
        assert_eq!(rc2(Some(120)).key_length(), Ok(8));
        assert_eq!(rc2(Some(58)).key_length(), Ok(16));
        assert_eq!(rc2(Some(256)).key_length(), Ok(256));
        assert_eq!(rc2(None).key_length(), Ok(4));
        assert_eq!(
            rc2(Some(59)).key_length(),
            Err(Error::InvalidParameter {
                algorithm: "rc2",
                field:     "rc2ParameterVersion",
                value:     59,
            })
        );
    }

    #[test]
    fn test_rc2_invalid_version_leaves_other_properties() {
        let algorithm = rc2(Some(59));
        assert_eq!(algorithm.cipher(), Ok("rc2"));
        assert_eq!(algorithm.block_size(), Ok(8));
        assert_eq!(algorithm.iv(), Ok(Some(&IV8[..])));
    }

    #[test]
    fn test_rc5() {
        let algorithm = rc5(64, Some(&IV8[..]));
        assert_eq!(algorithm.cipher(), Ok("rc5"));
        assert_eq!(algorithm.block_size(), Ok(8));
        assert_eq!(algorithm.iv(), Ok(Some(&IV8[..])));
        assert_eq!(
            algorithm.key_length(),
            Err(Error::UnknownKeyLength { algorithm: "rc5" })
        );

        let algorithm = rc5(128, None);
        assert_eq!(algorithm.block_size(), Ok(16));
        assert_eq!(algorithm.iv(), Ok(None));
    }

    #[test]
    fn test_rc5_partial_byte_block_size() {
        // Logged and rounded down.
        assert_eq!(rc5(60, None).block_size(), Ok(7));
        assert_eq!(pbes2(None, None, rc5(60, None)).block_size(), Ok(7));
    }

    #[test]
    fn test_cipher_without_required_parameters() {
        let algorithm = EncryptionAlgorithm::without_parameters(encryption_oid("rc5"));
        assert_eq!(algorithm.cipher(), Ok("rc5"));
        assert_eq!(
            algorithm.block_size(),
            Err(Error::MissingParameters {
                algorithm: "rc5".to_owned(),
            })
        );
        let algorithm = EncryptionAlgorithm::without_parameters(encryption_oid("rc2"));
        assert!(matches!(
            algorithm.key_length(),
            Err(Error::MissingParameters { .. })
        ));
        assert!(matches!(algorithm.iv(), Err(Error::MissingParameters { .. })));
    }

    #[test]
    fn test_legacy_schemes() {
        for (name, kdf, digest, cipher, key_length, block_size) in [
            ("pbes1_md2_des", "pbkdf1", "md2", "des", 8, 8),
            ("pbes1_md5_des", "pbkdf1", "md5", "des", 8, 8),
            ("pbes1_md2_rc2", "pbkdf1", "md2", "rc2", 8, 8),
            ("pbes1_md5_rc2", "pbkdf1", "md5", "rc2", 8, 8),
            ("pbes1_sha1_des", "pbkdf1", "sha1", "des", 8, 8),
            ("pbes1_sha1_rc2", "pbkdf1", "sha1", "rc2", 8, 8),
            ("pkcs12_sha1_rc4_128", "pkcs12_kdf", "sha1", "rc4", 16, 0),
            ("pkcs12_sha1_rc4_40", "pkcs12_kdf", "sha1", "rc4", 5, 0),
            ("pkcs12_sha1_tripledes_3key", "pkcs12_kdf", "sha1", "tripledes", 24, 8),
            ("pkcs12_sha1_tripledes_2key", "pkcs12_kdf", "sha1", "tripledes", 16, 8),
            ("pkcs12_sha1_rc2_128", "pkcs12_kdf", "sha1", "rc2", 16, 8),
            ("pkcs12_sha1_rc2_40", "pkcs12_kdf", "sha1", "rc2", 5, 8),
        ] {
            let algorithm = legacy(name);
            assert_eq!(algorithm.kdf(), Ok(OidSymbol::Known(kdf)), "{name}");
            assert_eq!(algorithm.kdf_hmac(), Ok(OidSymbol::Known(digest)), "{name}");
            assert_eq!(algorithm.kdf_salt(), Ok(&SALT[..]), "{name}");
            assert_eq!(algorithm.kdf_iterations(), Ok(2048), "{name}");
            assert_eq!(algorithm.cipher(), Ok(cipher), "{name}");
            assert_eq!(algorithm.key_length(), Ok(key_length), "{name}");
            assert_eq!(algorithm.block_size(), Ok(block_size), "{name}");
            assert_eq!(algorithm.iv(), Ok(None), "{name}");
        }
    }

    #[test]
    fn test_legacy_without_parameters() {
        let algorithm = EncryptionAlgorithm::without_parameters(encryption_oid("pbes1_sha1_des"));
        assert_eq!(algorithm.kdf(), Ok(OidSymbol::Known("pbkdf1")));
        assert_eq!(algorithm.iv(), Ok(None));
        assert!(matches!(
            algorithm.kdf_salt(),
            Err(Error::MissingParameters { .. })
        ));
    }

    #[test]
    fn test_pbes2_key_length_delegates_to_cipher() {
        for scheme in [
            with_parameters("des", &EncryptionParameters::Iv(octets(&IV8))),
            with_parameters("tripledes_3key", &EncryptionParameters::Iv(octets(&IV8))),
            with_parameters("aes128", &EncryptionParameters::Iv(octets(&IV16))),
            with_parameters("aes192", &EncryptionParameters::Iv(octets(&IV16))),
            aes256(),
            rc2(Some(160)),
            rc2(None),
        ] {
            let expected = scheme.key_length();
            assert!(expected.is_ok());
            assert_eq!(pbes2(None, None, scheme).key_length(), expected);
        }
    }

    #[test]
    fn test_pbes2_explicit_key_length() {
        let algorithm = pbes2(Some(20), None, aes256());
        assert_eq!(algorithm.key_length(), Ok(20));
        // An RC5 key length is only known when the KDF states it.
        assert_eq!(pbes2(Some(16), None, rc5(64, None)).key_length(), Ok(16));
        assert_eq!(
            pbes2(None, None, rc5(64, None)).key_length(),
            Err(Error::UnknownKeyLength { algorithm: "rc5" })
        );
    }

    #[test]
    fn test_pbes2() {
        let algorithm = pbes2(None, Some("sha256"), aes256());
        assert_eq!(algorithm.kdf(), Ok(OidSymbol::Known("pbkdf2")));
        assert_eq!(algorithm.kdf_hmac(), Ok(OidSymbol::Known("sha256")));
        assert_eq!(algorithm.kdf_salt(), Ok(&SALT[..]));
        assert_eq!(algorithm.kdf_iterations(), Ok(2048));
        assert_eq!(algorithm.key_length(), Ok(32));
        assert_eq!(algorithm.cipher(), Ok("aes"));
        assert_eq!(algorithm.block_size(), Ok(16));
        assert_eq!(algorithm.iv(), Ok(Some(&IV16[..])));
    }

    #[test]
    fn test_pbes2_default_prf() {
        let algorithm = pbes2(None, None, rc2(Some(58)));
        assert_eq!(algorithm.kdf_hmac(), Ok(OidSymbol::Known("sha1")));
        assert_eq!(algorithm.cipher(), Ok("rc2"));
        assert_eq!(algorithm.iv(), Ok(Some(&IV8[..])));
    }

    #[test]
    fn test_pbes2_unsupported_kdf() {
        let scrypt = Oid::new_unwrap("1.3.6.1.4.1.11591.4.11");
        let algorithm = pbes2_with_kdf(KdfAlgorithm::without_parameters(scrypt), aes256());
        assert_eq!(algorithm.kdf(), Ok(OidSymbol::Unknown(scrypt)));
        let expected = Error::UnsupportedKdf {
            algorithm: "1.3.6.1.4.1.11591.4.11".to_owned(),
        };
        assert_eq!(algorithm.kdf_hmac(), Err(expected.clone()));
        assert_eq!(algorithm.kdf_salt(), Err(expected.clone()));
        assert_eq!(algorithm.key_length(), Err(expected));
        // The cipher side does not depend on the KDF.
        assert_eq!(algorithm.cipher(), Ok("aes"));
        assert_eq!(algorithm.iv(), Ok(Some(&IV16[..])));
    }

    #[test]
    fn test_pbes2_without_parameters() {
        let algorithm = EncryptionAlgorithm::without_parameters(ID_PBES2);
        let expected = Error::MissingParameters {
            algorithm: "pbes2".to_owned(),
        };
        assert_eq!(algorithm.kdf(), Err(expected.clone()));
        assert_eq!(algorithm.cipher(), Err(expected));
    }

    #[test]
    fn test_unrecognized_algorithm() {
        let oid = Oid::new_unwrap("1.2.3.4.5");
        let algorithm = EncryptionAlgorithm::without_parameters(oid);
        let expected = Error::UnrecognizedAlgorithm {
            algorithm: "1.2.3.4.5".to_owned(),
        };
        assert_eq!(algorithm.kdf(), Err(expected.clone()));
        assert_eq!(algorithm.kdf_hmac(), Err(expected.clone()));
        assert_eq!(algorithm.kdf_salt(), Err(expected.clone()));
        assert_eq!(algorithm.kdf_iterations(), Err(expected.clone()));
        assert_eq!(algorithm.key_length(), Err(expected.clone()));
        assert_eq!(algorithm.cipher(), Err(expected.clone()));
        assert_eq!(algorithm.block_size(), Err(expected.clone()));
        assert_eq!(algorithm.iv(), Err(expected));
    }

    #[test]
    fn test_pbes2_with_unrecognized_cipher() {
        let scheme = EncryptionAlgorithm::without_parameters(Oid::new_unwrap("1.2.3.4.5"));
        let algorithm = pbes2(Some(16), None, scheme);
        assert_eq!(algorithm.key_length(), Ok(16));
        assert!(matches!(
            algorithm.cipher(),
            Err(Error::UnrecognizedAlgorithm { .. })
        ));
    }
}
