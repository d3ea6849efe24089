use {
    super::{AlgorithmIdentifier, AlgorithmSchema, AnyAlgorithmIdentifier, KdfAlgorithm},
    crate::{
        ensure_err,
        oids::{self, OidCategory},
    },
    der::{
        asn1::OctetString, Any, DecodeValue, Encode, EncodeValue, Header, Length, Reader, Result,
        Sequence, Tag, Writer,
    },
};

/// Symbols allowed as the `encryptionScheme` of PBES2 (RFC 8018 A.4,
/// `PBES2-Encs`).
const PBES2_CIPHERS: [&str; 7] = [
    "des",
    "tripledes_3key",
    "rc2",
    "rc5",
    "aes128",
    "aes192",
    "aes256",
];

/// Encryption scheme of an `EncryptedPrivateKeyInfo` or a PKCS#12 bag: a bare
/// cipher, PBES2, or one of the fixed PBES1 and PKCS#12 combinations.
///
/// Key derivation and cipher parameters are resolved by
/// [`EncryptionAlgorithm::kdf`] and its siblings.
pub type EncryptionAlgorithm = AlgorithmIdentifier<EncryptionParameters>;

/// Parameter shapes of the encryption category, selected by symbol.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EncryptionParameters {
    /// DES, Triple DES and AES in CBC mode: the parameters are the IV.
    Iv(OctetString),
    Rc2(Rc2Params),
    Rc5(Rc5Params),
    /// All `pbes1_*` and `pkcs12_sha1_*` schemes.
    Pbes1(Pbes1Params),
    Pbes2(Box<Pbes2Params>),
}

/// RFC 8018 B.2.3:
///
/// ```text
/// RC2-CBC-Parameter ::= SEQUENCE {
///     rc2ParameterVersion INTEGER OPTIONAL,
///     iv OCTET STRING (SIZE(8)) }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
pub struct Rc2Params {
    pub rc2_parameter_version: Option<u64>,
    pub iv:                    OctetString,
}

/// RFC 8018 B.2.4:
///
/// ```text
/// RC5-CBC-Parameters ::= SEQUENCE {
///     version INTEGER {v1-0(16)} (v1-0),
///     rounds INTEGER (8..127),
///     blockSizeInBits INTEGER (64 | 128),
///     iv OCTET STRING OPTIONAL }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
pub struct Rc5Params {
    pub version:            u64,
    pub rounds:             u64,
    pub block_size_in_bits: u64,
    pub iv:                 Option<OctetString>,
}

/// RFC 8018 A.3, shared by the PKCS#12 schemes (RFC 7292 C):
///
/// ```text
/// PBEParameter ::= SEQUENCE {
///     salt OCTET STRING (SIZE(8)),
///     iterationCount INTEGER }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
pub struct Pbes1Params {
    pub salt:       OctetString,
    pub iterations: u64,
}

/// RFC 8018 A.4:
///
/// ```text
/// PBES2-params ::= SEQUENCE {
///     keyDerivationFunc AlgorithmIdentifier {{PBES2-KDFs}},
///     encryptionScheme AlgorithmIdentifier {{PBES2-Encs}} }
/// ```
///
/// Decoding rejects a registered `encryptionScheme` that is not a bare
/// cipher, so PBES2 never nests. Unregistered OIDs stay opaque.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pbes2Params {
    pub key_derivation_func: KdfAlgorithm,
    pub encryption_scheme:   EncryptionAlgorithm,
}

impl Rc5Params {
    /// Name of the version field, `v1-0` being the only one defined.
    pub const fn version_name(&self) -> Option<&'static str> {
        match self.version {
            16 => Some("v1-0"),
            _ => None,
        }
    }
}

impl Sequence<'_> for Pbes2Params {}

impl EncodeValue for Pbes2Params {
    fn value_len(&self) -> Result<Length> {
        self.key_derivation_func.encoded_len()? + self.encryption_scheme.encoded_len()?
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        self.key_derivation_func.encode(writer)?;
        self.encryption_scheme.encode(writer)
    }
}

impl<'a> DecodeValue<'a> for Pbes2Params {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader.read_nested(header.length, |reader| {
            let key_derivation_func = reader.decode()?;
            // Checked while still opaque, before its parameters are decoded.
            let scheme: AnyAlgorithmIdentifier = reader.decode()?;
            if let Some(name) = oids::lookup(OidCategory::Encryption, &scheme.algorithm).name() {
                ensure_err!(
                    PBES2_CIPHERS.contains(&name),
                    Tag::ObjectIdentifier.value_error()
                );
            }
            Ok(Self {
                key_derivation_func,
                encryption_scheme: EncryptionAlgorithm::new(scheme.algorithm, scheme.parameters)?,
            })
        })
    }
}

impl AlgorithmSchema for EncryptionParameters {
    const CATEGORY: OidCategory = OidCategory::Encryption;

    fn decode_parameters(symbol: &'static str, parameters: &Any) -> Result<Option<Self>> {
        Ok(Some(match symbol {
            "des" | "tripledes_3key" | "aes128" | "aes192" | "aes256" => {
                Self::Iv(parameters.decode_as()?)
            }
            "rc2" => Self::Rc2(parameters.decode_as()?),
            "rc5" => Self::Rc5(parameters.decode_as()?),
            "pbes2" => Self::Pbes2(Box::new(parameters.decode_as()?)),
            "pbes1_md2_des" | "pbes1_md5_des" | "pbes1_md2_rc2" | "pbes1_md5_rc2"
            | "pbes1_sha1_des" | "pbes1_sha1_rc2" | "pkcs12_sha1_rc4_128" | "pkcs12_sha1_rc4_40"
            | "pkcs12_sha1_tripledes_3key" | "pkcs12_sha1_tripledes_2key"
            | "pkcs12_sha1_rc2_128" | "pkcs12_sha1_rc2_40" => Self::Pbes1(parameters.decode_as()?),
            _ => return Ok(None),
        }))
    }
}

impl Encode for EncryptionParameters {
    fn encoded_len(&self) -> Result<Length> {
        match self {
            Self::Iv(iv) => iv.encoded_len(),
            Self::Rc2(params) => params.encoded_len(),
            Self::Rc5(params) => params.encoded_len(),
            Self::Pbes1(params) => params.encoded_len(),
            Self::Pbes2(params) => params.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Self::Iv(iv) => iv.encode(writer),
            Self::Rc2(params) => params.encode(writer),
            Self::Rc5(params) => params.encode(writer),
            Self::Pbes1(params) => params.encode(writer),
            Self::Pbes2(params) => params.encode(writer),
        }
    }
}
