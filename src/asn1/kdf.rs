use {
    super::{AlgorithmIdentifier, AlgorithmSchema, AnyAlgorithmIdentifier, HmacAlgorithm},
    crate::oids::{OidCategory, ID_HMAC_WITH_SHA1},
    der::{
        asn1::OctetString, Any, Choice, DecodeValue, Encode, EncodeValue, Header, Length, Reader,
        Result, Sequence, Writer,
    },
};

/// Key derivation function of a PBES2 or PBMAC1 structure.
pub type KdfAlgorithm = AlgorithmIdentifier<KdfParameters>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KdfParameters {
    Pbkdf2(Pbkdf2Params),
}

/// RFC 8018 A.2:
///
/// ```text
/// PBKDF2-params ::= SEQUENCE {
///     salt CHOICE {
///         specified OCTET STRING,
///         otherSource AlgorithmIdentifier {{PBKDF2-SaltSources}}
///     },
///     iterationCount INTEGER (1..MAX),
///     keyLength INTEGER (1..MAX) OPTIONAL,
///     prf AlgorithmIdentifier {{PBKDF2-PRFs}} DEFAULT algid-hmacWithSHA1 }
/// ```
///
/// The `prf` default is applied when decoding, so `prf` is always set. Whether
/// it was present in the input is remembered, and re-encoding reproduces it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pbkdf2Params {
    pub salt:            Pbkdf2Salt,
    pub iteration_count: u64,
    pub key_length:      Option<u64>,
    pub prf:             HmacAlgorithm,
    prf_explicit:        bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Choice)]
pub enum Pbkdf2Salt {
    Specified(OctetString),
    /// Reserved for future versions of PKCS#5, not usable.
    OtherSource(AnyAlgorithmIdentifier),
}

impl Pbkdf2Params {
    /// Parameters with `prf` set to `prf`, or omitted (meaning HMAC-SHA1) when
    /// `None`.
    pub fn new(
        salt: Pbkdf2Salt,
        iteration_count: u64,
        key_length: Option<u64>,
        prf: Option<HmacAlgorithm>,
    ) -> Self {
        Self {
            salt,
            iteration_count,
            key_length,
            prf_explicit: prf.is_some(),
            prf: prf.unwrap_or_else(default_prf),
        }
    }

    /// Whether `prf` was encoded rather than defaulted.
    pub const fn has_explicit_prf(&self) -> bool {
        self.prf_explicit
    }
}

impl Pbkdf2Salt {
    pub fn specified(&self) -> Option<&[u8]> {
        match self {
            Self::Specified(salt) => Some(salt.as_bytes()),
            Self::OtherSource(_) => None,
        }
    }
}

fn default_prf() -> HmacAlgorithm {
    HmacAlgorithm::without_parameters(ID_HMAC_WITH_SHA1)
}

impl Sequence<'_> for Pbkdf2Params {}

impl EncodeValue for Pbkdf2Params {
    fn value_len(&self) -> Result<Length> {
        let mut len = (self.salt.encoded_len()? + self.iteration_count.encoded_len()?)?;
        if let Some(key_length) = self.key_length {
            len = (len + key_length.encoded_len()?)?;
        }
        if self.prf_explicit {
            len = (len + self.prf.encoded_len()?)?;
        }
        Ok(len)
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        self.salt.encode(writer)?;
        self.iteration_count.encode(writer)?;
        if let Some(key_length) = self.key_length {
            key_length.encode(writer)?;
        }
        if self.prf_explicit {
            self.prf.encode(writer)?;
        }
        Ok(())
    }
}

impl<'a> DecodeValue<'a> for Pbkdf2Params {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader.read_nested(header.length, |reader| {
            let salt = reader.decode()?;
            let iteration_count = reader.decode()?;
            let key_length = reader.decode()?;
            let prf = reader.decode::<Option<HmacAlgorithm>>()?;
            Ok(Self::new(salt, iteration_count, key_length, prf))
        })
    }
}

impl AlgorithmSchema for KdfParameters {
    const CATEGORY: OidCategory = OidCategory::Kdf;

    fn decode_parameters(symbol: &'static str, parameters: &Any) -> Result<Option<Self>> {
        Ok(match symbol {
            "pbkdf2" => Some(Self::Pbkdf2(parameters.decode_as()?)),
            _ => None,
        })
    }
}

impl Encode for KdfParameters {
    fn encoded_len(&self) -> Result<Length> {
        match self {
            Self::Pbkdf2(params) => params.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Self::Pbkdf2(params) => params.encode(writer),
        }
    }
}

impl KdfAlgorithm {
    pub const fn pbkdf2(&self) -> Option<&Pbkdf2Params> {
        match self.typed_parameters() {
            Some(KdfParameters::Pbkdf2(params)) => Some(params),
            None => None,
        }
    }
}
