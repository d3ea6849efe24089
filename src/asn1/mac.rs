use {
    super::{AlgorithmIdentifier, AlgorithmSchema, HmacAlgorithm, KdfAlgorithm},
    crate::oids::OidCategory,
    der::{Any, Encode, Length, Result, Sequence, Writer},
};

/// Password-based message authentication scheme (PKCS#5 `PBMAC1`).
pub type MacAlgorithm = AlgorithmIdentifier<MacParameters>;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MacParameters {
    Pbmac1(Pbmac1Params),
}

/// RFC 8018 A.5:
///
/// ```text
/// PBMAC1-params ::= SEQUENCE {
///     keyDerivationFunc AlgorithmIdentifier {{PBMAC1-KDFs}},
///     messageAuthScheme AlgorithmIdentifier {{PBMAC1-MACs}} }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
pub struct Pbmac1Params {
    pub key_derivation_func: KdfAlgorithm,
    pub message_auth_scheme: HmacAlgorithm,
}

impl AlgorithmSchema for MacParameters {
    const CATEGORY: OidCategory = OidCategory::Mac;

    fn decode_parameters(symbol: &'static str, parameters: &Any) -> Result<Option<Self>> {
        Ok(match symbol {
            "pbmac1" => Some(Self::Pbmac1(parameters.decode_as()?)),
            _ => None,
        })
    }
}

impl Encode for MacParameters {
    fn encoded_len(&self) -> Result<Length> {
        match self {
            Self::Pbmac1(params) => params.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Self::Pbmac1(params) => params.encode(writer),
        }
    }
}

impl MacAlgorithm {
    pub const fn pbmac1(&self) -> Option<&Pbmac1Params> {
        match self.typed_parameters() {
            Some(MacParameters::Pbmac1(params)) => Some(params),
            None => None,
        }
    }
}
