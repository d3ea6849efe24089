//! ASN.1 types for algorithm identifiers, no resolution logic.
//!
//! An [`AlgorithmIdentifier`] pairs the resolved [`OidSymbol`] with its
//! parameters. The parameter shape is selected by the symbol through the
//! schema table of the identifier's [`AlgorithmSchema`], once, at decode time.
//! Symbols without a registered shape keep their parameters as an opaque
//! [`Any`], so every valid input still parses.
//!
//! Decoding is exactly reversible: the original OID and the presence or
//! absence of the parameters are kept, so re-encoding reproduces the input.

mod digest;
mod encryption;
mod kdf;
mod mac;

pub use self::{
    digest::{
        DigestAlgorithm, DigestInfo, DigestParameters, HmacAlgorithm, HmacParameters,
        SignedDigestAlgorithm, SignedDigestParameters,
    },
    encryption::{
        EncryptionAlgorithm, EncryptionParameters, Pbes1Params, Pbes2Params, Rc2Params, Rc5Params,
    },
    kdf::{KdfAlgorithm, KdfParameters, Pbkdf2Params, Pbkdf2Salt},
    mac::{MacAlgorithm, MacParameters, Pbmac1Params},
};
use {
    crate::oids::{self, OidCategory, OidSymbol},
    der::{
        asn1::ObjectIdentifier as Oid, Any, Decode, DecodeValue, Encode, EncodeValue, Header,
        Length, Reader, Result, Sequence, Tagged, Writer,
    },
    tracing::debug,
};

/// An `AlgorithmIdentifier` whose parameters are never interpreted.
#[derive(Clone, Debug, Eq, PartialEq, PartialOrd, Ord, Sequence)]
pub struct AnyAlgorithmIdentifier {
    pub algorithm:  Oid,
    pub parameters: Option<Any>,
}

/// Per-category schema table: which parameter shape belongs to which symbol.
pub trait AlgorithmSchema: Encode + Sized {
    const CATEGORY: OidCategory;

    /// Decodes `parameters` into the shape registered for `symbol`, or
    /// returns `None` when no shape is registered.
    fn decode_parameters(symbol: &'static str, parameters: &Any) -> Result<Option<Self>>;
}

/// ```text
/// AlgorithmIdentifier ::= SEQUENCE {
///     algorithm   OBJECT IDENTIFIER,
///     parameters  ANY DEFINED BY algorithm OPTIONAL }
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlgorithmIdentifier<P> {
    algorithm:  Oid,
    symbol:     OidSymbol,
    parameters: Option<Parameters<P>>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Parameters<P> {
    /// Decoded through the schema table.
    Typed(P),
    /// No shape registered for the symbol.
    Opaque(Any),
}

impl<P: AlgorithmSchema> AlgorithmIdentifier<P> {
    /// Resolves `algorithm` in the category of `P` and decodes `parameters`
    /// into the registered shape.
    ///
    /// Fails if the parameters do not match the registered shape.
    pub fn new(algorithm: Oid, parameters: Option<Any>) -> Result<Self> {
        let Some(any) = parameters else {
            return Ok(Self::without_parameters(algorithm));
        };
        let symbol = oids::lookup(P::CATEGORY, &algorithm);
        let parameters = match symbol {
            OidSymbol::Known(name) => Some(match P::decode_parameters(name, &any)? {
                Some(typed) => Parameters::Typed(typed),
                None => Parameters::Opaque(any),
            }),
            OidSymbol::Unknown(_) => {
                debug!(
                    oid = %algorithm,
                    category = ?P::CATEGORY,
                    "unregistered algorithm, parameters kept opaque"
                );
                Some(Parameters::Opaque(any))
            }
        };
        Ok(Self {
            algorithm,
            symbol,
            parameters,
        })
    }

    /// An identifier with the parameters field absent.
    pub fn without_parameters(algorithm: Oid) -> Self {
        Self {
            algorithm,
            symbol: oids::lookup(P::CATEGORY, &algorithm),
            parameters: None,
        }
    }

    /// Builds an identifier carrying `parameters`.
    ///
    /// The parameters are encoded and decoded again through the schema table,
    /// so this fails if they are not the shape registered for `algorithm`.
    pub fn from_parameters(algorithm: Oid, parameters: &P) -> Result<Self> {
        let any = Any::from_der(&parameters.to_der()?)?;
        let tag = any.tag();
        let result = Self::new(algorithm, Some(any))?;
        match &result.parameters {
            Some(Parameters::Typed(_)) => Ok(result),
            _ => Err(tag.value_error()),
        }
    }
}

impl<P> AlgorithmIdentifier<P> {
    /// The OID as it was encoded.
    pub const fn oid(&self) -> Oid {
        self.algorithm
    }

    pub const fn symbol(&self) -> OidSymbol {
        self.symbol
    }

    pub const fn parameters(&self) -> Option<&Parameters<P>> {
        self.parameters.as_ref()
    }

    /// The parameters, if they were decoded through the schema table.
    pub const fn typed_parameters(&self) -> Option<&P> {
        match &self.parameters {
            Some(Parameters::Typed(typed)) => Some(typed),
            _ => None,
        }
    }

    /// The raw parameters of an algorithm without a registered shape.
    pub const fn opaque_parameters(&self) -> Option<&Any> {
        match &self.parameters {
            Some(Parameters::Opaque(any)) => Some(any),
            _ => None,
        }
    }
}

impl<P: Encode> Encode for Parameters<P> {
    fn encoded_len(&self) -> Result<Length> {
        match self {
            Self::Typed(typed) => typed.encoded_len(),
            Self::Opaque(any) => any.encoded_len(),
        }
    }

    fn encode(&self, writer: &mut impl Writer) -> Result<()> {
        match self {
            Self::Typed(typed) => typed.encode(writer),
            Self::Opaque(any) => any.encode(writer),
        }
    }
}

impl<P: AlgorithmSchema> Sequence<'_> for AlgorithmIdentifier<P> {}

impl<P: AlgorithmSchema> EncodeValue for AlgorithmIdentifier<P> {
    fn value_len(&self) -> Result<Length> {
        let parameters = match &self.parameters {
            Some(parameters) => parameters.encoded_len()?,
            None => Length::ZERO,
        };
        self.algorithm.encoded_len()? + parameters
    }

    fn encode_value(&self, writer: &mut impl Writer) -> Result<()> {
        self.algorithm.encode(writer)?;
        if let Some(parameters) = &self.parameters {
            parameters.encode(writer)?;
        }
        Ok(())
    }
}

impl<'a, P: AlgorithmSchema> DecodeValue<'a> for AlgorithmIdentifier<P> {
    fn decode_value<R: Reader<'a>>(reader: &mut R, header: Header) -> Result<Self> {
        reader.read_nested(header.length, |reader| {
            let algorithm = Oid::decode(reader)?;
            let parameters = Option::<Any>::decode(reader)?;
            Self::new(algorithm, parameters)
        })
    }
}

impl<P: AlgorithmSchema> TryFrom<AlgorithmIdentifier<P>> for AnyAlgorithmIdentifier {
    type Error = der::Error;

    fn try_from(value: AlgorithmIdentifier<P>) -> Result<Self> {
        let parameters = match value.parameters {
            Some(Parameters::Typed(typed)) => Some(Any::from_der(&typed.to_der()?)?),
            Some(Parameters::Opaque(any)) => Some(any),
            None => None,
        };
        Ok(Self {
            algorithm: value.algorithm,
            parameters,
        })
    }
}
