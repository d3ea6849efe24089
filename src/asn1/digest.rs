use {
    super::{AlgorithmIdentifier, AlgorithmSchema},
    crate::oids::OidCategory,
    der::{asn1::OctetString, Any, Encode, Length, Result, Sequence, Writer},
};

/// Declares a schema table with no registered parameter shapes: every
/// payload of the category stays opaque.
macro_rules! opaque_schema {
    ($($(#[$meta:meta])* $name:ident => $category:ident;)+) => {$(
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq)]
        pub enum $name {}

        impl AlgorithmSchema for $name {
            const CATEGORY: OidCategory = OidCategory::$category;

            fn decode_parameters(_symbol: &'static str, _parameters: &Any) -> Result<Option<Self>> {
                Ok(None)
            }
        }

        impl Encode for $name {
            fn encoded_len(&self) -> Result<Length> {
                match *self {}
            }

            fn encode(&self, _writer: &mut impl Writer) -> Result<()> {
                match *self {}
            }
        }
    )+};
}

opaque_schema! {
    /// Digest algorithm parameters, always opaque (usually `NULL` or absent).
    DigestParameters => Digest;
    SignedDigestParameters => SignedDigest;
    /// HMAC parameters, always opaque (usually `NULL` or absent).
    HmacParameters => Hmac;
}

pub type DigestAlgorithm = AlgorithmIdentifier<DigestParameters>;

pub type SignedDigestAlgorithm = AlgorithmIdentifier<SignedDigestParameters>;

/// Pseudorandom function of PBKDF2, or message authentication scheme of
/// PBMAC1.
pub type HmacAlgorithm = AlgorithmIdentifier<HmacParameters>;

/// The structure signed with a [`SignedDigestAlgorithm`], RFC 8017 9.2:
///
/// ```text
/// DigestInfo ::= SEQUENCE {
///     digestAlgorithm DigestAlgorithm,
///     digest OCTET STRING }
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Sequence)]
pub struct DigestInfo {
    pub digest_algorithm: DigestAlgorithm,
    pub digest:           OctetString,
}
