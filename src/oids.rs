//! Object identifier registry.
//!
//! One static table per [`OidCategory`], mapping an OID to its symbolic name.
//! Several OIDs may share a symbol (e.g. the legacy OIW and RSADSI arcs of
//! `sha1_rsa`), but an OID has at most one symbol within a category. Symbols
//! never contain a `.`, so the [`Display`] form of an [`OidSymbol`] tells a
//! registered name apart from a raw dotted identifier.
//!
//! Sources: RFC 3279, RFC 4055, RFC 5758, RFC 7292, RFC 8018.

use {
    const_oid::ObjectIdentifier as Oid,
    std::fmt::{self, Display, Formatter},
};

pub const ID_HMAC_WITH_SHA1: Oid = Oid::new_unwrap("1.2.840.113549.2.7");
pub const ID_PBKDF2: Oid = Oid::new_unwrap("1.2.840.113549.1.5.12");
pub const ID_PBES2: Oid = Oid::new_unwrap("1.2.840.113549.1.5.13");
pub const ID_PBMAC1: Oid = Oid::new_unwrap("1.2.840.113549.1.5.14");

/// The disjoint namespaces an algorithm OID is looked up in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OidCategory {
    Digest,
    /// Signature algorithms, named `<digest>_<signer>`.
    SignedDigest,
    Hmac,
    Kdf,
    Encryption,
    Mac,
}

/// The result of looking up an OID in a category table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OidSymbol {
    /// A registered symbolic name.
    Known(&'static str),
    /// An OID with no entry in the table, kept as is.
    Unknown(Oid),
}

const DIGEST: &[(Oid, &str)] = &[
    (Oid::new_unwrap("1.2.840.113549.2.2"), "md2"),
    (Oid::new_unwrap("1.2.840.113549.2.5"), "md5"),
    (Oid::new_unwrap("1.3.14.3.2.26"), "sha1"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.4"), "sha224"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.1"), "sha256"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.2"), "sha384"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.3"), "sha512"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.5"), "sha512_224"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.2.6"), "sha512_256"),
];

const SIGNED_DIGEST: &[(Oid, &str)] = &[
    (Oid::new_unwrap("1.2.840.113549.1.1.2"), "md2_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.4"), "md5_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.5"), "sha1_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.14"), "sha224_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.11"), "sha256_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.12"), "sha384_rsa"),
    (Oid::new_unwrap("1.2.840.113549.1.1.13"), "sha512_rsa"),
    (Oid::new_unwrap("1.3.14.3.2.3"), "md5_rsa"),
    (Oid::new_unwrap("1.3.14.3.2.29"), "sha1_rsa"),
    (Oid::new_unwrap("1.3.14.7.2.3.1"), "md2_rsa"),
    (Oid::new_unwrap("1.2.840.10040.4.3"), "sha1_dsa"),
    (Oid::new_unwrap("1.3.14.3.2.13"), "sha1_dsa"),
    (Oid::new_unwrap("1.3.14.3.2.27"), "sha1_dsa"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.3.1"), "sha224_dsa"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.3.2"), "sha256_dsa"),
    (Oid::new_unwrap("1.2.840.10045.4.1"), "sha1_ecdsa"),
    (Oid::new_unwrap("1.2.840.10045.4.3.1"), "sha224_ecdsa"),
    (Oid::new_unwrap("1.2.840.10045.4.3.2"), "sha256_ecdsa"),
    (Oid::new_unwrap("1.2.840.10045.4.3.3"), "sha384_ecdsa"),
    (Oid::new_unwrap("1.2.840.10045.4.3.4"), "sha512_ecdsa"),
    // Digest specified elsewhere in the enclosing structure
    (Oid::new_unwrap("1.2.840.113549.1.1.1"), "rsa"),
    (Oid::new_unwrap("1.2.840.10040.4.1"), "dsa"),
    (Oid::new_unwrap("1.2.840.10045.4"), "ecdsa"),
];

const HMAC: &[(Oid, &str)] = &[
    (Oid::new_unwrap("1.3.14.3.2.10"), "des_mac"),
    (ID_HMAC_WITH_SHA1, "sha1"),
    (Oid::new_unwrap("1.2.840.113549.2.8"), "sha224"),
    (Oid::new_unwrap("1.2.840.113549.2.9"), "sha256"),
    (Oid::new_unwrap("1.2.840.113549.2.10"), "sha384"),
    (Oid::new_unwrap("1.2.840.113549.2.11"), "sha512"),
    (Oid::new_unwrap("1.2.840.113549.2.12"), "sha512_224"),
    (Oid::new_unwrap("1.2.840.113549.2.13"), "sha512_256"),
];

const KDF: &[(Oid, &str)] = &[(ID_PBKDF2, "pbkdf2")];

const ENCRYPTION: &[(Oid, &str)] = &[
    (Oid::new_unwrap("1.3.14.3.2.7"), "des"),
    (Oid::new_unwrap("1.2.840.113549.3.7"), "tripledes_3key"),
    (Oid::new_unwrap("1.2.840.113549.3.2"), "rc2"),
    (Oid::new_unwrap("1.2.840.113549.3.9"), "rc5"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.1.2"), "aes128"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.1.22"), "aes192"),
    (Oid::new_unwrap("2.16.840.1.101.3.4.1.42"), "aes256"),
    // PKCS#5
    (ID_PBES2, "pbes2"),
    (Oid::new_unwrap("1.2.840.113549.1.5.1"), "pbes1_md2_des"),
    (Oid::new_unwrap("1.2.840.113549.1.5.3"), "pbes1_md5_des"),
    (Oid::new_unwrap("1.2.840.113549.1.5.4"), "pbes1_md2_rc2"),
    (Oid::new_unwrap("1.2.840.113549.1.5.6"), "pbes1_md5_rc2"),
    (Oid::new_unwrap("1.2.840.113549.1.5.10"), "pbes1_sha1_des"),
    (Oid::new_unwrap("1.2.840.113549.1.5.11"), "pbes1_sha1_rc2"),
    // PKCS#12
    (Oid::new_unwrap("1.2.840.113549.1.12.1.1"), "pkcs12_sha1_rc4_128"),
    (Oid::new_unwrap("1.2.840.113549.1.12.1.2"), "pkcs12_sha1_rc4_40"),
    (Oid::new_unwrap("1.2.840.113549.1.12.1.3"), "pkcs12_sha1_tripledes_3key"),
    (Oid::new_unwrap("1.2.840.113549.1.12.1.4"), "pkcs12_sha1_tripledes_2key"),
    (Oid::new_unwrap("1.2.840.113549.1.12.1.5"), "pkcs12_sha1_rc2_128"),
    (Oid::new_unwrap("1.2.840.113549.1.12.1.6"), "pkcs12_sha1_rc2_40"),
];

const MAC: &[(Oid, &str)] = &[(ID_PBMAC1, "pbmac1")];

impl OidCategory {
    pub const ALL: [Self; 6] = [
        Self::Digest,
        Self::SignedDigest,
        Self::Hmac,
        Self::Kdf,
        Self::Encryption,
        Self::Mac,
    ];

    /// The static table backing this category.
    pub const fn table(self) -> &'static [(Oid, &'static str)] {
        match self {
            Self::Digest => DIGEST,
            Self::SignedDigest => SIGNED_DIGEST,
            Self::Hmac => HMAC,
            Self::Kdf => KDF,
            Self::Encryption => ENCRYPTION,
            Self::Mac => MAC,
        }
    }
}

/// Resolves `oid` to its symbol in `category`. Never fails: unregistered
/// OIDs come back as [`OidSymbol::Unknown`].
pub fn lookup(category: OidCategory, oid: &Oid) -> OidSymbol {
    category
        .table()
        .iter()
        .find(|(registered, _)| registered == oid)
        .map_or(OidSymbol::Unknown(*oid), |&(_, name)| OidSymbol::Known(name))
}

/// Reverse lookup: the first OID registered for `name` in `category`.
pub fn find(category: OidCategory, name: &str) -> Option<Oid> {
    category
        .table()
        .iter()
        .find(|(_, registered)| *registered == name)
        .map(|&(oid, _)| oid)
}

impl OidSymbol {
    pub const fn name(self) -> Option<&'static str> {
        match self {
            Self::Known(name) => Some(name),
            Self::Unknown(_) => None,
        }
    }

    pub const fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }
}

impl Display for OidSymbol {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Known(name) => f.write_str(name),
            Self::Unknown(oid) => Display::fmt(oid, f),
        }
    }
}

impl PartialEq<str> for OidSymbol {
    fn eq(&self, other: &str) -> bool {
        match self {
            Self::Known(name) => *name == other,
            Self::Unknown(oid) => oid.to_string() == other,
        }
    }
}

impl PartialEq<&str> for OidSymbol {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}
