use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure to resolve a property of an encryption algorithm identifier.
///
/// Resolution is a pure function of the identifier, retrying can not succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The OID is not in the registry.
    #[error("unrecognized algorithm \"{algorithm}\"")]
    UnrecognizedAlgorithm { algorithm: String },

    /// A bare cipher was asked for key derivation properties.
    #[error("encryption algorithm \"{algorithm}\" does not have a registered key derivation function")]
    MissingKdf { algorithm: &'static str },

    /// The PBES2 key derivation function is not PBKDF2.
    #[error("unsupported key derivation function \"{algorithm}\"")]
    UnsupportedKdf { algorithm: String },

    /// The PBKDF2 salt uses the `otherSource` choice, reserved for future use.
    #[error("can not determine key derivation salt: the reserved other-source salt choice was specified")]
    UnusableSalt,

    /// A parameter field holds a value outside its defined set.
    #[error("invalid {field} {value} in {algorithm} parameters")]
    InvalidParameter {
        algorithm: &'static str,
        field:     &'static str,
        value:     u64,
    },

    /// The symbol requires a parameter record, but the parameters were absent.
    #[error("missing parameters for algorithm \"{algorithm}\"")]
    MissingParameters { algorithm: String },

    /// The key length is not encoded anywhere for this cipher.
    #[error("key length of \"{algorithm}\" can not be determined")]
    UnknownKeyLength { algorithm: &'static str },
}
