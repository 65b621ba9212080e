//! Outcome codes returned by the verification service
//!
//! The service classifies a failed attempt with a short string code. Several
//! codes are synonyms: each duplicate-registration code comes from a different
//! uniqueness check on the server but means the same thing to the user.

/// Known outcome codes
///
/// Not serde-derived: the wire form is the string from the table, use
/// [`OutcomeCode::parse`] and [`OutcomeCode::as_str`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeCode {
    /// The uniqueness proof itself was already verified
    WorldcoinProofAlreadyVerified,
    /// The proof's nullifier hash was already consumed
    NullifierHashAlreadyUsed,
    /// The attested vault id was already registered
    VaultIdAlreadyUsed,
    /// An orb credential was already registered for this identity
    OrbAlreadyVerified,
    /// A phone credential was already registered for this identity
    PhoneAlreadyVerified,
    /// The identity attestation payload was rejected
    AttestationInvalid,
    /// The uniqueness proof was rejected
    ProofInvalid,
}

/// What a code means for the flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeClass {
    DuplicateRegistration,
    AttestationInvalid,
    ProofInvalid,
}

/// Wire strings for every known code. New synonyms go here.
const OUTCOME_TABLE: &[(&str, OutcomeCode)] = &[
    (
        "worldcoin-proof-already-verified",
        OutcomeCode::WorldcoinProofAlreadyVerified,
    ),
    (
        "nullifier-hash-already-used",
        OutcomeCode::NullifierHashAlreadyUsed,
    ),
    ("vault-id-already-used", OutcomeCode::VaultIdAlreadyUsed),
    ("orb-already-verified", OutcomeCode::OrbAlreadyVerified),
    ("phone-already-verified", OutcomeCode::PhoneAlreadyVerified),
    ("sismo-response-invalid", OutcomeCode::AttestationInvalid),
    ("worldcoin-result-invalid", OutcomeCode::ProofInvalid),
];

impl OutcomeCode {
    /// Look up a raw code. Unknown strings return `None`.
    pub fn parse(raw: &str) -> Option<Self> {
        OUTCOME_TABLE
            .iter()
            .find(|(wire, _)| *wire == raw)
            .map(|(_, code)| *code)
    }

    /// The wire string for this code
    pub fn as_str(&self) -> &'static str {
        OUTCOME_TABLE
            .iter()
            .find(|(_, code)| code == self)
            .map(|(wire, _)| *wire)
            .unwrap_or("unknown")
    }

    pub fn class(&self) -> OutcomeClass {
        match self {
            OutcomeCode::WorldcoinProofAlreadyVerified
            | OutcomeCode::NullifierHashAlreadyUsed
            | OutcomeCode::VaultIdAlreadyUsed
            | OutcomeCode::OrbAlreadyVerified
            | OutcomeCode::PhoneAlreadyVerified => OutcomeClass::DuplicateRegistration,
            OutcomeCode::AttestationInvalid => OutcomeClass::AttestationInvalid,
            OutcomeCode::ProofInvalid => OutcomeClass::ProofInvalid,
        }
    }

    /// All known codes, in table order
    pub fn all() -> impl Iterator<Item = OutcomeCode> {
        OUTCOME_TABLE.iter().map(|(_, code)| *code)
    }
}

impl std::fmt::Display for OutcomeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
