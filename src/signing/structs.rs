use super::error::ResultError;
use crate::points::GroupPoint;
use crate::secret::Secret;
use crate::traits::Affine;
use crate::traits::Scheme;

use std::collections::BTreeMap;
use std::collections::HashSet;
use std::fmt;
use std::fmt::Display;

/// ParticipantIndex is the 1-based position of a member within the group.
/// It is fixed for the whole round.
pub type ParticipantIndex = u32;

pub const HASH_SIZE: usize = 32;

/// Digest of the public part of a [`DkgResult`].
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DkgResultHash([u8; HASH_SIZE]);

impl DkgResultHash {
    pub fn new(bytes: [u8; HASH_SIZE]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; HASH_SIZE] {
        &self.0
    }
}

impl AsRef<[u8]> for DkgResultHash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for DkgResultHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for DkgResultHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DkgResultHash({self})")
    }
}

/// DkgResult is the outcome of a DKG round as computed by one participant.
///
/// Only the group public key and the disqualified/inactive lists form the
/// publicly agreed outcome. The private key share is participant specific:
/// it never takes part in equality, hashing or formatting.
pub struct DkgResult<S: Scheme> {
    group_public_key: Option<GroupPoint<S>>,
    disqualified: Vec<ParticipantIndex>,
    inactive: Vec<ParticipantIndex>,
    group_private_key_share: Option<Secret<S::Scalar>>,
}

impl<S: Scheme> DkgResult<S> {
    /// Lists are kept in the given order, equality and hashing are order sensitive.
    pub fn new(
        group_public_key: Option<GroupPoint<S>>,
        disqualified: Vec<ParticipantIndex>,
        inactive: Vec<ParticipantIndex>,
    ) -> Result<Self, ResultError> {
        if let Some(idx) = check_for_duplicates(&disqualified)? {
            return Err(ResultError::DisqualifiedDuplicated(idx));
        }
        if let Some(idx) = check_for_duplicates(&inactive)? {
            return Err(ResultError::InactiveDuplicated(idx));
        }

        Ok(Self {
            group_public_key,
            disqualified,
            inactive,
            group_private_key_share: None,
        })
    }

    pub fn with_private_share(mut self, share: Secret<S::Scalar>) -> Self {
        self.group_private_key_share = Some(share);
        self
    }

    pub fn group_public_key(&self) -> Option<&GroupPoint<S>> {
        self.group_public_key.as_ref()
    }

    pub fn disqualified(&self) -> &[ParticipantIndex] {
        &self.disqualified
    }

    pub fn inactive(&self) -> &[ParticipantIndex] {
        &self.inactive
    }

    pub fn private_share(&self) -> Option<&S::Scalar> {
        self.group_private_key_share.as_ref().map(Secret::expose)
    }

    /// Both member lists are strictly ascending.
    pub fn is_canonical(&self) -> bool {
        is_ascending(&self.disqualified) && is_ascending(&self.inactive)
    }

    /// Sorts member lists into ascending order, the ordering every honest
    /// participant has to agree on.
    pub fn into_canonical(mut self) -> Self {
        self.disqualified.sort_unstable();
        self.inactive.sort_unstable();
        self
    }

    /// Copy of the public outcome without the private key share.
    pub fn public_copy(&self) -> Self {
        Self {
            group_public_key: self.group_public_key.clone(),
            disqualified: self.disqualified.clone(),
            inactive: self.inactive.clone(),
            group_private_key_share: None,
        }
    }
}

impl<S: Scheme> PartialEq for DkgResult<S> {
    fn eq(&self, other: &Self) -> bool {
        public_keys_equal::<S>(self.group_public_key(), other.group_public_key())
            && self.disqualified == other.disqualified
            && self.inactive == other.inactive
    }
}

impl<S: Scheme> fmt::Debug for DkgResult<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DkgResult")
            .field(
                "group_public_key",
                &self.group_public_key.as_ref().map(|k| k.to_string()),
            )
            .field("disqualified", &self.disqualified)
            .field("inactive", &self.inactive)
            .field("group_private_key_share", &self.group_private_key_share)
            .finish()
    }
}

/// Checks if two results are equal. Two missing results are equal, this is
/// how aborted rounds compare.
pub fn results_equal<S: Scheme>(r: Option<&DkgResult<S>>, r2: Option<&DkgResult<S>>) -> bool {
    match (r, r2) {
        (Some(r), Some(r2)) => r == r2,
        (None, None) => true,
        _ => false,
    }
}

/// Keys are compared by canonical encoding. A key that can't be encoded is
/// never equal to anything.
fn public_keys_equal<S: Scheme>(
    expected: Option<&GroupPoint<S>>,
    actual: Option<&GroupPoint<S>>,
) -> bool {
    match (expected, actual) {
        (Some(expected), Some(actual)) => matches!(
            (expected.serialize(), actual.serialize()),
            (Ok(a), Ok(b)) if a == b
        ),
        (None, None) => true,
        _ => false,
    }
}

fn check_for_duplicates(
    list: &[ParticipantIndex],
) -> Result<Option<ParticipantIndex>, ResultError> {
    let mut seen = HashSet::new();
    for idx in list {
        if *idx == 0 {
            return Err(ResultError::ZeroIndex);
        }
        if !seen.insert(*idx) {
            return Ok(Some(*idx));
        }
    }
    Ok(None)
}

fn is_ascending(list: &[ParticipantIndex]) -> bool {
    list.windows(2).all(|w| w[0] < w[1])
}

/// Endorsement is a participant's signature over its preferred result hash.
#[derive(Clone, PartialEq, Eq)]
pub struct Endorsement {
    pub signer: ParticipantIndex,
    pub signature: Vec<u8>,
}

impl fmt::Debug for Endorsement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Endorsement {{ signer: {}, signature: {} }}",
            self.signer,
            hex::encode(&self.signature)
        )
    }
}

/// Result of inserting an endorsement into the [`EndorsementSet`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admitted {
    New,
    /// Same endorsement delivered again.
    Duplicate,
    /// A different valid endorsement from the same signer, the latest one is kept.
    Replaced,
}

/// EndorsementSet holds at most one endorsement per signer, ordered by index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndorsementSet(BTreeMap<ParticipantIndex, Endorsement>);

impl EndorsementSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub(super) fn insert(&mut self, endorsement: Endorsement) -> Admitted {
        let signer = endorsement.signer;
        match self.0.insert(signer, endorsement) {
            None => Admitted::New,
            Some(prev) if self.0.get(&signer) == Some(&prev) => Admitted::Duplicate,
            Some(_) => Admitted::Replaced,
        }
    }

    pub fn get(&self, signer: ParticipantIndex) -> Option<&Endorsement> {
        self.0.get(&signer)
    }

    pub fn contains(&self, signer: ParticipantIndex) -> bool {
        self.0.contains_key(&signer)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn signers(&self) -> impl Iterator<Item = ParticipantIndex> + '_ {
        self.0.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Endorsement> {
        self.0.values()
    }

    /// Ledger layout: ascending signer indices and their signatures concatenated
    /// in the same order.
    pub fn packed(&self) -> (Vec<ParticipantIndex>, Vec<u8>) {
        let indices = self.signers().collect();
        let signatures = self.iter().flat_map(|e| e.signature.iter().copied()).collect();

        (indices, signatures)
    }
}

/// ResultSignatureMessage is broadcast by each participant to share its
/// preferred result hash and its endorsement over it.
#[derive(Clone, Debug, PartialEq)]
pub struct ResultSignatureMessage {
    pub sender_index: ParticipantIndex,
    pub result_hash: DkgResultHash,
    pub endorsement: Endorsement,
}

/// Inbound traffic for a signing round.
#[derive(Clone, Debug, PartialEq)]
pub enum Inbound {
    Signature(ResultSignatureMessage),
    /// The ledger accepted a result submitted by another participant.
    Finalized(DkgResultHash),
}

impl Display for ResultSignatureMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResultSignature from {}", self.sender_index)
    }
}

impl Display for Inbound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Inbound::Signature(msg) => msg.fmt(f),
            Inbound::Finalized(hash) => write!(f, "Finalized({hash})"),
        }
    }
}
