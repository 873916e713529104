use super::error::ResultError;
use super::structs::DkgResultHash;
use super::structs::Endorsement;
use super::structs::ParticipantIndex;
use crate::points::KeyPoint;
use crate::schnorr;
use crate::secret::Secret;
use crate::traits::Affine;
use crate::traits::Scheme;

use std::collections::HashSet;
use std::time::Duration;
use tracing::debug;

/// Member of the signing group with its long-term public key.
#[derive(Debug)]
pub struct Member<S: Scheme> {
    pub index: ParticipantIndex,
    pub public: KeyPoint<S>,
}

impl<S: Scheme> Clone for Member<S> {
    fn clone(&self) -> Self {
        Self {
            index: self.index,
            public: self.public.clone(),
        }
    }
}

impl<S: Scheme> Member<S> {
    pub fn public(&self) -> &KeyPoint<S> {
        &self.public
    }
}

/// Config holds the group parameters of one signing round. It is built once
/// when the round starts and stays immutable afterwards.
pub struct Config<S: Scheme> {
    /// Index of the local participant.
    pub index: ParticipantIndex,

    pub group_size: u32,

    /// Minimum number of matching endorsements, own included, required to submit.
    pub threshold: u32,

    /// Upper bound on waiting for the quorum.
    pub round_timeout: Duration,

    /// Upper bound on a single submission call.
    pub submission_timeout: Duration,

    /// Every member of the group, including the local participant.
    pub members: Vec<Member<S>>,

    pub log: tracing::Span,
}

impl<S: Scheme> Config<S> {
    pub fn validate(&self) -> Result<(), ResultError> {
        if self.index == 0 {
            return Err(ResultError::ZeroIndex);
        }
        if self.threshold == 0 || self.threshold > self.group_size {
            return Err(ResultError::ThresholdOutOfRange {
                threshold: self.threshold,
                group_size: self.group_size,
            });
        }
        if self.members.len() != self.group_size as usize {
            return Err(ResultError::GroupSizeMismatch {
                expected: self.group_size,
                received: self.members.len(),
            });
        }

        let mut seen = HashSet::new();
        for member in self.members.iter() {
            if member.index == 0 {
                return Err(ResultError::ZeroIndex);
            }
            if member.index > self.group_size {
                return Err(ResultError::IndexOutOfRange {
                    index: member.index,
                    group_size: self.group_size,
                });
            }
            if !seen.insert(member.index) {
                return Err(ResultError::MembersDuplicated(member.index));
            }
            // with an identity key anyone can produce a valid endorsement
            if member.public.is_identity() {
                return Err(ResultError::IdentityKey(member.index));
            }
        }

        self.member_key(self.index).map(|_| ())
    }

    pub fn member_key(&self, index: ParticipantIndex) -> Result<&KeyPoint<S>, ResultError> {
        self.members
            .iter()
            .find(|member| member.index == index)
            .map(|member| member.public())
            .ok_or(ResultError::MemberKeyNotFound(index))
    }
}

/// Honest majority threshold for a group of `n` members.
pub fn honest_threshold(n: u32) -> u32 {
    (n >> 1) + 1
}

/// ResultSigner binds the local participant's long-term key to the round
/// configuration. The private key never leaves this struct.
pub struct ResultSigner<S: Scheme> {
    c: Config<S>,
    long_term: Secret<S::Scalar>,
}

impl<S: Scheme> ResultSigner<S> {
    pub fn new(c: Config<S>, long_term: Secret<S::Scalar>) -> Result<Self, ResultError> {
        c.validate()?;

        if c.member_key(c.index)? != &S::sk_to_pk(long_term.expose()) {
            return Err(ResultError::KeyMismatch(c.index));
        }

        Ok(Self { c, long_term })
    }

    pub fn config(&self) -> &Config<S> {
        &self.c
    }

    pub fn index(&self) -> ParticipantIndex {
        self.c.index
    }

    pub fn sign(&self, hash: &DkgResultHash) -> Result<Endorsement, ResultError> {
        let signature =
            schnorr::sign::<S>(self.long_term.expose(), hash.as_ref()).map_err(ResultError::Sign)?;

        Ok(Endorsement {
            signer: self.c.index,
            signature,
        })
    }

    /// Fails closed: any reason to doubt the endorsement yields `false`.
    pub fn verify(
        &self,
        hash: &DkgResultHash,
        endorsement: &Endorsement,
        claimed_signer: ParticipantIndex,
    ) -> bool {
        if endorsement.signer != claimed_signer {
            debug!(parent: &self.c.log, "endorsement signer {} doesn't match claimed signer {claimed_signer}", endorsement.signer);
            return false;
        }
        let key = match self.c.member_key(claimed_signer) {
            Ok(key) => key,
            Err(err) => {
                debug!(parent: &self.c.log, "rejecting endorsement: {err}");
                return false;
            }
        };

        match schnorr::verify::<S>(key, hash.as_ref(), &endorsement.signature) {
            Ok(()) => true,
            Err(err) => {
                debug!(parent: &self.c.log, "endorsement from {claimed_signer} is invalid: {err}");
                false
            }
        }
    }
}
