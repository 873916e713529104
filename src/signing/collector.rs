use super::error::ResultError;
use super::error::RoundError;
use super::hasher::ResultHasher;
use super::signer::Config;
use super::signer::ResultSigner;
use super::structs::*;
use super::submission::RoundOutcome;
use super::submission::Submission;
use super::submission::SubmissionOutcome;
use crate::traits::Scheme;

use std::fmt::Display;
use tracing::{debug, error, info, warn};

/// Phase of the result signing round.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Phase {
    /// Result known, not signed yet.
    Computed,
    Signed,
    Collecting,
    QuorumReached,
    Submitting,
    Submitted,
    Failed,
}

impl Phase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Phase::Submitted | Phase::Failed)
    }

    fn accepts_peers(&self) -> bool {
        matches!(self, Phase::Collecting | Phase::QuorumReached)
    }
}

impl Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Computed => f.write_str("computed"),
            Phase::Signed => f.write_str("signed"),
            Phase::Collecting => f.write_str("collecting"),
            Phase::QuorumReached => f.write_str("quorum reached"),
            Phase::Submitting => f.write_str("submitting"),
            Phase::Submitted => f.write_str("submitted"),
            Phase::Failed => f.write_str("failed"),
        }
    }
}

/// Reasons a peer endorsement is discarded. None of them are fatal to the round.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Rejected {
    #[error("not accepting endorsements in phase {0}")]
    Closed(Phase),
    #[error("own index {0} can't be admitted as a peer")]
    OwnIndex(ParticipantIndex),
    #[error("member {peer} prefers result {received}, local preference is {preferred}")]
    OutcomeMismatch {
        peer: ParticipantIndex,
        preferred: DkgResultHash,
        received: DkgResultHash,
    },
    #[error("invalid endorsement from member {0}")]
    InvalidEndorsement(ParticipantIndex),
}

/// QuorumCollector accumulates endorsements supporting the locally preferred
/// result. It has a single owner: every mutation goes through `&mut self`.
pub struct QuorumCollector<S: Scheme, H: ResultHasher<S>> {
    signer: ResultSigner<S>,
    hasher: H,
    result: DkgResult<S>,
    /// Hash of the result preferred by the local participant, set once signed.
    preferred: Option<DkgResultHash>,
    /// Valid endorsements supporting the preferred result, own included.
    endorsements: EndorsementSet,
    phase: Phase,
}

impl<S: Scheme, H: ResultHasher<S>> QuorumCollector<S, H> {
    pub fn new(signer: ResultSigner<S>, hasher: H, result: DkgResult<S>) -> Self {
        Self {
            signer,
            hasher,
            result,
            preferred: None,
            endorsements: EndorsementSet::new(),
            phase: Phase::Computed,
        }
    }

    /// Hashes the local result, signs it and admits the own endorsement.
    /// Returns the message to broadcast to peers.
    pub fn sign_own(&mut self) -> Result<ResultSignatureMessage, ResultError> {
        let hash = self.hasher.hash(&self.result)?;
        let endorsement = self.signer.sign(&hash)?;
        self.admit_own(hash, endorsement.clone())?;

        Ok(ResultSignatureMessage {
            sender_index: self.signer.index(),
            result_hash: hash,
            endorsement,
        })
    }

    pub fn admit_own(
        &mut self,
        hash: DkgResultHash,
        endorsement: Endorsement,
    ) -> Result<(), ResultError> {
        if self.phase != Phase::Computed {
            return Err(ResultError::AlreadySigned(self.phase));
        }
        let expected = self.hasher.hash(&self.result)?;
        if hash != expected {
            return Err(ResultError::OwnHashMismatch {
                expected,
                received: hash,
            });
        }
        if !self.signer.verify(&hash, &endorsement, self.signer.index()) {
            return Err(ResultError::OwnEndorsementInvalid);
        }

        self.preferred = Some(hash);
        let _ = self.endorsements.insert(endorsement);
        self.set_phase(Phase::Signed);
        self.set_phase(Phase::Collecting);
        self.check_quorum();

        Ok(())
    }

    pub fn admit_peer(
        &mut self,
        peer: ParticipantIndex,
        peer_hash: DkgResultHash,
        endorsement: Endorsement,
    ) -> Result<Admitted, Rejected> {
        if !self.phase.accepts_peers() {
            return Err(Rejected::Closed(self.phase));
        }
        if peer == self.signer.index() {
            return Err(Rejected::OwnIndex(peer));
        }
        let preferred = self.preferred.ok_or(Rejected::Closed(self.phase))?;
        if peer_hash != preferred {
            return Err(Rejected::OutcomeMismatch {
                peer,
                preferred,
                received: peer_hash,
            });
        }
        if !self.signer.verify(&preferred, &endorsement, peer) {
            return Err(Rejected::InvalidEndorsement(peer));
        }

        let admitted = self.endorsements.insert(endorsement);
        if admitted == Admitted::Replaced {
            warn!(parent: self.log(), "member {peer} sent a different valid endorsement, keeping the latest");
        }
        self.check_quorum();

        Ok(admitted)
    }

    /// Convenience over [`Self::admit_peer`] for a received broadcast.
    pub fn admit_message(&mut self, msg: ResultSignatureMessage) -> Result<Admitted, Rejected> {
        self.admit_peer(msg.sender_index, msg.result_hash, msg.endorsement)
    }

    pub fn quorum_satisfied(&self) -> bool {
        self.endorsements.len() >= self.config().threshold as usize
    }

    /// Freezes a snapshot of the accepted endorsements for the single
    /// submission attempt of this round.
    pub fn ready_for_submission(&mut self) -> Result<Submission<S>, ResultError> {
        if self.phase != Phase::QuorumReached {
            if self.phase == Phase::Collecting {
                return Err(ResultError::QuorumNotReached {
                    accepted: self.endorsements.len(),
                    threshold: self.config().threshold,
                });
            }
            return Err(ResultError::NotReadyForSubmission(self.phase));
        }
        let result_hash = self.preferred.ok_or(ResultError::BUG_PreferredHashMissing)?;

        let submission = Submission {
            result: self.result.public_copy(),
            result_hash,
            endorsements: self.endorsements.clone(),
        };
        self.set_phase(Phase::Submitting);

        Ok(submission)
    }

    /// Applies the gateway answer to the in-flight submission.
    pub fn finish(&mut self, outcome: SubmissionOutcome) -> Result<RoundOutcome, RoundError> {
        if self.phase != Phase::Submitting {
            return Err(ResultError::NotSubmitting(self.phase).into());
        }

        match outcome {
            SubmissionOutcome::Accepted => {
                info!(parent: self.log(), "result submitted with {} endorsements", self.endorsements.len());
                self.set_phase(Phase::Submitted);
                Ok(RoundOutcome::Submitted)
            }
            SubmissionOutcome::AlreadyFinalizedByOther => {
                info!(parent: self.log(), "result already finalized by another member");
                self.set_phase(Phase::Submitted);
                Ok(RoundOutcome::FinalizedByOther)
            }
            SubmissionOutcome::Rejected(reason) => {
                error!(parent: self.log(), "result submission rejected: {reason}");
                self.set_phase(Phase::Failed);
                Err(RoundError::SubmissionRejected(reason))
            }
        }
    }

    /// Another member got a result accepted by the ledger. Only observed while
    /// collecting; an in-flight submission learns it from the gateway answer.
    pub fn observe_finalized(&mut self, hash: DkgResultHash) -> Result<RoundOutcome, RoundError> {
        if !self.phase.accepts_peers() {
            return Err(ResultError::NotCollecting(self.phase).into());
        }
        if self.preferred == Some(hash) {
            info!(parent: self.log(), "preferred result {hash} finalized by another member");
            self.set_phase(Phase::Submitted);
            return Ok(RoundOutcome::FinalizedByOther);
        }

        error!(parent: self.log(), "ledger finalized result {hash}, which differs from the preferred one");
        self.set_phase(Phase::Failed);
        Err(RoundError::Superseded(hash))
    }

    /// Closes the round, e.g. on timeout.
    pub fn fail(&mut self) {
        self.set_phase(Phase::Failed);
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn preferred_hash(&self) -> Option<DkgResultHash> {
        self.preferred
    }

    pub fn accepted_count(&self) -> usize {
        self.endorsements.len()
    }

    pub fn endorsements(&self) -> &EndorsementSet {
        &self.endorsements
    }

    pub fn result(&self) -> &DkgResult<S> {
        &self.result
    }

    pub fn config(&self) -> &Config<S> {
        self.signer.config()
    }

    pub fn signer(&self) -> &ResultSigner<S> {
        &self.signer
    }

    fn check_quorum(&mut self) {
        if self.phase == Phase::Collecting && self.quorum_satisfied() {
            info!(parent: self.log(), "quorum reached, got {} endorsements", self.endorsements.len());
            self.set_phase(Phase::QuorumReached);
        }
    }

    /// Terminal phases are final.
    fn set_phase(&mut self, phase: Phase) {
        if self.phase.is_terminal() {
            return;
        }
        debug!(parent: self.log(), "phase {} -> {phase}", self.phase);
        self.phase = phase;
    }

    #[inline(always)]
    fn log(&self) -> &tracing::Span {
        &self.config().log
    }
}
