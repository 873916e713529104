use super::collector::Phase;
use super::structs::DkgResultHash;
use super::structs::ParticipantIndex;
use crate::backends::error::PointError;
use crate::schnorr::SchnorrError;

use std::time::Duration;

#[allow(non_camel_case_types)]
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResultError {
    #[error("participant index can't be zero")]
    ZeroIndex,
    #[error("threshold {threshold} is out of range for a group of {group_size}")]
    ThresholdOutOfRange { threshold: u32, group_size: u32 },
    #[error("expected {expected} members, received {received}")]
    GroupSizeMismatch { expected: u32, received: usize },
    #[error("found duplicate in members list: {0}")]
    MembersDuplicated(ParticipantIndex),
    #[error("member key not found, index: {0}")]
    MemberKeyNotFound(ParticipantIndex),
    #[error("member {index} is out of range for a group of {group_size}")]
    IndexOutOfRange {
        index: ParticipantIndex,
        group_size: u32,
    },
    #[error("member {0} has the identity point as public key")]
    IdentityKey(ParticipantIndex),
    #[error("long-term key doesn't match the key registered for member {0}")]
    KeyMismatch(ParticipantIndex),
    #[error("found duplicate in disqualified list: {0}")]
    DisqualifiedDuplicated(ParticipantIndex),
    #[error("found duplicate in inactive list: {0}")]
    InactiveDuplicated(ParticipantIndex),
    #[error("failed to encode group public key: {0}")]
    EncodeGroupKey(PointError),
    #[error("failed to sign result hash: {0}")]
    Sign(SchnorrError),
    #[error("own result hash {received} differs from the computed {expected}")]
    OwnHashMismatch {
        expected: DkgResultHash,
        received: DkgResultHash,
    },
    #[error("own endorsement is invalid")]
    OwnEndorsementInvalid,
    #[error("own endorsement can only be admitted once - current phase {0}")]
    AlreadySigned(Phase),
    #[error("quorum not reached: {accepted} of {threshold} endorsements")]
    QuorumNotReached { accepted: usize, threshold: u32 },
    #[error("submission can't be prepared in phase {0}")]
    NotReadyForSubmission(Phase),
    #[error("no submission in flight - current phase {0}")]
    NotSubmitting(Phase),
    #[error("round is not collecting endorsements - current phase {0}")]
    NotCollecting(Phase),

    #[error("BUG: preferred hash is missing after signing")]
    BUG_PreferredHashMissing,
}

/// Terminal failures of one signing round.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum RoundError {
    #[error("{0}")]
    Result(#[from] ResultError),
    #[error("quorum timeout: {accepted} of {threshold} endorsements collected")]
    QuorumTimeout { accepted: usize, threshold: u32 },
    #[error("submission timed out after {0:?}")]
    SubmissionTimeout(Duration),
    #[error("submission rejected: {0}")]
    SubmissionRejected(String),
    #[error("another result was finalized: {0}")]
    Superseded(DkgResultHash),
    #[error("incoming messages channel closed unexpectedly")]
    InboundClosed,
    #[error("outcoming messages channel closed unexpectedly")]
    OutboundClosed,
}
