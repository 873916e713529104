use super::structs::DkgResult;
use super::structs::DkgResultHash;
use super::structs::EndorsementSet;
use crate::traits::Scheme;

use std::fmt;
use std::future::Future;

/// Snapshot handed to the ledger. Messages arriving after it was taken
/// can't change it.
pub struct Submission<S: Scheme> {
    /// Public outcome, the private key share is never part of a submission.
    pub result: DkgResult<S>,
    pub result_hash: DkgResultHash,
    pub endorsements: EndorsementSet,
}

impl<S: Scheme> fmt::Debug for Submission<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Submission")
            .field("result", &self.result)
            .field("result_hash", &self.result_hash)
            .field("endorsements", &self.endorsements)
            .finish()
    }
}

/// Answer of the ledger to a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Accepted,
    /// An equivalent result was already submitted by another member.
    AlreadyFinalizedByOther,
    Rejected(String),
}

/// Successful end of a signing round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Our submission was accepted.
    Submitted,
    /// The ledger already holds the preferred result, published by a peer.
    FinalizedByOther,
}

/// SubmissionGateway abstracts the ledger client accepting a final result.
/// Calls are not retried: one submission per member per round.
pub trait SubmissionGateway<S: Scheme>: Send + Sync {
    fn submit(&self, submission: &Submission<S>)
        -> impl Future<Output = SubmissionOutcome> + Send;
}
