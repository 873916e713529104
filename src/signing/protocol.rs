use super::collector::QuorumCollector;
use super::error::RoundError;
use super::hasher::ResultHasher;
use super::structs::*;
use super::submission::RoundOutcome;
use super::submission::SubmissionGateway;
use crate::traits::Scheme;

use tokio::sync::mpsc;
use tracing::*;

/// Sender to forward peer traffic to the [`Protocol`].
pub type MessageSender = mpsc::Sender<Inbound>;

/// Receiver for the messages the [`Protocol`] broadcasts.
pub type MessageReceiver = mpsc::Receiver<ResultSignatureMessage>;

/// Board serves as a transport between the signing protocol and application layer.
struct Board {
    /// Inner receiver with associated [`MessageSender`].
    rx_in: mpsc::Receiver<Inbound>,
    /// Inner sender with associated [`MessageReceiver`].
    tx_out: mpsc::Sender<ResultSignatureMessage>,
}

impl Board {
    async fn broadcast(&self, msg: ResultSignatureMessage) -> Result<(), RoundError> {
        self.tx_out
            .send(msg)
            .await
            .map_err(|_| RoundError::OutboundClosed)
    }
}

/// Protocol is an asynchronous wrapper around [`QuorumCollector`]. It is the
/// only writer of the collector: inbound messages are applied one at a time.
pub struct Protocol<S: Scheme, H: ResultHasher<S>, G: SubmissionGateway<S>> {
    collector: QuorumCollector<S, H>,
    gateway: G,
    board: Board,
}

impl<S, H, G> Protocol<S, H, G>
where
    S: Scheme,
    H: ResultHasher<S>,
    G: SubmissionGateway<S>,
{
    /// Initializes a signing round for the given collector.
    ///
    /// Returns a triplet:
    /// - Protocol instance to run (see [`Self::run`]).
    /// - `MessageReceiver` for receiving broadcasts from the protocol (protocol → external).
    /// - `MessageSender` for sending peer traffic to the protocol (external → protocol).
    pub fn new(collector: QuorumCollector<S, H>, gateway: G) -> (Self, MessageReceiver, MessageSender) {
        let capacity = collector.config().group_size.max(1) as usize;
        // Channel for inbound messages
        let (tx_in, rx_in) = mpsc::channel::<Inbound>(capacity);
        // Channel for outbound messages
        let (tx_out, rx_out) = mpsc::channel::<ResultSignatureMessage>(capacity);
        let board = Board { rx_in, tx_out };
        let protocol = Self {
            collector,
            gateway,
            board,
        };

        (protocol, rx_out, tx_in)
    }

    pub async fn run(self) -> Result<RoundOutcome, RoundError> {
        let Self {
            mut collector,
            gateway,
            mut board,
        } = self;
        let log = collector.config().log.clone();
        let deadline = tokio::time::sleep(collector.config().round_timeout);
        tokio::pin!(deadline);

        let own = collector.sign_own()?;
        info!(parent: &log, "broadcasting endorsement for result {}", own.result_hash);
        if let Err(err) = board.broadcast(own).await {
            collector.fail();
            return Err(err);
        }

        while !collector.quorum_satisfied() {
            tokio::select! {
                _ = &mut deadline => {
                    collector.fail();
                    let threshold = collector.config().threshold;
                    error!(parent: &log, "quorum timeout, got {} of {threshold} endorsements", collector.accepted_count());
                    return Err(RoundError::QuorumTimeout { accepted: collector.accepted_count(), threshold });
                }
                inbound = board.rx_in.recv() => match inbound {
                    Some(Inbound::Signature(msg)) => {
                        let sender = msg.sender_index;
                        match collector.admit_message(msg) {
                            Ok(admitted) => debug!(parent: &log, "endorsement from {sender}: {admitted:?}, total {}", collector.accepted_count()),
                            Err(reason) => warn!(parent: &log, "ignoring endorsement from {sender}, reason: {reason}"),
                        }
                    }
                    Some(Inbound::Finalized(hash)) => return collector.observe_finalized(hash),
                    None => {
                        collector.fail();
                        return Err(RoundError::InboundClosed);
                    }
                }
            }
        }

        let submission = collector.ready_for_submission()?;
        let timeout = collector.config().submission_timeout;
        info!(parent: &log, "submitting result {} with {} endorsements", submission.result_hash, submission.endorsements.len());

        match tokio::time::timeout(timeout, gateway.submit(&submission)).await {
            Ok(outcome) => collector.finish(outcome),
            Err(_) => {
                error!(parent: &log, "submission timed out after {timeout:?}");
                collector.fail();
                Err(RoundError::SubmissionTimeout(timeout))
            }
        }
    }
}
