pub mod collector;
pub mod error;
pub mod hasher;
pub mod protocol;
pub mod signer;
pub mod structs;
pub mod submission;


pub use collector::Phase;
pub use collector::QuorumCollector;
pub use collector::Rejected;
pub use error::ResultError;
pub use error::RoundError;
pub use hasher::Keccak256Hasher;
pub use hasher::ResultHasher;
pub use protocol::MessageReceiver;
pub use protocol::MessageSender;
pub use protocol::Protocol;
pub use signer::Config;
pub use signer::Member;
pub use signer::ResultSigner;
pub use structs::Admitted;
pub use structs::DkgResult;
pub use structs::DkgResultHash;
pub use structs::Endorsement;
pub use structs::EndorsementSet;
pub use structs::Inbound;
pub use structs::ParticipantIndex;
pub use structs::ResultSignatureMessage;
pub use submission::RoundOutcome;
pub use submission::Submission;
pub use submission::SubmissionGateway;
pub use submission::SubmissionOutcome;
