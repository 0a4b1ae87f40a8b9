//! The verification builder and its queue registry.

use std::fmt;

use sluice_arena::{BumpArena, RegionHandle};
use sluice_core::Word;

use crate::error::VerificationError;
use crate::queue::ValueQueue;

/// Arena of verification builders for one top-level verification call.
///
/// The arena is used only by [`VerificationBuilder::allocate`]; it is
/// reset when the enclosing call ends, reclaiming every builder at once.
pub type BuilderArena<'a> = BumpArena<VerificationBuilder<'a>>;

/// Names one of the builder's five value queues.
///
/// Every queue operation has the same contract shape, parameterized only
/// by which queue it touches and which exhaustion error it raises; this
/// enum is that parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum QueueKind {
    /// Verifier-supplied round challenges.
    Challenge,
    /// Prover-supplied first-round MLE evaluations.
    FirstRoundMle,
    /// Prover-supplied final-round MLE evaluations.
    FinalRoundMle,
    /// Chi evaluations for the protocol's consistency checks.
    ChiEvaluation,
    /// Rho evaluations for the protocol's consistency checks.
    RhoEvaluation,
}

impl QueueKind {
    /// Every queue kind, in builder slot order.
    pub const ALL: [QueueKind; 5] = [
        QueueKind::Challenge,
        QueueKind::FirstRoundMle,
        QueueKind::FinalRoundMle,
        QueueKind::ChiEvaluation,
        QueueKind::RhoEvaluation,
    ];

    /// The error raised when this queue is drained past its end.
    pub fn exhaustion_error(self) -> VerificationError {
        match self {
            Self::Challenge => VerificationError::TooFewChallenges,
            Self::FirstRoundMle => VerificationError::TooFewFirstRoundMles,
            Self::FinalRoundMle => VerificationError::TooFewFinalRoundMles,
            Self::ChiEvaluation => VerificationError::TooFewChiEvaluations,
            Self::RhoEvaluation => VerificationError::TooFewRhoEvaluations,
        }
    }
}

impl fmt::Display for QueueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Challenge => write!(f, "challenge"),
            Self::FirstRoundMle => write!(f, "first round MLE"),
            Self::FinalRoundMle => write!(f, "final round MLE"),
            Self::ChiEvaluation => write!(f, "chi evaluation"),
            Self::RhoEvaluation => write!(f, "rho evaluation"),
        }
    }
}

/// Scratch record marshalling every value one proof verification
/// consumes.
///
/// A builder owns five independent [`ValueQueue`]s. The surrounding
/// verifier allocates one builder per verification call, populates every
/// queue once from the proof transcript, then drains across queues in
/// the order the proof structure dictates. Any queue running dry raises
/// that queue's [`VerificationError`] variant, which the caller must
/// propagate as whole-verification failure — a builder that has failed
/// once must not be resumed.
///
/// Exclusive ownership is mechanical: every mutating operation takes
/// `&mut self`, and the backing slices are shared borrows the builder
/// can never outlive.
#[derive(Debug, Default)]
pub struct VerificationBuilder<'a> {
    challenges: ValueQueue<'a>,
    first_round_mles: ValueQueue<'a>,
    final_round_mles: ValueQueue<'a>,
    chi_evaluations: ValueQueue<'a>,
    rho_evaluations: ValueQueue<'a>,
}

impl<'a> VerificationBuilder<'a> {
    /// Create a builder with every queue unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate a fresh builder region from the call's arena.
    ///
    /// This is the only operation that touches the arena. The returned
    /// handle resolves through [`BumpArena::region_mut`] for the rest of
    /// the call.
    pub fn allocate(arena: &mut BuilderArena<'a>) -> RegionHandle {
        arena.allocate()
    }

    /// Shared access to one queue, for inspection.
    pub fn queue(&self, kind: QueueKind) -> &ValueQueue<'a> {
        match kind {
            QueueKind::Challenge => &self.challenges,
            QueueKind::FirstRoundMle => &self.first_round_mles,
            QueueKind::FinalRoundMle => &self.final_round_mles,
            QueueKind::ChiEvaluation => &self.chi_evaluations,
            QueueKind::RhoEvaluation => &self.rho_evaluations,
        }
    }

    fn queue_mut(&mut self, kind: QueueKind) -> &mut ValueQueue<'a> {
        match kind {
            QueueKind::Challenge => &mut self.challenges,
            QueueKind::FirstRoundMle => &mut self.first_round_mles,
            QueueKind::FinalRoundMle => &mut self.final_round_mles,
            QueueKind::ChiEvaluation => &mut self.chi_evaluations,
            QueueKind::RhoEvaluation => &mut self.rho_evaluations,
        }
    }

    /// Install one queue's backing slice from the proof transcript.
    ///
    /// The builder borrows `data` for the remainder of the verification;
    /// it never copies. Setting a queue that was already set silently
    /// discards the previous cursor state (see [`ValueQueue::set`]).
    pub fn set_queue(&mut self, kind: QueueKind, data: &'a [Word]) {
        self.queue_mut(kind).set(data);
    }

    /// Release the next element of one queue.
    ///
    /// Fails with the kind-specific exhaustion error when nothing
    /// remains. A failed consume leaves the builder's state exactly as
    /// it was, so the failure is deterministic on retry.
    pub fn try_consume(&mut self, kind: QueueKind) -> Result<Word, VerificationError> {
        self.queue_mut(kind)
            .consume()
            .ok_or_else(|| kind.exhaustion_error())
    }

    /// Release the next `count` elements of one queue, in supply order.
    ///
    /// All-or-nothing: if fewer than `count` elements remain, the
    /// kind-specific exhaustion error is returned and the queue is left
    /// untouched.
    pub fn try_consume_n(
        &mut self,
        kind: QueueKind,
        count: usize,
    ) -> Result<Vec<Word>, VerificationError> {
        let queue = self.queue_mut(kind);
        if queue.remaining() < count {
            return Err(kind.exhaustion_error());
        }
        let mut values = Vec::with_capacity(count);
        for _ in 0..count {
            // Cannot fail: remaining() was checked above.
            values.push(queue.consume().ok_or_else(|| kind.exhaustion_error())?);
        }
        Ok(values)
    }

    /// Install the round challenge queue.
    pub fn set_challenges(&mut self, data: &'a [Word]) {
        self.set_queue(QueueKind::Challenge, data);
    }

    /// Install the first-round MLE evaluation queue.
    pub fn set_first_round_mles(&mut self, data: &'a [Word]) {
        self.set_queue(QueueKind::FirstRoundMle, data);
    }

    /// Install the final-round MLE evaluation queue.
    pub fn set_final_round_mles(&mut self, data: &'a [Word]) {
        self.set_queue(QueueKind::FinalRoundMle, data);
    }

    /// Install the chi evaluation queue.
    pub fn set_chi_evaluations(&mut self, data: &'a [Word]) {
        self.set_queue(QueueKind::ChiEvaluation, data);
    }

    /// Install the rho evaluation queue.
    pub fn set_rho_evaluations(&mut self, data: &'a [Word]) {
        self.set_queue(QueueKind::RhoEvaluation, data);
    }

    /// Release the next round challenge.
    pub fn try_consume_challenge(&mut self) -> Result<Word, VerificationError> {
        self.try_consume(QueueKind::Challenge)
    }

    /// Release the next first-round MLE evaluation.
    pub fn try_consume_first_round_mle(&mut self) -> Result<Word, VerificationError> {
        self.try_consume(QueueKind::FirstRoundMle)
    }

    /// Release the next final-round MLE evaluation.
    pub fn try_consume_final_round_mle(&mut self) -> Result<Word, VerificationError> {
        self.try_consume(QueueKind::FinalRoundMle)
    }

    /// Release the next chi evaluation.
    pub fn try_consume_chi_evaluation(&mut self) -> Result<Word, VerificationError> {
        self.try_consume(QueueKind::ChiEvaluation)
    }

    /// Release the next rho evaluation.
    pub fn try_consume_rho_evaluation(&mut self) -> Result<Word, VerificationError> {
        self.try_consume(QueueKind::RhoEvaluation)
    }
}
