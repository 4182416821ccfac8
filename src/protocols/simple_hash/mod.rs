//! Simple-hash commitment protocol.
//!
//! Commit phase: the committer samples a blinding value `r` of `n` bytes,
//! computes `c = H(r || x)` and sends `(id, c)`. Decommit phase: the
//! committer sends `(r, x)` and the receiver recomputes the digest and
//! compares it to the stored one. Both parties keep a per-id pending table,
//! so several sessions may be open at once as long as the caller serializes
//! access to the shared channel.
//!
//! The caller assigns ids and is responsible for phase ordering; an id that
//! is already pending is rejected rather than overwritten.
use crate::{
    channels::Channel,
    commitments::{CommitValue, Verdict},
    protocols::{CommitError, DecommitError},
};
use digest::Digest;
use rand::{CryptoRng, RngCore};
use std::collections::HashMap;
use std::marker::PhantomData;

pub mod message;

use self::message::{CommitmentMessage, DecommitmentMessage};

/// Default blinding value length in bytes.
pub const DEFAULT_SECURITY_PARAMETER: usize = 32;

/// Digest over the exact concatenation `r || x`, `r` first.
///
/// `r` has a fixed length known to both parties, so the split point is
/// unambiguous without separators or length prefixes inside the preimage.
pub fn compute_commitment<D: Digest>(r: &[u8], x: &[u8]) -> Vec<u8> {
    let mut hasher = D::new();
    hasher.update(r);
    hasher.update(x);
    hasher.finalize().to_vec()
}

/// State the committer keeps for one session between commit and decommit.
#[derive(Clone, Debug)]
pub struct CommitmentPhaseValues {
    pub r: Vec<u8>,
    pub x: CommitValue,
    pub commitment: Vec<u8>,
}

/// Committer side of the protocol.
///
/// Owns the channel to the receiver and the secure random generator; sharing
/// one instance across threads requires external synchronization.
pub struct SimpleHashCommitter<C: Channel, R: RngCore + CryptoRng, D: Digest> {
    channel: C,
    rng: R,
    n: usize,
    pending: HashMap<i64, CommitmentPhaseValues>,
    _digest: PhantomData<D>,
}

impl<C: Channel, R: RngCore + CryptoRng, D: Digest> SimpleHashCommitter<C, R, D> {
    /// Committer with the default blinding length of 32 bytes. The receiver
    /// must be instantiated with the same digest and security parameter.
    pub fn new(channel: C, rng: R) -> SimpleHashCommitter<C, R, D> {
        Self::with_security_parameter(channel, rng, DEFAULT_SECURITY_PARAMETER)
    }

    pub fn with_security_parameter(
        channel: C,
        rng: R,
        n: usize,
    ) -> SimpleHashCommitter<C, R, D> {
        SimpleHashCommitter {
            channel,
            rng,
            n,
            pending: HashMap::new(),
            _digest: PhantomData,
        }
    }

    /// Runs the commit phase for `id`: samples a fresh `r`, computes
    /// `c = H(r || x)`, records the session and sends `(id, c)`.
    ///
    /// The id is caller-assigned and must not already be pending; reusing an
    /// unresolved id is rejected as a protocol violation.
    pub fn generate_commitment_msg(
        &mut self,
        x: CommitValue,
        id: i64,
    ) -> Result<CommitmentMessage, CommitError> {
        if self.pending.contains_key(&id) {
            return Err(CommitError::DuplicateSession(id));
        }
        let mut r = vec![0u8; self.n];
        self.rng
            .try_fill_bytes(&mut r)
            .map_err(|_| CommitError::Randomness)?;
        let commitment = compute_commitment::<D>(&r, x.as_bytes());
        let message = CommitmentMessage {
            id,
            commitment: commitment.clone(),
        };
        self.pending.insert(id, CommitmentPhaseValues { r, x, commitment });
        self.channel.send(&message.to_bytes())?;
        Ok(message)
    }

    /// Runs the decommit phase for `id`: sends `(r, x)` for the session
    /// recorded earlier. The pending entry is retained; the committer's copy
    /// is not security-sensitive and the caller may commit again under a
    /// fresh id.
    pub fn generate_decommitment_msg(
        &mut self,
        id: i64,
    ) -> Result<DecommitmentMessage, DecommitError> {
        let values = self
            .pending
            .get(&id)
            .ok_or(DecommitError::UnknownSession(id))?;
        let message = DecommitmentMessage {
            r: values.r.clone(),
            x: values.x.as_bytes().to_vec(),
        };
        self.channel.send(&message.to_bytes())?;
        Ok(message)
    }

    /// Fresh uniformly random value of `n` bytes, for protocols that commit
    /// to an unbiased random input instead of an application-chosen one.
    /// No channel or pending-state side effects.
    pub fn sample_random_commit_value(&mut self) -> Result<CommitValue, CommitError> {
        let mut bytes = vec![0u8; self.n];
        self.rng
            .try_fill_bytes(&mut bytes)
            .map_err(|_| CommitError::Randomness)?;
        Ok(CommitValue::from_bytes(bytes))
    }

    pub fn generate_commit_value(&self, bytes: Vec<u8>) -> CommitValue {
        CommitValue::from_bytes(bytes)
    }

    /// The simple-hash scheme has no offline phase, so this is always empty.
    pub fn preprocess_values(&self) -> Vec<CommitValue> {
        Vec::new()
    }
}

/// Receiver side of the protocol.
pub struct SimpleHashReceiver<C: Channel, D: Digest> {
    channel: C,
    n: usize,
    pending: HashMap<i64, Vec<u8>>,
    _digest: PhantomData<D>,
}

impl<C: Channel, D: Digest> SimpleHashReceiver<C, D> {
    pub fn new(channel: C) -> SimpleHashReceiver<C, D> {
        Self::with_security_parameter(channel, DEFAULT_SECURITY_PARAMETER)
    }

    pub fn with_security_parameter(channel: C, n: usize) -> SimpleHashReceiver<C, D> {
        SimpleHashReceiver {
            channel,
            n,
            pending: HashMap::new(),
            _digest: PhantomData,
        }
    }

    /// Blocks for one commitment message, records its digest as pending and
    /// returns the session id. An id that is already pending is rejected.
    pub fn receive_commitment(&mut self) -> Result<i64, CommitError> {
        let bytes = self.channel.receive()?;
        let message = CommitmentMessage::from_bytes(&bytes)?;
        if self.pending.contains_key(&message.id) {
            return Err(CommitError::DuplicateSession(message.id));
        }
        self.pending.insert(message.id, message.commitment);
        Ok(message.id)
    }

    /// Blocks for one decommitment message and resolves the session `id`.
    ///
    /// The pending entry is removed whatever the verdict; a resolved id can
    /// never be resolved again. A mismatching reveal yields `Reject`, not an
    /// error, since an arbitrary `(r, x)` from a malicious committer is
    /// expected protocol input.
    pub fn receive_decommitment(&mut self, id: i64) -> Result<Verdict, DecommitError> {
        let bytes = self.channel.receive()?;
        let message = DecommitmentMessage::from_bytes(&bytes)?;
        let expected = self
            .pending
            .remove(&id)
            .ok_or(DecommitError::UnknownSession(id))?;
        Ok(Self::check(self.n, &expected, &message))
    }

    /// Pure verification for callers already holding both messages; reads no
    /// channel and touches no pending state.
    pub fn verify_decommitment(
        &self,
        commitment_msg: &CommitmentMessage,
        decommitment_msg: &DecommitmentMessage,
    ) -> Verdict {
        Self::check(self.n, &commitment_msg.commitment, decommitment_msg)
    }

    fn check(n: usize, expected: &[u8], message: &DecommitmentMessage) -> Verdict {
        // r and x must split at exactly n bytes, otherwise a shifted
        // boundary could open the same digest to a different x.
        if message.r.len() != n {
            return Verdict::Reject;
        }
        if compute_commitment::<D>(&message.r, &message.x) == expected {
            Verdict::Accept(CommitValue::from_bytes(message.x.clone()))
        } else {
            Verdict::Reject
        }
    }

    pub fn generate_commit_value(&self, bytes: Vec<u8>) -> CommitValue {
        CommitValue::from_bytes(bytes)
    }

    /// Mirrors the committer: no offline phase, always empty.
    pub fn preprocess_values(&self) -> Vec<CommitValue> {
        Vec::new()
    }
}
