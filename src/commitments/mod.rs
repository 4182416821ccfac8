//! Values a party can commit to, and the outcome of checking a reveal.

/// A value the committer binds itself to.
///
/// The variants form a closed set; the simple-hash scheme commits to opaque
/// byte strings only, so a single variant exists today. Keeping the enum
/// closed keeps the wire codec exhaustive.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitValue {
    Bytes(Vec<u8>),
}

impl CommitValue {
    pub fn from_bytes(bytes: Vec<u8>) -> CommitValue {
        CommitValue::Bytes(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            CommitValue::Bytes(bytes) => bytes,
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            CommitValue::Bytes(bytes) => bytes,
        }
    }
}

/// Outcome of checking a decommitment against a stored commitment.
///
/// A mismatching reveal is expected adversarial input, so rejection is a
/// first-class result rather than an error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Verdict {
    Accept(CommitValue),
    Reject,
}

impl Verdict {
    pub fn is_accept(&self) -> bool {
        match self {
            Verdict::Accept(_) => true,
            Verdict::Reject => false,
        }
    }

    /// The revealed value on acceptance, `None` on rejection.
    pub fn into_revealed(self) -> Option<CommitValue> {
        match self {
            Verdict::Accept(value) => Some(value),
            Verdict::Reject => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{CommitValue, Verdict};

    #[test]
    fn test_commit_value_bytes_round_trip() {
        let value = CommitValue::from_bytes(vec![1, 2, 3]);
        assert_eq!(value.as_bytes(), &[1, 2, 3]);
        assert_eq!(value.into_bytes(), vec![1, 2, 3]);
    }

    #[test]
    fn test_verdict_revealed_value() {
        let accept = Verdict::Accept(CommitValue::from_bytes(b"x".to_vec()));
        assert!(accept.is_accept());
        assert_eq!(
            accept.into_revealed(),
            Some(CommitValue::from_bytes(b"x".to_vec()))
        );
        assert!(!Verdict::Reject.is_accept());
        assert_eq!(Verdict::Reject.into_revealed(), None);
    }
}
