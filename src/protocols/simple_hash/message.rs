//! Wire format of the two protocol messages.
//!
//! Serialization round-trips exactly: parsing the produced bytes yields the
//! original field values, and any truncated or over-long input is rejected.
use std::convert::TryInto;

quick_error! {
    #[derive(Debug)]
    pub enum MessageError {
        UnexpectedEnd {}
        TrailingBytes {}
    }
}

/// Commit-phase record: the session id and the commitment digest.
///
/// Layout: 8-byte big-endian signed id, then a u32 big-endian length
/// followed by that many digest bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitmentMessage {
    pub id: i64,
    pub commitment: Vec<u8>,
}

/// Decommit-phase record: the blinding value and the committed value.
///
/// Carries no id; the surrounding protocol correlates it with the earlier
/// commitment by call sequencing. Layout: two length-prefixed byte fields,
/// `r` first.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DecommitmentMessage {
    pub r: Vec<u8>,
    pub x: Vec<u8>,
}

fn put_length_prefixed(out: &mut Vec<u8>, bytes: &[u8]) {
    out.extend_from_slice(&(bytes.len() as u32).to_be_bytes());
    out.extend_from_slice(bytes);
}

fn take_length_prefixed<'a>(input: &'a [u8]) -> Result<(Vec<u8>, &'a [u8]), MessageError> {
    if input.len() < 4 {
        return Err(MessageError::UnexpectedEnd);
    }
    let (length_bytes, rest) = input.split_at(4);
    let length = u32::from_be_bytes(length_bytes.try_into().unwrap()) as usize;
    if rest.len() < length {
        return Err(MessageError::UnexpectedEnd);
    }
    let (bytes, rest) = rest.split_at(length);
    Ok((bytes.to_vec(), rest))
}

impl CommitmentMessage {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(12 + self.commitment.len());
        out.extend_from_slice(&self.id.to_be_bytes());
        put_length_prefixed(&mut out, &self.commitment);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<CommitmentMessage, MessageError> {
        if bytes.len() < 8 {
            return Err(MessageError::UnexpectedEnd);
        }
        let (id_bytes, rest) = bytes.split_at(8);
        let id = i64::from_be_bytes(id_bytes.try_into().unwrap());
        let (commitment, rest) = take_length_prefixed(rest)?;
        if !rest.is_empty() {
            return Err(MessageError::TrailingBytes);
        }
        Ok(CommitmentMessage { id, commitment })
    }
}

impl DecommitmentMessage {
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.r.len() + self.x.len());
        put_length_prefixed(&mut out, &self.r);
        put_length_prefixed(&mut out, &self.x);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<DecommitmentMessage, MessageError> {
        let (r, rest) = take_length_prefixed(bytes)?;
        let (x, rest) = take_length_prefixed(rest)?;
        if !rest.is_empty() {
            return Err(MessageError::TrailingBytes);
        }
        Ok(DecommitmentMessage { r, x })
    }
}

#[cfg(test)]
mod test {
    use super::{CommitmentMessage, DecommitmentMessage, MessageError};

    #[test]
    fn test_commitment_message_round_trip() {
        let message = CommitmentMessage {
            id: -37,
            commitment: vec![0xab; 32],
        };
        let parsed = CommitmentMessage::from_bytes(&message.to_bytes()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_decommitment_message_round_trip() {
        let message = DecommitmentMessage {
            r: vec![7; 32],
            x: b"hello".to_vec(),
        };
        let parsed = DecommitmentMessage::from_bytes(&message.to_bytes()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_empty_fields_round_trip() {
        let message = DecommitmentMessage {
            r: vec![],
            x: vec![],
        };
        let parsed = DecommitmentMessage::from_bytes(&message.to_bytes()).unwrap();
        assert_eq!(parsed, message);
    }

    #[test]
    fn test_truncated_input_rejected() {
        let bytes = CommitmentMessage {
            id: 1,
            commitment: vec![1; 32],
        }
        .to_bytes();
        for end in 0..bytes.len() {
            match CommitmentMessage::from_bytes(&bytes[..end]) {
                Err(MessageError::UnexpectedEnd) => {}
                other => panic!("prefix of length {} gave {:?}", end, other),
            }
        }
    }

    #[test]
    fn test_trailing_bytes_rejected() {
        let mut bytes = DecommitmentMessage {
            r: vec![7; 32],
            x: b"hello".to_vec(),
        }
        .to_bytes();
        bytes.push(0);
        match DecommitmentMessage::from_bytes(&bytes) {
            Err(MessageError::TrailingBytes) => {}
            other => panic!("expected TrailingBytes, got {:?}", other),
        }
    }
}
