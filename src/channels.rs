//! Channels connect the two parties of the interactive protocol.
//!
//! A channel carries one ordered stream of framed byte messages between the
//! committer and the receiver. Both calls block; retry, timeout and liveness
//! policy belong to the channel implementation, not to the protocol on top.
use std::sync::mpsc::{channel, Receiver, Sender};

quick_error! {
    #[derive(Debug)]
    pub enum ChannelError {
        CouldNotSend {}
        CouldNotReceive {}
    }
}

/// A reliable, ordered, blocking message stream to the peer.
///
/// `receive` returns exactly one message as framed by the peer's `send`.
/// A single channel carries one logical stream; callers interleaving
/// several sessions on the same channel must serialize access themselves.
pub trait Channel {
    fn send(&mut self, bytes: &[u8]) -> Result<(), ChannelError>;
    fn receive(&mut self) -> Result<Vec<u8>, ChannelError>;
}

/// In-process channel endpoint backed by a pair of mpsc queues.
///
/// Sends never block; receives block until the peer has sent or hung up.
pub struct MemoryChannel {
    outgoing: Sender<Vec<u8>>,
    incoming: Receiver<Vec<u8>>,
}

/// Creates two connected endpoints, one per party.
pub fn memory_channel_pair() -> (MemoryChannel, MemoryChannel) {
    let (left_sender, left_receiver) = channel();
    let (right_sender, right_receiver) = channel();
    (
        MemoryChannel {
            outgoing: left_sender,
            incoming: right_receiver,
        },
        MemoryChannel {
            outgoing: right_sender,
            incoming: left_receiver,
        },
    )
}

impl Channel for MemoryChannel {
    fn send(&mut self, bytes: &[u8]) -> Result<(), ChannelError> {
        self.outgoing
            .send(bytes.to_vec())
            .map_err(|_| ChannelError::CouldNotSend)
    }

    fn receive(&mut self) -> Result<Vec<u8>, ChannelError> {
        self.incoming.recv().map_err(|_| ChannelError::CouldNotReceive)
    }
}

#[cfg(test)]
mod test {
    use super::{memory_channel_pair, Channel, ChannelError};

    #[test]
    fn test_send_receive_in_order() {
        let (mut left, mut right) = memory_channel_pair();
        left.send(b"first").unwrap();
        left.send(b"second").unwrap();
        assert_eq!(right.receive().unwrap(), b"first");
        assert_eq!(right.receive().unwrap(), b"second");

        right.send(b"reply").unwrap();
        assert_eq!(left.receive().unwrap(), b"reply");
    }

    #[test]
    fn test_receive_after_peer_dropped() {
        let (left, mut right) = memory_channel_pair();
        drop(left);
        match right.receive() {
            Err(ChannelError::CouldNotReceive) => {}
            other => panic!("expected CouldNotReceive, got {:?}", other),
        }
    }
}
