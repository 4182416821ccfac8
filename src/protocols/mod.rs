use crate::channels::ChannelError;
use crate::protocols::simple_hash::message::MessageError;

pub mod simple_hash;

quick_error! {
    #[derive(Debug)]
    pub enum CommitError {
        DuplicateSession(id: i64) {}
        Randomness {}
        Channel(err: ChannelError) {
            from()
        }
        Format(err: MessageError) {
            from()
        }
    }
}

quick_error! {
    #[derive(Debug)]
    pub enum DecommitError {
        UnknownSession(id: i64) {}
        Channel(err: ChannelError) {
            from()
        }
        Format(err: MessageError) {
            from()
        }
    }
}
