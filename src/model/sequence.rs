use std::fmt::Display;

/// Tag attached to an outgoing query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestSeq(pub u64);

impl Display for RequestSeq {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Monotonic counter for one stream of queries. Only the response to the most recently
/// issued query may be applied.
#[derive(Debug, Clone, Default)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestSeq {
        self.latest += 1;
        RequestSeq(self.latest)
    }

    pub fn is_latest(&self, seq: RequestSeq) -> bool {
        self.latest != 0 && seq.0 == self.latest
    }
}
