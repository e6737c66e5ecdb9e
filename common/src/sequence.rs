/// Identifies one issued list request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct RequestToken(u64);

/// Monotonic per-resource counter used to drop responses that arrive after a
/// newer request was issued.
#[derive(Debug, Default, Clone)]
pub struct RequestSequence {
    latest: u64,
}

impl RequestSequence {
    pub fn issue(&mut self) -> RequestToken {
        self.latest += 1;
        RequestToken(self.latest)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        token.0 == self.latest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_newest_token_is_current() {
        let mut sequence = RequestSequence::default();
        let first = sequence.issue();
        assert!(sequence.is_latest(first));
        let second = sequence.issue();
        assert!(!sequence.is_latest(first));
        assert!(sequence.is_latest(second));
        assert!(second > first);
    }
}
