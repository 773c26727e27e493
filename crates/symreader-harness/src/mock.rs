//! Scripted stand-in for the native symbol reader.
//!
//! The mock speaks the same two-call protocol as the real collaborator:
//! count queries and buffer fills returning HRESULTs. A [`Fault`] selects
//! how the calls misbehave, one variant per failure the interop layer must
//! classify.

use symreader_core::hresult::{E_FAIL, HResult, S_OK};

/// Misbehavior injected into the mock's native calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fault {
    /// Honest count and fill.
    None,
    /// The fill call returns this hard-failure status without writing.
    Hard(HResult),
    /// Count and fill both answer "failed, no information".
    NoInfo,
    /// The fill call writes everything but reports this count instead.
    MisreportCount(i32),
}

/// Scripted native collaborator holding one canned item set.
#[derive(Debug, Clone)]
pub struct MockReader {
    items: Vec<u32>,
    fault: Fault,
}

impl MockReader {
    pub fn new(items: Vec<u32>) -> Self {
        Self {
            items,
            fault: Fault::None,
        }
    }

    pub fn with_fault(items: Vec<u32>, fault: Fault) -> Self {
        Self { items, fault }
    }

    /// Count operation: `(status, available)`.
    pub fn count(&self) -> (HResult, i32) {
        match self.fault {
            Fault::NoInfo => (E_FAIL, 0),
            _ => (S_OK, self.items.len() as i32),
        }
    }

    /// Fill operation: copies into `buffer`, returns `(status, written)`.
    pub fn fill(&self, buffer_length: i32, buffer: &mut [u32]) -> (HResult, i32) {
        match self.fault {
            Fault::Hard(hr) => (hr, 0),
            Fault::NoInfo => (E_FAIL, 0),
            Fault::None | Fault::MisreportCount(_) => {
                let take = usize::try_from(buffer_length)
                    .unwrap_or(0)
                    .min(self.items.len())
                    .min(buffer.len());
                buffer[..take].copy_from_slice(&self.items[..take]);
                let reported = match self.fault {
                    Fault::MisreportCount(n) => n,
                    _ => take as i32,
                };
                (S_OK, reported)
            }
        }
    }

    /// Self-describing fill: a call without a buffer answers the count.
    pub fn fill_self_describing(
        &self,
        buffer_length: i32,
        buffer: Option<&mut [u32]>,
    ) -> (HResult, i32) {
        match buffer {
            None => self.count(),
            Some(buffer) => self.fill(buffer_length, buffer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_honest_fill_reports_what_it_wrote() {
        let reader = MockReader::new(vec![1, 2, 3]);
        let mut buffer = [0u32; 3];
        assert_eq!(reader.fill(3, &mut buffer), (S_OK, 3));
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_misreport_writes_but_lies() {
        let reader = MockReader::with_fault(vec![1, 2, 3], Fault::MisreportCount(1));
        let mut buffer = [0u32; 3];
        assert_eq!(reader.fill(3, &mut buffer), (S_OK, 1));
        assert_eq!(buffer, [1, 2, 3]);
    }

    #[test]
    fn test_no_info_answers_benign_failure() {
        let reader = MockReader::with_fault(vec![1], Fault::NoInfo);
        assert_eq!(reader.count(), (E_FAIL, 0));
    }
}
