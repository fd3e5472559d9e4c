use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SuffixArrayError {
    #[error("rank {rank} out of range for suffix array of length {len}")]
    RankOutOfRange { rank: usize, len: usize },
}
