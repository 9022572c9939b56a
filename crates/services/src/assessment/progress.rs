/// Answer counts for the current stage, useful for UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageProgress {
    pub total: usize,
    pub answered: usize,
    pub remaining: usize,
    pub can_advance: bool,
}
