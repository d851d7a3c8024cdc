use serde::{Deserialize, Serialize};

/// One completed sandwich inquiry. Never mutated after creation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InquiryRecord {
    pub cost: f64,
    pub cost_per_serving: f64,
    pub sandwich_inches: f64,
    pub servings: f64,
}

/// What the classifier decided about a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Ask again.
    Continued,
    /// The token is a usable positive answer.
    Completed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Integer,
    Float,
}

/// Why the shell stopped. Every reason maps to exit status 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// `exit` command or an exit word at the classifier; banner printed.
    Farewell,
    /// Exit token typed at a numeric prompt; no banner.
    Quiet,
    Interrupted,
    EndOfInput,
    Failed,
}
