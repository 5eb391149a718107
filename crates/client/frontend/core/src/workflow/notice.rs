use std::fmt;

use game_core::SessionSummary;

use crate::format;

/// Player-facing outcome of a workflow step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Submitted with an empty nickname.
    NameRequired,
    WalletUnavailable,
    Minted {
        username: String,
        summary: SessionSummary,
    },
    /// The issuer refused; carries its reason verbatim.
    VoucherRejected(String),
    MintFailed,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::NameRequired => f.write_str("Write your nickname"),
            Notice::WalletUnavailable => {
                f.write_str("No wallet available, connect a wallet and try again")
            }
            Notice::Minted { username, summary } => write!(
                f,
                "Congrats {} for scoring {} in {} seconds.",
                username,
                summary.score,
                format::seconds(summary.elapsed_ms)
            ),
            Notice::VoucherRejected(reason) => f.write_str(reason),
            Notice::MintFailed => f.write_str("Failed to mint your collectible"),
        }
    }
}
