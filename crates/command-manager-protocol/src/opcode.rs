//! The closed set of Command Manager opcodes.

use std::fmt;

/// Number of characters in every opcode.
pub const OPCODE_LEN: usize = 10;

/// Wire text for the run number opcode.
pub const RUN_NUMBER: &str = "RUN_NO____";

/// Wire text for the polar number opcode.
pub const POLAR_NUMBER: &str = "POLAR_NO__";

/// Wire text for the free-text user message opcode.
pub const USER_MESSAGE: &str = "USR_MSG___";

/// Wire text for the user parameter list opcode.
pub const USER_FIELDS: &str = "D_USR_FLD_";

/// Wire text for the history query opcode.
pub const HISTORY_QUERY: &str = "HISTORY___";

/// A 10-character command identifier.
///
/// Matching is exact and case-sensitive. Anything outside the known set is
/// kept verbatim in [`Opcode::Unknown`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Opcode {
    /// `RUN_NO____`
    RunNumber,
    /// `POLAR_NO__`
    PolarNumber,
    /// `USR_MSG___`
    UserMessage,
    /// `D_USR_FLD_`
    UserFields,
    /// `HISTORY___`
    HistoryQuery,
    /// Any other 10-character prefix
    Unknown(String),
}

impl Opcode {
    /// Match opcode text against the known set.
    pub fn from_text(text: &str) -> Self {
        match text {
            RUN_NUMBER => Self::RunNumber,
            POLAR_NUMBER => Self::PolarNumber,
            USER_MESSAGE => Self::UserMessage,
            USER_FIELDS => Self::UserFields,
            HISTORY_QUERY => Self::HistoryQuery,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// Wire text of this opcode.
    pub fn as_str(&self) -> &str {
        match self {
            Self::RunNumber => RUN_NUMBER,
            Self::PolarNumber => POLAR_NUMBER,
            Self::UserMessage => USER_MESSAGE,
            Self::UserFields => USER_FIELDS,
            Self::HistoryQuery => HISTORY_QUERY,
            Self::Unknown(text) => text,
        }
    }

    /// Whether this opcode is dispatched and qualifies for history.
    ///
    /// The history query and unknown opcodes are never recorded.
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            Self::RunNumber | Self::PolarNumber | Self::UserMessage | Self::UserFields
        )
    }
}

impl fmt::Display for Opcode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
