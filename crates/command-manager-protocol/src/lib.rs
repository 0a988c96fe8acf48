//! Command Manager message protocol.
//!
//! Decodes single-line `#`-terminated command messages for the measurement
//! control subsystem and keeps a bounded history of recognized opcodes.
//! This crate contains only decoding logic. It reads no input streams and
//! leaves the output destination to an [`OutputSink`].
//!
//! # Message Layout
//!
//! ```text
//! RUN_NO____123#
//! └────┬───┘└┬┘└ terminator
//!   opcode  payload
//! ```
//!
//! | Opcode       | Payload               | Recorded |
//! |--------------|-----------------------|----------|
//! | `RUN_NO____` | integer               | yes      |
//! | `POLAR_NO__` | integer               | yes      |
//! | `USR_MSG___` | free text             | yes      |
//! | `D_USR_FLD_` | `name,value,...` list | yes      |
//! | `HISTORY___` | ignored               | no       |
//!
//! # Usage
//!
//! ```
//! use command_manager_protocol::{decode, CommandHistory};
//!
//! let mut history = CommandHistory::new();
//! let mut lines: Vec<String> = Vec::new();
//!
//! decode("RUN_NO____123#", &mut history, &mut lines);
//! decode("HISTORY___#", &mut history, &mut lines);
//!
//! assert_eq!(lines, vec!["Run number: 123", "RUN_NO____"]);
//! ```

pub mod command;
pub mod decoder;
pub mod error;
pub mod frame;
pub mod history;
pub mod opcode;
pub mod payload;
pub mod sink;

pub use command::{Command, IntegerField};
pub use decoder::{decode, CommandManager, Disposition};
pub use error::{ProtocolError, ProtocolResult};
pub use frame::{Frame, MIN_MESSAGE_LEN, TERMINATOR};
pub use history::{CommandHistory, HISTORY_CAPACITY};
pub use opcode::{Opcode, OPCODE_LEN};
pub use payload::{format_value, ParameterPair, ParameterResult, MAX_PARAMETER_NAME_LEN};
pub use sink::{LineWriter, OutputSink};
