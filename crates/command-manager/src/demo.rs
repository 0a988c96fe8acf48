//! Example messages run at startup.

/// Banner printed before the demo messages.
pub const DEMO_BANNER: &str = "Running example Command Manager messages...";

/// One message per opcode, then the failsafe cases: an unknown opcode, a
/// non-numeric run number and a message without its terminator.
pub const DEMO_MESSAGES: &[&str] = &[
    "RUN_NO____123#",
    "POLAR_NO__2#",
    "USR_MSG___Start Tunnel#",
    "D_USR_FLD_Parameter1,0.004947,Parameter2,0.203044,#",
    "RUN_NO____124#",
    "POLAR_NO__3#",
    "D_USR_FLD_Parameter3,0.02347,Parameter4,0.12343044,ParameterT,1.12345,#",
    "HISTORY___#",
    "UNKNOWN___test#",
    "RUN_NO____ABC#",
    "RUN_NO____123",
];
