use command_manager_protocol::{decode, CommandHistory, Opcode, HISTORY_CAPACITY};

fn run(messages: &[&str], history: &mut CommandHistory) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for message in messages {
        decode(message, history, &mut lines);
    }
    lines
}

fn history_text(history: &CommandHistory) -> Vec<String> {
    history.iter().map(|op| op.to_string()).collect()
}

// ============================================================
// Framing
// ============================================================

#[test]
fn unterminated_messages_are_silently_discarded() {
    let mut history = CommandHistory::new();
    let lines = run(
        &[
            "RUN_NO____123",
            "USR_MSG___Hello",
            "HISTORY___",
            "",
            "D_USR_FLD_A,1#,",
        ],
        &mut history,
    );

    assert!(lines.is_empty());
    assert!(history.is_empty());
}

#[test]
fn short_messages_are_silently_discarded() {
    let mut history = CommandHistory::new();
    let lines = run(&["#", "RUN_NO___#", "HISTORY#", "USR_MSG__#"], &mut history);

    assert!(lines.is_empty());
    assert!(history.is_empty());
}

#[test]
fn framing_failures_leave_existing_history_alone() {
    let mut history = CommandHistory::new();
    run(&["RUN_NO____1#", "POLAR_NO__2#"], &mut history);
    let before = history.clone();

    let lines = run(&["RUN_NO____3", "RUN_NO___#"], &mut history);

    assert!(lines.is_empty());
    assert_eq!(history, before);
}

// ============================================================
// Integer opcodes
// ============================================================

#[test]
fn run_and_polar_numbers() {
    let mut history = CommandHistory::new();
    let lines = run(&["RUN_NO____123#", "POLAR_NO__-2#"], &mut history);

    assert_eq!(lines, vec!["Run number: 123", "Polar number: -2"]);
}

#[test]
fn invalid_numbers_are_reported_and_still_recorded() {
    for (message, expected, opcode) in [
        ("RUN_NO____ABC#", "Invalid Run number: ABC", Opcode::RunNumber),
        ("RUN_NO____12abc#", "Invalid Run number: 12abc", Opcode::RunNumber),
        ("RUN_NO____#", "Invalid Run number: ", Opcode::RunNumber),
        ("POLAR_NO__3.5#", "Invalid Polar number: 3.5", Opcode::PolarNumber),
    ] {
        let mut history = CommandHistory::new();
        let lines = run(&[message], &mut history);

        assert_eq!(lines, vec![expected], "message {:?}", message);
        assert_eq!(history.to_vec(), vec![opcode]);
    }
}

// ============================================================
// Free text
// ============================================================

#[test]
fn user_message_round_trip() {
    let mut history = CommandHistory::new();
    let lines = run(&["USR_MSG___Hello World#"], &mut history);

    assert_eq!(lines, vec!["Hello World"]);
}

#[test]
fn user_message_keeps_inner_terminators() {
    let mut history = CommandHistory::new();
    let lines = run(&["USR_MSG___a#b##"], &mut history);

    assert_eq!(lines, vec!["a#b#"]);
}

#[test]
fn empty_user_message_emits_empty_line() {
    let mut history = CommandHistory::new();
    let lines = run(&["USR_MSG___#"], &mut history);

    assert_eq!(lines, vec![""]);
    assert_eq!(history.to_vec(), vec![Opcode::UserMessage]);
}

// ============================================================
// Parameter lists
// ============================================================

#[test]
fn parameter_list_with_trailing_comma() {
    let mut history = CommandHistory::new();
    let lines = run(
        &["D_USR_FLD_Parameter1,0.004947,Parameter2,0.203044,#"],
        &mut history,
    );

    assert_eq!(lines, vec!["Parameter1 = 0.004947", "Parameter2 = 0.203044"]);
}

#[test]
fn odd_parameter_list_prints_nothing_but_is_recorded() {
    let mut history = CommandHistory::new();
    let lines = run(&["D_USR_FLD_A,1.0,B#"], &mut history);

    assert!(lines.is_empty());
    assert_eq!(history.to_vec(), vec![Opcode::UserFields]);
}

#[test]
fn bad_pairs_do_not_stop_the_list() {
    let mut history = CommandHistory::new();
    let lines = run(
        &["D_USR_FLD_ParameterNameTooLong,1.0,Speed,fast,Angle,12.5#"],
        &mut history,
    );

    assert_eq!(
        lines,
        vec![
            "Parameter name too long: ParameterNameTooLong",
            "Invalid parameter value for parameter: Speed",
            "Angle = 12.5",
        ]
    );
}

// ============================================================
// History
// ============================================================

#[test]
fn history_keeps_five_most_recent() {
    let mut history = CommandHistory::new();
    run(
        &[
            "RUN_NO____1#",
            "POLAR_NO__2#",
            "USR_MSG___three#",
            "D_USR_FLD_a,4#",
            "RUN_NO____5#",
            "USR_MSG___six#",
        ],
        &mut history,
    );

    assert_eq!(history.len(), HISTORY_CAPACITY);
    assert_eq!(
        history_text(&history),
        vec![
            "USR_MSG___",
            "RUN_NO____",
            "D_USR_FLD_",
            "USR_MSG___",
            "POLAR_NO__",
        ]
    );
}

#[test]
fn query_and_unknown_are_never_recorded() {
    let mut history = CommandHistory::new();
    run(
        &[
            "HISTORY___#",
            "UNKNOWN___test#",
            "RUN_NO____1#",
            "HISTORY___#",
            "history___#",
            "POLAR_NO__2#",
            "HISTORY___#",
            "XXXXXXXXXXXXXXXX#",
        ],
        &mut history,
    );

    assert_eq!(history.to_vec(), vec![Opcode::PolarNumber, Opcode::RunNumber]);
    assert!(history
        .iter()
        .all(|op| *op != Opcode::HistoryQuery && op.is_recognized()));
}

#[test]
fn history_query_is_idempotent() {
    let mut history = CommandHistory::new();
    run(&["RUN_NO____1#", "USR_MSG___hi#"], &mut history);

    let first = run(&["HISTORY___#"], &mut history);
    let second = run(&["HISTORY___ignored payload#"], &mut history);

    assert_eq!(first, vec!["USR_MSG___", "RUN_NO____"]);
    assert_eq!(first, second);
}

#[test]
fn empty_history_query_prints_nothing() {
    let mut history = CommandHistory::new();
    assert!(run(&["HISTORY___#"], &mut history).is_empty());
}

// ============================================================
// Full session
// ============================================================

#[test]
fn example_session() {
    let mut history = CommandHistory::new();
    let lines = run(
        &[
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
        ],
        &mut history,
    );

    assert_eq!(
        lines,
        vec![
            "Run number: 123",
            "Polar number: 2",
            "Start Tunnel",
            "Parameter1 = 0.004947",
            "Parameter2 = 0.203044",
            "Run number: 124",
            "Polar number: 3",
            "Parameter3 = 0.02347",
            "Parameter4 = 0.12343",
            "ParameterT = 1.12345",
            "D_USR_FLD_",
            "POLAR_NO__",
            "RUN_NO____",
            "D_USR_FLD_",
            "USR_MSG___",
            "Invalid Run number: ABC",
        ]
    );
    assert_eq!(
        history_text(&history),
        vec![
            "RUN_NO____",
            "D_USR_FLD_",
            "POLAR_NO__",
            "RUN_NO____",
            "D_USR_FLD_",
        ]
    );
}
