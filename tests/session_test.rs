//! End-to-end rounds driven through a scripted console.

use chain_reaction::{
    Console, EvaluatorKind, PlayerConfig, RoundOutcome, Session, SessionConfig,
};
use chain_reaction_core::PlayerId;

fn two_humans(rows: usize, cols: usize) -> Session {
    let players = vec![PlayerConfig::human("Ann"), PlayerConfig::human("Bob")];
    let config = SessionConfig::new(rows, cols, false, players).unwrap();
    Session::from_config(&config).unwrap()
}

fn run(session: &mut Session, script: &str) -> String {
    let mut input = script.as_bytes();
    let mut output = Vec::new();
    session
        .run(&mut Console::new(&mut input, &mut output))
        .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn test_scripted_two_by_two_round() {
    let mut session = two_humans(2, 2);
    let output = run(&mut session, "0,0\n1,1\n0,0\n1,1\nn\n");

    assert!(output.contains("Welcome to ChainReaction!"));
    assert_eq!(output.matches("Placed ball.").count(), 4);
    assert!(output.contains("Ann has been eliminated."));
    assert!(output.contains(" ___ ___\n| 1 |   |\n|___|___|\n| 2 | 1 |\n|___|___|\n"));
    assert!(output.contains("Congratulations Bob!"));
    assert!(output.contains("===== SCORES =====\nAnn: 0\nBob: 1\n"));
    assert!(output.ends_with("Thanks for playing ChainReaction!\n"));

    assert_eq!(session.contenders()[1].score(), &1);
    assert_eq!(session.rounds().len(), 1);
    assert_eq!(
        session.rounds()[0].outcome(),
        &RoundOutcome::Won { seat: PlayerId(1) }
    );
    assert_eq!(session.rounds()[0].moves().len(), 4);
}

#[test]
fn test_invalid_input_reprompts_same_player() {
    let mut session = two_humans(3, 3);
    let output = run(&mut session, "1,1\n1,1\n9,9\n-2,0\nnonsense\nquit\nn\n");

    assert_eq!(output.matches("Invalid move. Try again.").count(), 3);
    assert_eq!(output.matches("Invalid command format.").count(), 1);
    assert_eq!(output.matches("Bob (\"row,column\" or \"quit\"): ").count(), 5);
    assert!(output.contains("The game was quit."));
    assert!(output.contains("Ann: 0\nBob: 0\n"));
    assert_eq!(
        session.rounds()[0].outcome(),
        &RoundOutcome::Quit { seat: PlayerId(1) }
    );
}

#[test]
fn test_play_again_keeps_scores() {
    let mut session = two_humans(2, 2);
    run(&mut session, "0,0\n1,1\n0,0\n1,1\ny\n0,0\n1,1\n0,0\n1,1\nyes\nquit\nno\n");

    assert_eq!(session.rounds().len(), 3);
    assert_eq!(session.contenders()[0].score(), &0);
    assert_eq!(session.contenders()[1].score(), &2);
}

#[test]
fn test_closed_input_ends_session() {
    let mut session = two_humans(3, 3);
    let output = run(&mut session, "0,0\n");

    assert!(output.contains("The game was quit."));
    assert!(output.ends_with("Thanks for playing ChainReaction!\n"));
    assert_eq!(session.rounds().len(), 1);
}

#[test]
fn test_human_against_computer() {
    let players = vec![
        PlayerConfig::human("Ann"),
        PlayerConfig::computer("Bot", 2, EvaluatorKind::Material),
    ];
    let config = SessionConfig::new(3, 3, false, players).unwrap();
    let mut session = Session::from_config(&config).unwrap();
    let output = run(&mut session, "1,1\nquit\nn\n");

    assert!(output.contains("Bot places a ball at ("));
    assert!(!session.contenders()[1].is_human());
    assert_eq!(session.rounds()[0].moves().len(), 2);
}
