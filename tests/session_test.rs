//! Full console sessions driven through in-memory buffers.

use std::io::Cursor;

use naughts_and_crosses::Session;

fn run_session(script: &str) -> String {
    let mut output = Vec::new();
    let mut session = Session::new(Cursor::new(script.as_bytes()), &mut output);
    session.run().expect("session runs to completion");
    drop(session);
    String::from_utf8(output).expect("session output is UTF-8")
}

#[test]
fn x_wins_the_top_row() {
    let output = run_session("1,1\n2,1\n1,2\n2,2\n1,3\nn\n");
    assert!(output.contains("The winner is: X"));
    assert!(output.contains("Thanks for playing. Bye."));
}

#[test]
fn board_rendered_after_each_move() {
    let output = run_session("1,1\n2,2\nn\n");
    let after_first_move = concat!(
        " --- --- ---\n",
        "| X |   |   |\n",
        " --- --- ---\n",
        "|   |   |   |\n",
        " --- --- ---\n",
        "|   |   |   |\n",
        " --- --- ---\n",
    );
    let after_second_move = concat!(
        " --- --- ---\n",
        "| X |   |   |\n",
        " --- --- ---\n",
        "|   | O |   |\n",
        " --- --- ---\n",
        "|   |   |   |\n",
        " --- --- ---\n",
    );
    assert!(output.contains(after_first_move));
    assert!(output.contains(after_second_move));
}

#[test]
fn full_board_without_winner_announces_no_winner() {
    let output = run_session("1,1\n2,2\n1,3\n1,2\n2,1\n2,3\n3,2\n3,1\n3,3\nn\n");
    assert!(output.contains("No winner."));
    assert!(!output.contains("The winner is:"));
}

#[test]
fn occupied_cell_reprompts_without_consuming_the_turn() {
    // O tries X's opening square, is re-prompted, and the game still
    // ends with X winning the top row.
    let output = run_session("1,1\n1,1\n2,1\n1,2\n2,2\n1,3\nn\n");
    assert!(output.contains("That cell is occupied."));
    assert!(output.contains("The winner is: X"));
}

#[test]
fn malformed_input_reprompts_the_same_player() {
    let output = run_session("a,b\n5,1\n1,1\n2,1\n1,2\n2,2\n1,3\nn\n");
    assert!(output.contains("Input must be two numbers in format row,col e.g. 1,2"));
    assert!(output.contains("Input is a number between 1 and 3 (inclusive)"));
    assert!(output.contains("The winner is: X"));
}

#[test]
fn prompts_name_the_player_to_move() {
    let output = run_session("1,1\n2,2\nn\n");
    assert!(output.contains("Player X make a valid move(row,column): "));
    assert!(output.contains("Player O make a valid move(row,column): "));
}

#[test]
fn replay_starts_a_fresh_round() {
    let round = "1,1\n2,1\n1,2\n2,2\n1,3\n";
    let output = run_session(&format!("{round}y\n{round}n\n"));
    assert_eq!(output.matches("NEW GAME").count(), 2);
    assert_eq!(output.matches("The winner is: X").count(), 2);
    assert!(output.contains("Thanks for playing. Bye."));
}

#[test]
fn unrecognised_replay_answer_reprompts() {
    let output = run_session("1,1\n2,1\n1,2\n2,2\n1,3\nmaybe\nn\n");
    assert!(output.matches("Would you like to play again (y/n)?").count() >= 2);
    assert!(output.contains("Thanks for playing. Bye."));
}

#[test]
fn end_of_input_ends_the_session_cleanly() {
    let output = run_session("1,1\n");
    assert!(output.contains("Player O make a valid move(row,column): "));
    assert!(!output.contains("Thanks for playing. Bye."));
}
