use assert_cmd::Command;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

const BINARY_NAME: &str = "chessvar";

#[test]
fn demonstration_game() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");

    drop(
        cmd.assert().success().stdout(
            contains("Initial Board:")
                .and(contains("R N B Q K B N R"))
                .and(contains("        P      "))
                .and(contains("Game State: IN_PROGRESS")),
        ),
    );
}

#[test]
fn moves_from_arguments() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["--quiet", "d2d8"]);

    drop(
        cmd.assert().success().stdout(
            contains("Game State: WHITE_WON")
                .and(contains("Initial Board:").not())
                .and(contains("r n b P k b n r")),
        ),
    );
}

#[test]
fn rejected_moves_are_reported() {
    let mut cmd = Command::cargo_bin(BINARY_NAME).expect("Binary should be built");
    let _ = cmd.args(["e7e5", "e2e4", "e2"]);

    drop(
        cmd.assert().success().stdout(
            contains("Rejected e7e5: e7 does not hold a piece of white")
                .and(contains("Rejected e2: invalid move format"))
                .and(contains("Game State: IN_PROGRESS")),
        ),
    );
}
