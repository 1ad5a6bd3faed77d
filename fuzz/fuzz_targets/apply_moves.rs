#![no_main]
use chessvar::chess::game::Game;
use libfuzzer_sys::fuzz_target;
use pretty_assertions::assert_eq;

fuzz_target!(|data: &[u8]| {
    let input = match std::str::from_utf8(data) {
        Ok(input) => input,
        Err(_) => return,
    };
    let mut game = Game::new();
    for next_move in input.split_whitespace() {
        let before = game.clone();
        match game.apply_move(next_move) {
            Ok(_) => {
                assert!(game.board().count(before.side_to_move()) <= 16);
            },
            Err(_) => {
                assert_eq!(game.render(), before.render());
                assert_eq!(game.side_to_move(), before.side_to_move());
                assert_eq!(game.game_state(), before.game_state());
            },
        }
        let rendered = game.render();
        assert_eq!(rendered.lines().count(), 8);
        assert!(rendered.lines().all(|line| line.chars().count() == 15));
    }
});
