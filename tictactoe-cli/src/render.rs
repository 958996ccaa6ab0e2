//! Board rendering for the terminal

use tictactoe_core::Board;

/// Format the 3x3 grid. Marked cells show their mark, empty cells show
/// their index so players can pick one.
pub fn format_board(board: &Board) -> String {
    let glyph = |index: usize| match board.cell(index) {
        Some(mark) => mark.to_string(),
        None => index.to_string(),
    };

    let mut lines = Vec::with_capacity(5);
    for row in 0..3 {
        let base = row * 3;
        lines.push(format!(
            " {} | {} | {}",
            glyph(base),
            glyph(base + 1),
            glyph(base + 2)
        ));
        if row < 2 {
            lines.push("---+---+---".to_string());
        }
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_core::Mark;

    #[test]
    fn test_empty_board_shows_indices() {
        let board = Board::new();
        let text = format_board(&board);
        assert_eq!(
            text,
            " 0 | 1 | 2\n---+---+---\n 3 | 4 | 5\n---+---+---\n 6 | 7 | 8"
        );
    }

    #[test]
    fn test_marks_replace_indices() {
        let mut board = Board::new();
        board.set_mark(0, Mark::X);
        board.set_mark(4, Mark::O);
        let text = format_board(&board);
        assert!(text.starts_with(" X | 1 | 2"));
        assert!(text.contains(" 3 | O | 5"));
    }
}
