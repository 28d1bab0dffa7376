//! Help-table rendering: the full N x N win/lose/draw grid.

use super::{MoveRules, MoveSet};
use crate::protocol::RoundOutcome;
use std::fmt::Write;

/// Render the outcome table for the given move set
///
/// Rows are the computer's (defender's) moves, columns the player's. Every
/// cell is derived from [`MoveRules::winner`] with the row move in the
/// challenger slot, so the table can never drift from the decision rule.
pub fn render_outcome_table(moves: &MoveSet) -> String {
    let rules = MoveRules::new(moves);
    let n = moves.len();
    let separator = separator_line(n);

    let mut table = String::new();
    table.push_str(&separator);

    let mut header: Vec<&str> = vec![r"PC \ User"];
    header.extend(moves.iter());
    table.push_str(&row_line(&header));
    table.push_str(&separator);

    for i in 0..n {
        let mut cells: Vec<&str> = vec![moves.label(i)];
        for j in 0..n {
            cells.push(match rules.winner(i, j) {
                RoundOutcome::Draw => "Draw",
                RoundOutcome::ChallengerWins => "Win",
                RoundOutcome::DefenderWins => "Lose",
            });
        }
        table.push_str(&row_line(&cells));
        table.push_str(&separator);
    }
    table
}

fn separator_line(n: usize) -> String {
    let dashes = vec!["-".repeat(12); n + 1];
    format!("+{}+\n", dashes.join("+"))
}

fn row_line(cells: &[&str]) -> String {
    let mut line = String::new();
    for cell in cells {
        write!(line, "| {cell:^10} ").expect("writing to a String cannot fail");
    }
    line.push_str("|\n");
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_set(names: &[&str]) -> MoveSet {
        MoveSet::new(names.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    /// Parse the rendered grid back into its cell texts, row-major
    fn parse_cells(table: &str) -> Vec<Vec<String>> {
        table
            .lines()
            .filter(|line| line.starts_with('|'))
            .map(|line| {
                line.trim_matches('|')
                    .split('|')
                    .map(|cell| cell.trim().to_string())
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_table_round_trips_with_rules() {
        for names in [
            vec!["Rock", "Paper", "Scissors"],
            vec!["Rock", "Paper", "Scissors", "Lizard", "Spock"],
        ] {
            let moves = move_set(&names);
            let rules = MoveRules::new(&moves);
            let rows = parse_cells(&render_outcome_table(&moves));

            assert_eq!(rows.len(), moves.len() + 1);
            for (i, row) in rows.iter().skip(1).enumerate() {
                assert_eq!(row[0], names[i]);
                for (j, cell) in row.iter().skip(1).enumerate() {
                    let expected = match rules.winner(i, j) {
                        RoundOutcome::Draw => "Draw",
                        RoundOutcome::ChallengerWins => "Win",
                        RoundOutcome::DefenderWins => "Lose",
                    };
                    assert_eq!(cell, expected, "cell ({i}, {j})");
                }
            }
        }
    }

    #[test]
    fn test_header_row_lists_all_moves() {
        let moves = move_set(&["Rock", "Paper", "Scissors"]);
        let rows = parse_cells(&render_outcome_table(&moves));

        assert_eq!(rows[0], ["PC \\ User", "Rock", "Paper", "Scissors"]);
    }

    #[test]
    fn test_diagonal_is_draw() {
        let moves = move_set(&["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
        let rows = parse_cells(&render_outcome_table(&moves));

        for i in 0..moves.len() {
            assert_eq!(rows[i + 1][i + 1], "Draw");
        }
    }

    #[test]
    fn test_each_row_has_half_wins_and_half_losses() {
        let moves = move_set(&["Rock", "Paper", "Scissors", "Lizard", "Spock"]);
        let rows = parse_cells(&render_outcome_table(&moves));

        for row in rows.iter().skip(1) {
            let wins = row.iter().filter(|c| *c == "Win").count();
            let losses = row.iter().filter(|c| *c == "Lose").count();
            assert_eq!(wins, 2);
            assert_eq!(losses, 2);
        }
    }

    #[test]
    fn test_exact_grid_geometry() {
        let moves = move_set(&["Rock", "Paper", "Scissors"]);
        let table = render_outcome_table(&moves);
        let separator = "+------------+------------+------------+------------+";

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 9); // separator, header, then (separator, row) per move, final separator
        assert_eq!(lines[0], separator);
        assert_eq!(lines[1], "| PC \\ User  |    Rock    |   Paper    |  Scissors  |");
        assert_eq!(lines[2], separator);
        assert_eq!(lines[3], "|    Rock    |    Draw    |    Win     |    Lose    |");
    }
}
