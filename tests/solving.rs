use nonosolve::{
    solve, solve_line, Board, BoardParser, DynamicSolver, HypothesisSolver, LinePosition,
    LocalReader, Outcome, PlainFormat, PropagationSolver,
};

fn read(path: &str) -> Board {
    PlainFormat::read_local(path).unwrap().parse()
}

fn picture(board: &Board) -> Vec<String> {
    board
        .rows()
        .map(|row| {
            row.iter()
                .map(|cell| match cell {
                    nonosolve::BinaryColor::Black => 'X',
                    nonosolve::BinaryColor::White => '.',
                    _ => '?',
                })
                .collect()
        })
        .collect()
}

fn solved_picture(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Solved(board) => picture(&board),
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[test]
fn heart() {
    let outcome = solve(read("puzzles/heart.txt"));
    assert_eq!(
        solved_picture(outcome),
        vec![
            ".XX...XX.",
            "XXXX.XXXX",
            "XXXXXXXXX",
            "XXXXXXXXX",
            ".XXXXXXX.",
            "..XXXXX..",
            "...XXX...",
            "....X....",
        ]
    );
}

#[test]
fn boat() {
    let board = read("puzzles/boat.txt");
    assert_eq!(board.height(), 8);
    assert_eq!(board.width(), 10);

    let expected = vec![
        "....X.....",
        "....XX....",
        "....XXX...",
        "....XXXX..",
        "....X.....",
        "XXXXXXXXXX",
        ".XXXXXXXX.",
        "..XXXXXX..",
    ];
    let fast = PropagationSolver::new(board.clone()).run::<DynamicSolver>();
    assert_eq!(solved_picture(fast), expected);

    let slow = PropagationSolver::new(board).run::<HypothesisSolver>();
    assert_eq!(solved_picture(slow), expected);
}

#[test]
fn ambiguous() {
    let outcome = solve(read("puzzles/ambiguous.txt"));
    match outcome {
        Outcome::Inconclusive(board) => assert_eq!(picture(&board), vec!["??", "??"]),
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[test]
fn no_solution() {
    assert_eq!(solve(read("puzzles/no_solution.txt")), Outcome::Contradiction);
}

#[test]
fn missing_file() {
    assert!(PlainFormat::read_local("puzzles/not_found.txt").is_err());
}

#[test]
#[cfg(feature = "ini")]
fn toml_puzzle() {
    use nonosolve::TomlFormat;

    let board = TomlFormat::read_local("puzzles/u_letter.toml").unwrap().parse();
    assert_eq!(solved_picture(solve(board)), vec!["X.X", "X.X", "XXX"]);
}

fn assert_solved_within_line_count_waves(board: Board) {
    let bound = board.height() + board.width();

    let unguarded = PropagationSolver::new(board.clone()).run::<DynamicSolver>();
    assert!(unguarded.is_solved());

    let guarded = PropagationSolver::with_max_waves(board, Some(bound)).run::<DynamicSolver>();
    assert_eq!(guarded, unguarded);
}

#[test]
fn propagation_ends_within_rows_plus_columns_waves() {
    assert_solved_within_line_count_waves(read("puzzles/heart.txt"));
    assert_solved_within_line_count_waves(read("puzzles/boat.txt"));

    #[cfg(feature = "ini")]
    {
        use nonosolve::TomlFormat;

        let board = TomlFormat::read_local("puzzles/u_letter.toml").unwrap().parse();
        assert_solved_within_line_count_waves(board);
    }
}

#[test]
fn cells_never_change_once_known() {
    let mut board = read("puzzles/heart.txt");
    let (height, width) = (board.height(), board.width());

    let lines: Vec<_> = (0..height)
        .map(LinePosition::Row)
        .chain((0..width).map(LinePosition::Column))
        .collect();

    // keep solving all the lines in turn until nothing changes
    loop {
        let mut changed = false;
        for &position in &lines {
            let before = board.clone();
            let updated = solve_line::<DynamicSolver>(&mut board, position).unwrap();
            changed |= !updated.is_empty();

            for row in 0..height {
                for col in 0..width {
                    let old = before.cell(row, col);
                    if old.is_solved() {
                        assert_eq!(board.cell(row, col), old);
                    }
                }
            }
        }

        if !changed {
            break;
        }
    }

    assert!(board.is_solved_full());
}
