use std::fmt::{Display, Write};

/// Log target used for everything the game script emits.
pub const GAME_TARGET: &str = "game";

/// Joins script log arguments the way they are printed: `a, b, c`.
pub fn join_args(args: &[&dyn Display]) -> String {
    let mut line = String::new();
    for (i, arg) in args.iter().enumerate() {
        if i > 0 {
            line.push_str(", ");
        }
        // Writing into a String only fails if a Display impl errors.
        let _ = write!(line, "{arg}");
    }
    line
}

/// Emits one script log line on the `game` target.
pub fn log_args(args: &[&dyn Display]) {
    log::info!(target: GAME_TARGET, "{}", join_args(args));
}
