use kestrel_core::board::Move;

/// Outcome of a [`crate::search::search`] call.
///
/// `best_move` is `None` when no pseudo-legal move for the side to move
/// leaves it out of check -- the caller (the UCI layer, out of this crate's
/// scope) is responsible for telling checkmate from stalemate via
/// [`kestrel_core::move_gen::in_check`] at the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
}
