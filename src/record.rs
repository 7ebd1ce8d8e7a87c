use shakmaty::{Role, Square};
use smallvec::SmallVec;

/// Inline capacity covers a typical complete game without spilling.
pub type MoveList = SmallVec<[Ply; 128]>;

/// Header tag-pairs in insertion order.
///
/// Keys are unique; on a duplicated tag the first value wins, later
/// occurrences are ignored.
#[derive(Debug, Clone, Default)]
pub struct Headers(Vec<(String, String)>);

impl Headers {
    pub fn insert(&mut self, name: &str, value: String) {
        if self.get(name).is_none() {
            self.0.push((name.to_string(), value));
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// One half-move, fully disambiguated against the position it was played in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ply {
    /// 1-based ply number.
    pub number: usize,
    /// Canonical standard algebraic notation, re-rendered from the position
    /// rather than echoed from the input token.
    pub san: String,
    pub role: Role,
    pub from: Square,
    /// Destination square; for castling, the square the king ends up on.
    pub to: Square,
    pub capture: Option<Role>,
    pub promotion: Option<Role>,
    pub kind: MoveKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Normal,
    DoublePawnPush,
    EnPassant,
    CastleKingside,
    CastleQueenside,
}

/// Immutable snapshot of the first game in a PGN resource.
///
/// Fully populated before it is handed to the reporter; never mutated
/// afterwards.
#[derive(Debug, Clone, Default)]
pub struct GameRecord {
    pub headers: Headers,
    pub moves: MoveList,
}
