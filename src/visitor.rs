use crate::error::ExtractError;
use crate::log;
use crate::record::{GameRecord, Headers, MoveKind, MoveList, Ply};
use pgn_reader::{Nag, Outcome, RawComment, RawTag, Reader, SanPlus, Skip, Visitor};
use shakmaty::san::SanError;
use shakmaty::{Chess, File, Move, Role, Square};
use std::mem;
use std::ops::ControlFlow;

/// Streaming PGN visitor (pgn-reader) that builds a [`GameRecord`] for one
/// game.
///
/// Headers go into an ordered map, first value wins. Every mainline SAN
/// token is resolved against the current position, verified legal, and
/// re-rendered in canonical notation before the position advances.
/// Variations are skipped; comments, NAGs, move numbers and the result
/// token are recognized and discarded. The first illegal or ambiguous
/// token aborts the visit.
pub struct RecordVisitor {
    headers: Headers,
    moves: MoveList,
    pos: Chess,
    error: Option<ExtractError>,
    finished: Option<GameRecord>,
}

impl RecordVisitor {
    pub fn new() -> Self {
        Self {
            headers: Headers::default(),
            moves: MoveList::new(),
            pos: Chess::default(),
            error: None,
            finished: None,
        }
    }

    fn apply_san(&mut self, san_plus: &SanPlus) -> Result<(), ExtractError> {
        let ply = self.moves.len() + 1;
        let mv = san_plus.san.to_move(&self.pos).map_err(|err| match err {
            SanError::AmbiguousSan => ExtractError::AmbiguousMove {
                ply,
                san: san_plus.to_string(),
            },
            _ => ExtractError::IllegalMove {
                ply,
                san: san_plus.to_string(),
            },
        })?;

        let (from, to, role, capture, promotion, kind) =
            describe(&mv).ok_or_else(|| ExtractError::IllegalMove {
                ply,
                san: san_plus.to_string(),
            })?;

        let canonical = SanPlus::from_move_and_play_unchecked(&mut self.pos, mv);
        self.moves.push(Ply {
            number: ply,
            san: canonical.to_string(),
            role,
            from,
            to,
            capture,
            promotion,
            kind,
        });
        Ok(())
    }
}

impl Default for RecordVisitor {
    fn default() -> Self {
        Self::new()
    }
}

/// Flattens a resolved move into the fields a [`Ply`] carries. Drops (`@`)
/// cannot occur in a standard game and yield `None`.
fn describe(mv: &Move) -> Option<(Square, Square, Role, Option<Role>, Option<Role>, MoveKind)> {
    match *mv {
        Move::Normal {
            role,
            from,
            capture,
            to,
            promotion,
        } => {
            let kind = if role == Role::Pawn && rank_distance(from, to) == 2 {
                MoveKind::DoublePawnPush
            } else {
                MoveKind::Normal
            };
            Some((from, to, role, capture, promotion, kind))
        }
        Move::EnPassant { from, to } => Some((
            from,
            to,
            Role::Pawn,
            Some(Role::Pawn),
            None,
            MoveKind::EnPassant,
        )),
        Move::Castle { king, rook } => {
            let (file, kind) = if rook > king {
                (File::G, MoveKind::CastleKingside)
            } else {
                (File::C, MoveKind::CastleQueenside)
            };
            let to = Square::from_coords(file, king.rank());
            Some((king, to, Role::King, None, None, kind))
        }
        Move::Put { .. } => None,
    }
}

fn rank_distance(from: Square, to: Square) -> u32 {
    (from.rank() as u32).abs_diff(to.rank() as u32)
}

impl Visitor for RecordVisitor {
    type Tags = ();
    type Movetext = ();
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        self.headers = Headers::default();
        self.moves.clear();
        self.pos = Chess::default();
        self.error = None;
        self.finished = None;
        ControlFlow::Continue(())
    }

    fn tag(
        &mut self,
        _: &mut Self::Tags,
        key: &[u8],
        value: RawTag<'_>,
    ) -> ControlFlow<Self::Output> {
        let name = String::from_utf8_lossy(key);
        let value = value.decode_utf8_lossy().into_owned();
        self.headers.insert(name.as_ref(), value);
        ControlFlow::Continue(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(())
    }

    fn begin_variation(&mut self, _: &mut Self::Movetext) -> ControlFlow<Self::Output, Skip> {
        ControlFlow::Continue(Skip(true))
    }

    fn san(&mut self, _: &mut Self::Movetext, san_plus: SanPlus) -> ControlFlow<Self::Output> {
        match self.apply_san(&san_plus) {
            Ok(()) => ControlFlow::Continue(()),
            Err(err) => {
                self.error = Some(err);
                ControlFlow::Break(())
            }
        }
    }

    fn nag(&mut self, _: &mut Self::Movetext, _: Nag) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn comment(&mut self, _: &mut Self::Movetext, _: RawComment<'_>) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn partial_comment(
        &mut self,
        _: &mut Self::Movetext,
        _: RawComment<'_>,
    ) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn outcome(&mut self, _: &mut Self::Movetext, _: Outcome) -> ControlFlow<Self::Output> {
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {
        self.finished = Some(GameRecord {
            headers: mem::take(&mut self.headers),
            moves: mem::take(&mut self.moves),
        });
    }
}

/// Detects whether anything parseable follows the first game. Breaking at
/// `begin_tags` keeps the probe from doing any work on the record itself.
struct MoreContentProbe;

impl Visitor for MoreContentProbe {
    type Tags = ();
    type Movetext = ();
    type Output = ();

    fn begin_tags(&mut self) -> ControlFlow<Self::Output, Self::Tags> {
        ControlFlow::Break(())
    }

    fn begin_movetext(&mut self, _: Self::Tags) -> ControlFlow<Self::Output, Self::Movetext> {
        ControlFlow::Continue(())
    }

    fn end_game(&mut self, _: Self::Movetext) -> Self::Output {}
}

/// Parses exactly the first game record in `content`.
///
/// Later records are ignored by contract; their presence is logged at warn
/// level. Parsing never truncates the move list, the reporter owns the
/// cutoff.
pub fn parse_first_game(content: &str) -> Result<GameRecord, ExtractError> {
    let mut reader = Reader::new(content.as_bytes());
    let mut visitor = RecordVisitor::new();

    match reader.read_game(&mut visitor) {
        Ok(Some(())) => {}
        Ok(None) => return Err(ExtractError::EmptyInput),
        Err(err) => {
            return Err(ExtractError::MalformedHeader {
                detail: err.to_string(),
            });
        }
    }

    if let Some(err) = visitor.error.take() {
        return Err(err);
    }

    let record = visitor.finished.take().ok_or(ExtractError::EmptyInput)?;
    log::debug(format!(
        "parsed {} header tags and {} plies",
        record.headers.len(),
        record.moves.len()
    ));

    if matches!(reader.read_game(&mut MoreContentProbe), Ok(Some(()))) {
        log::warn("input contains more than one game record; only the first is reported");
    }

    Ok(record)
}
