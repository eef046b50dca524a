//! Per-player piece bookkeeping and the turn loop.

use std::collections::HashSet;

use crate::{
    board::{BoardGrid, Coord},
    errors::{AddPlayerError, InvalidSlot, UnknownType},
    pieces::{Piece, PieceFactory, PlayerId},
};

/// One participant: the pieces minted for them and which slots have not yet
/// been placed. Every piece held has this player as its owner.
#[derive(Debug)]
pub struct Player {
    id: PlayerId,
    pieces: Vec<Piece>,
    unused: HashSet<usize>,
}

impl Player {
    /// Construct a player with no pieces. Call
    /// [`init_pieces`][Player::init_pieces] before attempting placements.
    pub fn new(id: PlayerId) -> Self {
        Self {
            id,
            pieces: Vec::new(),
            unused: HashSet::new(),
        }
    }

    /// This player's id.
    pub fn id(&self) -> PlayerId {
        self.id
    }

    /// Mint one piece per catalog type for this player, slot `t` holding
    /// type `t`, and record every slot as unused. Called exactly once, at
    /// game setup.
    pub fn init_pieces(&mut self, factory: &mut PieceFactory) -> Result<(), UnknownType> {
        debug_assert!(self.pieces.is_empty(), "pieces already initialized");
        for type_id in 0..factory.num_types() {
            self.pieces.push(factory.mint(type_id, self.id)?);
            self.unused.insert(type_id);
        }
        Ok(())
    }

    /// Number of pieces held. Equal to the catalog's type count after init.
    pub fn num_pieces(&self) -> usize {
        self.pieces.len()
    }

    /// The piece in the given slot.
    pub fn piece(&self, slot: usize) -> Result<&Piece, InvalidSlot> {
        self.pieces
            .get(slot)
            .ok_or_else(|| InvalidSlot::new(slot, self.pieces.len()))
    }

    /// Whether the slot has not yet been successfully placed.
    pub fn is_unused(&self, slot: usize) -> bool {
        self.unused.contains(&slot)
    }

    /// Whether any piece remains unplaced.
    pub fn has_unused(&self) -> bool {
        !self.unused.is_empty()
    }

    /// Iterate the slots that have not yet been placed, in slot order.
    pub fn unused_slots(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.pieces.len()).filter(move |slot| self.unused.contains(slot))
    }

    /// Turn the piece in the given slot a quarter turn.
    pub fn rotate_piece(&mut self, slot: usize) -> Result<(), InvalidSlot> {
        let num_slots = self.pieces.len();
        self.pieces
            .get_mut(slot)
            .map(Piece::rotate)
            .ok_or_else(|| InvalidSlot::new(slot, num_slots))
    }

    /// Attempt to place the piece in `slot` at `origin`, delegating the
    /// verdict to the board. On success the slot is marked used; a slot that
    /// was already placed is rejected without consulting the board, since a
    /// piece is never placed twice.
    pub fn attempt_place<C: Into<Coord>>(
        &mut self,
        board: &mut BoardGrid,
        slot: usize,
        origin: C,
    ) -> Result<bool, InvalidSlot> {
        let piece = self
            .pieces
            .get(slot)
            .ok_or_else(|| InvalidSlot::new(slot, self.pieces.len()))?;
        if !self.unused.contains(&slot) {
            return Ok(false);
        }
        let placed = board.place(piece, origin);
        if placed {
            self.unused.remove(&slot);
        }
        Ok(placed)
    }
}

/// Hook deciding whether the game is over. Running a round never requires
/// an answer, so the engine only consults the rule when asked; a host
/// supplies real end-of-game semantics through this seam.
pub trait EndRule {
    /// Whether the game has ended in the given state.
    fn is_end(&self, board: &BoardGrid, players: &[Player]) -> bool;
}

/// Default [`EndRule`]: the game never ends on its own.
#[derive(Debug, Default)]
pub struct NeverEnds;

impl EndRule for NeverEnds {
    fn is_end(&self, _board: &BoardGrid, _players: &[Player]) -> bool {
        false
    }
}

/// Drives the sequence of players and placement attempts against one shared
/// board. Players act in the order they were added; a rejected attempt
/// leaves the turn with the acting player.
pub struct TurnEngine {
    board: BoardGrid,
    players: Vec<Player>,
    /// Index into `players` of the player whose turn it is.
    current: usize,
    end_rule: Box<dyn EndRule>,
}

impl TurnEngine {
    /// Construct an engine around an empty board, with no players and the
    /// [`NeverEnds`] rule.
    pub fn new(board: BoardGrid) -> Self {
        Self {
            board,
            players: Vec::new(),
            current: 0,
            end_rule: Box::new(NeverEnds),
        }
    }

    /// Add a player to the end of the turn order. A duplicate id hands the
    /// player back in the error.
    pub fn add_player(&mut self, player: Player) -> Result<(), AddPlayerError> {
        if self.players.iter().any(|p| p.id() == player.id()) {
            Err(AddPlayerError::new(player))
        } else {
            self.players.push(player);
            Ok(())
        }
    }

    /// Replace the end-of-game rule.
    pub fn set_end_rule<R: EndRule + 'static>(&mut self, rule: R) {
        self.end_rule = Box::new(rule);
    }

    /// The shared board, read-only.
    pub fn board(&self) -> &BoardGrid {
        &self.board
    }

    /// The players in turn order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Number of players in the game.
    pub fn num_players(&self) -> usize {
        self.players.len()
    }

    /// The player whose turn it is. Panics if no players were added.
    pub fn current(&self) -> &Player {
        &self.players[self.current]
    }

    /// Ask the end rule whether the game is over.
    pub fn is_end(&self) -> bool {
        self.end_rule.is_end(&self.board, &self.players)
    }

    /// Turn the current player's piece in `slot` a quarter turn.
    pub fn rotate_current(&mut self, slot: usize) -> Result<(), InvalidSlot> {
        self.players[self.current].rotate_piece(slot)
    }

    /// A placement attempt for the current player. On success the turn
    /// passes to the next player; on rejection the current player keeps the
    /// turn and may retry with different arguments.
    pub fn try_place<C: Into<Coord>>(
        &mut self,
        slot: usize,
        origin: C,
    ) -> Result<bool, InvalidSlot> {
        let placed = self.players[self.current].attempt_place(&mut self.board, slot, origin)?;
        if placed {
            self.advance();
        }
        Ok(placed)
    }

    /// Forfeit the current player's turn, passing it to the next player.
    pub fn pass(&mut self) {
        self.advance();
    }

    fn advance(&mut self) {
        self.current = (self.current + 1) % self.players.len();
    }
}
