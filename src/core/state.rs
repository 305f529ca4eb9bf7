//! Game state: the phase/turn state machine.
//!
//! ## Phases
//!
//! - `PlacementPhase`: the current player puts a new piece on an empty cell.
//!   Once both players own `max_pieces` pieces, the game moves on.
//! - `DynamicPhase`: the current player moves one of their pieces by its
//!   movement rule. A player with no legal move at all is skipped, and the
//!   opponent is granted bonus turns. If both players are stuck the game is
//!   drawn.
//! - `Completed`: terminal until `reset`.
//!
//! After every successful placement or move the mover's colour is checked
//! for a line. A win completes the game without passing the turn.
//!
//! ## Ownership
//!
//! `GameState` owns the piece pool, the board, and both players. The board
//! and the owning player refer to the same piece by `PieceId`; both are
//! cleared together on reset.
//!
//! ## Inventory
//!
//! `place_piece` checks phase and space only. Consuming placement allowance
//! is the caller's job, and must happen only after a `true` result (see
//! `Action::Place`, which does exactly that).

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use super::config::{Phase, RulesConfig};
use super::entity::{PieceId, PiecePool};
use super::player::{PlayerColor, PlayerId, PlayerMap};
use super::position::Position;
use crate::board::{Board, WinningCells};
use crate::events::{EventQueue, GameEvent};
use crate::pieces::{Piece, PieceKind};
use crate::players::Player;
use crate::rules::{GameResult, TurnOrder};

/// Complete state of one game session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    config: RulesConfig,
    phase: Phase,
    players: PlayerMap<Player>,
    turns: TurnOrder,
    board: Board,
    pieces: PiecePool,
    total_moves: u32,
    result: Option<GameResult>,
    events: EventQueue,
}

impl GameState {
    /// Create a new game from a rules configuration.
    ///
    /// Seat 0 plays `config.starting_color` and moves first. Both players
    /// start with the configured inventory.
    #[must_use]
    pub fn new(config: RulesConfig) -> Self {
        let first_color = config.starting_color;
        let players = PlayerMap::new(|seat| {
            let color = if seat == PlayerId::FIRST {
                first_color
            } else {
                first_color.opposite()
            };
            let mut player = Player::new(color, config.max_pieces);
            player.init_pieces(&config.inventory);
            player.is_turn = seat == PlayerId::FIRST;
            player
        });

        Self {
            board: Board::new(config.width, config.height),
            phase: Phase::PlacementPhase,
            players,
            turns: TurnOrder::new(PlayerId::FIRST),
            pieces: PiecePool::new(),
            total_moves: 0,
            result: None,
            events: EventQueue::new(),
            config,
        }
    }

    /// The standard 3x3 game.
    #[must_use]
    pub fn standard() -> Self {
        Self::new(RulesConfig::standard())
    }

    // === Queries ===

    /// Rules this game was created with.
    #[must_use]
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Check if the game has completed.
    #[must_use]
    pub fn game_over(&self) -> bool {
        self.phase == Phase::Completed
    }

    /// How the game ended, once it has.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.result
    }

    /// Winning colour, if the game ended in a line.
    #[must_use]
    pub fn winner(&self) -> Option<PlayerColor> {
        self.result.and_then(|r| r.winner())
    }

    /// Successful placements plus successful moves since the last reset.
    #[must_use]
    pub fn total_moves(&self) -> u32 {
        self.total_moves
    }

    /// Seat to move.
    #[must_use]
    pub fn current_id(&self) -> PlayerId {
        self.turns.current()
    }

    /// Player to move.
    #[must_use]
    pub fn current_player(&self) -> &Player {
        &self.players[self.turns.current()]
    }

    /// Player not to move.
    #[must_use]
    pub fn opponent_player(&self) -> &Player {
        &self.players[self.turns.opponent()]
    }

    /// Player in a given seat.
    #[must_use]
    pub fn player(&self, seat: PlayerId) -> &Player {
        &self.players[seat]
    }

    /// Turn bookkeeping, including any pending bonus.
    #[must_use]
    pub fn turns(&self) -> &TurnOrder {
        &self.turns
    }

    /// The board.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every piece created since the last reset.
    #[must_use]
    pub fn pieces(&self) -> &PiecePool {
        &self.pieces
    }

    /// Occupant of a cell. Off-board coordinates read as empty.
    #[must_use]
    pub fn piece_at(&self, x: i32, y: i32) -> Option<(PieceId, Piece)> {
        let id = self.board.get_piece(Position::new(x, y))?;
        self.pieces.get(id).map(|&piece| (id, piece))
    }

    /// Remaining placement allowance of the current player for `kind`.
    #[must_use]
    pub fn available_piece_count(&self, kind: PieceKind) -> u8 {
        self.current_player().get_available_piece_count(kind)
    }

    /// Whether a seat has any legal move on the current board.
    #[must_use]
    pub fn can_move(&self, seat: PlayerId) -> bool {
        self.players[seat].can_move(&self.board, &self.pieces)
    }

    /// Cells and pieces of the winning line.
    ///
    /// Scans rows, then columns, then diagonals, and reports the first full
    /// line of the winner's colour. Empty unless the game was won.
    #[must_use]
    pub fn get_winning_cells(&self) -> WinningCells {
        match self.winner() {
            Some(color) => self.board.winning_cells(&self.pieces, color),
            None => WinningCells::new(),
        }
    }

    // === Events ===

    /// Events queued since the last drain.
    #[must_use]
    pub fn events(&self) -> &[GameEvent] {
        self.events.pending()
    }

    /// Take every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain()
    }

    // === Actions ===

    /// Place a new piece of `kind` for the current player at `(x, y)`.
    ///
    /// Fails (returns false, no state change) outside the placement phase,
    /// if the current player already owns `max_pieces`, or if the cell is
    /// off-board or occupied.
    #[instrument(skip(self), fields(player = %self.current_player().color()))]
    pub fn place_piece(&mut self, kind: PieceKind, x: i32, y: i32) -> bool {
        if self.phase != Phase::PlacementPhase {
            return false;
        }

        let seat = self.turns.current();
        let color = self.players[seat].color();
        if self.players[seat].is_full() {
            debug!("player already owns the maximum number of pieces");
            return false;
        }

        let id = self.pieces.next_id();
        if !self.board.place_piece(Some(id), Position::new(x, y)) {
            return false;
        }
        self.pieces.insert(Piece::new(kind, color));
        self.players[seat].add_piece(id);
        self.total_moves += 1;
        debug!(%id, total_moves = self.total_moves, "piece placed");

        if self.board.check_for_tic_tac_toe(&self.pieces, color) {
            info!(%color, "win during the placement phase");
            self.complete(GameResult::Winner(color));
            return true;
        }

        if self.players.iter().all(|(_, p)| p.is_full()) {
            self.set_phase(Phase::DynamicPhase);
        }

        self.switch_turn();
        true
    }

    /// Move the current player's piece from `(from_x, from_y)` to
    /// `(to_x, to_y)`.
    ///
    /// Only valid in the dynamic phase. If the current player has no legal
    /// move at all, the turn passes to the opponent (who is granted bonus
    /// turns) and this returns false; if the opponent is stuck too, the game
    /// ends in a draw. Otherwise fails without state change unless the
    /// source holds one of the current player's pieces and the move is
    /// legal for it.
    #[instrument(skip(self), fields(player = %self.current_player().color()))]
    pub fn move_piece(&mut self, from_x: i32, from_y: i32, to_x: i32, to_y: i32) -> bool {
        if self.phase != Phase::DynamicPhase {
            return false;
        }

        let seat = self.turns.current();
        if !self.can_move(seat) {
            self.handle_stuck(seat);
            return false;
        }

        let from = Position::new(from_x, from_y);
        let to = Position::new(to_x, to_y);

        match self.board.get_piece(from) {
            Some(id) if self.players[seat].owns(id) => {}
            _ => {
                debug!(%from, "source does not hold a piece of the current player");
                return false;
            }
        }

        if !self.board.move_piece(&self.pieces, from, to) {
            return false;
        }
        self.total_moves += 1;
        debug!(%from, %to, total_moves = self.total_moves, "piece moved");

        let color = self.players[seat].color();
        if self.board.check_for_tic_tac_toe(&self.pieces, color) {
            info!(%color, "win during the dynamic phase");
            self.complete(GameResult::Winner(color));
            return true;
        }

        self.switch_turn();
        true
    }

    /// Return to the start of the placement phase.
    ///
    /// Clears the board, the pool, both owned-piece lists, the move counter,
    /// the result, and any bonus turn, and gives the turn back to seat 0.
    /// Placement inventories are left as they are; call
    /// `init_inventories` to restore them.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.phase = Phase::PlacementPhase;
        for (_, player) in self.players.iter_mut() {
            player.clear_pieces();
        }
        self.board.clear();
        self.pieces.clear();
        self.turns.reset();
        self.sync_turn_flags();
        self.total_moves = 0;
        self.result = None;
        self.events.push(GameEvent::Reset);

        info!("game reset to initial state");
    }

    // === Inventory ===

    /// Restore both players' placement allowance from the config.
    pub fn init_inventories(&mut self) {
        for (_, player) in self.players.iter_mut() {
            player.init_pieces(&self.config.inventory);
        }
    }

    /// Consume one unit of the current player's allowance for `kind`.
    ///
    /// Returns false if the kind is exhausted.
    pub fn deduct_available_piece(&mut self, kind: PieceKind) -> bool {
        let seat = self.turns.current();
        self.players[seat].deduct_available_piece(kind)
    }

    /// Consume one unit of a given seat's allowance for `kind`.
    pub fn deduct_available_piece_for(&mut self, seat: PlayerId, kind: PieceKind) -> bool {
        self.players[seat].deduct_available_piece(kind)
    }

    // === Internals ===

    fn handle_stuck(&mut self, seat: PlayerId) {
        if !self.can_move(seat.other()) {
            info!("both players are stuck; game drawn");
            self.complete(GameResult::Draw);
            return;
        }

        let next = self.turns.skip_to_opponent(self.config.stuck_bonus_turns);
        self.sync_turn_flags();
        self.events.push(GameEvent::TurnSwitched);
        info!(
            stuck = %self.players[seat].color(),
            next = %self.players[next].color(),
            "player has no legal move; turn skipped"
        );
    }

    fn switch_turn(&mut self) {
        let previous = self.turns.current();
        let next = self.turns.switch();
        if next == previous {
            debug!(holder = %self.players[next].color(), "bonus turn kept the mover on turn");
            return;
        }

        self.sync_turn_flags();
        self.events.push(GameEvent::TurnSwitched);
        debug!(next = %self.players[next].color(), "turn switched");
    }

    fn sync_turn_flags(&mut self) {
        let current = self.turns.current();
        for (seat, player) in self.players.iter_mut() {
            player.is_turn = seat == current;
        }
    }

    fn set_phase(&mut self, to: Phase) {
        let from = self.phase;
        if from == to {
            return;
        }
        self.phase = to;
        self.events.push(GameEvent::PhaseChanged { from, to });
        info!(%from, %to, "phase changed");
    }

    fn complete(&mut self, result: GameResult) {
        self.set_phase(Phase::Completed);
        self.result = Some(result);
        self.events.push(match result {
            GameResult::Winner(color) => GameEvent::Won { color },
            GameResult::Draw => GameEvent::Stalemate,
        });
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::standard()
    }
}
