//! The round state machine.
//!
//! ```text
//! RoundStart -> AwaitingMove (repeat while a cell is provisionally empty)
//!            -> Collapsing -> RoundEnd -> RoundStart | GameOver
//! ```
//!
//! A placement move is deterministic, so the win check runs right after it
//! and may end the game without a collapse. Entangling moves are only judged
//! once the register has been measured.

use crate::circuits::Circuit;
use crate::core::{DEFAULT_NORM_TOLERANCE, GameError, NUM_QUBITS, Result};
use crate::game::board::{Board, CellState, Mark};
use crate::game::encoder;
use crate::game::moves::{Move, validate_move};
use crate::game::provisional::{CellTag, ProvisionalCells};
use crate::simulation::{Measurement, QuantumRegister, SimConfig, Simulator};
use tracing::{debug, info, trace};

/// Game-level settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Seed for the collapse sampler. `None` uses OS entropy.
    pub seed: Option<u64>,
    /// Allowed deviation of the total probability from 1.0 at collapse.
    pub norm_tolerance: f64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            norm_tolerance: DEFAULT_NORM_TOLERANCE,
        }
    }
}

impl GameConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

impl From<GameConfig> for SimConfig {
    fn from(config: GameConfig) -> Self {
        SimConfig {
            seed: config.seed,
            norm_tolerance: config.norm_tolerance,
        }
    }
}

/// Global turn counter. It keeps counting across rounds; `x` moves on even turns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct TurnCounter(u64);

impl TurnCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of moves accepted so far in the whole game.
    pub fn count(&self) -> u64 {
        self.0
    }

    /// Player whose turn it is.
    pub fn player(&self) -> Mark {
        if self.0 % 2 == 0 { Mark::X } else { Mark::O }
    }

    pub fn advance(&mut self) {
        self.0 += 1;
    }
}

/// How a finished game ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameResult {
    Winner(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove,
    GameOver(GameResult),
}

/// What an accepted move led to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEvent {
    /// The round goes on.
    Continue,
    /// A placement completed a line; no collapse took place.
    EarlyWin { winner: Mark, line: [usize; 3] },
    /// The move filled the last empty cell and the register was measured.
    Collapsed {
        measurement: Measurement,
        board: Board,
        /// `None` when another round follows.
        result: Option<GameResult>,
    },
}

/// Report returned for every accepted move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveReport {
    pub player: Mark,
    pub mv: Move,
    pub round: usize,
    /// Provisional cells right after the move, before any round reset.
    pub provisional: ProvisionalCells,
    pub event: RoundEvent,
}

/// A full game: the classical board, the current round's register and the
/// bookkeeping needed to sequence moves.
pub struct Game {
    simulator: Simulator,
    board: Board,
    provisional: ProvisionalCells,
    /// `None` once the register has been measured or the game is over.
    register: Option<QuantumRegister>,
    round_circuit: Circuit,
    round: usize,
    move_number: usize,
    turn: TurnCounter,
    phase: Phase,
    measurements: usize,
}

impl Game {
    /// Creates a game and starts round 1 on an empty board.
    pub fn new(config: GameConfig) -> Result<Self> {
        let mut game = Self {
            simulator: Simulator::with_config(config.into()),
            board: Board::empty(),
            provisional: ProvisionalCells::new(),
            register: None,
            round_circuit: Circuit::new(),
            round: 0,
            move_number: 1,
            turn: TurnCounter::new(),
            phase: Phase::AwaitingMove,
            measurements: 0,
        };
        game.start_round()?;
        Ok(game)
    }

    /// Builds a fresh register seeded from the last collapsed board.
    fn start_round(&mut self) -> Result<()> {
        self.round += 1;
        self.move_number = 1;
        self.provisional = ProvisionalCells::from_board(&self.board);
        self.round_circuit = encoder::reinitialize(&self.board);

        let mut register = QuantumRegister::new(NUM_QUBITS)?;
        register.apply_circuit(&self.round_circuit)?;
        self.register = Some(register);

        info!(round = self.round, board = %self.board.to_bitstring(), "round started");
        Ok(())
    }

    /// Validates a raw token and plays it for the current player.
    ///
    /// A rejected token returns [`GameError::Move`] and leaves the game unchanged.
    pub fn play(&mut self, token: &str) -> Result<MoveReport> {
        if let Phase::GameOver(_) = self.phase {
            return Err(GameError::GameOver);
        }
        let mv = validate_move(token, &self.provisional).inspect_err(|e| {
            debug!(player = %self.current_player(), token, error = %e, "move rejected");
        })?;
        self.apply_move(mv)
    }

    fn apply_move(&mut self, mv: Move) -> Result<MoveReport> {
        let player = self.turn.player();
        let circuit = encoder::encode(mv, player);
        let register = self.register.as_mut().ok_or(GameError::GameOver)?;
        register.apply_circuit(&circuit)?;
        self.round_circuit.extend_from(&circuit);

        match mv {
            Move::Place(cell) => {
                self.provisional.set(cell, CellTag::Classical(player));
                self.board.set(cell, CellState::Marked(player));
            }
            Move::Entangle(a, b) => {
                let tag = CellTag::Entangled { mark: player, move_number: self.move_number };
                self.provisional.set(a, tag);
                self.provisional.set(b, tag);
            }
        }
        debug!(round = self.round, player = %player, mv = %mv, "move accepted");

        let round = self.round;
        let provisional = self.provisional;
        self.move_number += 1;
        self.turn.advance();

        let event = if mv.is_placement() {
            // the placed mark is already certain, so judge it now
            match self.provisional.winning_line() {
                Some((winner, line)) => {
                    info!(winner = %winner, ?line, "placement completed a line");
                    self.register = None;
                    self.phase = Phase::GameOver(GameResult::Winner(winner));
                    RoundEvent::EarlyWin { winner, line }
                }
                None => self.after_move()?,
            }
        } else {
            self.after_move()?
        };

        Ok(MoveReport { player, mv, round, provisional, event })
    }

    /// Collapses once no provisional cell is empty.
    fn after_move(&mut self) -> Result<RoundEvent> {
        if self.provisional.has_empty() {
            return Ok(RoundEvent::Continue);
        }
        self.collapse()
    }

    fn collapse(&mut self) -> Result<RoundEvent> {
        let register = self.register.take().ok_or(GameError::GameOver)?;
        trace!("round {} circuit:\n{}", self.round, self.round_circuit);

        let measurement = self.simulator.measure(register)?;
        self.measurements += 1;
        self.board = Board::from_measurement(&measurement)?;
        info!(round = self.round, outcome = %measurement, "register collapsed");

        let result = match self.board.winner() {
            Some(winner) => Some(GameResult::Winner(winner)),
            None if self.board.is_full() => Some(GameResult::Draw),
            None => None,
        };

        match result {
            Some(result) => {
                info!(?result, "game over");
                self.phase = Phase::GameOver(result);
            }
            None => self.start_round()?,
        }

        Ok(RoundEvent::Collapsed { measurement, board: self.board, result })
    }

    /// The classical board: last collapse plus this round's placements.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn provisional(&self) -> &ProvisionalCells {
        &self.provisional
    }

    /// Current round, starting at 1.
    pub fn round(&self) -> usize {
        self.round
    }

    pub fn turn(&self) -> TurnCounter {
        self.turn
    }

    pub fn current_player(&self) -> Mark {
        self.turn.player()
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn result(&self) -> Option<GameResult> {
        match self.phase {
            Phase::GameOver(result) => Some(result),
            Phase::AwaitingMove => None,
        }
    }

    pub fn is_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver(_))
    }

    /// Number of register measurements taken so far.
    pub fn measurements_taken(&self) -> usize {
        self.measurements
    }

    /// Gates applied to the current round's register so far.
    pub fn round_circuit(&self) -> &Circuit {
        &self.round_circuit
    }

    /// The live register, if the round has not collapsed yet.
    pub fn register(&self) -> Option<&QuantumRegister> {
        self.register.as_ref()
    }
}
