//! Game driver
//!
//! Owns the collaborators and the long-lived state (classifier, selector,
//! session) and runs the blocking control loop one phase at a time:
//! - Performs the current phase's work (screens, pacing, rounds)
//! - Feeds the resulting event to the phase machine
//! - Reports every round outcome before the next round starts

use rand::Rng;

use super::difficulty::DifficultySelector;
use super::events::GameEvent;
use super::machine::Phase;
use super::round::{RoundController, RoundOutcome, RoundReport};
use super::screen::Screen;
use super::session::{GameSession, SessionSummary};
use crate::config::{ClassifierConfig, GameConfig};
use crate::motion::MotionClassifier;
use crate::traits::{Clock, Indicator, InputEvent, InputSource, Presenter, Rgb, SampleSource};

/// Countdown steps and their indicator colors
const COUNTDOWN: [(u8, Rgb); 3] = [(3, Rgb::RED), (2, Rgb::YELLOW), (1, Rgb::GREEN)];

/// Board-side collaborators the game talks to
pub struct Board<S, I, P, L, C> {
    /// Accelerometer
    pub accel: S,
    /// Encoder and button
    pub input: I,
    /// Status display
    pub presenter: P,
    /// RGB indicator
    pub indicator: L,
    /// Time base
    pub clock: C,
}

/// The reaction game
pub struct Game<S, I, P, L, C, R> {
    board: Board<S, I, P, L, C>,
    rng: R,
    config: GameConfig,
    classifier: MotionClassifier,
    selector: DifficultySelector,
    rounds: RoundController,
    phase: Phase,
    session: GameSession,
    last_report: Option<RoundReport>,
}

impl<S, I, P, L, C, R> Game<S, I, P, L, C, R>
where
    S: SampleSource,
    I: InputSource,
    P: Presenter,
    L: Indicator,
    C: Clock,
    R: Rng,
{
    /// Create a game with the standard gameplay constants
    pub fn new(board: Board<S, I, P, L, C>, rng: R) -> Self {
        Self::with_config(board, rng, GameConfig::default(), ClassifierConfig::default())
    }

    /// Create a game with explicit configuration
    pub fn with_config(
        board: Board<S, I, P, L, C>,
        rng: R,
        config: GameConfig,
        classifier: ClassifierConfig,
    ) -> Self {
        let selector = DifficultySelector::new(config.pulses_per_step)
            .with_timing(config.input_poll_ms, config.confirm_debounce_ms);
        let rounds = RoundController::new(config.sample_poll_ms);

        Self {
            board,
            rng,
            config,
            classifier: MotionClassifier::new(classifier),
            selector,
            rounds,
            phase: Phase::SelectDifficulty,
            session: GameSession::new(Default::default()),
            last_report: None,
        }
    }

    /// Get current phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current (or most recent) session
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Get the classifier
    pub fn classifier(&self) -> &MotionClassifier {
        &self.classifier
    }

    /// Get the configuration
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Report of the most recent round
    pub fn last_report(&self) -> Option<RoundReport> {
        self.last_report
    }

    /// Get access to the collaborators
    pub fn board(&self) -> &Board<S, I, P, L, C> {
        &self.board
    }

    /// Get mutable access to the collaborators
    pub fn board_mut(&mut self) -> &mut Board<S, I, P, L, C> {
        &mut self.board
    }

    /// Give the collaborators back
    pub fn into_board(self) -> Board<S, I, P, L, C> {
        self.board
    }

    /// Run the current phase to completion and transition
    ///
    /// Returns the new phase.
    pub fn step(&mut self) -> Phase {
        let event = match self.phase {
            Phase::SelectDifficulty => self.select_difficulty(),
            Phase::Countdown => self.countdown(),
            Phase::Playing => self.play_level(),
            Phase::LevelAdvance => self.advance_level(),
            Phase::GameOver => self.await_acknowledge(),
        };

        let next = self.phase.transition(event);
        #[cfg(feature = "defmt")]
        defmt::info!("Phase {} -> {} on {}", self.phase, next, event);
        self.phase = next;
        next
    }

    /// Play one full session, through the game-over acknowledgement
    pub fn run_session(&mut self) -> SessionSummary {
        while self.phase != Phase::GameOver {
            self.step();
        }

        let summary = self.session.summary();
        self.step();
        summary
    }

    /// Play sessions forever
    pub fn run(&mut self) -> ! {
        loop {
            let _summary = self.run_session();
            #[cfg(feature = "defmt")]
            defmt::info!("Session over: {}", _summary);
        }
    }

    fn select_difficulty(&mut self) -> GameEvent {
        let difficulty = self.selector.select_difficulty(
            &mut self.board.input,
            &mut self.board.presenter,
            &mut self.board.clock,
        );
        self.session = GameSession::new(difficulty);
        GameEvent::DifficultyConfirmed
    }

    fn countdown(&mut self) -> GameEvent {
        self.show(&Screen::get_ready());
        for (step, color) in COUNTDOWN {
            self.show(&Screen::countdown(step));
            self.board.indicator.set_color(color);
            self.board.clock.delay_ms(self.config.countdown_step_ms);
        }
        self.board.indicator.off();
        GameEvent::CountdownFinished
    }

    fn play_level(&mut self) -> GameEvent {
        loop {
            if self.session.lives() == 0 {
                return GameEvent::LivesExhausted;
            }

            let spec = self.session.next_round(&mut self.rng, &self.config);
            self.show(&Screen::round_prompt(&self.session, spec.target));

            let report = self.rounds.run_round(
                spec,
                self.session.level(),
                &mut self.classifier,
                &mut self.board.accel,
                &mut self.board.clock,
            );
            #[cfg(feature = "defmt")]
            defmt::debug!("Round {} -> {}", spec, report);
            self.last_report = Some(report);

            self.present_outcome(report.outcome);

            let progress = self.session.record(report.outcome, &self.config);
            if let Some(event) = GameEvent::from_progress(progress) {
                return event;
            }
        }
    }

    fn present_outcome(&mut self, outcome: RoundOutcome) {
        self.show(&Screen::outcome(outcome));
        self.board.indicator.set_color(outcome.color());
        self.board.clock.delay_ms(self.config.feedback_ms);
        self.board.indicator.off();
    }

    fn advance_level(&mut self) -> GameEvent {
        // Only entered after LevelCleared, which never comes from the last level
        let advanced = self.session.advance_level(&self.config);
        debug_assert!(advanced, "level advance past the last level");
        self.show(&Screen::next_level());
        self.board.clock.delay_ms(self.config.next_level_pause_ms);
        GameEvent::NextLevelStarted
    }

    fn await_acknowledge(&mut self) -> GameEvent {
        self.show(&Screen::game_over());
        loop {
            match self.board.input.poll_input() {
                Ok(Some(InputEvent::ButtonPressed)) => {
                    self.board.clock.delay_ms(self.config.confirm_debounce_ms);
                    return GameEvent::Acknowledged;
                }
                Ok(_) => {}
                Err(_e) => {
                    #[cfg(feature = "defmt")]
                    defmt::warn!("Input read failed: {:?}", _e);
                }
            }
            self.board.clock.delay_ms(self.config.ack_poll_ms);
        }
    }

    fn show(&mut self, screen: &Screen) {
        self.board.presenter.show(&screen.lines());
    }
}
