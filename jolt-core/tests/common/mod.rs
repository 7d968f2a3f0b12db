//! Simulated board for host-side game tests
//!
//! All mocks share one `World`: the accelerometer plays the role of a
//! player who reads each prompt off the screen and answers according to
//! a per-round plan.

#![allow(dead_code)]

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use jolt_core::game::Board;
use jolt_core::motion::{Axis, Gesture, Polarity};
use jolt_core::traits::{
    AccelSample, Clock, Indicator, InputError, InputEvent, InputSource, Presenter, Rgb,
    SampleError, SampleSource, STANDARD_GRAVITY,
};

/// Rest ticks the player waits before moving after a prompt
pub const SETTLE_TICKS: u32 = 10;

/// Acceleration the player applies when moving (m/s²)
pub const MOVE_STRENGTH: f32 = 8.0;

/// How the player answers one prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Perform the prompted gesture
    Correct,
    /// Perform the opposite gesture
    Wrong,
    /// Perform the prompted gesture at once, straight from the last pose
    Hasty,
    /// Hold still until time runs out
    Idle,
}

#[derive(Default)]
pub struct World {
    pub now_ms: u64,
    pub screens: Vec<Vec<String>>,
    pub colors: Vec<Rgb>,
    pub inputs: VecDeque<Result<Option<InputEvent>, InputError>>,
    pub input_polls: u32,
    pub plan: VecDeque<Response>,
    pub prompts: Vec<Gesture>,
    pub current: Option<(Gesture, Response, u32)>,
    pub reads: u32,
    /// Every n-th read fails with a bus error
    pub fault_every: Option<u32>,
    /// Every n-th read returns NaN
    pub nan_every: Option<u32>,
}

pub type SharedWorld = Rc<RefCell<World>>;

pub struct SimAccel(pub SharedWorld);
pub struct SimInput(pub SharedWorld);
pub struct SimScreen(pub SharedWorld);
pub struct SimPixel(pub SharedWorld);
pub struct SimClock(pub SharedWorld);

pub type SimBoard = Board<SimAccel, SimInput, SimScreen, SimPixel, SimClock>;

/// Build a board over a fresh world
pub fn board() -> (SimBoard, SharedWorld) {
    let world: SharedWorld = Rc::new(RefCell::new(World::default()));
    let board = Board {
        accel: SimAccel(world.clone()),
        input: SimInput(world.clone()),
        presenter: SimScreen(world.clone()),
        indicator: SimPixel(world.clone()),
        clock: SimClock(world.clone()),
    };
    (board, world)
}

/// Sample for a device pushed in a gesture's direction
pub fn push(gesture: Gesture, strength: f32) -> AccelSample {
    let (axis, polarity) = gesture.motion();
    let signed = match polarity {
        Polarity::Positive => strength,
        Polarity::Negative => -strength,
    };
    match axis {
        Axis::X => AccelSample::new(signed, 0.0, STANDARD_GRAVITY),
        Axis::Y => AccelSample::new(0.0, signed, STANDARD_GRAVITY),
        Axis::Z => AccelSample::new(0.0, 0.0, STANDARD_GRAVITY + signed),
    }
}

/// The gesture along the same axis with the other sign
pub fn opposite(gesture: Gesture) -> Gesture {
    let (axis, polarity) = gesture.motion();
    Gesture::from_motion(axis, polarity.opposite())
}

fn parse_target(label: &str) -> Option<Gesture> {
    Gesture::ALL.into_iter().find(|g| g.label() == label)
}

impl World {
    /// Screens whose first line matches
    pub fn count_screens(&self, first_line: &str) -> usize {
        self.screens
            .iter()
            .filter(|s| s.first().map(String::as_str) == Some(first_line))
            .count()
    }

    pub fn last_screen(&self) -> Vec<String> {
        self.screens.last().cloned().unwrap_or_default()
    }
}

impl SampleSource for SimAccel {
    fn next_sample(&mut self) -> Result<AccelSample, SampleError> {
        let mut world = self.0.borrow_mut();
        world.reads += 1;
        let reads = world.reads;

        if world.fault_every.is_some_and(|n| reads % n == 0) {
            return Err(SampleError::Bus);
        }
        if world.nan_every.is_some_and(|n| reads % n == 0) {
            return Ok(AccelSample::new(f32::NAN, 0.0, STANDARD_GRAVITY));
        }

        let Some((target, response, tick)) = world.current.as_mut() else {
            return Ok(AccelSample::at_rest());
        };
        *tick += 1;
        if *tick <= SETTLE_TICKS && *response != Response::Hasty {
            return Ok(AccelSample::at_rest());
        }

        Ok(match response {
            Response::Correct | Response::Hasty => push(*target, MOVE_STRENGTH),
            Response::Wrong => push(opposite(*target), MOVE_STRENGTH),
            Response::Idle => AccelSample::at_rest(),
        })
    }
}

impl InputSource for SimInput {
    fn poll_input(&mut self) -> Result<Option<InputEvent>, InputError> {
        let mut world = self.0.borrow_mut();
        world.input_polls += 1;
        world
            .inputs
            .pop_front()
            .unwrap_or(Ok(Some(InputEvent::ButtonPressed)))
    }
}

impl Presenter for SimScreen {
    fn show(&mut self, lines: &[&str]) {
        let mut world = self.0.borrow_mut();
        world
            .screens
            .push(lines.iter().map(|l| l.to_string()).collect());

        // A round prompt is three lines ending in the target
        if lines.len() == 3 {
            if let Some(target) = parse_target(lines[2]) {
                let response = world.plan.pop_front().unwrap_or(Response::Idle);
                world.prompts.push(target);
                world.current = Some((target, response, 0));
                return;
            }
        }
        world.current = None;
    }
}

impl Indicator for SimPixel {
    fn set_color(&mut self, color: Rgb) {
        self.0.borrow_mut().colors.push(color);
    }
}

impl Clock for SimClock {
    fn now_ms(&self) -> u64 {
        self.0.borrow().now_ms
    }

    fn delay_ms(&mut self, ms: u32) {
        self.0.borrow_mut().now_ms += ms as u64;
    }
}
