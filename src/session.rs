//! Single-threaded play session.
//!
//! A session owns the world and the two independent timers that drive it:
//! vitality ticks and automated moves. Time is pushed in from outside with
//! [`Session::advance`]; every due timer fires as one complete transition, in
//! timestamp order, so no partial update is ever observable. Keyboard input
//! and other triggers arrive as [`SessionCommand`]s.

use crate::error::WorldError;
use crate::gazelle::{Direction, MoveOutcome};
use crate::input::direction_for_key;
use crate::policy::MovePolicy;
use crate::world::{SessionStatus, World};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Commands sent from an input layer to the session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SessionCommand {
    /// Platform key code, e.g. `ArrowUp`
    Key(String),
    /// Move in a direction directly
    Move(Direction),
    /// Apply a vitality tick now
    Tick,
    /// Ask the policy for a move now
    AiMove,
    /// Regenerate the world
    Restart,
    /// Detach timers and input for good
    Stop,
}

/// What changed, for the presentation layer to redraw
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEvent {
    Moved(MoveOutcome),
    Ticked { time: u64, thoughts: String },
    Ended(SessionStatus),
    Restarted { seed: u64 },
    Stopped,
}

/// A repeating timer on the session clock
#[derive(Debug, Clone, Copy)]
struct Interval {
    period: Duration,
    next_due: Duration,
}

impl Interval {
    fn new(period: Duration, now: Duration) -> Self {
        Self {
            period,
            next_due: now.saturating_add(period),
        }
    }

    fn fire(&mut self) {
        self.next_due = self.next_due.saturating_add(self.period);
    }
}

#[derive(Clone, Copy)]
enum Trigger {
    Vitality,
    AiMove,
}

pub struct Session {
    world: World,
    policy: Box<dyn MovePolicy>,
    clock: Duration,
    vitality: Interval,
    ai_move: Interval,
    /// Timers run only while the game is on
    timers_armed: bool,
    stopped: bool,
}

impl Session {
    pub fn new(world: World, policy: Box<dyn MovePolicy>) -> Self {
        let clock = Duration::ZERO;
        let timing = &world.config.timing;
        let vitality = Interval::new(Duration::from_millis(timing.vitality_interval_ms), clock);
        let ai_move = Interval::new(Duration::from_millis(timing.ai_move_interval_ms), clock);
        log::info!(
            "Session started: vitality every {:?}, {} move every {:?}",
            vitality.period,
            policy.name(),
            ai_move.period
        );

        Self {
            world,
            policy,
            clock,
            vitality,
            ai_move,
            timers_armed: true,
            stopped: false,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Session clock, the total time advanced so far
    pub fn clock(&self) -> Duration {
        self.clock
    }

    /// True while timers are still firing
    pub fn is_active(&self) -> bool {
        self.timers_armed && !self.stopped
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    /// Move the clock forward, firing every timer that comes due
    pub fn advance(&mut self, elapsed: Duration) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        if self.stopped {
            return events;
        }
        let until = self.clock.saturating_add(elapsed);

        while self.timers_armed {
            // Vitality wins ties
            let (trigger, due) = if self.vitality.next_due <= self.ai_move.next_due {
                (Trigger::Vitality, self.vitality.next_due)
            } else {
                (Trigger::AiMove, self.ai_move.next_due)
            };
            if due > until {
                break;
            }
            self.clock = due;
            match trigger {
                Trigger::Vitality => {
                    self.vitality.fire();
                    self.tick(&mut events);
                }
                Trigger::AiMove => {
                    self.ai_move.fire();
                    let outcome = self.world.ai_move(self.policy.as_mut());
                    events.push(SessionEvent::Moved(outcome));
                }
            }
        }

        self.clock = until;
        events
    }

    /// Apply one command from the input layer
    pub fn handle(&mut self, command: SessionCommand) -> Result<Vec<SessionEvent>, WorldError> {
        let mut events = Vec::new();
        if self.stopped {
            return Ok(events);
        }

        match command {
            SessionCommand::Key(code) => match direction_for_key(&code) {
                Some(direction) => {
                    log::debug!("Key pressed: {code} -> {direction}");
                    events.push(SessionEvent::Moved(self.world.move_gazelle(direction)));
                }
                None => log::trace!("Ignoring unbound key {code}"),
            },
            SessionCommand::Move(direction) => {
                events.push(SessionEvent::Moved(self.world.move_gazelle(direction)));
            }
            SessionCommand::Tick => self.tick(&mut events),
            SessionCommand::AiMove => {
                let outcome = self.world.ai_move(self.policy.as_mut());
                events.push(SessionEvent::Moved(outcome));
            }
            SessionCommand::Restart => {
                self.world.restart()?;
                self.vitality = Interval::new(self.vitality.period, self.clock);
                self.ai_move = Interval::new(self.ai_move.period, self.clock);
                self.timers_armed = true;
                events.push(SessionEvent::Restarted {
                    seed: self.world.seed(),
                });
            }
            SessionCommand::Stop => {
                self.stopped = true;
                self.timers_armed = false;
                log::info!("Session stopped at {:?}", self.clock);
                events.push(SessionEvent::Stopped);
            }
        }

        Ok(events)
    }

    fn tick(&mut self, events: &mut Vec<SessionEvent>) {
        let status = self.world.tick();
        events.push(SessionEvent::Ticked {
            time: self.world.time,
            thoughts: self.world.gazelle().thoughts.clone(),
        });
        if status.is_over() && self.timers_armed {
            match status {
                SessionStatus::Starved => log::info!("Game over: gazelle health reached 0"),
                _ => log::info!("Game won: the gazelle has eaten all the food"),
            }
            self.timers_armed = false;
            events.push(SessionEvent::Ended(status));
        }
    }
}
