//! one round: the player submits a choice, the computer answers,
//! the outcome is shown until "play again" resets everything

use crate::libgame::{
    random::ChoiceSource,
    rules::{outcome, Choice, Outcome},
};

/// Sound effects the controller can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Win,
    Lose,
}

impl Clip {
    pub fn for_outcome(outcome: Outcome) -> Option<Clip> {
        match outcome {
            Outcome::Win => Some(Clip::Win),
            Outcome::Lose => Some(Clip::Lose),
            Outcome::Tie => None,
        }
    }
}

/// Fire-and-forget playback.
pub trait SoundPlayer {
    fn play(&mut self, clip: Clip);
}

pub enum Event {
    ChoiceSubmitted(Choice),
    PlayAgainRequested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Round {
    pub player: Choice,
    pub computer: Choice,
    pub outcome: Outcome,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    AwaitingChoice,
    RoundComplete(Round),
}

/// What the window shows. Rebuilt after every event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    pub player: Option<Choice>,
    pub computer: Option<Choice>,
    pub outcome: Option<Outcome>,
    pub inputs_enabled: bool,
}

impl Snapshot {
    pub fn play_again_enabled(&self) -> bool {
        !self.inputs_enabled
    }
}

pub struct RoundController<S: ChoiceSource, P: SoundPlayer> {
    state: GameState,
    source: S,
    sounds: P,
}

impl<S: ChoiceSource, P: SoundPlayer> RoundController<S, P> {
    pub fn new(source: S, sounds: P) -> Self {
        RoundController {
            state: GameState::AwaitingChoice,
            source,
            sounds,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> GameState {
        self.state
    }

    #[cfg(test)]
    pub fn sounds(&self) -> &P {
        &self.sounds
    }

    pub fn snapshot(&self) -> Snapshot {
        match self.state {
            GameState::AwaitingChoice => Snapshot {
                player: None,
                computer: None,
                outcome: None,
                inputs_enabled: true,
            },
            GameState::RoundComplete(round) => Snapshot {
                player: Some(round.player),
                computer: Some(round.computer),
                outcome: Some(round.outcome),
                inputs_enabled: false,
            },
        }
    }

    pub fn handle(&mut self, event: Event) -> Snapshot {
        match event {
            Event::ChoiceSubmitted(choice) => self.submit_choice(choice),
            Event::PlayAgainRequested => self.reset(),
        }
    }

    pub fn submit_choice(&mut self, player: Choice) -> Snapshot {
        if let GameState::RoundComplete(_) = self.state {
            log::warn!("ignoring {} submitted while a round is complete", player);
            return self.snapshot();
        }

        let computer = self.source.sample();
        let outcome = outcome(player, computer);
        self.state = GameState::RoundComplete(Round {
            player,
            computer,
            outcome,
        });
        log::debug!("{} vs {}: {:?}", player, computer, outcome);

        if let Some(clip) = Clip::for_outcome(outcome) {
            self.sounds.play(clip);
        }
        self.snapshot()
    }

    pub fn reset(&mut self) -> Snapshot {
        match self.state {
            GameState::AwaitingChoice => log::warn!("ignoring reset, no round to clear"),
            GameState::RoundComplete(_) => {
                log::debug!("round reset");
                self.state = GameState::AwaitingChoice;
            }
        }
        self.snapshot()
    }
}
