use crate::libclient::settings::{LOSE_SOUND, WIN_SOUND};
use crate::libgame::round::{Clip, SoundPlayer};
use anyhow::{bail, Context, Result};
use raylib::prelude::*;
use std::path::Path;

fn load_clip(path: &Path) -> Result<Sound> {
    Sound::load_sound(&path.to_string_lossy())
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("failed to load sound {}", path.display()))
}

/// Both clips fully decoded in memory, plus the device that plays them.
pub struct SoundBank {
    win: Sound,
    lose: Sound,
    // dropped last, closes the device
    audio: RaylibAudio,
}

impl SoundBank {
    pub fn load(dir: &Path) -> Result<Self> {
        let audio = RaylibAudio::init_audio_device();
        if !audio.is_audio_device_ready() {
            bail!("audio device failed to initialize");
        }

        let win = load_clip(&dir.join(WIN_SOUND))?;
        let lose = load_clip(&dir.join(LOSE_SOUND))?;
        log::info!("loaded sounds from {}", dir.display());

        Ok(SoundBank { win, lose, audio })
    }
}

impl SoundPlayer for SoundBank {
    fn play(&mut self, clip: Clip) {
        let sound = match clip {
            Clip::Win => &self.win,
            Clip::Lose => &self.lose,
        };
        // multi-channel so a new clip may overlap one still playing
        self.audio.play_sound_multi(sound);
    }
}
