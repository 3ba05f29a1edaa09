use crate::libclient::settings::ICON_SIZE;
use crate::libgame::rules::Choice;
use anyhow::{Context, Result};
use raylib::prelude::*;
use std::{collections::BTreeMap, path::Path};

fn icon_path(dir: &Path, choice: Choice) -> String {
    dir.join(format!("{}.png", choice))
        .to_string_lossy()
        .into_owned()
}

fn load_icon(dir: &Path, choice: Choice) -> Result<Image> {
    let path = icon_path(dir, choice);
    let mut image = Image::load_image(&path)
        .map_err(anyhow::Error::msg)
        .with_context(|| format!("failed to load icon {}", path))?;
    image.resize(ICON_SIZE, ICON_SIZE);
    Ok(image)
}

/// Decoded and resized icons, before any window exists.
pub struct IconImages {
    images: BTreeMap<Choice, Image>,
}

impl IconImages {
    pub fn load(dir: &Path) -> Result<Self> {
        let mut images = BTreeMap::new();
        for choice in Choice::ALL.iter() {
            images.insert(*choice, load_icon(dir, *choice)?);
        }
        log::info!("loaded {} icons from {}", images.len(), dir.display());
        Ok(IconImages { images })
    }
}

pub struct TextureStore {
    textures: BTreeMap<Choice, Texture2D>,
}

impl TextureStore {
    pub fn upload(
        handle: &mut RaylibHandle,
        thread: &RaylibThread,
        icons: IconImages,
    ) -> Result<Self> {
        let mut t = BTreeMap::new();
        for (choice, image) in icons.images.iter() {
            let texture = handle
                .load_texture_from_image(thread, image)
                .map_err(anyhow::Error::msg)
                .with_context(|| format!("failed to upload {} texture", choice))?;
            t.insert(*choice, texture);
        }
        Ok(TextureStore { textures: t })
    }

    pub fn get(&self, choice: Choice) -> &Texture2D {
        &self.textures[&choice]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_path() {
        assert_eq!(
            icon_path(Path::new("media"), Choice::Scissors),
            Path::new("media").join("scissors.png").to_string_lossy()
        );
    }

    #[test]
    fn test_missing_icon_names_file() {
        let err = IconImages::load(Path::new("no-such-dir")).err().unwrap();
        assert!(format!("{:#}", err).contains("rock.png"));
    }
}
