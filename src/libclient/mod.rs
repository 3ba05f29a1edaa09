pub mod drawing;
pub mod layout;
pub mod settings;
pub mod sounds;
pub mod textures;
