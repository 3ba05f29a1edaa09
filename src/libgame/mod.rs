pub mod random;
pub mod round;
pub mod rules;
