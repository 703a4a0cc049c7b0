pub mod language;
pub mod spell;
