//! Builders for message payload parts.

pub mod embed;

pub use self::embed::EmbedBuilder;
