// Adapters layer: implementations of the domain ports that talk to external processes.

pub mod lerna;
