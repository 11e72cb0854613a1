//! Page components and the state machines behind them.

pub mod contact;
pub mod layout;
pub mod particle_field;
pub mod sections;
pub mod typewriter;
