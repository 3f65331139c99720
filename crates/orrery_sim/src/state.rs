use bevy::prelude::*;

/// Top-level app screens
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AppState {
    /// Live sandbox view; the simulation ticks only here
    #[default]
    Sandbox,
    /// Bodies-over-time chart for the current run
    Chart,
}
