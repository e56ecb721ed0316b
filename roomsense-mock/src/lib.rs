mod simulate;

pub use simulate::Simulator;
