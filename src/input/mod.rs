pub mod gestures;

pub use gestures::DoubleTapDetector;
