//! Tool configuration and the shared command-line surface.

pub mod road;
