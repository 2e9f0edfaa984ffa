//! Plain state records behind the stateful components.
//!
//! DESIGN
//! ======
//! Nothing in here touches the DOM or a clock. Controllers in `components`
//! drive these records through a `Host`.

pub mod gradient;
pub mod overlay;
