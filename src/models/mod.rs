pub mod legal;
pub mod simulation;
pub mod timeline;

pub use legal::{DocumentAction, LegalDocument};
pub use simulation::{EventLevel, EventType, SimulationEvent, SimulationRequest, SimulationSpeed};
pub use timeline::TimelineItem;
