pub mod aggregate;
pub mod workflow;

pub use aggregate::{
    format_difference, CancelledSessions, DiscrepancyStatus, DiscrepancySummary, NewSessionRequest,
    SessionOrigin, SessionPhase, SessionUpdate, StocktakingError, StocktakingProduct,
    StocktakingSession,
};
pub use workflow::StocktakingGateway;
