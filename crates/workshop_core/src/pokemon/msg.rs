use super::{Pokemon, RequestId};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted the name form (may be empty).
    NameSubmitted(String),
    /// A lookup started by `Effect::FetchPokemon` finished.
    FetchSettled {
        request_id: RequestId,
        result: Result<Pokemon, String>,
    },
    /// User clicked "Try again" in the error fallback.
    TryAgainClicked,
    /// Fallback for placeholder wiring.
    NoOp,
}
