use super::RequestId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Start a remote lookup; the result comes back as `Msg::FetchSettled`.
    FetchPokemon { request_id: RequestId, name: String },
}
