pub type RequestId = u64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pokemon {
    pub id: String,
    pub number: String,
    pub name: String,
    pub image: String,
    pub attacks: Vec<Attack>,
    /// Local time the record was fetched, preformatted for display.
    pub fetched_at: String,
}

/// A special attack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attack {
    pub name: String,
    pub kind: String,
    pub damage: u32,
}
