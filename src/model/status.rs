use entity::sea_orm_active_enums::Status;

/// Status predicate for single-entity lookups.
///
/// Replaces a variadic status argument with an explicit three-way choice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StatusSelector {
    /// Any status except `Deleted`.
    #[default]
    Default,
    /// Exactly the given status.
    Exact(Status),
    /// Any of the given statuses. An empty set behaves like `Default`.
    AnyOf(Vec<Status>),
}

impl StatusSelector {
    /// Builds a selector from a list of statuses: none selects `Default`, one
    /// selects `Exact`, more select `AnyOf`.
    pub fn from_statuses(statuses: &[Status]) -> Self {
        match statuses {
            [] => Self::Default,
            [status] => Self::Exact(*status),
            many => Self::AnyOf(many.to_vec()),
        }
    }
}

impl From<Status> for StatusSelector {
    fn from(status: Status) -> Self {
        Self::Exact(status)
    }
}
