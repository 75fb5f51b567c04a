/// Operation kinds a model mapping can expose.
///
/// Declaration order is the order roots are registered in, which makes it
/// part of the graph's determinism contract.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelAction {
    FindUnique,
    FindUniqueOrThrow,
    FindFirst,
    FindFirstOrThrow,
    FindMany,
    Create,
    CreateMany,
    CreateManyAndReturn,
    Update,
    UpdateMany,
    UpdateManyAndReturn,
    Upsert,
    Delete,
    DeleteMany,
    GroupBy,
    Count,
    Aggregate,
    FindRaw,
    AggregateRaw,
}

impl ModelAction {
    pub const ALL: [ModelAction; 19] = [
        Self::FindUnique,
        Self::FindUniqueOrThrow,
        Self::FindFirst,
        Self::FindFirstOrThrow,
        Self::FindMany,
        Self::Create,
        Self::CreateMany,
        Self::CreateManyAndReturn,
        Self::Update,
        Self::UpdateMany,
        Self::UpdateManyAndReturn,
        Self::Upsert,
        Self::Delete,
        Self::DeleteMany,
        Self::GroupBy,
        Self::Count,
        Self::Aggregate,
        Self::FindRaw,
        Self::AggregateRaw,
    ];

    /// Key under which the mapping names the implementing schema field.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::FindUnique => "findUnique",
            Self::FindUniqueOrThrow => "findUniqueOrThrow",
            Self::FindFirst => "findFirst",
            Self::FindFirstOrThrow => "findFirstOrThrow",
            Self::FindMany => "findMany",
            Self::Create => "create",
            Self::CreateMany => "createMany",
            Self::CreateManyAndReturn => "createManyAndReturn",
            Self::Update => "update",
            Self::UpdateMany => "updateMany",
            Self::UpdateManyAndReturn => "updateManyAndReturn",
            Self::Upsert => "upsert",
            Self::Delete => "delete",
            Self::DeleteMany => "deleteMany",
            Self::GroupBy => "groupBy",
            Self::Count => "count",
            Self::Aggregate => "aggregate",
            Self::FindRaw => "findRaw",
            Self::AggregateRaw => "aggregateRaw",
        }
    }

    /// Action name used by the public query protocol.
    ///
    /// Only the four single-record writes are renamed.
    pub fn json_action(self) -> &'static str {
        match self {
            Self::Create => "createOne",
            Self::Update => "updateOne",
            Self::Delete => "deleteOne",
            Self::Upsert => "upsertOne",
            other => other.as_str(),
        }
    }
}

impl std::fmt::Display for ModelAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
