use crate::db::documents::DocumentStore;

#[derive(Clone)]
pub struct SqlxContactRepo {
    pub store: DocumentStore,
}

#[derive(Clone)]
pub struct SqlxProjectRepo {
    pub store: DocumentStore,
}

#[derive(Clone)]
pub struct SqlxSkillRepo {
    pub store: DocumentStore,
}
