use super::Update;

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Update(Update),
}

impl Statement {
    pub fn is_update(&self) -> bool {
        matches!(self, Statement::Update(_))
    }

    #[track_caller]
    pub fn into_update(self) -> Update {
        match self {
            Statement::Update(update) => update,
        }
    }
}
