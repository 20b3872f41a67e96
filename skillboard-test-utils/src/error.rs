use thiserror::Error;

#[derive(Error, Debug)]
pub enum TestError {
    #[error(transparent)]
    StoreError(#[from] entity::store::StoreError),
    /// A test asked for a fixture its builder never declared.
    #[error("Fixture {0} was not declared on the TestBuilder")]
    MissingFixture(&'static str),
    #[error("Invalid fixture data: {0}")]
    InvalidFixture(String),
}
