use crate::TestContext;

pub mod data;
pub mod mockito;

impl TestContext {
    pub fn app<'a>(&'a mut self) -> AppFixtures<'a> {
        AppFixtures { setup: self }
    }
}

pub struct AppFixtures<'a> {
    pub setup: &'a mut TestContext,
}
