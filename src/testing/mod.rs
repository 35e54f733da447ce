mod fake_environment;
mod fake_repository_reader;

pub use fake_environment::FakeEnvironment;
pub use fake_repository_reader::FakeRepositoryReader;
