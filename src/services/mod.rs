mod git_repository_reader;
mod process_environment;

pub use git_repository_reader::GitRepositoryReader;
pub use process_environment::ProcessEnvironment;
