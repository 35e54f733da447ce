mod environment;
mod repository_reader;

pub use environment::Environment;
pub use repository_reader::RepositoryReader;
