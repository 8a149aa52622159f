mod repository_response;

pub use repository_response::LicenseResponse;
pub use repository_response::RepositoryResponse;
