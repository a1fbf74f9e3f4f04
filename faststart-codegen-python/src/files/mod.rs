//! The files emitted under `app/api/v1/`.

mod auth_py;
mod endpoints_py;
mod init_py;

pub use auth_py::AuthPy;
pub use endpoints_py::EndpointsPy;
pub use init_py::InitPy;

use std::path::{Path, PathBuf};

/// Package directory all API files live in, relative to the output root.
pub const API_DIR: &str = "app/api/v1";

/// Join a `/`-separated relative path onto `base`.
fn api_path(base: &Path, file_name: &str) -> PathBuf {
    API_DIR
        .split('/')
        .fold(base.to_path_buf(), |path, segment| path.join(segment))
        .join(file_name)
}
