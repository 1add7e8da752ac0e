mod line;
mod result_ext;

pub use line::{LineApiClient, LINE_API_BASE_URL};
pub use result_ext::ResultExt;
