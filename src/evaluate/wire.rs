use serde::Deserialize;

use crate::core::wire::de_lenient_string;

#[derive(Deserialize)]
pub(crate) struct UploadResponse {
    #[serde(
        default,
        alias = "filePath",
        alias = "path",
        alias = "filename",
        deserialize_with = "de_lenient_string"
    )]
    pub(crate) file_path: Option<String>,
    #[serde(default, alias = "msg", deserialize_with = "de_lenient_string")]
    pub(crate) message: Option<String>,
}

#[derive(Deserialize)]
pub(crate) struct AnalysisResponse {
    #[serde(default, alias = "state", deserialize_with = "de_lenient_string")]
    pub(crate) status: Option<String>,
    #[serde(default, alias = "msg", deserialize_with = "de_lenient_string")]
    pub(crate) message: Option<String>,
}
