use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
pub(crate) enum CompanyRow {
    Name(String),
    Record(CompanyRecord),
}

#[derive(Deserialize)]
pub(crate) struct CompanyRecord {
    #[serde(alias = "Company", alias = "company_name", alias = "name")]
    pub(crate) company: Option<String>,
}

impl CompanyRow {
    pub(crate) fn into_name(self) -> Option<String> {
        match self {
            Self::Name(n) => Some(n),
            Self::Record(r) => r.company,
        }
    }
}
