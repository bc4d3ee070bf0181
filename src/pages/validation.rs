use crate::core::EsgClient;
use crate::validation::{ValidationBuilder, ValidationReport};
use crate::views::{ValidationView, validation_view};

use super::{LoadState, Loadable};

/// State of the validation page.
pub struct ValidationPage {
    client: EsgClient,
    reports: Loadable<Vec<ValidationReport>>,
}

impl ValidationPage {
    pub fn new(client: &EsgClient) -> Self {
        Self {
            client: client.clone(),
            reports: Loadable::new(),
        }
    }

    pub async fn load(&mut self) {
        let ticket = self.reports.begin("validation-company");
        let result = ValidationBuilder::new(&self.client).fetch().await;
        self.reports.finish(ticket, result);
    }

    pub const fn state(&self) -> &LoadState<Vec<ValidationReport>> {
        self.reports.state()
    }

    /// The table and chart; empty (no rows) unless the load succeeded.
    pub fn view(&self) -> ValidationView {
        validation_view(self.reports.value().map_or(&[][..], Vec::as_slice))
    }
}
