//! Route table and navigation shell.

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Route {
    #[default]
    Home,
    Evaluate,
    Model,
    Analysis,
    Validation,
    Workflow,
    Contact,
}

impl Route {
    /// Navigation order.
    pub const ALL: [Self; 7] = [
        Self::Home,
        Self::Evaluate,
        Self::Model,
        Self::Analysis,
        Self::Validation,
        Self::Workflow,
        Self::Contact,
    ];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Evaluate => "/evaluate",
            Self::Model => "/model",
            Self::Analysis => "/analysis",
            Self::Validation => "/validation",
            Self::Workflow => "/workflow",
            Self::Contact => "/contact",
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Evaluate => "Evaluate",
            Self::Model => "Model",
            Self::Analysis => "Analysis",
            Self::Validation => "Validation",
            Self::Workflow => "Workflow",
            Self::Contact => "Contact",
        }
    }

    /// Exact path match; a trailing slash is ignored.
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim();
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Self::ALL.into_iter().find(|r| r.path() == path)
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Current route plus the mobile menu flag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Shell {
    route: Route,
    menu_open: bool,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn route(&self) -> Route {
        self.route
    }

    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Goes to `route` and closes the menu.
    pub fn go(&mut self, route: Route) {
        self.route = route;
        self.menu_open = false;
    }

    /// Navigates by path. Unknown paths leave the route (and menu) untouched.
    pub fn navigate(&mut self, path: &str) -> Option<Route> {
        let route = Route::from_path(path);
        match route {
            Some(r) => self.go(r),
            None => tracing::debug!(path, "no route for path"),
        }
        route
    }
}
