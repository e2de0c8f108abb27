use std::fmt;

/// Client-side pages
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search,
    Property(String),
    Login,
    Signup,
    Dashboard,
    AddProperty,
    NotFound,
}

impl Route {
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let trimmed = path.trim_end_matches('/');
        let trimmed = trimmed.strip_prefix('/').unwrap_or(trimmed);
        let segments: Vec<&str> = trimmed.split('/').collect();

        match segments.as_slice() {
            [""] => Route::Home,
            ["search"] => Route::Search,
            ["property", id] if !id.is_empty() => Route::Property(id.to_string()),
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["dashboard"] => Route::Dashboard,
            ["host", "add-property"] => Route::AddProperty,
            _ => Route::NotFound,
        }
    }

    /// Pages that need a signed-in user
    pub fn requires_session(&self) -> bool {
        matches!(self, Route::Dashboard | Route::AddProperty)
    }

    pub fn path(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Search => "/search".to_string(),
            Route::Property(id) => format!("/property/{}", id),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::Dashboard => "/dashboard".to_string(),
            Route::AddProperty => "/host/add-property".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// The page to show for `path`; gated pages fall back to login when signed out.
pub fn resolve(path: &str, signed_in: bool) -> Route {
    let route = Route::parse(path);
    if route.requires_session() && !signed_in {
        Route::Login
    } else {
        route
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_page() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("/search"), Route::Search);
        assert_eq!(Route::parse("/search?location=aspen"), Route::Search);
        assert_eq!(Route::parse("/property/42"), Route::Property("42".to_string()));
        assert_eq!(Route::parse("/login"), Route::Login);
        assert_eq!(Route::parse("/signup/"), Route::Signup);
        assert_eq!(Route::parse("/dashboard"), Route::Dashboard);
        assert_eq!(Route::parse("/host/add-property"), Route::AddProperty);
    }

    #[test]
    fn leading_slash_is_optional() {
        assert_eq!(Route::parse("search"), Route::Search);
        assert_eq!(Route::parse("property/9"), Route::Property("9".to_string()));
        assert_eq!(Route::parse("nowhere"), Route::NotFound);
    }

    #[test]
    fn unknown_paths_are_not_found() {
        assert_eq!(Route::parse("/property"), Route::NotFound);
        assert_eq!(Route::parse("/property/1/edit"), Route::NotFound);
        assert_eq!(Route::parse("/host"), Route::NotFound);
    }

    #[test]
    fn gated_pages_redirect_when_signed_out() {
        assert_eq!(resolve("/dashboard", false), Route::Login);
        assert_eq!(resolve("/host/add-property", false), Route::Login);
        assert_eq!(resolve("/dashboard", true), Route::Dashboard);
        assert_eq!(resolve("/property/1", false), Route::Property("1".to_string()));
    }

    #[test]
    fn path_renders_back() {
        for path in ["/", "/search", "/property/7", "/login", "/signup", "/dashboard", "/host/add-property"] {
            assert_eq!(Route::parse(path).path(), path);
        }
    }
}
