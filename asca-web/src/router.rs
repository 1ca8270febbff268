use yew_router::prelude::*;

#[derive(Clone, Debug, Routable, PartialEq, Eq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/dashboard")]
    Dashboard,
    #[at("/404")]
    #[not_found]
    NotFound,
}

impl Route {
    /// The protected route visitors land on once their wallet is connected.
    #[must_use]
    pub const fn protected() -> Self {
        Self::Dashboard
    }
}

#[cfg(test)]
mod tests {
    use super::Route;
    use yew_router::Routable;

    #[test]
    fn route_paths_match_page_anchors() {
        assert_eq!(Route::Home.to_path(), "/");
        assert_eq!(Route::Dashboard.to_path(), "/dashboard");
        assert_eq!(Route::protected(), Route::Dashboard);
    }

    #[test]
    fn dashboard_path_recognizes_itself() {
        assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
        assert_eq!(Route::recognize("/"), Some(Route::Home));
    }
}
