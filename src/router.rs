//! Client-side route mapping.

/// Path of the home page, used as the link target on fallback pages.
pub const HOME_PATH: &str = "/";
/// Path of the admin page.
pub const ADMIN_PATH: &str = "/admin";

/// The page selected by the current URL path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    /// The review form.
    #[default]
    Home,
    /// The read-only review table.
    Admin,
    /// Fallback for any other path.
    NotFound,
}

impl Route {
    /// Map a URL path to a route. Unknown paths are not an error.
    pub fn parse(path: &str) -> Self {
        match path {
            HOME_PATH => Self::Home,
            ADMIN_PATH => Self::Admin,
            _ => Self::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_map_to_pages() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/admin"), Route::Admin);
    }

    #[test]
    fn unknown_paths_fall_back_to_not_found() {
        assert_eq!(Route::parse("/unknown-xyz"), Route::NotFound);
        assert_eq!(Route::parse(""), Route::NotFound);
        assert_eq!(Route::parse("/admin/"), Route::NotFound);
    }
}
