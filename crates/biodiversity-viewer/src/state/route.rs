//! Pages of the viewer.

use biodiversity_map::{MAP_PATH, MapQuery, map_href};

/// The page being shown.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Route {
    /// Campus list.
    #[default]
    Home,
    /// The map, driven by its query string.
    Map(MapQuery),
}

impl Route {
    /// Parses an in-app href such as `/map?campusId=1`. Anything that is not
    /// the map page is home.
    pub fn parse(href: &str) -> Self {
        let href = href.trim();
        let (path, query) = href.split_once('?').unwrap_or((href, ""));
        if path.trim_end_matches('/') == MAP_PATH {
            Route::Map(MapQuery::parse(query))
        } else {
            Route::Home
        }
    }

    /// The map page needs a campus; without one it falls back to home.
    pub fn resolve(self) -> Self {
        match self {
            Route::Map(query) if query.campus_id.is_none() => {
                tracing::debug!("Map opened without a campus, redirecting home");
                Route::Home
            }
            route => route,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home => "/".to_string(),
            Route::Map(query) => map_href(query),
        }
    }

    pub fn map_query(&self) -> Option<&MapQuery> {
        match self {
            Route::Map(query) => Some(query),
            Route::Home => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use biodiversity_catalog::RecordId;

    #[test]
    fn test_parse_map_route() {
        let route = Route::parse("/map?campusId=4&zoom=15");
        let query = route.map_query().unwrap();
        assert_eq!(query.campus_id, Some(RecordId::new("4")));
        assert_eq!(query.zoom, Some(15.0));
    }

    #[test]
    fn test_other_paths_are_home() {
        assert_eq!(Route::parse("/"), Route::Home);
        assert_eq!(Route::parse("/about"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
    }

    #[test]
    fn test_map_without_campus_redirects_home() {
        assert_eq!(Route::parse("/map?coordinates=1,2").resolve(), Route::Home);
        assert!(matches!(Route::parse("/map/?campusId=1").resolve(), Route::Map(_)));
    }
}
