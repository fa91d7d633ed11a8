//! Route registry and lookup.

use std::collections::HashMap;

use crate::config::RouteConfig;

/// A registered route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub name: String,
    pub path: String,
}

/// Immutable set of routes the application shell knows about.
#[derive(Debug, Clone, Default)]
pub struct Router {
    routes: Vec<Route>,
    by_path: HashMap<String, usize>,
}

impl Router {
    /// Register the configured routes. Later duplicates are ignored;
    /// validation rejects them before this point.
    pub fn from_config(configs: Vec<RouteConfig>) -> Self {
        let mut router = Self::default();

        for config in configs {
            let key = normalize(&config.path).to_string();
            if router.by_path.contains_key(&key) {
                tracing::warn!(path = %config.path, "Duplicate route ignored");
                continue;
            }
            router.by_path.insert(key, router.routes.len());
            router.routes.push(Route {
                name: config.name,
                path: config.path,
            });
        }

        tracing::debug!(count = router.routes.len(), "Routes registered");
        router
    }

    /// Find the route registered for `path`.
    pub fn resolve(&self, path: &str) -> Option<&Route> {
        self.by_path
            .get(normalize(path))
            .and_then(|&i| self.routes.get(i))
    }

    /// Routes in registration order.
    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

fn normalize(path: &str) -> &str {
    match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    }
}
