//! Route table for the module proxy protocol.
//!
//! Module paths contain `/`, so they cannot be expressed as axum path
//! segments. Instead every request path is matched against an ordered list of
//! anchored patterns. `list` and `latest` come first so they are never read
//! as a `{token}.ext` pattern.

use std::borrow::Cow;

use percent_encoding::percent_decode_str;
use regex::Regex;

/// Versions and revisions: no `/`, so a token cannot walk the path.
const TOKEN_PATTERN: &str = r"[A-Za-z0-9_+.~-]+";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    List,
    Latest,
    Info,
    Mod,
    Zip,
}

impl Route {
    /// Precedence order. Literal suffixes before token patterns.
    pub const ALL: [Route; 5] = [
        Route::List,
        Route::Latest,
        Route::Info,
        Route::Mod,
        Route::Zip,
    ];

    fn pattern(self) -> String {
        match self {
            Route::List => r"^/(?P<module>.+)/@v/list$".to_string(),
            Route::Latest => r"^/(?P<module>.+)/@v/latest$".to_string(),
            Route::Info => format!(r"^/(?P<module>.+)/@v/(?P<token>{TOKEN_PATTERN})\.info$"),
            Route::Mod => format!(r"^/(?P<module>.+)/@v/(?P<token>{TOKEN_PATTERN})\.mod$"),
            Route::Zip => format!(r"^/(?P<module>.+)/@v/(?P<token>{TOKEN_PATTERN})\.zip$"),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Route::List => "list",
            Route::Latest => "latest",
            Route::Info => "info",
            Route::Mod => "mod",
            Route::Zip => "zip",
        }
    }
}

/// Parameters extracted from a matched request path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleRequest {
    pub route: Route,
    pub module: String,
    /// Version or revision. Empty for `list` and `latest`.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<(Route, Regex)>,
}

impl RouteTable {
    pub fn new() -> Self {
        let routes = Route::ALL
            .into_iter()
            .map(|route| {
                let re = Regex::new(&route.pattern())
                    .unwrap_or_else(|e| panic!("invalid {} route pattern: {e}", route.name()));
                (route, re)
            })
            .collect();
        Self { routes }
    }

    /// Percent-decode `raw_path`, then match the decoded text. A path that
    /// does not decode to UTF-8 matches nothing.
    pub fn match_encoded(&self, raw_path: &str) -> Option<ModuleRequest> {
        let decoded = decode_path(raw_path)?;
        self.match_path(&decoded)
    }

    /// First route in precedence order that matches `path`, with its params.
    pub fn match_path(&self, path: &str) -> Option<ModuleRequest> {
        self.routes.iter().find_map(|(route, re)| {
            let caps = re.captures(path)?;
            Some(ModuleRequest {
                route: *route,
                module: caps
                    .name("module")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
                token: caps
                    .name("token")
                    .map(|m| m.as_str().to_string())
                    .unwrap_or_default(),
            })
        })
    }
}

pub fn decode_path(raw_path: &str) -> Option<Cow<'_, str>> {
    percent_decode_str(raw_path).decode_utf8().ok()
}

impl Default for RouteTable {
    fn default() -> Self {
        Self::new()
    }
}
