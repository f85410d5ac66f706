//! Route model

use tokio::sync::watch;

use crate::error::CoreResult;
use crate::types::{HashEdit, Route, RouteArgs, RuleKind};

use super::rule::Rules;

/// Holds the requested and handled routes and notifies subscribers of changes.
///
/// `current` is the most recently requested route; `last` is the most recent route
/// the view controller has handled. Subscribers only observe the latest route, so
/// hashes requested in quick succession may be coalesced.
pub struct RouteModel {
    prefix: String,
    rules: Rules,
    current: watch::Sender<Option<Route>>,
    last: watch::Sender<Option<Route>>,
}

impl RouteModel {
    pub const DEFAULT_PREFIX: &'static str = "#";

    pub fn new(prefix: impl Into<String>, rules: Rules) -> Self {
        Self {
            prefix: prefix.into(),
            rules,
            current: watch::channel(None).0,
            last: watch::channel(None).0,
        }
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn rules(&self) -> &Rules {
        &self.rules
    }

    /// Parses a hash, with or without the prefix.
    pub fn parse(&self, hash: &str) -> CoreResult<Route> {
        let path = hash.strip_prefix(self.prefix.as_str()).unwrap_or(hash);
        let (rule, args) = self.rules.resolve(path)?;
        Ok(Route {
            path: path.to_string(),
            rule,
            args,
        })
    }

    /// Produces a path for `rule` from `args` with `edit` applied (additions, then deletions).
    pub fn hash(&self, rule: RuleKind, args: &RouteArgs, edit: &HashEdit) -> CoreResult<String> {
        self.rules.get(rule).render(&args.edited(edit))
    }

    /// Path with the prefix, for links.
    pub fn href(&self, path: &str) -> String {
        format!("{}{path}", self.prefix)
    }

    /// Requests a route and notifies subscribers.
    pub fn go(&self, hash: &str) -> CoreResult<Route> {
        let route = self.parse(hash)?;
        log::debug!("go {}", route.path);
        self.current.send_replace(Some(route.clone()));
        Ok(route)
    }

    /// Records that the controller has handled `route`.
    pub fn mark_handled(&self, route: Route) {
        self.last.send_replace(Some(route));
    }

    pub fn current(&self) -> Option<Route> {
        self.current.borrow().clone()
    }

    pub fn last(&self) -> Option<Route> {
        self.last.borrow().clone()
    }

    /// Arguments of the current route, empty when nothing was requested yet.
    pub fn current_args(&self) -> RouteArgs {
        self.current
            .borrow()
            .as_ref()
            .map(|r| r.args.clone())
            .unwrap_or_default()
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<Route>> {
        self.current.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.current.receiver_count()
    }
}

impl Default for RouteModel {
    fn default() -> Self {
        Self::new(Self::DEFAULT_PREFIX, Rules::for_page("securities"))
    }
}
