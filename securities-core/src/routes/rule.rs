//! Route rule grammar
//!
//! A rule is a `/` separated pattern:
//!
//! | Segment  | Meaning                      | In a hash      |
//! |----------|------------------------------|----------------|
//! | `word`   | literal                      | `word`         |
//! | `:id`    | required positional argument | `foo123`       |
//! | `:id?`   | optional positional argument | `foo123`       |
//! | `name:`  | required keyed argument      | `name:ACME`    |
//! | `name:?` | optional keyed argument      | `name:ACME`    |
//!
//! Keyed arguments with an empty value (`name:`) are treated as absent.

use std::borrow::Cow;

use crate::error::{CoreError, CoreResult};
use crate::types::{RouteArgs, RuleKind};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Positional { name: String, optional: bool },
    Keyed { name: String, optional: bool },
}

impl Segment {
    fn parse(raw: &str) -> Self {
        if let Some(rest) = raw.strip_prefix(':') {
            let (name, optional) = match rest.strip_suffix('?') {
                Some(name) => (name, true),
                None => (rest, false),
            };
            return Self::Positional {
                name: name.to_string(),
                optional,
            };
        }
        match raw.split_once(':') {
            Some((name, flag)) => Self::Keyed {
                name: name.to_string(),
                optional: flag == "?",
            },
            None => Self::Literal(raw.to_string()),
        }
    }
}

/// One registered route pattern.
#[derive(Debug, Clone)]
pub struct RouteRule {
    kind: RuleKind,
    pattern: String,
    segments: Vec<Segment>,
}

impl RouteRule {
    pub fn new(kind: RuleKind, pattern: &str) -> Self {
        Self {
            kind,
            pattern: pattern.to_string(),
            segments: split_path(pattern).map(Segment::parse).collect(),
        }
    }

    pub fn kind(&self) -> RuleKind {
        self.kind
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    /// Whether the rule declares an argument with this name.
    pub fn declares(&self, arg: &str) -> bool {
        self.segments.iter().any(|s| match s {
            Segment::Positional { name, .. } | Segment::Keyed { name, .. } => name == arg,
            Segment::Literal(_) => false,
        })
    }

    fn is_keyed(&self, arg: &str) -> bool {
        self.segments
            .iter()
            .any(|s| matches!(s, Segment::Keyed { name, .. } if name == arg))
    }

    /// Matches a path (without prefix), returning its arguments.
    pub fn matches(&self, path: &str) -> Option<RouteArgs> {
        let mut input = split_path(path);

        for segment in &self.segments {
            if let Segment::Literal(literal) = segment {
                if input.next()? != literal.as_str() {
                    return None;
                }
            }
        }

        let mut args = RouteArgs::new();
        let mut positionals = Vec::new();
        for raw in input {
            match raw.split_once(':') {
                Some((key, value)) if self.is_keyed(key) => {
                    args.set(key, decode(value)?);
                }
                _ => positionals.push(decode(raw)?),
            }
        }

        let mut positionals = positionals.into_iter();
        for segment in &self.segments {
            match segment {
                Segment::Positional { name, optional } => match positionals.next() {
                    Some(value) => args.set(name.clone(), value),
                    None if *optional => {}
                    None => return None,
                },
                Segment::Keyed {
                    name,
                    optional: false,
                } if !args.contains(name) => return None,
                _ => {}
            }
        }

        // leftover positionals: the rule does not describe this path
        if positionals.next().is_some() {
            return None;
        }
        Some(args)
    }

    /// Renders the arguments this rule declares; others are ignored.
    pub fn render(&self, args: &RouteArgs) -> CoreResult<String> {
        let mut path = String::new();
        for segment in &self.segments {
            let part = match segment {
                Segment::Literal(literal) => Some(literal.clone()),
                Segment::Positional { name, optional } => match args.get(name) {
                    Some(value) => Some(encode(value).into_owned()),
                    None if *optional => None,
                    None => return Err(self.missing(name)),
                },
                Segment::Keyed { name, optional } => match args.get(name) {
                    Some(value) => Some(format!("{name}:{}", encode(value))),
                    None if *optional => None,
                    None => return Err(self.missing(name)),
                },
            };
            if let Some(part) = part {
                path.push('/');
                path.push_str(&part);
            }
        }
        if path.is_empty() {
            path.push('/');
        }
        Ok(path)
    }

    fn missing(&self, name: &str) -> CoreError {
        CoreError::InvalidRoute(format!(
            "missing required argument '{name}' for {}",
            self.pattern
        ))
    }
}

/// The three rules registered by the view, in match priority order.
#[derive(Debug, Clone)]
pub struct Rules {
    load_filter: RouteRule,
    load_item: RouteRule,
    load: RouteRule,
}

impl Rules {
    pub fn for_page(page: &str) -> Self {
        Self {
            load_filter: RouteRule::new(
                RuleKind::LoadFilter,
                &format!("/{page}/filter:/:id?/name:?/type:?"),
            ),
            load_item: RouteRule::new(
                RuleKind::LoadItem,
                &format!("/{page}/:id/name:?/version:?/type:?"),
            ),
            load: RouteRule::new(RuleKind::Load, &format!("/{page}/name:?/type:?")),
        }
    }

    pub fn get(&self, kind: RuleKind) -> &RouteRule {
        match kind {
            RuleKind::Load => &self.load,
            RuleKind::LoadFilter => &self.load_filter,
            RuleKind::LoadItem => &self.load_item,
        }
    }

    /// First rule (by priority) that matches the path.
    pub fn resolve(&self, path: &str) -> CoreResult<(RuleKind, RouteArgs)> {
        RuleKind::PRIORITY
            .into_iter()
            .find_map(|kind| self.get(kind).matches(path).map(|args| (kind, args)))
            .ok_or_else(|| CoreError::InvalidRoute(path.to_string()))
    }
}

fn split_path(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

fn is_safe(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '~' | '*' | '|')
}

fn encode(value: &str) -> Cow<'_, str> {
    if value.chars().all(is_safe) {
        Cow::Borrowed(value)
    } else {
        urlencoding::encode(value)
    }
}

fn decode(value: &str) -> Option<String> {
    urlencoding::decode(value).ok().map(Cow::into_owned)
}
