//! Navigation surface: the route table plus the navigation currently on
//! screen.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser router tells the surface where the user is ([`arrive`]); the
//! session provider tells it who they are. [`resolve`] combines both through
//! the [`RouteGuard`] and answers with a [`Resolution`] the view layer renders
//! or navigates to. Redirects are remembered as a pending [`Transition`] so
//! the intent they carry reaches only the navigation that lands on their
//! target.
//!
//! Path matching is exact (after trailing-slash normalisation); anything the
//! table does not know goes to the fallback redirect when one is set.
//!
//! [`arrive`]: NavigationSurface::arrive
//! [`resolve`]: NavigationSurface::resolve

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use crate::error::RouteError;
use crate::guard::{GuardOutcome, GuardPolicy, RouteGuard};
use crate::intent::{Location, RedirectIntent, Transition};
use crate::session::{SessionState, SessionStateKind};

/// Upper bound on redirects followed by [`NavigationSurface::settle`].
pub const MAX_REDIRECT_DEPTH: usize = 5;

/// What the view layer should do for the current navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Resolution<C> {
    Render(C),
    Placeholder,
    Nothing,
    Redirect(String),
    NotFound,
}

#[derive(Clone, Debug)]
struct RouteEntry<C> {
    path: String,
    policy: Option<GuardPolicy>,
    content: C,
}

/// The navigation being evaluated: where it is, the intent it arrived with,
/// and the redirect it already produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Navigation {
    location: Location,
    intent: RedirectIntent,
    redirect: Option<String>,
    /// Session kind a guard redirect was decided for. `None` for the
    /// fallback redirect, which holds for every session.
    redirected_as: Option<SessionStateKind>,
}

impl Navigation {
    #[must_use]
    pub fn intent(&self) -> &RedirectIntent {
        &self.intent
    }

    #[must_use]
    pub fn redirect(&self) -> Option<&str> {
        self.redirect.as_deref()
    }
}

/// Route table and per-navigation state for one application.
#[derive(Clone, Debug)]
pub struct NavigationSurface<C> {
    guard: RouteGuard,
    routes: Vec<RouteEntry<C>>,
    fallback: Option<String>,
    current: Option<Navigation>,
    pending: Option<Transition>,
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".to_owned()
    } else if trimmed.starts_with('/') {
        trimmed.to_owned()
    } else {
        format!("/{trimmed}")
    }
}

impl<C: Clone> NavigationSurface<C> {
    pub fn new(guard: RouteGuard) -> Self {
        Self {
            guard,
            routes: Vec::new(),
            fallback: None,
            current: None,
            pending: None,
        }
    }

    /// Add a route. `policy: None` renders the content for everyone.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::DuplicateRoute`] if `path` is already registered.
    pub fn register_route(
        &mut self,
        path: &str,
        policy: Option<GuardPolicy>,
        content: C,
    ) -> Result<(), RouteError> {
        let path = normalize(path);
        if self.routes.iter().any(|r| r.path == path) {
            return Err(RouteError::DuplicateRoute(path));
        }
        self.routes.push(RouteEntry {
            path,
            policy,
            content,
        });
        Ok(())
    }

    /// Send unmatched paths to `path` instead of reporting not-found.
    pub fn set_fallback_redirect(&mut self, path: &str) {
        self.fallback = Some(normalize(path));
    }

    #[must_use]
    pub fn guard(&self) -> &RouteGuard {
        &self.guard
    }

    #[must_use]
    pub fn route_count(&self) -> usize {
        self.routes.len()
    }

    /// Declared policy of a registered path. `Some(None)` is an open route.
    #[must_use]
    pub fn policy_of(&self, path: &str) -> Option<Option<GuardPolicy>> {
        let path = normalize(path);
        self.routes
            .iter()
            .find(|r| r.path == path)
            .map(|r| r.policy)
    }

    #[must_use]
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    /// Queue a user-initiated transition (e.g. a link that forwards the
    /// intent the current page is holding).
    pub fn begin(&mut self, transition: Transition) {
        self.pending = Some(transition);
    }

    /// Move the current navigation's intent out, for forwarding.
    pub fn take_intent(&mut self) -> RedirectIntent {
        self.current
            .as_mut()
            .map(|nav| std::mem::take(&mut nav.intent))
            .unwrap_or_default()
    }

    /// The router reports the user is at `path`.
    ///
    /// Re-arriving at the current path keeps the navigation (and whatever it
    /// already decided). A new path starts a fresh navigation that receives
    /// the pending transition's intent only if it targets this path.
    pub fn arrive(&mut self, path: &str) {
        let path = normalize(path);
        if self
            .current
            .as_ref()
            .is_some_and(|nav| nav.location.path == path)
        {
            return;
        }
        let intent = self
            .pending
            .take()
            .map_or_else(RedirectIntent::none, |transition| transition.arrive(&path));
        self.current = Some(Navigation {
            location: Location::new(path),
            intent,
            redirect: None,
            redirected_as: None,
        });
    }

    /// Decide what the current navigation shows for `session`.
    ///
    /// Once a navigation has produced a redirect it keeps returning that
    /// redirect while the session kind stays the same, so re-renders before
    /// the router moves on cannot consume the intent a second time. A session
    /// change drops the redirect and its pending transition and evaluates
    /// the guard again.
    pub fn resolve(&mut self, session: &SessionState) -> Resolution<C> {
        let Some(nav) = self.current.as_mut() else {
            return Resolution::Nothing;
        };
        if nav
            .redirected_as
            .is_some_and(|kind| kind != session.kind())
        {
            nav.redirect = None;
            nav.redirected_as = None;
            self.pending = None;
        }
        if let Some(path) = &nav.redirect {
            return Resolution::Redirect(path.clone());
        }

        let Some(entry) = self.routes.iter().find(|r| r.path == nav.location.path) else {
            return match &self.fallback {
                Some(fallback) => {
                    self.pending = Some(Transition::plain(fallback.clone()));
                    nav.redirect = Some(fallback.clone());
                    Resolution::Redirect(fallback.clone())
                }
                None => Resolution::NotFound,
            };
        };

        let Some(policy) = entry.policy else {
            return Resolution::Render(entry.content.clone());
        };

        match self.guard.evaluate(policy, session, &mut nav.intent) {
            GuardOutcome::RenderChildren => Resolution::Render(entry.content.clone()),
            GuardOutcome::RenderPlaceholder => Resolution::Placeholder,
            GuardOutcome::RenderNothing => Resolution::Nothing,
            GuardOutcome::Redirect { path, carry_intent } => {
                let transition = if carry_intent {
                    Transition::capturing(path.clone(), &nav.location)
                } else {
                    Transition::plain(path.clone())
                };
                self.pending = Some(transition);
                nav.redirect = Some(path.clone());
                nav.redirected_as = Some(session.kind());
                Resolution::Redirect(path)
            }
        }
    }

    /// Follow redirects in memory from `path` until something renders.
    ///
    /// The browser surface never calls this; it answers "where does this
    /// path end up for this session" for route-table tests and diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`RouteError::RedirectLoop`] after [`MAX_REDIRECT_DEPTH`]
    /// consecutive redirects.
    pub fn settle(
        &mut self,
        path: &str,
        session: &SessionState,
    ) -> Result<(Location, Resolution<C>), RouteError> {
        let mut at = normalize(path);
        for _ in 0..=MAX_REDIRECT_DEPTH {
            self.arrive(&at);
            match self.resolve(session) {
                Resolution::Redirect(next) => at = next,
                other => return Ok((Location::new(at), other)),
            }
        }
        Err(RouteError::RedirectLoop {
            start: normalize(path),
            depth: MAX_REDIRECT_DEPTH,
        })
    }
}
