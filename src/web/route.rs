//! Route definitions - domain model.
//!
//! Pure business layer with no DOM or `web_sys` dependency. Every page of the
//! application has exactly one variant here; the variant carries the path,
//! the human-readable feature label, and whether the page is premium
//! (requires an authenticated session).

use std::fmt::Display;

/// Application routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppRoute {
    /// Landing page (default route)
    #[default]
    Home,
    /// Farm overview (premium)
    Dashboard,
    /// Soil health metrics (premium)
    SoilHealth,
    /// Water usage metrics (premium)
    WaterUsage,
    /// Regenerative practices (premium)
    Practices,
    /// Carbon credit tracking (premium)
    CarbonCredits,
    /// Sustainability reports (premium)
    Reports,
    /// NASA earth data browser
    EarthData,
    /// Weather conditions
    Weather,
    /// Air quality conditions
    AirQuality,
    About,
    Contact,
    Privacy,
    Terms,
    Login,
    Signup,
    /// Fallback for unmatched paths
    NotFound,
}

impl AppRoute {
    /// Parses a URL path into a route. Unknown paths fall through to
    /// `NotFound`.
    pub fn from_path(path: &str) -> Self {
        match path {
            "/" => Self::Home,
            "/dashboard" => Self::Dashboard,
            "/soil-health" => Self::SoilHealth,
            "/water-usage" => Self::WaterUsage,
            "/practices" => Self::Practices,
            "/carbon-credits" => Self::CarbonCredits,
            "/reports" => Self::Reports,
            "/earth-data" => Self::EarthData,
            "/weather" => Self::Weather,
            "/air-quality" => Self::AirQuality,
            "/about" => Self::About,
            "/contact" => Self::Contact,
            "/privacy" => Self::Privacy,
            "/terms" => Self::Terms,
            "/login" => Self::Login,
            "/signup" => Self::Signup,
            _ => Self::NotFound,
        }
    }

    /// Canonical URL path for this route.
    pub fn to_path(&self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::Dashboard => "/dashboard",
            Self::SoilHealth => "/soil-health",
            Self::WaterUsage => "/water-usage",
            Self::Practices => "/practices",
            Self::CarbonCredits => "/carbon-credits",
            Self::Reports => "/reports",
            Self::EarthData => "/earth-data",
            Self::Weather => "/weather",
            Self::AirQuality => "/air-quality",
            Self::About => "/about",
            Self::Contact => "/contact",
            Self::Privacy => "/privacy",
            Self::Terms => "/terms",
            Self::Login => "/login",
            Self::Signup => "/signup",
            Self::NotFound => "/404",
        }
    }

    /// Human-readable label, shown in navigation and in the login wall.
    pub fn feature_name(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Dashboard => "Dashboard",
            Self::SoilHealth => "Soil Health",
            Self::WaterUsage => "Water Usage",
            Self::Practices => "Practices",
            Self::CarbonCredits => "Carbon Credits",
            Self::Reports => "Reports",
            Self::EarthData => "Earth Data",
            Self::Weather => "Weather",
            Self::AirQuality => "Air Quality",
            Self::About => "About",
            Self::Contact => "Contact",
            Self::Privacy => "Privacy",
            Self::Terms => "Terms",
            Self::Login => "Sign In",
            Self::Signup => "Sign Up",
            Self::NotFound => "Not Found",
        }
    }

    /// **Core guard predicate: does this route require authentication?**
    pub fn requires_auth(&self) -> bool {
        matches!(
            self,
            Self::Dashboard
                | Self::SoilHealth
                | Self::WaterUsage
                | Self::Practices
                | Self::CarbonCredits
                | Self::Reports
        )
    }

    /// Premium routes, in navigation order. Shown to authenticated visitors.
    pub const PRIVATE_NAV: &'static [AppRoute] = &[
        Self::Dashboard,
        Self::SoilHealth,
        Self::WaterUsage,
        Self::Practices,
        Self::CarbonCredits,
        Self::Reports,
    ];

    /// Public routes shown in navigation to anonymous visitors.
    pub const PUBLIC_NAV: &'static [AppRoute] = &[Self::Home, Self::About, Self::Contact];
}

impl Display for AppRoute {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_path())
    }
}

/// Outcome of the guard decision for a route render.
///
/// Resolved as a pure function of the route table and the current session
/// state; the router/guard components only interpret the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAccess {
    /// Render the page content unmodified.
    Granted,
    /// Render the login wall instead, labelled with the requested feature.
    Locked { feature: &'static str },
}

impl RouteAccess {
    /// Decides access for `route` given the current authentication state.
    pub fn resolve(route: AppRoute, authenticated: bool) -> Self {
        if route.requires_auth() && !authenticated {
            Self::Locked {
                feature: route.feature_name(),
            }
        } else {
            Self::Granted
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_paths_round_trip() {
        let routes = [
            AppRoute::Home,
            AppRoute::Dashboard,
            AppRoute::SoilHealth,
            AppRoute::WaterUsage,
            AppRoute::Practices,
            AppRoute::CarbonCredits,
            AppRoute::Reports,
            AppRoute::EarthData,
            AppRoute::Weather,
            AppRoute::AirQuality,
            AppRoute::About,
            AppRoute::Contact,
            AppRoute::Privacy,
            AppRoute::Terms,
            AppRoute::Login,
            AppRoute::Signup,
        ];
        for route in routes {
            assert_eq!(AppRoute::from_path(route.to_path()), route);
        }
    }

    #[test]
    fn unknown_paths_fall_through_to_not_found() {
        assert_eq!(AppRoute::from_path("/nope"), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path(""), AppRoute::NotFound);
        assert_eq!(AppRoute::from_path("/dashboard/extra"), AppRoute::NotFound);
    }

    #[test]
    fn premium_routes_require_auth() {
        for route in AppRoute::PRIVATE_NAV {
            assert!(route.requires_auth(), "{route} should be premium");
        }
        for route in [
            AppRoute::Home,
            AppRoute::EarthData,
            AppRoute::Weather,
            AppRoute::AirQuality,
            AppRoute::About,
            AppRoute::Login,
            AppRoute::Signup,
            AppRoute::NotFound,
        ] {
            assert!(!route.requires_auth(), "{route} should be open");
        }
    }

    #[test]
    fn guarded_route_locks_only_when_unauthenticated() {
        assert_eq!(
            RouteAccess::resolve(AppRoute::Dashboard, false),
            RouteAccess::Locked {
                feature: "Dashboard"
            }
        );
        assert_eq!(
            RouteAccess::resolve(AppRoute::Dashboard, true),
            RouteAccess::Granted
        );
    }

    #[test]
    fn open_route_is_granted_regardless_of_session() {
        assert_eq!(
            RouteAccess::resolve(AppRoute::About, false),
            RouteAccess::Granted
        );
        assert_eq!(
            RouteAccess::resolve(AppRoute::About, true),
            RouteAccess::Granted
        );
    }
}
