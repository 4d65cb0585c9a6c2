//! Inline SVG icon components.
//!
//! Stroke icons in the Lucide style, emitted inline so no icon font or
//! asset pipeline is needed. Size and color are controlled by the caller
//! through `attr:class`.

use leptos::prelude::*;

macro_rules! icon {
    ($(#[$meta:meta])* $name:ident, $body:expr) => {
        $(#[$meta])*
        #[component]
        pub fn $name() -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                    inner_html=$body
                ></svg>
            }
        }
    };
}

icon!(
    /// Brand mark.
    Leaf,
    "<path d='M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z'/><path d='M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12'/>"
);

icon!(
    /// Login wall badge.
    Lock,
    "<rect width='18' height='11' x='3' y='11' rx='2' ry='2'/><path d='M7 11V7a5 5 0 0 1 10 0v4'/>"
);

icon!(
    User,
    "<path d='M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2'/><circle cx='12' cy='7' r='4'/>"
);

icon!(
    ArrowRight,
    "<path d='M5 12h14'/><path d='m12 5 7 7-7 7'/>"
);

icon!(
    CheckCircle,
    "<path d='M21.801 10A10 10 0 1 1 17 3.335'/><path d='m9 11 3 3L22 4'/>"
);

icon!(
    Clock,
    "<circle cx='12' cy='12' r='10'/><polyline points='12 6 12 12 16 14'/>"
);

icon!(
    AlertTriangle,
    "<path d='m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3'/><path d='M12 9v4'/><path d='M12 17h.01'/>"
);

icon!(
    Wifi,
    "<path d='M12 20h.01'/><path d='M2 8.82a15 15 0 0 1 20 0'/><path d='M5 12.859a10 10 0 0 1 14 0'/><path d='M8.5 16.429a5 5 0 0 1 7 0'/>"
);

icon!(
    WifiOff,
    "<path d='M12 20h.01'/><path d='M8.5 16.429a5 5 0 0 1 7 0'/><path d='M5 12.859a10 10 0 0 1 5.17-2.69'/><path d='M19 12.859a10 10 0 0 0-2.007-1.523'/><path d='M2 8.82a15 15 0 0 1 4.177-2.643'/><path d='M22 8.82a15 15 0 0 0-11.288-3.764'/><line x1='2' x2='22' y1='2' y2='22'/>"
);

icon!(
    Menu,
    "<line x1='4' x2='20' y1='6' y2='6'/><line x1='4' x2='20' y1='12' y2='12'/><line x1='4' x2='20' y1='18' y2='18'/>"
);

icon!(
    Close,
    "<path d='M18 6 6 18'/><path d='m6 6 12 12'/>"
);
