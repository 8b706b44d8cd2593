use yew::prelude::*;

use crate::content::Icon;

pub fn slug(icon: Icon) -> &'static str {
    match icon {
        Icon::CheckCircle => "check-circle",
        Icon::XCircle => "x-circle",
        Icon::Zap => "zap",
        Icon::MessageSquare => "message-square",
        Icon::Calendar => "calendar",
        Icon::ArrowLeft => "arrow-left",
        Icon::Users => "users",
        Icon::TrendingUp => "trending-up",
        Icon::Clock => "clock",
        Icon::ShieldCheck => "shield-check",
        Icon::ChevronDown => "chevron-down",
        Icon::PlayCircle => "play-circle",
    }
}

fn shapes(icon: Icon) -> Html {
    match icon {
        Icon::CheckCircle => html! {
            <>
                <path d="M22 11.08V12a10 10 0 1 1-5.93-9.14" />
                <polyline points="22 4 12 14.01 9 11.01" />
            </>
        },
        Icon::XCircle => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <path d="m15 9-6 6" />
                <path d="m9 9 6 6" />
            </>
        },
        Icon::Zap => html! {
            <polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2" />
        },
        Icon::MessageSquare => html! {
            <path d="M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" />
        },
        Icon::Calendar => html! {
            <>
                <rect x="3" y="4" width="18" height="18" rx="2" ry="2" />
                <line x1="16" y1="2" x2="16" y2="6" />
                <line x1="8" y1="2" x2="8" y2="6" />
                <line x1="3" y1="10" x2="21" y2="10" />
            </>
        },
        Icon::ArrowLeft => html! {
            <>
                <path d="m12 19-7-7 7-7" />
                <path d="M19 12H5" />
            </>
        },
        Icon::Users => html! {
            <>
                <path d="M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2" />
                <circle cx="9" cy="7" r="4" />
                <path d="M22 21v-2a4 4 0 0 0-3-3.87" />
                <path d="M16 3.13a4 4 0 0 1 0 7.75" />
            </>
        },
        Icon::TrendingUp => html! {
            <>
                <polyline points="22 7 13.5 15.5 8.5 10.5 2 17" />
                <polyline points="16 7 22 7 22 13" />
            </>
        },
        Icon::Clock => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polyline points="12 6 12 12 16 14" />
            </>
        },
        Icon::ShieldCheck => html! {
            <>
                <path d="M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10" />
                <path d="m9 12 2 2 4-4" />
            </>
        },
        Icon::ChevronDown => html! {
            <path d="m6 9 6 6 6-6" />
        },
        Icon::PlayCircle => html! {
            <>
                <circle cx="12" cy="12" r="10" />
                <polygon points="10 8 16 12 10 16 10 8" />
            </>
        },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or_default]
    pub class: Classes,
}

/// Inline stroke icon, sized and coloured by the surrounding CSS.
#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    let IconGlyphProps { icon, class } = props;

    html! {
        <svg
            class={classes!("icon", format!("icon-{}", slug(*icon)), class.clone())}
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { shapes(*icon) }
        </svg>
    }
}
