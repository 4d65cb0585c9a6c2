//! Data quality badges.
//!
//! Renders precomputed 1-5 quality scores as static badges next to the data
//! cards. The scores arrive already calculated; no caching or retry logic
//! lives here.

use crate::components::icons::{AlertTriangle, CheckCircle, Clock, Wifi, WifiOff};
use leptos::prelude::*;

/// Precomputed quality score, each axis on a 1-5 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DataQualityScore {
    pub freshness: u8,
    pub consistency: u8,
    pub accuracy: u8,
    pub overall: u8,
}

/// Where the rendered reading came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceStatus {
    Live,
    Cached,
    Stale,
}

impl SourceStatus {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Live => "Live",
            Self::Cached => "Cached",
            Self::Stale => "Stale Data",
        }
    }

    fn badge_class(&self) -> &'static str {
        match self {
            Self::Live => "badge badge-green",
            Self::Cached => "badge badge-blue",
            Self::Stale => "badge badge-orange",
        }
    }
}

/// Word rating for an overall 1-5 score.
pub fn quality_label(quality: u8) -> &'static str {
    match quality {
        4.. => "Excellent",
        3 => "Good",
        2 => "Fair",
        _ => "Poor",
    }
}

/// Text color class for a 1-5 score.
pub fn quality_color(quality: u8) -> &'static str {
    match quality {
        4.. => "text-green-600",
        3 => "text-yellow-600",
        _ => "text-red-600",
    }
}

/// Compact age string for a reading taken `age_minutes` ago.
pub fn format_data_age(age_minutes: u64) -> String {
    if age_minutes < 1 {
        return "Just now".to_string();
    }
    if age_minutes < 60 {
        return format!("{age_minutes}m ago");
    }
    let hours = age_minutes / 60;
    if hours < 24 {
        return format!("{hours}h ago");
    }
    format!("{}d ago", hours / 24)
}

/// Badge row summarizing the quality of one data source.
#[component]
pub fn DataQualityIndicator(
    quality: DataQualityScore,
    status: SourceStatus,
    /// Name of the upstream data source, shown in the detail row.
    source: &'static str,
    /// Minutes since the reading was taken, when known.
    #[prop(strip_option)]
    age_minutes: Option<u64>,
) -> impl IntoView {
    let status_icon = match quality.overall {
        4.. => view! { <CheckCircle attr:class="w-4 h-4 text-green-600" /> }.into_any(),
        3 => view! { <Clock attr:class="w-4 h-4 text-yellow-600" /> }.into_any(),
        _ => view! { <AlertTriangle attr:class="w-4 h-4 text-red-600" /> }.into_any(),
    };

    let connectivity = match status {
        SourceStatus::Live => view! { <Wifi attr:class="w-3 h-3 text-green-500" /> }.into_any(),
        _ => view! { <WifiOff attr:class="w-3 h-3 text-gray-400" /> }.into_any(),
    };

    view! {
        <div class="data-quality flex items-center space-x-2" title=source>
            {status_icon}
            <span class=status.badge_class()>{status.label()}</span>
            <span class=format!("badge {}", quality_color(quality.overall))>
                {quality_label(quality.overall)}
            </span>
            {connectivity}
            {age_minutes
                .map(|age| {
                    view! { <span class="text-xs text-gray-500">{format_data_age(age)}</span> }
                })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quality_labels_match_thresholds() {
        assert_eq!(quality_label(5), "Excellent");
        assert_eq!(quality_label(4), "Excellent");
        assert_eq!(quality_label(3), "Good");
        assert_eq!(quality_label(2), "Fair");
        assert_eq!(quality_label(1), "Poor");
    }

    #[test]
    fn quality_colors_match_thresholds() {
        assert_eq!(quality_color(4), "text-green-600");
        assert_eq!(quality_color(3), "text-yellow-600");
        assert_eq!(quality_color(2), "text-red-600");
    }

    #[test]
    fn data_age_formats_by_magnitude() {
        assert_eq!(format_data_age(0), "Just now");
        assert_eq!(format_data_age(12), "12m ago");
        assert_eq!(format_data_age(60), "1h ago");
        assert_eq!(format_data_age(60 * 23), "23h ago");
        assert_eq!(format_data_age(60 * 24), "1d ago");
        assert_eq!(format_data_age(60 * 24 * 3 + 30), "3d ago");
    }
}
