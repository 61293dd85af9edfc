mod indicator;
mod metric;
mod ruler;
mod scale;
mod ticks;
mod track;
mod types;

pub use indicator::{IndicatorTracker, RedrawRequest, indicator_rect};
pub use metric::{METRIC_GENERAL, METRIC_INCHES, RulerMetric};
pub use ruler::{GlyphDraw, LineSegment, Ruler, TickScene};
pub use scale::select_scale;
pub use ticks::{TickMark, format_tick_label, generate_tick_marks};
pub use track::TrackSourceId;
pub use types::*;
