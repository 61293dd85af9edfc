//! Ruler state and surface orchestration
//!
//! [`Ruler`] owns the range, unit, position and allocation, a retained tick
//! scene with a validity flag, the indicator tracker, and the track-source
//! set. Hosts embed it behind a thin toolkit adapter: they feed geometry and
//! text metrics in, rasterize the scene it hands back, and act on the redraw
//! requests the indicator emits.

use crate::indicator::{IndicatorTracker, RedrawRequest, indicator_rect};
use crate::scale::select_scale;
use crate::ticks::generate_tick_marks;
use crate::track::{TrackSet, TrackSourceId};
use crate::types::{
    IndicatorRect, Orientation, Result, RulerGeometry, RulerRange, TextMetrics, Unit,
};

/// A stroked 1 px line in widget coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

/// A text run to draw at a widget position
///
/// Vertical rulers stack label digits, so one tick label may produce several
/// single-digit draws.
#[derive(Debug, Clone, PartialEq)]
pub struct GlyphDraw {
    pub text: String,
    pub x: f64,
    pub y: f64,
}

/// Display list for the static part of the ruler face
///
/// This is the retained "backing store": rebuilt only when the range, unit
/// or allocation changes, then blitted by the host on every paint.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickScene {
    pub baseline: Option<LineSegment>,
    pub ticks: Vec<LineSegment>,
    pub glyphs: Vec<GlyphDraw>,
}

/// A tick-mark measurement axis with a tracked position indicator
#[derive(Debug)]
pub struct Ruler {
    orientation: Orientation,
    unit: Unit,
    range: RulerRange,
    position: f64,
    geometry: Option<RulerGeometry>,
    scene: TickScene,
    scene_valid: bool,
    indicator: IndicatorTracker,
    tracks: TrackSet,
}

impl Ruler {
    /// Create a ruler. Orientation is fixed for the widget's lifetime.
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            unit: Unit::default(),
            range: RulerRange::default(),
            position: 0.0,
            geometry: None,
            scene: TickScene::default(),
            scene_valid: false,
            indicator: IndicatorTracker::new(),
            tracks: TrackSet::default(),
        }
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Set the value range; `max_size` sizes the widest expected label.
    /// Invalidates the tick scene.
    pub fn set_range(&mut self, lower: f64, upper: f64, max_size: f64) {
        let range = RulerRange::new(lower, upper, max_size);
        if range != self.range {
            self.range = range;
            self.scene_valid = false;
        }
    }

    pub fn range(&self) -> RulerRange {
        self.range
    }

    /// Switch the active metric table. Invalidates the tick scene.
    pub fn set_unit(&mut self, unit: Unit) {
        if unit != self.unit {
            self.unit = unit;
            self.scene_valid = false;
        }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    /// Record the allocation the host gave the widget.
    /// A size change invalidates the tick scene.
    pub fn allocate(&mut self, geometry: RulerGeometry) {
        if self.geometry != Some(geometry) {
            self.geometry = Some(geometry);
            self.scene_valid = false;
        }
    }

    pub fn geometry(&self) -> Option<RulerGeometry> {
        self.geometry
    }

    /// Whether the retained scene is current
    pub fn scene_valid(&self) -> bool {
        self.scene_valid
    }

    /// Preferred widget size: one pixel along the axis, roughly 1.7 label
    /// lines across it, plus the border.
    pub fn preferred_size(&self, metrics: &TextMetrics, border: crate::types::BorderInsets) -> (i32, i32) {
        let size = (2.0 + metrics.glyph_height * 1.7) as i32;
        match self.orientation {
            Orientation::Horizontal => (border.horizontal() + 1, border.vertical() + size),
            Orientation::Vertical => (border.horizontal() + size, border.vertical() + 1),
        }
    }

    /// Move the position indicator.
    ///
    /// Idempotent on the value: an unchanged position is a no-op. Returns
    /// what the host must do about the marker repaint.
    pub fn set_position(&mut self, position: f64) -> RedrawRequest {
        if position == self.position {
            return RedrawRequest::None;
        }
        self.position = position;
        let rect = self.current_indicator_rect();
        self.indicator.position_changed(rect)
    }

    /// The event loop's idle hook: fires the pending deferred indicator
    /// repaint, returning the area to repaint.
    pub fn on_idle(&mut self) -> Option<IndicatorRect> {
        let rect = self.current_indicator_rect();
        self.indicator.on_idle(rect)
    }

    /// Rebuild the tick scene if it is stale and return it for blitting.
    ///
    /// Returns `None` while the ruler has no allocation (a not-yet-displayed
    /// widget draws nothing).
    pub fn paint(&mut self, metrics: &TextMetrics) -> Option<&TickScene> {
        let geometry = self.geometry?;
        if !self.scene_valid {
            self.rebuild_scene(&geometry, metrics);
        }
        Some(&self.scene)
    }

    /// Marker rectangle for the current position; empty when absent.
    ///
    /// The marker is drawn fresh on every paint rather than into the scene,
    /// since it moves independently of the static ticks. Call
    /// [`Ruler::mark_indicator_drawn`] after rendering it.
    pub fn current_indicator_rect(&self) -> IndicatorRect {
        match self.geometry {
            Some(geometry) => {
                indicator_rect(self.orientation, &geometry, &self.range, self.position)
            }
            None => IndicatorRect::default(),
        }
    }

    /// Triangle vertices for the marker, pointing at the baseline
    pub fn marker_triangle(&self, rect: IndicatorRect) -> [(f64, f64); 3] {
        let (x, y) = (rect.x as f64, rect.y as f64);
        let (w, h) = (rect.width as f64, rect.height as f64);
        match self.orientation {
            Orientation::Horizontal => [(x, y), (x + w / 2.0, y + h), (x + w, y)],
            Orientation::Vertical => [(x, y), (x + w, y + h / 2.0), (x, y + h)],
        }
    }

    /// Report that the marker was rendered into `rect`
    pub fn mark_indicator_drawn(&mut self, rect: IndicatorRect) {
        if !rect.is_empty() {
            self.indicator.mark_drawn(rect);
        }
    }

    pub fn has_pending_redraw(&self) -> bool {
        self.indicator.has_pending_redraw()
    }

    /// Register an external pointer-motion source
    pub fn add_track_source(&mut self, id: TrackSourceId) -> Result<()> {
        self.tracks.add(id)
    }

    /// Unregister a motion source. Removing one that was never added is a
    /// caller-contract violation.
    pub fn remove_track_source(&mut self, id: TrackSourceId) -> Result<()> {
        self.tracks.remove(id)
    }

    /// Forward a pointer-motion event from a registered source.
    ///
    /// `x`/`y` are in ruler-local coordinates; the coordinate along the
    /// ruler's axis is mapped into the range and drives the indicator.
    pub fn pointer_moved(&mut self, id: TrackSourceId, x: f64, y: f64) -> Result<RedrawRequest> {
        if !self.tracks.contains(id) {
            debug_assert!(false, "motion event from untracked source");
            return Err(crate::types::RulerError::UntrackedSource);
        }
        let Some(geometry) = self.geometry else {
            return Ok(RedrawRequest::None);
        };

        let span = self.range.upper - self.range.lower;
        let position = match self.orientation {
            Orientation::Horizontal => self.range.lower + span * x / geometry.width as f64,
            Orientation::Vertical => self.range.lower + span * y / geometry.height as f64,
        };
        Ok(self.set_position(position))
    }

    fn rebuild_scene(&mut self, geometry: &RulerGeometry, metrics: &TextMetrics) {
        let border = geometry.border;
        let digit_height = metrics.digit_height();

        // "width" runs along the axis, "breadth" across it, whatever the
        // orientation.
        let width = geometry.extent(self.orientation);
        let breadth = geometry.breadth(self.orientation);

        self.scene = TickScene::default();
        self.scene.baseline = Some(self.baseline_segment(geometry));

        if self.range.is_degenerate() {
            // No pixel mapping; leave the scene stale so a later range fix
            // repopulates it.
            return;
        }

        let increment = self.range.pixels_per_unit(width as f64);
        let metric = self.unit.metric();
        let scale = select_scale(metric, self.range.max_size, increment, digit_height);
        let marks = generate_tick_marks(
            metric,
            scale,
            self.range.lower,
            self.range.upper,
            increment,
            breadth,
            digit_height,
        );

        for mark in marks {
            let length = mark.length as f64;
            match self.orientation {
                Orientation::Horizontal => {
                    let edge = (breadth + border.top) as f64;
                    self.scene.ticks.push(LineSegment {
                        x0: mark.pos,
                        y0: edge - length,
                        x1: mark.pos,
                        y1: edge,
                    });
                    if let Some(label) = mark.label {
                        self.scene.glyphs.push(GlyphDraw {
                            text: label,
                            x: mark.pos + 2.0,
                            y: border.top as f64,
                        });
                    }
                }
                Orientation::Vertical => {
                    let edge = (breadth + border.left) as f64;
                    self.scene.ticks.push(LineSegment {
                        x0: edge - length,
                        y0: mark.pos,
                        x1: edge,
                        y1: mark.pos,
                    });
                    if let Some(label) = mark.label {
                        // One digit per line, stacked down the axis.
                        for (j, digit) in label.chars().enumerate() {
                            self.scene.glyphs.push(GlyphDraw {
                                text: digit.to_string(),
                                x: (border.left + 1) as f64,
                                y: mark.pos + digit_height * j as f64 + 2.0,
                            });
                        }
                    }
                }
            }
        }

        self.scene_valid = true;
    }

    fn baseline_segment(&self, geometry: &RulerGeometry) -> LineSegment {
        let border = geometry.border;
        let breadth = geometry.breadth(self.orientation);
        match self.orientation {
            Orientation::Horizontal => {
                let y = (breadth + border.top) as f64 + 0.5;
                LineSegment {
                    x0: border.left as f64,
                    y0: y,
                    x1: (geometry.width - border.right) as f64,
                    y1: y,
                }
            }
            Orientation::Vertical => {
                let x = (breadth + border.left) as f64 + 0.5;
                LineSegment {
                    x0: x,
                    y0: border.top as f64,
                    x1: x,
                    y1: (geometry.height - border.bottom) as f64,
                }
            }
        }
    }
}
