//! Position indicator tracking
//!
//! The indicator marker moves independently of the static tick scene, so its
//! repaints are tracked incrementally: the tracker remembers the rectangle
//! last drawn and decides per move whether the host should repaint right away
//! or coalesce the work into its next idle slot. Small moves (mouse drags)
//! batch into one idle-priority repaint; large jumps repaint immediately so
//! the marker never visibly lags.

use crate::types::{IndicatorRect, Orientation, RulerGeometry, RulerRange};

/// Origin delta in pixels beyond which a move repaints immediately
const IMMEDIATE_REDRAW_THRESHOLD: i32 = 20;

/// What the host must do after a position change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRequest {
    /// Nothing to do
    None,
    /// Repaint the given area now
    Immediate(IndicatorRect),
    /// One idle-priority repaint is now pending; call
    /// [`IndicatorTracker::on_idle`] from the event loop's idle hook
    Deferred,
}

/// Tracks the drawn indicator rectangle and coalesces repaints
#[derive(Debug, Default)]
pub struct IndicatorTracker {
    /// Rectangle the marker was last drawn into; empty means absent
    last_rect: IndicatorRect,
    /// At most one deferred repaint may be outstanding at a time
    deferred_pending: bool,
}

impl IndicatorTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_rect(&self) -> IndicatorRect {
        self.last_rect
    }

    pub fn has_pending_redraw(&self) -> bool {
        self.deferred_pending
    }

    /// Decide how to repaint after the indicator moved to `new_rect`.
    ///
    /// The caller is responsible for the idempotence check on the position
    /// value itself; this only sees moves that actually changed it.
    pub fn position_changed(&mut self, new_rect: IndicatorRect) -> RedrawRequest {
        let xdiff = new_rect.x - self.last_rect.x;
        let ydiff = new_rect.y - self.last_rect.y;

        if !self.last_rect.is_empty()
            && (xdiff.abs() > IMMEDIATE_REDRAW_THRESHOLD
                || ydiff.abs() > IMMEDIATE_REDRAW_THRESHOLD)
        {
            self.deferred_pending = false;
            RedrawRequest::Immediate(self.take_redraw_area(new_rect))
        } else if !self.deferred_pending {
            self.deferred_pending = true;
            RedrawRequest::Deferred
        } else {
            RedrawRequest::None
        }
    }

    /// Fire the pending deferred repaint, if any.
    ///
    /// Returns the area to repaint for the indicator now at `current_rect`.
    pub fn on_idle(&mut self, current_rect: IndicatorRect) -> Option<IndicatorRect> {
        if !self.deferred_pending {
            return None;
        }
        self.deferred_pending = false;
        Some(self.take_redraw_area(current_rect))
    }

    /// Record that the host drew the marker into `rect` during a paint
    pub fn mark_drawn(&mut self, rect: IndicatorRect) {
        if self.last_rect.is_empty() {
            self.last_rect = rect;
        } else {
            self.last_rect = self.last_rect.union(&rect);
        }
    }

    /// Drop any outstanding deferred work (widget teardown)
    pub fn cancel_pending(&mut self) {
        self.deferred_pending = false;
    }

    /// Area covering both the new marker and whatever was drawn before;
    /// consumes the last rectangle since that area is about to be repainted.
    fn take_redraw_area(&mut self, new_rect: IndicatorRect) -> IndicatorRect {
        let area = new_rect.union(&self.last_rect);
        self.last_rect = IndicatorRect::default();
        area
    }
}

/// Compute the marker rectangle for a position value.
///
/// The marker's size follows the ruler breadth (half of it, rounded up to
/// odd), and its origin follows the pixel mapping of `position` clamped into
/// the range. Returns an empty rectangle for a degenerate range, where no
/// pixel mapping exists.
pub fn indicator_rect(
    orientation: Orientation,
    geometry: &RulerGeometry,
    range: &RulerRange,
    position: f64,
) -> IndicatorRect {
    if range.is_degenerate() {
        return IndicatorRect::default();
    }

    let xthickness = geometry.border.horizontal();
    let ythickness = geometry.border.vertical();

    let position = position
        .max(range.lower.min(range.upper))
        .min(range.lower.max(range.upper));

    let mut rect = IndicatorRect::default();

    match orientation {
        Orientation::Horizontal => {
            let width = geometry.width;
            let height = geometry.height - ythickness * 2;

            rect.width = height / 2 + 2;
            rect.width |= 1; // make sure it's odd
            rect.height = rect.width / 2 + 1;

            let increment = range.pixels_per_unit(width as f64);
            rect.x = ((position - range.lower) * increment).round() as i32
                + (xthickness - rect.width) / 2
                - 1;
            rect.y = (height + rect.height) / 2 + ythickness;
        }
        Orientation::Vertical => {
            let width = geometry.width - xthickness * 2;
            let height = geometry.height;

            rect.height = width / 2 + 2;
            rect.height |= 1; // make sure it's odd
            rect.width = rect.height / 2 + 1;

            let increment = range.pixels_per_unit(height as f64);
            rect.x = (width + rect.width) / 2 + xthickness;
            rect.y = ((position - range.lower) * increment).round() as i32
                + (ythickness - rect.height) / 2
                - 1;
        }
    }

    rect
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect_at(x: i32) -> IndicatorRect {
        IndicatorRect::new(x, 10, 11, 6)
    }

    #[test]
    fn test_first_move_defers() {
        let mut tracker = IndicatorTracker::new();
        // No marker drawn yet: even a huge jump only defers.
        assert_eq!(tracker.position_changed(rect_at(500)), RedrawRequest::Deferred);
        assert!(tracker.has_pending_redraw());
    }

    #[test]
    fn test_small_move_defers_and_coalesces() {
        let mut tracker = IndicatorTracker::new();
        tracker.mark_drawn(rect_at(100));

        assert_eq!(tracker.position_changed(rect_at(105)), RedrawRequest::Deferred);
        // Further small moves coalesce into the already-pending repaint.
        assert_eq!(tracker.position_changed(rect_at(108)), RedrawRequest::None);
        assert_eq!(tracker.position_changed(rect_at(110)), RedrawRequest::None);

        let area = tracker.on_idle(rect_at(110)).unwrap();
        assert_eq!(area, rect_at(100).union(&rect_at(110)));
        // Fired: nothing pending, last rect consumed.
        assert!(tracker.on_idle(rect_at(110)).is_none());
        assert!(tracker.last_rect().is_empty());
    }

    #[test]
    fn test_large_move_repaints_immediately() {
        let mut tracker = IndicatorTracker::new();
        tracker.mark_drawn(rect_at(100));

        match tracker.position_changed(rect_at(125)) {
            RedrawRequest::Immediate(area) => {
                assert_eq!(area, rect_at(100).union(&rect_at(125)));
            }
            other => panic!("expected immediate redraw, got {other:?}"),
        }
        assert!(!tracker.has_pending_redraw());
    }

    #[test]
    fn test_large_move_cancels_pending_deferred() {
        let mut tracker = IndicatorTracker::new();
        tracker.mark_drawn(rect_at(100));

        assert_eq!(tracker.position_changed(rect_at(103)), RedrawRequest::Deferred);
        assert!(matches!(
            tracker.position_changed(rect_at(180)),
            RedrawRequest::Immediate(_)
        ));
        // The immediate path swallowed the deferred one.
        assert!(tracker.on_idle(rect_at(180)).is_none());
    }

    #[test]
    fn test_threshold_is_exclusive() {
        let mut tracker = IndicatorTracker::new();
        tracker.mark_drawn(rect_at(100));
        // Exactly 20 px still defers.
        assert_eq!(tracker.position_changed(rect_at(120)), RedrawRequest::Deferred);
    }

    #[test]
    fn test_drawn_rects_accumulate() {
        let mut tracker = IndicatorTracker::new();
        tracker.mark_drawn(rect_at(100));
        tracker.mark_drawn(rect_at(104));
        assert_eq!(tracker.last_rect(), rect_at(100).union(&rect_at(104)));
    }

    #[test]
    fn test_indicator_rect_centered_on_position() {
        let geometry = RulerGeometry::new(400, 24);
        let range = RulerRange::new(0.0, 400.0, 400.0);
        let rect = indicator_rect(Orientation::Horizontal, &geometry, &range, 200.0);

        assert_eq!(rect.width % 2, 1);
        let center = rect.x + rect.width / 2;
        assert!((center - 200).abs() <= 1);
    }

    #[test]
    fn test_indicator_rect_degenerate_range() {
        let geometry = RulerGeometry::new(400, 24);
        let range = RulerRange::new(5.0, 5.0, 5.0);
        let rect = indicator_rect(Orientation::Horizontal, &geometry, &range, 5.0);
        assert!(rect.is_empty());
    }

    #[test]
    fn test_indicator_rect_clamps_position() {
        let geometry = RulerGeometry::new(400, 24);
        let range = RulerRange::new(0.0, 400.0, 400.0);
        let inside = indicator_rect(Orientation::Horizontal, &geometry, &range, 400.0);
        let beyond = indicator_rect(Orientation::Horizontal, &geometry, &range, 1000.0);
        assert_eq!(inside, beyond);
    }
}
