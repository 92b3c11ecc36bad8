// SPDX-License-Identifier: MPL-2.0
//! Stacking math for toasts sharing a screen edge.
//!
//! Ranks are derived, never stored: a toast's rank is the number of active
//! toasts shown before it at the same [`Position`]. Offsets build on ranks
//! in two phases. The first layout pass uses an estimated height for every
//! toast; once the view reports a toast's real size, [`Layout`] records it
//! and the next pass uses the measured value.

use super::request::{Position, Toast, ToastId};
use std::collections::HashMap;

/// Running per-edge accumulator.
#[derive(Debug, Default, Clone, Copy)]
struct PerEdge<T> {
    top: T,
    bottom: T,
}

impl<T> PerEdge<T> {
    fn get_mut(&mut self, position: Position) -> &mut T {
        match position {
            Position::Top => &mut self.top,
            Position::Bottom => &mut self.bottom,
        }
    }
}

/// Returns the 0-based rank of `id` among toasts at the same position,
/// or `None` if `id` is not in `toasts`.
pub fn rank<'a>(toasts: impl IntoIterator<Item = &'a Toast>, id: ToastId) -> Option<usize> {
    let mut seen = PerEdge::<usize>::default();
    for toast in toasts {
        let count = seen.get_mut(toast.position());
        if toast.id() == id {
            return Some(*count);
        }
        *count += 1;
    }
    None
}

/// Returns the rank of every toast, in input order.
pub fn ranks<'a>(toasts: impl IntoIterator<Item = &'a Toast>) -> Vec<(ToastId, usize)> {
    let mut seen = PerEdge::<usize>::default();
    toasts
        .into_iter()
        .map(|toast| {
            let count = seen.get_mut(toast.position());
            let rank = *count;
            *count += 1;
            (toast.id(), rank)
        })
        .collect()
}

/// Offset state for the overlay.
#[derive(Debug, Clone)]
pub struct Layout {
    gap: f32,
    estimated_height: f32,
    measured: HashMap<ToastId, f32>,
}

impl Layout {
    #[must_use]
    pub fn new(gap: f32, estimated_height: f32) -> Self {
        Self {
            gap: gap.max(0.0),
            estimated_height: estimated_height.max(0.0),
            measured: HashMap::new(),
        }
    }

    #[must_use]
    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Records the rendered height of a toast.
    ///
    /// Returns `true` if the value changed, meaning offsets must be recomputed.
    /// Non-finite or negative heights are ignored.
    pub fn record_measurement(&mut self, id: ToastId, height: f32) -> bool {
        if !height.is_finite() || height < 0.0 {
            return false;
        }
        match self.measured.insert(id, height) {
            Some(previous) => (previous - height).abs() > f32::EPSILON,
            None => true,
        }
    }

    #[must_use]
    pub fn is_measured(&self, id: ToastId) -> bool {
        self.measured.contains_key(&id)
    }

    /// Measured height, falling back to the estimate.
    #[must_use]
    pub fn height_of(&self, id: ToastId) -> f32 {
        self.measured
            .get(&id)
            .copied()
            .unwrap_or(self.estimated_height)
    }

    /// Distance of `id` from its screen edge.
    ///
    /// Sum of `height + gap` over every earlier toast at the same position.
    pub fn offset<'a>(
        &self,
        toasts: impl IntoIterator<Item = &'a Toast>,
        id: ToastId,
    ) -> Option<f32> {
        let mut acc = PerEdge::<f32>::default();
        for toast in toasts {
            let sum = acc.get_mut(toast.position());
            if toast.id() == id {
                return Some(*sum);
            }
            *sum += self.height_of(toast.id()) + self.gap;
        }
        None
    }

    /// Offsets of every toast, in input order.
    pub fn offsets<'a>(&self, toasts: impl IntoIterator<Item = &'a Toast>) -> Vec<(ToastId, f32)> {
        let mut acc = PerEdge::<f32>::default();
        toasts
            .into_iter()
            .map(|toast| {
                let sum = acc.get_mut(toast.position());
                let offset = *sum;
                *sum += self.height_of(toast.id()) + self.gap;
                (toast.id(), offset)
            })
            .collect()
    }

    pub fn forget(&mut self, id: ToastId) {
        self.measured.remove(&id);
    }

    pub fn clear(&mut self) {
        self.measured.clear();
    }

    /// Drops measurements for toasts no longer in `toasts`.
    pub fn retain<'a>(&mut self, toasts: impl IntoIterator<Item = &'a Toast>) {
        let active: Vec<ToastId> = toasts.into_iter().map(Toast::id).collect();
        self.measured.retain(|id, _| active.contains(id));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::toast::request::{Defaults, ToastRequest};
    use std::time::Instant;

    fn toast(position: Position) -> Toast {
        Toast::resolve(
            ToastId::new(),
            ToastRequest::new("t").position(position),
            &Defaults::default(),
            Instant::now(),
        )
    }

    #[test]
    fn ranks_follow_insertion_order() {
        let list = vec![
            toast(Position::Bottom),
            toast(Position::Bottom),
            toast(Position::Bottom),
        ];

        assert_eq!(rank(&list, list[0].id()), Some(0));
        assert_eq!(rank(&list, list[1].id()), Some(1));
        assert_eq!(rank(&list, list[2].id()), Some(2));
    }

    #[test]
    fn positions_are_ranked_independently() {
        let list = vec![
            toast(Position::Bottom),
            toast(Position::Top),
            toast(Position::Bottom),
            toast(Position::Top),
        ];

        let all = ranks(&list);
        assert_eq!(
            all.iter().map(|(_, r)| *r).collect::<Vec<_>>(),
            vec![0, 0, 1, 1]
        );
    }

    #[test]
    fn unknown_id_has_no_rank() {
        let list = vec![toast(Position::Bottom)];
        assert_eq!(rank(&list, ToastId::new()), None);
    }

    #[test]
    fn tentative_offsets_use_estimate() {
        let layout = Layout::new(8.0, 40.0);
        let list = vec![
            toast(Position::Bottom),
            toast(Position::Bottom),
            toast(Position::Bottom),
        ];

        assert_eq!(layout.offset(&list, list[0].id()), Some(0.0));
        assert_eq!(layout.offset(&list, list[1].id()), Some(48.0));
        assert_eq!(layout.offset(&list, list[2].id()), Some(96.0));
    }

    #[test]
    fn measurement_updates_following_offsets() {
        let mut layout = Layout::new(8.0, 40.0);
        let list = vec![toast(Position::Bottom), toast(Position::Bottom)];

        assert!(layout.record_measurement(list[0].id(), 60.0));
        assert_eq!(layout.offset(&list, list[1].id()), Some(68.0));

        // Same value again is not a change
        assert!(!layout.record_measurement(list[0].id(), 60.0));
    }

    #[test]
    fn measurements_do_not_cross_positions() {
        let mut layout = Layout::new(8.0, 40.0);
        let list = vec![toast(Position::Top), toast(Position::Bottom)];

        layout.record_measurement(list[0].id(), 200.0);
        assert_eq!(layout.offset(&list, list[1].id()), Some(0.0));
    }

    #[test]
    fn invalid_measurements_are_ignored() {
        let mut layout = Layout::new(8.0, 40.0);
        let id = ToastId::new();

        assert!(!layout.record_measurement(id, f32::NAN));
        assert!(!layout.record_measurement(id, -1.0));
        assert!(!layout.is_measured(id));
    }

    #[test]
    fn retain_drops_stale_measurements() {
        let mut layout = Layout::new(8.0, 40.0);
        let list = vec![toast(Position::Bottom)];
        let gone = ToastId::new();

        layout.record_measurement(list[0].id(), 50.0);
        layout.record_measurement(gone, 50.0);
        layout.retain(&list);

        assert!(layout.is_measured(list[0].id()));
        assert!(!layout.is_measured(gone));
    }
}
