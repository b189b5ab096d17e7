use std::cmp::Ordering;

use crate::Registration;

/// Order in which registrations are written to a preset.
///
/// Registrations with a presentation come first, by the presentation's current
/// name. Headless registrations follow. Ties fall back to insertion order, which
/// makes this a strict total order over the live table.
pub fn persistence_order(a: &Registration, b: &Registration) -> Ordering {
    match (a.presentation(), b.presentation()) {
        (Some(left), Some(right)) => left.name().cmp(right.name()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
    .then_with(|| a.id().cmp(&b.id()))
}
