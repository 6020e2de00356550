//! Overlap detection and column packing for events on one day.
//!
//! The default [`PairwiseOverlap`] policy looks only at the events that
//! intersect the target directly. It is not a clustering of the day: for a
//! chain A-B-C where A and C do not meet, A and C each see two columns while B
//! sees three, so their boxes do not share one footprint and can partially
//! cover each other. That behavior is kept as the planner's contract.
//!
//! [`ClusteredOverlap`] is the alternative: it colours the connected
//! components of the day's overlap graph so that every event in a component
//! agrees on the column count. It changes the visible layout and has to be
//! chosen explicitly.

use std::cmp::Ordering;
use std::fmt;

use crate::models::event::Event;

/// The events sharing space with one target event, and the target's slot.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlapGroup<'a> {
    /// Members in column order, the target included.
    pub members: Vec<&'a Event>,
    /// Zero-based column of the target.
    pub column_index: usize,
    /// Number of columns the target's width is divided by. Always >= 1.
    pub column_count: usize,
}

/// Strategy for assigning a column to one event among its same-day peers.
pub trait OverlapPolicy: fmt::Debug {
    /// `same_day` is the day's full event set. The target is identified by
    /// id and counted even when the caller left it out of `same_day`.
    fn resolve<'a>(&self, event: &'a Event, same_day: &'a [Event]) -> OverlapGroup<'a>;
}

/// Per-event direct intersection, the planner's documented behavior.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PairwiseOverlap;

/// Connected-component interval colouring. Opt-in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClusteredOverlap;

/// Resolve `event` against `same_day` with the default pairwise policy.
pub fn resolve_overlap<'a>(event: &'a Event, same_day: &'a [Event]) -> OverlapGroup<'a> {
    PairwiseOverlap.resolve(event, same_day)
}

/// Column order: earlier start first, then longer duration, then id.
///
/// Uses a total order on the float keys so malformed (`NaN`) events sort
/// deterministically instead of poisoning the sort.
pub fn column_order(a: &Event, b: &Event) -> Ordering {
    a.start_minutes()
        .total_cmp(&b.start_minutes())
        .then_with(|| b.duration_hours.total_cmp(&a.duration_hours))
        .then_with(|| a.id.cmp(&b.id))
}

fn candidates<'a>(event: &'a Event, same_day: &'a [Event]) -> Vec<&'a Event> {
    let mut all: Vec<&'a Event> = same_day.iter().collect();
    if !all.iter().any(|peer| peer.id == event.id) {
        log::trace!("Event {} missing from its day set, counting it anyway", event.id);
        all.push(event);
    }
    all
}

fn position_of(members: &[&Event], event: &Event) -> usize {
    members
        .iter()
        .position(|member| member.id == event.id)
        .unwrap_or(0)
}

impl OverlapPolicy for PairwiseOverlap {
    fn resolve<'a>(&self, event: &'a Event, same_day: &'a [Event]) -> OverlapGroup<'a> {
        let mut members: Vec<&'a Event> = candidates(event, same_day)
            .into_iter()
            .filter(|peer| peer.id == event.id || event.overlaps(peer))
            .collect();
        members.sort_by(|a, b| column_order(a, b));

        OverlapGroup {
            column_index: position_of(&members, event),
            column_count: members.len(),
            members,
        }
    }
}

impl OverlapPolicy for ClusteredOverlap {
    fn resolve<'a>(&self, event: &'a Event, same_day: &'a [Event]) -> OverlapGroup<'a> {
        let all = candidates(event, same_day);
        let Some(target) = all.iter().position(|peer| peer.id == event.id) else {
            return OverlapGroup {
                members: vec![event],
                column_index: 0,
                column_count: 1,
            };
        };

        let mut cluster = connected_component(&all, target);
        cluster.sort_by(|a, b| column_order(a, b));

        // Greedy first-fit: a column accepts an event when none of its
        // occupants intersect it.
        let mut columns: Vec<Vec<&'a Event>> = Vec::new();
        let mut column_index = None;
        for member in &cluster {
            let slot = columns
                .iter()
                .position(|column| column.iter().all(|occupant| !occupant.overlaps(member)));
            let slot = match slot {
                Some(slot) => slot,
                None => {
                    columns.push(Vec::new());
                    columns.len() - 1
                }
            };
            columns[slot].push(*member);
            if column_index.is_none() && member.id == event.id {
                column_index = Some(slot);
            }
        }

        OverlapGroup {
            column_index: column_index.unwrap_or(0),
            column_count: columns.len().max(1),
            members: cluster,
        }
    }
}

// Walk of the overlap graph starting at `all[start]`.
fn connected_component<'a>(all: &[&'a Event], start: usize) -> Vec<&'a Event> {
    let mut visited = vec![false; all.len()];
    let mut queue = vec![start];
    visited[start] = true;
    let mut component = Vec::new();

    while let Some(index) = queue.pop() {
        component.push(all[index]);
        for (next, peer) in all.iter().enumerate() {
            if !visited[next] && all[index].overlaps(peer) {
                visited[next] = true;
                queue.push(next);
            }
        }
    }

    component
}
